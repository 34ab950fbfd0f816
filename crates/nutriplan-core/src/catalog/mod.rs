//! Food catalog: the validated lookup every nutrient calculation reads from.
//!
//! The catalog is seeded from the built-in [reference table](reference_table) and
//! extended with user-authored custom foods. References are never mutated; an
//! edit replaces the whole value under the same id.

mod reference;

pub use reference::*;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{FoodReference, NutrientTotals, CUSTOM_SOURCE_TAG};

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid food reference {id}: {reason}")]
    InvalidReference { id: String, reason: String },

    #[error("Duplicate food id: {0}")]
    DuplicateId(String),

    #[error("Food not found: {0}")]
    NotFound(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read access to food references by id.
///
/// A miss is not an error: callers treat it as a zero-nutrient contribution.
pub trait CatalogLookup {
    fn food(&self, id: &str) -> Option<&FoodReference>;
}

impl CatalogLookup for HashMap<String, FoodReference> {
    fn food(&self, id: &str) -> Option<&FoodReference> {
        self.get(id)
    }
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for &T {
    fn food(&self, id: &str) -> Option<&FoodReference> {
        (**self).food(id)
    }
}

/// In-memory food catalog preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodReference>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog, validating every reference.
    pub fn from_references(references: Vec<FoodReference>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for reference in references {
            catalog.insert(reference)?;
        }
        info!(foods = catalog.len(), "food catalog loaded");
        Ok(catalog)
    }

    /// Load the built-in reference table.
    pub fn with_reference_table() -> CatalogResult<Self> {
        Self::from_references(reference_table())
    }

    /// Insert a new reference. Fails on invalid values or an existing id.
    pub fn insert(&mut self, reference: FoodReference) -> CatalogResult<()> {
        validate(&reference)?;
        if self.index.contains_key(&reference.id) {
            return Err(CatalogError::DuplicateId(reference.id));
        }
        self.index.insert(reference.id.clone(), self.foods.len());
        self.foods.push(reference);
        Ok(())
    }

    /// Create a user-authored food with a generated id.
    pub fn add_custom(
        &mut self,
        name: &str,
        per_portion: NutrientTotals,
        portion_amount: f64,
        portion_unit: &str,
    ) -> CatalogResult<FoodReference> {
        let reference = FoodReference::new(
            format!("custom-{}", uuid::Uuid::new_v4()),
            name.trim().to_string(),
            CUSTOM_SOURCE_TAG.into(),
        )
        .with_nutrients(per_portion)
        .with_portion(portion_amount, portion_unit);

        self.insert(reference.clone())?;
        debug!(id = %reference.id, name = %reference.name, "custom food added");
        Ok(reference)
    }

    /// Replace an existing reference with an edited value.
    pub fn replace(&mut self, reference: FoodReference) -> CatalogResult<()> {
        validate(&reference)?;
        let position = *self
            .index
            .get(&reference.id)
            .ok_or_else(|| CatalogError::NotFound(reference.id.clone()))?;
        debug!(id = %reference.id, "food reference replaced");
        self.foods[position] = reference;
        Ok(())
    }

    /// Insert or replace.
    pub fn upsert(&mut self, reference: FoodReference) -> CatalogResult<()> {
        if self.index.contains_key(&reference.id) {
            self.replace(reference)
        } else {
            self.insert(reference)
        }
    }

    /// Remove a reference. Returns the removed value; a missing id is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<FoodReference> {
        let position = self.index.remove(id)?;
        let removed = self.foods.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Get a reference by id.
    pub fn get(&self, id: &str) -> Option<&FoodReference> {
        self.index.get(id).map(|&i| &self.foods[i])
    }

    /// Case-insensitive substring search on name or source tag.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&FoodReference> {
        let needle = query.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|f| {
                needle.is_empty()
                    || f.name.to_lowercase().contains(&needle)
                    || f.source_tag.to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }

    /// All references in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FoodReference> {
        self.foods.iter()
    }

    /// User-authored references only.
    pub fn custom_foods(&self) -> impl Iterator<Item = &FoodReference> {
        self.foods.iter().filter(|f| f.is_custom())
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl CatalogLookup for FoodCatalog {
    fn food(&self, id: &str) -> Option<&FoodReference> {
        self.get(id)
    }
}

fn validate(reference: &FoodReference) -> CatalogResult<()> {
    match reference.validation_error() {
        Some(reason) => Err(CatalogError::InvalidReference {
            id: reference.id.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, name: &str) -> FoodReference {
        FoodReference::new(id.into(), name.into(), "TACO".into())
    }

    #[test]
    fn test_reference_table_loads() {
        let catalog = FoodCatalog::with_reference_table().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("taco_003").is_some());
    }

    #[test]
    fn test_rejects_zero_portion() {
        let bad = food("x", "Broken").with_portion(0.0, "g");
        let result = FoodCatalog::from_references(vec![bad]);
        assert!(matches!(result, Err(CatalogError::InvalidReference { .. })));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = FoodCatalog::from_references(vec![food("a", "One"), food("a", "Two")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_add_custom_food() {
        let mut catalog = FoodCatalog::new();
        let created = catalog
            .add_custom(
                "  Bolo de caneca ",
                NutrientTotals {
                    energy_kcal: 250.0,
                    ..Default::default()
                },
                80.0,
                "g",
            )
            .unwrap();

        assert!(created.id.starts_with("custom-"));
        assert_eq!(created.name, "Bolo de caneca");
        assert!(created.is_custom());
        assert_eq!(catalog.custom_foods().count(), 1);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut catalog = FoodCatalog::from_references(vec![
            food("a", "Arroz"),
            food("b", "Feijão"),
            food("c", "Frango"),
        ])
        .unwrap();

        let mut edited = food("b", "Feijão preto");
        edited.energy_kcal = 77.0;
        catalog.replace(edited).unwrap();
        assert_eq!(catalog.get("b").unwrap().name, "Feijão preto");

        assert!(matches!(
            catalog.replace(food("zzz", "Nope")),
            Err(CatalogError::NotFound(_))
        ));

        assert!(catalog.remove("a").is_some());
        assert!(catalog.remove("a").is_none());
        // Index stays consistent after shifting
        assert_eq!(catalog.get("c").unwrap().name, "Frango");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_search_by_name_and_source() {
        let mut usda = food("u1", "Quinoa cozida");
        usda.source_tag = "USDA".into();
        let catalog =
            FoodCatalog::from_references(vec![food("a", "Arroz branco"), food("b", "Arroz integral"), usda])
                .unwrap();

        assert_eq!(catalog.search("ARROZ", 10).len(), 2);
        assert_eq!(catalog.search("arroz", 1).len(), 1);
        assert_eq!(catalog.search("usda", 10)[0].id, "u1");
        assert_eq!(catalog.search("", 10).len(), 3);
    }

    #[test]
    fn test_hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), food("a", "Arroz"));
        assert!(map.food("a").is_some());
        assert!(map.food("b").is_none());
    }
}
