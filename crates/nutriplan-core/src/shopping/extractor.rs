//! Ingredient extraction: flatten a plan into unique ingredient names.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogLookup;
use crate::models::{FoodEntry, MealPlan};

/// One unique ingredient, carrying the quantity of its first occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientEntry {
    pub normalized_name: String,
    pub display_name: String,
    pub quantity_amount: f64,
    pub quantity_unit: String,
}

/// Trimmed, lowercased form used as the dedup key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The name an entry contributes to the shopping list: the referenced food's
/// name, or the entry's free-text name when the reference does not resolve
/// or names nothing.
fn entry_name<'a, L: CatalogLookup + ?Sized>(entry: &'a FoodEntry, catalog: &'a L) -> Option<&'a str> {
    catalog
        .food(&entry.food_reference_id)
        .map(|food| food.name.as_str())
        .filter(|name| !name.trim().is_empty())
        .or(entry.free_text_name.as_deref())
}

/// Unique ingredients across the plan, in first-occurrence order
/// (meal order, then entry order within a meal).
///
/// Blank names are skipped. A repeated name keeps the first occurrence's
/// quantity; later occurrences are dropped.
pub fn extract_ingredients<L: CatalogLookup + ?Sized>(
    plan: &MealPlan,
    catalog: &L,
) -> Vec<IngredientEntry> {
    let mut seen = HashSet::new();
    let mut ingredients = Vec::new();

    for entry in plan.entries() {
        let Some(name) = entry_name(entry, catalog) else {
            debug!(entry_id = %entry.id, "entry has no resolvable name, skipping");
            continue;
        };
        let display_name = name.trim();
        if display_name.is_empty() {
            continue;
        }

        let normalized_name = normalize_name(display_name);
        if !seen.insert(normalized_name.clone()) {
            continue;
        }

        ingredients.push(IngredientEntry {
            normalized_name,
            display_name: display_name.to_string(),
            quantity_amount: entry.quantity_amount,
            quantity_unit: entry.quantity_unit.clone(),
        });
    }

    ingredients
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{FoodReference, Meal};

    fn catalog(names: &[(&str, &str)]) -> HashMap<String, FoodReference> {
        names
            .iter()
            .map(|(id, name)| {
                (
                    id.to_string(),
                    FoodReference::new(id.to_string(), name.to_string(), "TEST".into()),
                )
            })
            .collect()
    }

    fn meal(entries: Vec<FoodEntry>) -> Meal {
        let mut meal = Meal::new("Lanche".into(), "15:00".into());
        meal.entries = entries;
        meal
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Banana Prata "), "banana prata");
        assert_eq!(normalize_name("MAÇÃ"), "maçã");
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let foods = catalog(&[("a", "banana"), ("b", "banana ")]);
        let plan = MealPlan::new(vec![
            meal(vec![FoodEntry::new("a".into(), 1.0, "unidade".into())]),
            meal(vec![FoodEntry::new("b".into(), 3.0, "unidade".into())]),
        ]);

        let ingredients = extract_ingredients(&plan, &foods);
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].display_name, "banana");
        assert_eq!(ingredients[0].quantity_amount, 1.0);
    }

    #[test]
    fn test_case_only_difference_merges() {
        let foods = catalog(&[("a", "Tomate"), ("b", "TOMATE")]);
        let plan = MealPlan::new(vec![meal(vec![
            FoodEntry::new("a".into(), 100.0, "g".into()),
            FoodEntry::new("b".into(), 50.0, "g".into()),
        ])]);

        let ingredients = extract_ingredients(&plan, &foods);
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].display_name, "Tomate");
    }

    #[test]
    fn test_order_is_first_occurrence() {
        let foods = catalog(&[("a", "Aveia"), ("b", "Leite"), ("c", "Arroz")]);
        let plan = MealPlan::new(vec![
            meal(vec![
                FoodEntry::new("a".into(), 50.0, "g".into()),
                FoodEntry::new("b".into(), 200.0, "ml".into()),
            ]),
            meal(vec![
                FoodEntry::new("c".into(), 150.0, "g".into()),
                FoodEntry::new("a".into(), 30.0, "g".into()),
            ]),
        ]);

        let names: Vec<_> = extract_ingredients(&plan, &foods)
            .into_iter()
            .map(|i| i.display_name)
            .collect();
        assert_eq!(names, vec!["Aveia", "Leite", "Arroz"]);
    }

    #[test]
    fn test_free_text_fallback_and_blank_skip() {
        let foods = catalog(&[("a", "   ")]);
        let plan = MealPlan::new(vec![meal(vec![
            FoodEntry::new("a".into(), 1.0, "g".into()),
            FoodEntry::free_text("Pão de queijo".into(), 2.0, "unidade".into()),
            FoodEntry::new("missing".into(), 1.0, "g".into()),
        ])]);

        let ingredients = extract_ingredients(&plan, &foods);
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].normalized_name, "pão de queijo");
    }

    #[test]
    fn test_blank_catalog_name_falls_back_to_free_text() {
        let foods = catalog(&[("a", "  ")]);
        let mut entry = FoodEntry::new("a".into(), 80.0, "g".into());
        entry.free_text_name = Some("Cuscuz".into());
        let plan = MealPlan::new(vec![meal(vec![entry])]);

        let ingredients = extract_ingredients(&plan, &foods);
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].display_name, "Cuscuz");
        assert_eq!(ingredients[0].quantity_amount, 80.0);
    }

    #[test]
    fn test_empty_plan() {
        let foods = catalog(&[]);
        assert!(extract_ingredients(&MealPlan::default(), &foods).is_empty());
    }
}
