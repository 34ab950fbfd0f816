//! Food catalog models.

use serde::{Deserialize, Serialize};

use super::nutrients::NutrientTotals;

/// Source tag assigned to user-authored foods.
pub const CUSTOM_SOURCE_TAG: &str = "custom";

/// A single immutable entry in the food catalog.
///
/// Nutrient values are defined per `reference_portion_amount` of
/// `reference_portion_unit` (e.g. per 100 g).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodReference {
    /// Unique identifier
    pub id: String,
    /// Display name (e.g., "Arroz branco cozido")
    pub name: String,
    /// Provenance (e.g., "TACO", "USDA", "custom")
    pub source_tag: String,
    /// Energy per portion
    pub energy_kcal: f64,
    /// Protein per portion, grams
    pub protein_g: f64,
    /// Carbohydrate per portion, grams
    pub carb_g: f64,
    /// Fat per portion, grams
    pub fat_g: f64,
    /// Fiber per portion, grams
    pub fiber_g: f64,
    /// Sodium per portion, milligrams
    pub sodium_mg: f64,
    /// Reference portion amount, always > 0
    pub reference_portion_amount: f64,
    /// Reference portion unit (e.g., "g", "ml", "fatia")
    pub reference_portion_unit: String,
}

impl FoodReference {
    /// Create a reference with zero nutrients and a 100 g portion.
    pub fn new(id: String, name: String, source_tag: String) -> Self {
        Self {
            id,
            name,
            source_tag,
            energy_kcal: 0.0,
            protein_g: 0.0,
            carb_g: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
            sodium_mg: 0.0,
            reference_portion_amount: 100.0,
            reference_portion_unit: "g".into(),
        }
    }

    /// Builder-style nutrient assignment.
    pub fn with_nutrients(mut self, per_portion: NutrientTotals) -> Self {
        self.energy_kcal = per_portion.energy_kcal;
        self.protein_g = per_portion.protein_g;
        self.carb_g = per_portion.carb_g;
        self.fat_g = per_portion.fat_g;
        self.fiber_g = per_portion.fiber_g;
        self.sodium_mg = per_portion.sodium_mg;
        self
    }

    /// Builder-style portion assignment.
    pub fn with_portion(mut self, amount: f64, unit: &str) -> Self {
        self.reference_portion_amount = amount;
        self.reference_portion_unit = unit.to_string();
        self
    }

    /// Nutrients for exactly one reference portion.
    pub fn nutrients_per_portion(&self) -> NutrientTotals {
        NutrientTotals {
            energy_kcal: self.energy_kcal,
            protein_g: self.protein_g,
            carb_g: self.carb_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            sodium_mg: self.sodium_mg,
        }
    }

    /// Describe the first violated invariant, if any.
    ///
    /// The portion must be a finite positive number and every nutrient must be
    /// finite and non-negative.
    pub fn validation_error(&self) -> Option<String> {
        if !(self.reference_portion_amount.is_finite() && self.reference_portion_amount > 0.0) {
            return Some(format!(
                "reference portion must be positive, got {}",
                self.reference_portion_amount
            ));
        }
        let fields = [
            ("energy_kcal", self.energy_kcal),
            ("protein_g", self.protein_g),
            ("carb_g", self.carb_g),
            ("fat_g", self.fat_g),
            ("fiber_g", self.fiber_g),
            ("sodium_mg", self.sodium_mg),
        ];
        fields
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
            .map(|(field, value)| format!("{} must be non-negative, got {}", field, value))
    }

    /// Whether this food was authored by a user rather than a reference catalog.
    pub fn is_custom(&self) -> bool {
        self.source_tag.eq_ignore_ascii_case(CUSTOM_SOURCE_TAG)
    }
}
