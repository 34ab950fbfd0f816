//! Meal and day aggregation.
//!
//! Totals are recomputed from scratch on every call; there is no cached or
//! incremental state that could drift from the plan.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogLookup;
use crate::models::{Meal, MealPlan, NutrientTotals};

use super::scale_entry;

/// Totals for a single meal, labelled for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTotals {
    pub meal_id: String,
    pub meal_name: String,
    pub totals: NutrientTotals,
}

/// Per-meal totals plus the day total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTotals {
    pub meals: Vec<MealTotals>,
    pub day: NutrientTotals,
}

/// Sum of the scaled contributions of every entry in a meal.
pub fn aggregate_meal<L: CatalogLookup + ?Sized>(meal: &Meal, catalog: &L) -> NutrientTotals {
    meal.entries
        .iter()
        .map(|entry| scale_entry(entry, catalog))
        .sum()
}

/// Sum of [`aggregate_meal`] over every meal, in plan order.
pub fn aggregate_day<L: CatalogLookup + ?Sized>(plan: &MealPlan, catalog: &L) -> NutrientTotals {
    plan.meals
        .iter()
        .map(|meal| aggregate_meal(meal, catalog))
        .sum()
}

/// Meal-by-meal breakdown with the day total.
///
/// `day` is folded from the same per-meal values, so it always equals
/// [`aggregate_day`] for the same inputs.
pub fn plan_totals<L: CatalogLookup + ?Sized>(plan: &MealPlan, catalog: &L) -> PlanTotals {
    let meals: Vec<MealTotals> = plan
        .meals
        .iter()
        .map(|meal| MealTotals {
            meal_id: meal.id.clone(),
            meal_name: meal.name.clone(),
            totals: aggregate_meal(meal, catalog),
        })
        .collect();
    let day = meals.iter().map(|m| m.totals).sum();

    PlanTotals { meals, day }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodCatalog;
    use crate::models::FoodEntry;

    fn meal_with(entries: Vec<(&str, f64)>) -> Meal {
        let mut meal = Meal::new("Almoço".into(), "12:30".into());
        meal.entries = entries
            .into_iter()
            .map(|(food, qty)| FoodEntry::new(food.into(), qty, "g".into()))
            .collect();
        meal
    }

    #[test]
    fn test_empty_meal_is_zero() {
        let catalog = FoodCatalog::with_reference_table().unwrap();
        let meal = meal_with(vec![]);
        assert!(aggregate_meal(&meal, &catalog).is_zero());
    }

    #[test]
    fn test_meal_sums_entries() {
        let catalog = FoodCatalog::with_reference_table().unwrap();
        // Rice 150g (128 kcal/100g) + chicken 120g (165 kcal/100g)
        let meal = meal_with(vec![("taco_001", 150.0), ("taco_003", 120.0)]);
        let totals = aggregate_meal(&meal, &catalog);

        assert!((totals.energy_kcal - (192.0 + 198.0)).abs() < 1e-9);
        assert!((totals.protein_g - (3.75 + 37.2)).abs() < 1e-9);
    }

    #[test]
    fn test_dangling_entry_does_not_break_total() {
        let catalog = FoodCatalog::with_reference_table().unwrap();
        let meal = meal_with(vec![("taco_001", 100.0), ("deleted-food", 500.0)]);
        let totals = aggregate_meal(&meal, &catalog);
        assert!((totals.energy_kcal - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_day_equals_sum_of_meals() {
        let catalog = FoodCatalog::with_reference_table().unwrap();
        let plan = MealPlan::new(vec![
            meal_with(vec![("taco_009", 50.0), ("taco_010", 200.0)]),
            meal_with(vec![("taco_001", 150.0), ("taco_003", 120.0)]),
            meal_with(vec![("taco_016", 130.0)]),
        ]);

        let day = aggregate_day(&plan, &catalog);
        let summed: NutrientTotals = plan
            .meals
            .iter()
            .map(|m| aggregate_meal(m, &catalog))
            .sum();
        assert_eq!(day, summed);

        let breakdown = plan_totals(&plan, &catalog);
        assert_eq!(breakdown.meals.len(), 3);
        assert_eq!(breakdown.day, day);
    }
}
