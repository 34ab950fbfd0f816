//! Quantity scaler.

use tracing::debug;

use crate::catalog::CatalogLookup;
use crate::models::{FoodEntry, FoodReference, NutrientTotals};

/// Scale a food's per-portion nutrients to `quantity_amount`.
///
/// `multiplier = quantity_amount / reference_portion_amount`. No rounding is
/// applied; formatting is a presentation concern (see [`NutrientTotals::display`]).
/// The portion is validated positive at catalog load and is not rechecked here.
pub fn scale(food: &FoodReference, quantity_amount: f64) -> NutrientTotals {
    let multiplier = quantity_amount / food.reference_portion_amount;
    food.nutrients_per_portion().scaled_by(multiplier)
}

/// Scaled contribution of one entry. Missing references and negative or
/// non-finite quantities contribute zero.
pub fn scale_entry<L: CatalogLookup + ?Sized>(entry: &FoodEntry, catalog: &L) -> NutrientTotals {
    if !(entry.quantity_amount.is_finite() && entry.quantity_amount > 0.0) {
        return NutrientTotals::ZERO;
    }
    match catalog.food(&entry.food_reference_id) {
        Some(food) => scale(food, entry.quantity_amount),
        None => {
            debug!(
                entry_id = %entry.id,
                food_reference_id = %entry.food_reference_id,
                "unresolved food reference; contributing zero nutrients"
            );
            NutrientTotals::ZERO
        }
    }
}
