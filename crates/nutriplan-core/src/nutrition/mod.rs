//! Nutrient scaling and aggregation.
//!
//! Pipeline: FoodEntry → Quantity Scaler → Meal Aggregator → Day Aggregator
//!
//! Every function here is total. A dangling catalog reference contributes
//! zero nutrients so a plan with incomplete data still renders.

mod aggregate;
mod scaler;

pub use aggregate::*;
pub use scaler::*;
