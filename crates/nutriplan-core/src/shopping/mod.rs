//! Shopping list derivation.
//!
//! Pipeline: MealPlan → Ingredient Extractor → Category Classifier → Shopping List Builder
//!
//! Nothing here fails: unknown ingredients land in [`ShoppingCategory::Other`]
//! and entries without a usable name are skipped.
//!
//! [`ShoppingCategory::Other`]: crate::models::ShoppingCategory::Other

mod builder;
mod checked;
mod classifier;
mod extractor;

pub use builder::*;
pub use checked::*;
pub use classifier::*;
pub use extractor::*;
