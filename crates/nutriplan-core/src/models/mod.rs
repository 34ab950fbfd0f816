//! Domain models for the meal-plan engine.

mod food;
mod nutrients;
mod plan;
mod shopping;

pub use food::*;
pub use nutrients::*;
pub use plan::*;
pub use shopping::*;
