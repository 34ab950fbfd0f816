//! Meal plan structure manager.
//!
//! Every operation takes the current plan by reference and returns a new plan
//! value; the input is never modified. An operation either returns a complete
//! new plan or an error, so callers can memoize totals per plan value and
//! reconcile concurrent editors by replacing the whole plan.

mod editor;

pub use editor::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structure edit errors. All are recoverable rejected edits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type PlanResult<T> = Result<T, PlanError>;

/// A single-field edit to a food entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EntryUpdate {
    QuantityAmount(f64),
    QuantityUnit(String),
    HouseholdMeasure(Option<String>),
}

/// A single-field edit to a meal's display fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MealUpdate {
    Name(String),
    ScheduledTime(String),
    ColorTag(String),
}
