//! Shopping list export for sharing and spreadsheets.

mod shopping_list;

pub use shopping_list::*;
