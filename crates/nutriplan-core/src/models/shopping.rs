//! Shopping list models.

use serde::{Deserialize, Serialize};

/// Grocery grouping for a derived shopping list.
///
/// Declaration order is classification priority order; `Other` is the fallback
/// and always last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShoppingCategory {
    Fruits,
    Proteins,
    Dairy,
    Grains,
    Vegetables,
    Fish,
    Eggs,
    Other,
}

impl ShoppingCategory {
    /// All categories in priority order.
    pub const ALL: [ShoppingCategory; 8] = [
        ShoppingCategory::Fruits,
        ShoppingCategory::Proteins,
        ShoppingCategory::Dairy,
        ShoppingCategory::Grains,
        ShoppingCategory::Vegetables,
        ShoppingCategory::Fish,
        ShoppingCategory::Eggs,
        ShoppingCategory::Other,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ShoppingCategory::Fruits => "Fruits",
            ShoppingCategory::Proteins => "Proteins",
            ShoppingCategory::Dairy => "Dairy",
            ShoppingCategory::Grains => "Grains",
            ShoppingCategory::Vegetables => "Vegetables",
            ShoppingCategory::Fish => "Fish",
            ShoppingCategory::Eggs => "Eggs",
            ShoppingCategory::Other => "Other",
        }
    }

    /// Display icon.
    pub fn icon(&self) -> &'static str {
        match self {
            ShoppingCategory::Fruits => "🍎",
            ShoppingCategory::Proteins => "🍗",
            ShoppingCategory::Dairy => "🥛",
            ShoppingCategory::Grains => "🌾",
            ShoppingCategory::Vegetables => "🥬",
            ShoppingCategory::Fish => "🐟",
            ShoppingCategory::Eggs => "🥚",
            ShoppingCategory::Other => "📦",
        }
    }

    /// Parse a label back into a category (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// One distinct ingredient on the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListItem {
    /// Lowercased, trimmed dedup key; also the checked-state key
    pub normalized_name: String,
    /// Trimmed name as first seen
    pub display_name: String,
    /// Quantity from the first occurrence in plan order
    pub quantity_amount: f64,
    pub quantity_unit: String,
    pub category: ShoppingCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_matches_ord() {
        let mut sorted = ShoppingCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, ShoppingCategory::ALL);
        assert_eq!(*ShoppingCategory::ALL.last().unwrap(), ShoppingCategory::Other);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(ShoppingCategory::from_label("grains"), Some(ShoppingCategory::Grains));
        assert_eq!(ShoppingCategory::from_label(" Dairy "), Some(ShoppingCategory::Dairy));
        assert_eq!(ShoppingCategory::from_label("Snacks"), None);
    }

    #[test]
    fn test_every_category_has_metadata() {
        for category in ShoppingCategory::ALL {
            assert!(!category.label().is_empty());
            assert!(!category.icon().is_empty());
        }
    }
}
