//! Shopping list assembly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogLookup;
use crate::models::{MealPlan, ShoppingCategory, ShoppingListItem};

use super::{classify, extract_ingredients, CheckedStateStore};

/// Categorized shopping list derived from a plan.
///
/// Groups iterate in category priority order. Only non-empty groups are
/// present. Within a group, items keep first-occurrence plan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShoppingList {
    groups: BTreeMap<ShoppingCategory, Vec<ShoppingListItem>>,
}

/// A list item with its check mark overlaid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckedShoppingItem {
    pub item: ShoppingListItem,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShoppingProgress {
    pub checked: usize,
    pub total: usize,
    /// 0.0 for an empty list
    pub percent: f64,
}

/// Derive the shopping list for a plan. Never fails and never reads checked
/// state; two calls on the same plan and catalog give equal lists.
pub fn build_shopping_list<L: CatalogLookup + ?Sized>(plan: &MealPlan, catalog: &L) -> ShoppingList {
    let mut groups: BTreeMap<ShoppingCategory, Vec<ShoppingListItem>> = BTreeMap::new();

    for ingredient in extract_ingredients(plan, catalog) {
        let category = classify(&ingredient.display_name);
        groups.entry(category).or_default().push(ShoppingListItem {
            normalized_name: ingredient.normalized_name,
            display_name: ingredient.display_name,
            quantity_amount: ingredient.quantity_amount,
            quantity_unit: ingredient.quantity_unit,
            category,
        });
    }

    debug!(
        categories = groups.len(),
        items = groups.values().map(Vec::len).sum::<usize>(),
        "built shopping list"
    );

    ShoppingList { groups }
}

impl ShoppingList {
    pub fn groups(&self) -> &BTreeMap<ShoppingCategory, Vec<ShoppingListItem>> {
        &self.groups
    }

    /// Items in one category; empty when the category has no items.
    pub fn get(&self, category: ShoppingCategory) -> &[ShoppingListItem] {
        self.groups.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Non-empty categories in priority order.
    pub fn categories(&self) -> impl Iterator<Item = ShoppingCategory> + '_ {
        self.groups.keys().copied()
    }

    /// Every item, group by group.
    pub fn items(&self) -> impl Iterator<Item = &ShoppingListItem> {
        self.groups.values().flatten()
    }

    pub fn total_items(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Overlay check marks for a patient.
    pub fn with_checks<S: CheckedStateStore + ?Sized>(
        &self,
        store: &S,
        patient_id: &str,
    ) -> Vec<CheckedShoppingItem> {
        self.items()
            .map(|item| CheckedShoppingItem {
                checked: store.is_checked(patient_id, &item.normalized_name),
                item: item.clone(),
            })
            .collect()
    }

    /// Checked count over items in this list. Marks for ingredients that
    /// are no longer in the plan are ignored.
    pub fn progress<S: CheckedStateStore + ?Sized>(&self, store: &S, patient_id: &str) -> ShoppingProgress {
        let total = self.total_items();
        let checked = self
            .items()
            .filter(|item| store.is_checked(patient_id, &item.normalized_name))
            .count();
        let percent = if total == 0 {
            0.0
        } else {
            checked as f64 / total as f64 * 100.0
        };

        ShoppingProgress {
            checked,
            total,
            percent,
        }
    }
}
