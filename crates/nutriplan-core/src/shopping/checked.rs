//! Per-patient "checked" state for shopping list items.
//!
//! Check marks are keyed by the item's normalized name, so they survive list
//! regeneration as long as the ingredient is still in the plan.

use std::collections::{HashMap, HashSet};

/// Storage seam for check marks. The engine only needs the in-memory store;
/// host apps may back this with their own persistence.
pub trait CheckedStateStore {
    fn is_checked(&self, patient_id: &str, normalized_name: &str) -> bool;

    fn set_checked(&mut self, patient_id: &str, normalized_name: &str, checked: bool);

    /// Flip the mark and return the new state.
    fn toggle(&mut self, patient_id: &str, normalized_name: &str) -> bool {
        let checked = !self.is_checked(patient_id, normalized_name);
        self.set_checked(patient_id, normalized_name, checked);
        checked
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckedStore {
    checked: HashMap<String, HashSet<String>>,
}

impl InMemoryCheckedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every mark for a patient.
    pub fn clear(&mut self, patient_id: &str) {
        self.checked.remove(patient_id);
    }

    pub fn checked_count(&self, patient_id: &str) -> usize {
        self.checked.get(patient_id).map_or(0, HashSet::len)
    }
}

impl CheckedStateStore for InMemoryCheckedStore {
    fn is_checked(&self, patient_id: &str, normalized_name: &str) -> bool {
        self.checked
            .get(patient_id)
            .is_some_and(|names| names.contains(normalized_name))
    }

    fn set_checked(&mut self, patient_id: &str, normalized_name: &str, checked: bool) {
        if checked {
            self.checked
                .entry(patient_id.to_string())
                .or_default()
                .insert(normalized_name.to_string());
        } else if let Some(names) = self.checked.get_mut(patient_id) {
            names.remove(normalized_name);
            if names.is_empty() {
                self.checked.remove(patient_id);
            }
        }
    }
}
