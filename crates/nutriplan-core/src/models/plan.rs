//! Meal plan models.

use serde::{Deserialize, Serialize};

/// One line item inside a meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Unique within the plan
    pub id: String,
    /// Catalog reference; may dangle (contributes zero nutrients)
    pub food_reference_id: String,
    /// Requested quantity, in the same scale as the reference portion
    pub quantity_amount: f64,
    /// Unit label
    pub quantity_unit: String,
    /// Household measure label (e.g., "3 colheres de sopa"), display only
    #[serde(default)]
    pub household_measure: Option<String>,
    /// Name used when the catalog reference does not resolve
    #[serde(default)]
    pub free_text_name: Option<String>,
}

impl FoodEntry {
    /// Create an entry with a freshly generated id.
    pub fn new(food_reference_id: String, quantity_amount: f64, quantity_unit: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            food_reference_id,
            quantity_amount,
            quantity_unit,
            household_measure: None,
            free_text_name: None,
        }
    }

    /// Create an entry for a food that has no catalog reference.
    pub fn free_text(name: String, quantity_amount: f64, quantity_unit: String) -> Self {
        Self {
            free_text_name: Some(name),
            ..Self::new(String::new(), quantity_amount, quantity_unit)
        }
    }

    /// Copy of this entry under a new id.
    pub fn cloned_with_new_id(&self) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ..self.clone()
        }
    }
}

/// A named, time-tagged group of food entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Display only (e.g., "07:00")
    pub scheduled_time: String,
    /// Display only (e.g., "#F59E0B")
    pub color_tag: String,
    /// Order matters for display, not for totals
    pub entries: Vec<FoodEntry>,
}

impl Meal {
    /// Create an empty meal with a freshly generated id.
    pub fn new(name: String, scheduled_time: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            scheduled_time,
            color_tag: String::new(),
            entries: Vec::new(),
        }
    }

    /// Find an entry by id.
    pub fn entry(&self, entry_id: &str) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }
}

/// A standard meal slot: name, scheduled time and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealSlot {
    pub name: &'static str,
    pub time: &'static str,
    pub color: &'static str,
}

/// The standard day, in schedule order.
pub const DEFAULT_MEAL_SLOTS: [MealSlot; 6] = [
    MealSlot { name: "Café da Manhã", time: "07:00", color: "#F59E0B" },
    MealSlot { name: "Lanche da Manhã", time: "10:00", color: "#10B981" },
    MealSlot { name: "Almoço", time: "12:30", color: "#3B82F6" },
    MealSlot { name: "Lanche da Tarde", time: "15:30", color: "#8B5CF6" },
    MealSlot { name: "Jantar", time: "19:00", color: "#EF4444" },
    MealSlot { name: "Ceia", time: "21:30", color: "#6366F1" },
];

/// Slots a new plan starts with: breakfast, lunch and dinner.
const STARTER_SLOTS: [usize; 3] = [0, 2, 4];

impl MealSlot {
    /// An empty meal for this slot, with a fresh id.
    pub fn to_meal(&self) -> Meal {
        Meal {
            color_tag: self.color.to_string(),
            ..Meal::new(self.name.to_string(), self.time.to_string())
        }
    }
}

/// One empty meal per standard slot.
pub fn default_meals() -> Vec<Meal> {
    DEFAULT_MEAL_SLOTS.iter().map(MealSlot::to_meal).collect()
}

/// An ordered sequence of meals for one patient and day.
///
/// Patient/date scoping is owned by the persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
}

impl MealPlan {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// A fresh plan with empty breakfast, lunch and dinner meals.
    pub fn with_default_meals() -> Self {
        Self::new(
            STARTER_SLOTS
                .iter()
                .map(|&slot| DEFAULT_MEAL_SLOTS[slot].to_meal())
                .collect(),
        )
    }

    /// Find a meal by id.
    pub fn meal(&self, meal_id: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == meal_id)
    }

    /// Find an entry anywhere in the plan.
    pub fn entry(&self, entry_id: &str) -> Option<&FoodEntry> {
        self.meals.iter().find_map(|m| m.entry(entry_id))
    }

    /// Total number of entries across all meals.
    pub fn entry_count(&self) -> usize {
        self.meals.iter().map(|m| m.entries.len()).sum()
    }

    /// Iterate entries in plan order (meal order, then entry order).
    pub fn entries(&self) -> impl Iterator<Item = &FoodEntry> {
        self.meals.iter().flat_map(|m| m.entries.iter())
    }
}
