//! Immutable-update operations on [`MealPlan`].

use std::collections::HashSet;

use tracing::debug;

use crate::models::{FoodEntry, Meal, MealPlan};

use super::{EntryUpdate, MealUpdate, PlanError, PlanResult};

/// Append an entry to the named meal.
///
/// Fails with `NotFound` for an unknown meal and `InvalidValue` for a negative or
/// non-finite quantity or an entry id already used elsewhere in the plan.
pub fn add_food_entry(plan: &MealPlan, meal_id: &str, entry: FoodEntry) -> PlanResult<MealPlan> {
    let position = meal_position(plan, meal_id)?;
    validate_quantity(entry.quantity_amount)?;
    if plan.entry(&entry.id).is_some() {
        return Err(PlanError::InvalidValue(format!(
            "entry id already in plan: {}",
            entry.id
        )));
    }

    debug!(meal_id, entry_id = %entry.id, "adding food entry");
    let mut next = plan.clone();
    next.meals[position].entries.push(entry);
    Ok(next)
}

/// Remove an entry wherever it is. Removing a missing id returns an equal plan.
pub fn remove_food_entry(plan: &MealPlan, entry_id: &str) -> MealPlan {
    let mut next = plan.clone();
    for meal in &mut next.meals {
        let before = meal.entries.len();
        meal.entries.retain(|e| e.id != entry_id);
        if meal.entries.len() != before {
            debug!(meal_id = %meal.id, entry_id, "removed food entry");
        }
    }
    next
}

/// Replace one field of an entry.
pub fn update_food_entry(
    plan: &MealPlan,
    entry_id: &str,
    update: EntryUpdate,
) -> PlanResult<MealPlan> {
    let mut next = plan.clone();
    let entry = next
        .meals
        .iter_mut()
        .flat_map(|m| m.entries.iter_mut())
        .find(|e| e.id == entry_id)
        .ok_or_else(|| PlanError::NotFound(format!("entry {}", entry_id)))?;

    if let EntryUpdate::QuantityAmount(amount) = &update {
        validate_quantity(*amount)?;
    }

    match update {
        EntryUpdate::QuantityAmount(amount) => entry.quantity_amount = amount,
        EntryUpdate::QuantityUnit(unit) => entry.quantity_unit = unit,
        EntryUpdate::HouseholdMeasure(measure) => entry.household_measure = measure,
    }
    Ok(next)
}

/// Move the entry at `from_index` to `to_index` within one meal.
pub fn reorder_entries_within_meal(
    plan: &MealPlan,
    meal_id: &str,
    from_index: usize,
    to_index: usize,
) -> PlanResult<MealPlan> {
    let position = meal_position(plan, meal_id)?;
    let len = plan.meals[position].entries.len();
    for index in [from_index, to_index] {
        if index >= len {
            return Err(PlanError::IndexOutOfRange { index, len });
        }
    }

    let mut next = plan.clone();
    let entries = &mut next.meals[position].entries;
    let moved = entries.remove(from_index);
    entries.insert(to_index, moved);
    Ok(next)
}

/// Clone a meal with a new id, `copy_suffix` appended to its name and fresh
/// entry ids, and append it to the end of the plan.
pub fn duplicate_meal(plan: &MealPlan, meal_id: &str, copy_suffix: &str) -> PlanResult<MealPlan> {
    let source = plan
        .meal(meal_id)
        .ok_or_else(|| PlanError::NotFound(format!("meal {}", meal_id)))?;

    let copy = Meal {
        id: uuid::Uuid::new_v4().to_string(),
        name: format!("{}{}", source.name, copy_suffix),
        scheduled_time: source.scheduled_time.clone(),
        color_tag: source.color_tag.clone(),
        entries: source.entries.iter().map(FoodEntry::cloned_with_new_id).collect(),
    };

    debug!(source = meal_id, copy = %copy.id, entries = copy.entries.len(), "duplicated meal");
    let mut next = plan.clone();
    next.meals.push(copy);
    Ok(next)
}

/// Append a new meal. Its id and every entry id must be unused in the plan,
/// and its entry ids must be distinct.
pub fn add_meal(plan: &MealPlan, meal: Meal) -> PlanResult<MealPlan> {
    if plan.meal(&meal.id).is_some() {
        return Err(PlanError::InvalidValue(format!("meal id already in plan: {}", meal.id)));
    }
    let mut seen = HashSet::new();
    for entry in &meal.entries {
        validate_quantity(entry.quantity_amount)?;
        if !seen.insert(entry.id.as_str()) || plan.entry(&entry.id).is_some() {
            return Err(PlanError::InvalidValue(format!("duplicate entry id: {}", entry.id)));
        }
    }

    let mut next = plan.clone();
    next.meals.push(meal);
    Ok(next)
}

/// Remove a meal and its entries. Removing a missing id returns an equal plan.
pub fn remove_meal(plan: &MealPlan, meal_id: &str) -> MealPlan {
    let mut next = plan.clone();
    next.meals.retain(|m| m.id != meal_id);
    next
}

/// Replace one display field of a meal.
pub fn update_meal(plan: &MealPlan, meal_id: &str, update: MealUpdate) -> PlanResult<MealPlan> {
    let position = meal_position(plan, meal_id)?;
    let mut next = plan.clone();
    let meal = &mut next.meals[position];
    match update {
        MealUpdate::Name(name) => meal.name = name,
        MealUpdate::ScheduledTime(time) => meal.scheduled_time = time,
        MealUpdate::ColorTag(color) => meal.color_tag = color,
    }
    Ok(next)
}

fn meal_position(plan: &MealPlan, meal_id: &str) -> PlanResult<usize> {
    plan.meals
        .iter()
        .position(|m| m.id == meal_id)
        .ok_or_else(|| PlanError::NotFound(format!("meal {}", meal_id)))
}

fn validate_quantity(amount: f64) -> PlanResult<()> {
    if !amount.is_finite() {
        return Err(PlanError::InvalidValue(format!("quantity is not a number: {}", amount)));
    }
    if amount < 0.0 {
        return Err(PlanError::InvalidValue(format!("quantity is negative: {}", amount)));
    }
    Ok(())
}
