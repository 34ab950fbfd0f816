//! Draft plan resolution.
//!
//! A draft is a loosely structured plan (meal names, times, free-text food
//! names), usually produced by an assistant and wrapped in prose. Resolution
//! turns it into a [`MealPlan`] by matching each food name against the catalog.

mod matcher;

pub use matcher::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::FoodCatalog;
use crate::config::EngineConfig;
use crate::models::{FoodEntry, Meal, MealPlan, DEFAULT_MEAL_SLOTS};

/// Draft parsing errors.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Invalid draft JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid draft format: {0}")]
    InvalidFormat(String),
}

pub type DraftResult<T> = Result<T, DraftError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DraftPlan {
    #[serde(default)]
    pub meals: Vec<DraftMeal>,
    /// Advice only; never turned into entries
    #[serde(default, alias = "foodsToAvoid")]
    pub foods_to_avoid: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DraftMeal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub foods: Vec<String>,
}

/// Result of resolving a draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftResolution {
    pub plan: MealPlan,
    /// Food names that matched nothing, in draft order
    pub unresolved: Vec<String>,
}

/// Parse a draft out of free text: the JSON object spanning the first `{`
/// to the last `}`.
pub fn parse_draft_plan(text: &str) -> DraftResult<DraftPlan> {
    let start = text
        .find('{')
        .ok_or_else(|| DraftError::InvalidFormat("no JSON object found".into()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| DraftError::InvalidFormat("unterminated JSON object".into()))?;

    Ok(serde_json::from_str(&text[start..=end])?)
}

/// Turn a draft into a plan.
///
/// Matched foods get the reference's portion as their quantity. Unmatched
/// foods become free-text entries with the configured default quantity.
/// Blank food names are skipped. Meal colors cycle through the standard
/// slot palette by position.
pub fn resolve_draft(draft: &DraftPlan, catalog: &FoodCatalog, config: &EngineConfig) -> DraftResolution {
    let matcher = FoodMatcher::new(config.min_fuzzy_similarity);
    let mut unresolved = Vec::new();

    let meals = draft
        .meals
        .iter()
        .enumerate()
        .map(|(index, draft_meal)| {
            let mut meal = Meal::new(draft_meal.name.trim().to_string(), draft_meal.time.trim().to_string());
            meal.color_tag = DEFAULT_MEAL_SLOTS[index % DEFAULT_MEAL_SLOTS.len()].color.to_string();

            for food_name in draft_meal.foods.iter().map(|f| f.trim()).filter(|f| !f.is_empty()) {
                let entry = match matcher.find(food_name, catalog) {
                    Some(food) => {
                        debug!(draft = %food_name, food_id = %food.id, "draft food matched");
                        FoodEntry::new(
                            food.id.clone(),
                            food.reference_portion_amount,
                            food.reference_portion_unit.clone(),
                        )
                    }
                    None => {
                        unresolved.push(food_name.to_string());
                        FoodEntry::free_text(
                            food_name.to_string(),
                            config.draft_default_quantity,
                            config.draft_default_unit.clone(),
                        )
                    }
                };
                meal.entries.push(entry);
            }
            meal
        })
        .collect();

    let plan = MealPlan::new(meals);
    info!(
        meals = plan.meals.len(),
        entries = plan.entry_count(),
        unresolved = unresolved.len(),
        "draft plan resolved"
    );

    DraftResolution { plan, unresolved }
}
