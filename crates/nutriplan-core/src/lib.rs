//! NutriPlan Core Library
//!
//! Meal-plan composition engine: nutrient totals per meal and per day, pure
//! plan editing, and a categorized shopping list derived from the plan.
//!
//! # Architecture
//!
//! ```text
//!                     FoodCatalog (reference table + custom foods)
//!                                   │
//!        ┌──────────────────────────┼──────────────────────────┐
//!        │                          │                          │
//!        ▼                          ▼                          ▼
//!  Quantity Scaler          Ingredient Extractor        Draft Resolution
//!        │                          │                  (free text → plan)
//!        ▼                          ▼                          │
//!  Meal Aggregator          Category Classifier                │
//!        │                          │                          │
//!        ▼                          ▼                          │
//!  Day Aggregator          Shopping List Builder ◄─── MealPlan ◄┘
//!                                   │                    ▲
//!                                   ▼                    │
//!                       Export (text / JSON / CSV)   Plan editor
//!                                                 (plan → new plan)
//! ```
//!
//! # Core Principle
//!
//! **Everything derived is recomputed from the plan.** Totals and shopping
//! lists are never stored, so they can never disagree with the plan they came
//! from. Plan edits return a new plan and leave the input untouched.
//!
//! # Modules
//!
//! - [`models`]: Domain types (FoodReference, MealPlan, NutrientTotals, etc.)
//! - [`catalog`]: Validated food catalog and the built-in reference table
//! - [`nutrition`]: Quantity scaling and meal/day aggregation
//! - [`plan`]: Immutable plan editing operations
//! - [`shopping`]: Ingredient extraction, classification, list building
//! - [`draft`]: Free-text draft plan parsing and food matching
//! - [`export`]: Shopping list share text, JSON, and CSV
//! - [`config`]: Engine configuration
//! - [`logging`]: Tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod draft;
pub mod export;
pub mod fingerprint;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod plan;
pub mod shopping;

// Re-export commonly used types
pub use catalog::{CatalogLookup, FoodCatalog};
pub use config::EngineConfig;
pub use fingerprint::plan_fingerprint;
pub use models::{
    DailyTargets, FoodEntry, FoodReference, Meal, MealPlan, NutrientTotals, ShoppingCategory,
    ShoppingListItem,
};
pub use nutrition::{aggregate_day, aggregate_meal, plan_totals, scale};
pub use shopping::{build_shopping_list, classify, CheckedStateStore, InMemoryCheckedStore, ShoppingList};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use models::Nutrient;
use plan::{EntryUpdate, MealUpdate};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum NutriPlanError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<plan::PlanError> for NutriPlanError {
    fn from(e: plan::PlanError) -> Self {
        match e {
            plan::PlanError::NotFound(_) => NutriPlanError::NotFound(e.to_string()),
            _ => NutriPlanError::InvalidInput(e.to_string()),
        }
    }
}

impl From<catalog::CatalogError> for NutriPlanError {
    fn from(e: catalog::CatalogError) -> Self {
        match e {
            catalog::CatalogError::NotFound(_) => NutriPlanError::NotFound(e.to_string()),
            _ => NutriPlanError::InvalidInput(e.to_string()),
        }
    }
}

impl From<draft::DraftError> for NutriPlanError {
    fn from(e: draft::DraftError) -> Self {
        NutriPlanError::InvalidInput(e.to_string())
    }
}

impl From<config::ConfigError> for NutriPlanError {
    fn from(e: config::ConfigError) -> Self {
        NutriPlanError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for NutriPlanError {
    fn from(e: serde_json::Error) -> Self {
        NutriPlanError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for NutriPlanError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        NutriPlanError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an engine over the built-in reference table with default config.
#[uniffi::export]
pub fn new_engine() -> Result<Arc<NutriPlanEngine>, NutriPlanError> {
    NutriPlanEngine::build(EngineConfig::default())
}

/// Create an engine with a JSON config (missing fields take defaults).
#[uniffi::export]
pub fn new_engine_with_config(config_json: String) -> Result<Arc<NutriPlanEngine>, NutriPlanError> {
    NutriPlanEngine::build(EngineConfig::from_json_str(&config_json)?)
}

/// Install a tracing subscriber. Returns false if one was already installed.
#[uniffi::export]
pub fn setup_logging(filter: String, json: bool) -> bool {
    logging::init_logging(&filter, json)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe engine wrapper for FFI.
///
/// Holds the mutable catalog and check marks. Plans are passed in and
/// returned by value; the host owns persistence.
#[derive(uniffi::Object)]
pub struct NutriPlanEngine {
    catalog: Arc<Mutex<FoodCatalog>>,
    checked: Arc<Mutex<InMemoryCheckedStore>>,
    config: EngineConfig,
}

impl NutriPlanEngine {
    fn build(config: EngineConfig) -> Result<Arc<Self>, NutriPlanError> {
        let catalog = FoodCatalog::with_reference_table()?;
        Ok(Arc::new(Self {
            catalog: Arc::new(Mutex::new(catalog)),
            checked: Arc::new(Mutex::new(InMemoryCheckedStore::new())),
            config,
        }))
    }
}

#[uniffi::export]
impl NutriPlanEngine {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Add or replace a food reference.
    pub fn upsert_food(&self, food: FfiFoodReference) -> Result<(), NutriPlanError> {
        let mut catalog = self.catalog.lock()?;
        catalog.upsert(food.into())?;
        Ok(())
    }

    /// Get a food reference by id.
    pub fn get_food(&self, id: String) -> Result<Option<FfiFoodReference>, NutriPlanError> {
        let catalog = self.catalog.lock()?;
        Ok(catalog.get(&id).cloned().map(|f| f.into()))
    }

    /// Search foods by name or source.
    pub fn search_foods(&self, query: String, limit: u32) -> Result<Vec<FfiFoodReference>, NutriPlanError> {
        let catalog = self.catalog.lock()?;
        Ok(catalog
            .search(&query, limit as usize)
            .into_iter()
            .cloned()
            .map(|f| f.into())
            .collect())
    }

    /// Create a user-authored food.
    pub fn add_custom_food(
        &self,
        name: String,
        per_portion: FfiNutrientTotals,
        portion_amount: f64,
        portion_unit: String,
    ) -> Result<FfiFoodReference, NutriPlanError> {
        let mut catalog = self.catalog.lock()?;
        let food = catalog.add_custom(&name, per_portion.into(), portion_amount, &portion_unit)?;
        Ok(food.into())
    }

    /// Remove a food. Entries pointing at it then contribute zero.
    pub fn remove_food(&self, id: String) -> Result<bool, NutriPlanError> {
        let mut catalog = self.catalog.lock()?;
        Ok(catalog.remove(&id).is_some())
    }

    // =========================================================================
    // Nutrient Totals
    // =========================================================================

    /// Totals for one meal of a plan.
    pub fn meal_totals(&self, plan: FfiMealPlan, meal_id: String) -> Result<FfiNutrientTotals, NutriPlanError> {
        let plan: MealPlan = plan.into();
        let meal = plan
            .meal(&meal_id)
            .ok_or_else(|| NutriPlanError::NotFound(format!("meal {}", meal_id)))?;
        let catalog = self.catalog.lock()?;
        Ok(aggregate_meal(meal, &*catalog).into())
    }

    /// Totals for the whole day.
    pub fn day_totals(&self, plan: FfiMealPlan) -> Result<FfiNutrientTotals, NutriPlanError> {
        let catalog = self.catalog.lock()?;
        Ok(aggregate_day(&plan.into(), &*catalog).into())
    }

    /// Day totals against the professional's targets.
    pub fn target_progress(
        &self,
        plan: FfiMealPlan,
        targets: FfiDailyTargets,
    ) -> Result<Vec<FfiTargetProgress>, NutriPlanError> {
        let catalog = self.catalog.lock()?;
        let day = aggregate_day(&plan.into(), &*catalog);
        let targets: DailyTargets = targets.into();
        Ok(targets.progress(&day).into_iter().map(|p| p.into()).collect())
    }

    // =========================================================================
    // Plan Operations
    // =========================================================================

    /// A fresh plan with the standard breakfast, lunch and dinner meals.
    pub fn new_plan(&self) -> FfiMealPlan {
        MealPlan::with_default_meals().into()
    }

    /// Append an entry for a catalog food to a meal.
    pub fn add_food_entry(
        &self,
        plan: FfiMealPlan,
        meal_id: String,
        food_reference_id: String,
        quantity_amount: f64,
        quantity_unit: String,
    ) -> Result<FfiMealPlan, NutriPlanError> {
        let entry = FoodEntry::new(food_reference_id, quantity_amount, quantity_unit);
        Ok(plan::add_food_entry(&plan.into(), &meal_id, entry)?.into())
    }

    pub fn remove_food_entry(&self, plan: FfiMealPlan, entry_id: String) -> FfiMealPlan {
        plan::remove_food_entry(&plan.into(), &entry_id).into()
    }

    pub fn update_entry_quantity(
        &self,
        plan: FfiMealPlan,
        entry_id: String,
        quantity_amount: f64,
    ) -> Result<FfiMealPlan, NutriPlanError> {
        let update = EntryUpdate::QuantityAmount(quantity_amount);
        Ok(plan::update_food_entry(&plan.into(), &entry_id, update)?.into())
    }

    pub fn update_entry_measure(
        &self,
        plan: FfiMealPlan,
        entry_id: String,
        household_measure: Option<String>,
    ) -> Result<FfiMealPlan, NutriPlanError> {
        let update = EntryUpdate::HouseholdMeasure(household_measure);
        Ok(plan::update_food_entry(&plan.into(), &entry_id, update)?.into())
    }

    pub fn reorder_entries(
        &self,
        plan: FfiMealPlan,
        meal_id: String,
        from_index: u32,
        to_index: u32,
    ) -> Result<FfiMealPlan, NutriPlanError> {
        Ok(plan::reorder_entries_within_meal(
            &plan.into(),
            &meal_id,
            from_index as usize,
            to_index as usize,
        )?
        .into())
    }

    /// Copy a meal (fresh ids, configured name suffix) to the end of the plan.
    pub fn duplicate_meal(&self, plan: FfiMealPlan, meal_id: String) -> Result<FfiMealPlan, NutriPlanError> {
        Ok(plan::duplicate_meal(&plan.into(), &meal_id, &self.config.copy_suffix)?.into())
    }

    pub fn add_meal(
        &self,
        plan: FfiMealPlan,
        name: String,
        scheduled_time: String,
    ) -> Result<FfiMealPlan, NutriPlanError> {
        Ok(plan::add_meal(&plan.into(), Meal::new(name, scheduled_time))?.into())
    }

    pub fn remove_meal(&self, plan: FfiMealPlan, meal_id: String) -> FfiMealPlan {
        plan::remove_meal(&plan.into(), &meal_id).into()
    }

    pub fn rename_meal(&self, plan: FfiMealPlan, meal_id: String, name: String) -> Result<FfiMealPlan, NutriPlanError> {
        Ok(plan::update_meal(&plan.into(), &meal_id, MealUpdate::Name(name))?.into())
    }

    /// Content hash of a plan, for memoizing derived views.
    pub fn plan_fingerprint(&self, plan: FfiMealPlan) -> Result<String, NutriPlanError> {
        Ok(fingerprint::plan_fingerprint(&plan.into())?)
    }

    // =========================================================================
    // Shopping List Operations
    // =========================================================================

    /// Categorized shopping list with check marks for a patient.
    pub fn shopping_list(
        &self,
        plan: FfiMealPlan,
        patient_id: String,
    ) -> Result<Vec<FfiShoppingGroup>, NutriPlanError> {
        let list = self.build_list(plan)?;
        let checked = self.checked.lock()?;

        Ok(list
            .groups()
            .iter()
            .map(|(category, items)| FfiShoppingGroup {
                category: category.label().to_string(),
                icon: category.icon().to_string(),
                items: items
                    .iter()
                    .map(|item| FfiShoppingItem {
                        normalized_name: item.normalized_name.clone(),
                        display_name: item.display_name.clone(),
                        quantity_amount: item.quantity_amount,
                        quantity_unit: item.quantity_unit.clone(),
                        checked: checked.is_checked(&patient_id, &item.normalized_name),
                    })
                    .collect(),
            })
            .collect())
    }

    /// Flip a check mark. Returns the new state.
    pub fn toggle_checked(&self, patient_id: String, normalized_name: String) -> Result<bool, NutriPlanError> {
        let mut checked = self.checked.lock()?;
        Ok(checked.toggle(&patient_id, &normalized_name))
    }

    pub fn shopping_progress(
        &self,
        plan: FfiMealPlan,
        patient_id: String,
    ) -> Result<FfiShoppingProgress, NutriPlanError> {
        let list = self.build_list(plan)?;
        let checked = self.checked.lock()?;
        Ok(list.progress(&*checked, &patient_id).into())
    }

    /// Share text for messaging apps.
    pub fn export_shopping_text(&self, plan: FfiMealPlan, title: String) -> Result<String, NutriPlanError> {
        let list = self.build_list(plan)?;
        Ok(export::ShoppingListExport::from_list(&list, &title).to_text())
    }

    pub fn export_shopping_csv(&self, plan: FfiMealPlan, title: String) -> Result<String, NutriPlanError> {
        let list = self.build_list(plan)?;
        Ok(export::ShoppingListExport::from_list(&list, &title).to_csv())
    }

    pub fn export_shopping_json(&self, plan: FfiMealPlan, title: String) -> Result<String, NutriPlanError> {
        let list = self.build_list(plan)?;
        Ok(export::ShoppingListExport::from_list(&list, &title).to_json()?)
    }

    // =========================================================================
    // Draft Operations
    // =========================================================================

    /// Parse a draft plan out of free text and resolve it against the catalog.
    pub fn resolve_draft_text(&self, text: String) -> Result<FfiDraftResolution, NutriPlanError> {
        let draft = draft::parse_draft_plan(&text)?;
        let catalog = self.catalog.lock()?;
        let resolution = draft::resolve_draft(&draft, &catalog, &self.config);
        Ok(FfiDraftResolution {
            plan: resolution.plan.into(),
            unresolved: resolution.unresolved,
        })
    }
}

impl NutriPlanEngine {
    fn build_list(&self, plan: FfiMealPlan) -> Result<ShoppingList, NutriPlanError> {
        let catalog = self.catalog.lock()?;
        Ok(build_shopping_list(&plan.into(), &*catalog))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe food reference.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFoodReference {
    pub id: String,
    pub name: String,
    pub source_tag: String,
    pub nutrients: FfiNutrientTotals,
    pub reference_portion_amount: f64,
    pub reference_portion_unit: String,
}

impl From<FoodReference> for FfiFoodReference {
    fn from(food: FoodReference) -> Self {
        Self {
            nutrients: food.nutrients_per_portion().into(),
            id: food.id,
            name: food.name,
            source_tag: food.source_tag,
            reference_portion_amount: food.reference_portion_amount,
            reference_portion_unit: food.reference_portion_unit,
        }
    }
}

impl From<FfiFoodReference> for FoodReference {
    fn from(food: FfiFoodReference) -> Self {
        FoodReference::new(food.id, food.name, food.source_tag)
            .with_nutrients(food.nutrients.into())
            .with_portion(food.reference_portion_amount, &food.reference_portion_unit)
    }
}

/// FFI-safe nutrient totals.
#[derive(Debug, Clone, Copy, uniffi::Record)]
pub struct FfiNutrientTotals {
    pub energy_kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: f64,
}

impl From<NutrientTotals> for FfiNutrientTotals {
    fn from(totals: NutrientTotals) -> Self {
        Self {
            energy_kcal: totals.energy_kcal,
            protein_g: totals.protein_g,
            carb_g: totals.carb_g,
            fat_g: totals.fat_g,
            fiber_g: totals.fiber_g,
            sodium_mg: totals.sodium_mg,
        }
    }
}

impl From<FfiNutrientTotals> for NutrientTotals {
    fn from(totals: FfiNutrientTotals) -> Self {
        NutrientTotals {
            energy_kcal: totals.energy_kcal,
            protein_g: totals.protein_g,
            carb_g: totals.carb_g,
            fat_g: totals.fat_g,
            fiber_g: totals.fiber_g,
            sodium_mg: totals.sodium_mg,
        }
    }
}

/// FFI-safe food entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFoodEntry {
    pub id: String,
    pub food_reference_id: String,
    pub quantity_amount: f64,
    pub quantity_unit: String,
    pub household_measure: Option<String>,
    pub free_text_name: Option<String>,
}

impl From<FoodEntry> for FfiFoodEntry {
    fn from(entry: FoodEntry) -> Self {
        Self {
            id: entry.id,
            food_reference_id: entry.food_reference_id,
            quantity_amount: entry.quantity_amount,
            quantity_unit: entry.quantity_unit,
            household_measure: entry.household_measure,
            free_text_name: entry.free_text_name,
        }
    }
}

impl From<FfiFoodEntry> for FoodEntry {
    fn from(entry: FfiFoodEntry) -> Self {
        FoodEntry {
            id: entry.id,
            food_reference_id: entry.food_reference_id,
            quantity_amount: entry.quantity_amount,
            quantity_unit: entry.quantity_unit,
            household_measure: entry.household_measure,
            free_text_name: entry.free_text_name,
        }
    }
}

/// FFI-safe meal.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMeal {
    pub id: String,
    pub name: String,
    pub scheduled_time: String,
    pub color_tag: String,
    pub entries: Vec<FfiFoodEntry>,
}

impl From<Meal> for FfiMeal {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            scheduled_time: meal.scheduled_time,
            color_tag: meal.color_tag,
            entries: meal.entries.into_iter().map(|e| e.into()).collect(),
        }
    }
}

impl From<FfiMeal> for Meal {
    fn from(meal: FfiMeal) -> Self {
        Meal {
            id: meal.id,
            name: meal.name,
            scheduled_time: meal.scheduled_time,
            color_tag: meal.color_tag,
            entries: meal.entries.into_iter().map(|e| e.into()).collect(),
        }
    }
}

/// FFI-safe meal plan.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMealPlan {
    pub meals: Vec<FfiMeal>,
}

impl From<MealPlan> for FfiMealPlan {
    fn from(plan: MealPlan) -> Self {
        Self {
            meals: plan.meals.into_iter().map(|m| m.into()).collect(),
        }
    }
}

impl From<FfiMealPlan> for MealPlan {
    fn from(plan: FfiMealPlan) -> Self {
        MealPlan::new(plan.meals.into_iter().map(|m| m.into()).collect())
    }
}

/// FFI-safe daily targets. Unset or non-positive targets are ignored.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDailyTargets {
    pub energy_kcal: Option<f64>,
    pub protein_g: Option<f64>,
    pub carb_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
}

impl From<FfiDailyTargets> for DailyTargets {
    fn from(targets: FfiDailyTargets) -> Self {
        DailyTargets {
            energy_kcal: targets.energy_kcal,
            protein_g: targets.protein_g,
            carb_g: targets.carb_g,
            fat_g: targets.fat_g,
            fiber_g: targets.fiber_g,
            sodium_mg: targets.sodium_mg,
        }
    }
}

/// FFI-safe target progress.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTargetProgress {
    pub nutrient: String,
    pub unit: String,
    pub actual: f64,
    pub target: f64,
    pub percent: f64,
    pub remaining: f64,
}

impl From<models::TargetProgress> for FfiTargetProgress {
    fn from(progress: models::TargetProgress) -> Self {
        Self {
            nutrient: format!("{:?}", progress.nutrient),
            unit: Nutrient::unit(&progress.nutrient).to_string(),
            actual: progress.actual,
            target: progress.target,
            percent: progress.percent,
            remaining: progress.remaining,
        }
    }
}

/// FFI-safe shopping list group.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShoppingGroup {
    pub category: String,
    pub icon: String,
    pub items: Vec<FfiShoppingItem>,
}

/// FFI-safe shopping list item.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShoppingItem {
    pub normalized_name: String,
    pub display_name: String,
    pub quantity_amount: f64,
    pub quantity_unit: String,
    pub checked: bool,
}

/// FFI-safe shopping progress.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShoppingProgress {
    pub checked: u32,
    pub total: u32,
    pub percent: f64,
}

impl From<shopping::ShoppingProgress> for FfiShoppingProgress {
    fn from(progress: shopping::ShoppingProgress) -> Self {
        Self {
            checked: progress.checked as u32,
            total: progress.total as u32,
            percent: progress.percent,
        }
    }
}

/// FFI-safe draft resolution.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDraftResolution {
    pub plan: FfiMealPlan,
    pub unresolved: Vec<String>,
}
