//! End-to-end tests: build a plan through the editor, total it, derive and
//! export the shopping list.

use std::collections::HashMap;

use nutriplan_core::catalog::FoodCatalog;
use nutriplan_core::export::ShoppingListExport;
use nutriplan_core::models::{
    FoodEntry, FoodReference, Meal, MealPlan, NutrientTotals, ShoppingCategory, ShoppingListItem,
};
use nutriplan_core::nutrition::{aggregate_day, aggregate_meal, plan_totals};
use nutriplan_core::plan::{add_food_entry, add_meal, duplicate_meal, remove_food_entry};
use nutriplan_core::shopping::{build_shopping_list, CheckedStateStore, InMemoryCheckedStore};
use nutriplan_core::plan_fingerprint;

fn build_day(ids: [&str; 4]) -> MealPlan {
    let breakfast = Meal::new("Breakfast".into(), "07:00".into());
    let lunch = Meal::new("Lunch".into(), "12:30".into());
    let (breakfast_id, lunch_id) = (breakfast.id.clone(), lunch.id.clone());

    let plan = add_meal(&MealPlan::default(), breakfast).unwrap();
    let plan = add_meal(&plan, lunch).unwrap();
    let plan = add_food_entry(&plan, &breakfast_id, FoodEntry::new(ids[0].into(), 50.0, "g".into())).unwrap();
    let plan = add_food_entry(&plan, &breakfast_id, FoodEntry::new(ids[1].into(), 200.0, "ml".into())).unwrap();
    let plan = add_food_entry(&plan, &lunch_id, FoodEntry::new(ids[2].into(), 150.0, "g".into())).unwrap();
    add_food_entry(&plan, &lunch_id, FoodEntry::new(ids[3].into(), 120.0, "g".into())).unwrap()
}

fn names(items: &[ShoppingListItem]) -> Vec<&str> {
    items.iter().map(|i| i.display_name.as_str()).collect()
}

#[test]
fn test_reference_catalog_day() {
    let catalog = FoodCatalog::with_reference_table().unwrap();
    let plan = build_day(["taco_009", "taco_010", "taco_001", "taco_003"]);

    let totals = plan_totals(&plan, &catalog);
    assert_eq!(totals.meals.len(), 2);
    // 394 (oats) + 35 (milk); 192 (rice) + 198 (chicken)
    assert!((totals.meals[0].totals.energy_kcal - 429.0).abs() < 1e-9);
    assert!((totals.meals[1].totals.energy_kcal - 390.0).abs() < 1e-9);
    assert!((totals.day.energy_kcal - 819.0).abs() < 1e-9);
    assert!((totals.day.protein_g - 58.25).abs() < 1e-9);
    assert_eq!(totals.day.display().energy_kcal, "819");

    let list = build_shopping_list(&plan, &catalog);
    assert_eq!(
        list.categories().collect::<Vec<_>>(),
        vec![ShoppingCategory::Proteins, ShoppingCategory::Dairy, ShoppingCategory::Grains]
    );
    assert_eq!(
        names(list.get(ShoppingCategory::Grains)),
        vec!["Aveia em flocos", "Arroz branco cozido"]
    );
    assert_eq!(names(list.get(ShoppingCategory::Dairy)), vec!["Leite desnatado"]);
    assert_eq!(names(list.get(ShoppingCategory::Proteins)), vec!["Peito de frango grelhado"]);
}

#[test]
fn test_english_catalog_day() {
    let per_100g = |id: &str, name: &str, kcal: f64| {
        (
            id.to_string(),
            FoodReference::new(id.into(), name.into(), "USDA".into()).with_nutrients(NutrientTotals {
                energy_kcal: kcal,
                ..NutrientTotals::ZERO
            }),
        )
    };
    let catalog: HashMap<String, FoodReference> = [
        per_100g("oats", "Oats", 389.0),
        per_100g("milk", "Milk", 42.0),
        per_100g("rice", "Rice", 130.0),
        per_100g("chicken", "Chicken", 165.0),
    ]
    .into_iter()
    .collect();

    let plan = build_day(["oats", "milk", "rice", "chicken"]);
    let day = aggregate_day(&plan, &catalog);
    let expected = 389.0 * 0.5 + 42.0 * 2.0 + 130.0 * 1.5 + 165.0 * 1.2;
    assert!((day.energy_kcal - expected).abs() < 1e-9);

    let list = build_shopping_list(&plan, &catalog);
    assert_eq!(names(list.get(ShoppingCategory::Grains)), vec!["Oats", "Rice"]);
    assert_eq!(names(list.get(ShoppingCategory::Dairy)), vec!["Milk"]);
    assert_eq!(names(list.get(ShoppingCategory::Proteins)), vec!["Chicken"]);
    assert_eq!(list.total_items(), 4);
}

#[test]
fn test_banana_dedup_across_meals() {
    let catalog: HashMap<String, FoodReference> = [
        ("b1", "Banana"),
        ("b2", "banana "),
    ]
    .into_iter()
    .map(|(id, name)| (id.to_string(), FoodReference::new(id.into(), name.into(), "TACO".into())))
    .collect();

    let mut morning = Meal::new("Café".into(), "07:00".into());
    morning.entries.push(FoodEntry::new("b1".into(), 1.0, "unidade".into()));
    let mut afternoon = Meal::new("Lanche".into(), "15:30".into());
    afternoon.entries.push(FoodEntry::new("b2".into(), 2.0, "unidade".into()));
    let plan = MealPlan::new(vec![morning, afternoon]);

    let list = build_shopping_list(&plan, &catalog);
    let fruits = list.get(ShoppingCategory::Fruits);
    assert_eq!(list.total_items(), 1);
    assert_eq!(fruits.len(), 1);
    assert_eq!(fruits[0].normalized_name, "banana");
    assert_eq!(fruits[0].display_name, "Banana");
    assert_eq!(fruits[0].quantity_amount, 1.0);
}

#[test]
fn test_edits_keep_derived_views_consistent() {
    let catalog = FoodCatalog::with_reference_table().unwrap();
    let plan = build_day(["taco_009", "taco_010", "taco_001", "taco_003"]);
    let breakfast_id = plan.meals[0].id.clone();

    let with_copy = duplicate_meal(&plan, &breakfast_id, " (copy)").unwrap();
    assert_eq!(with_copy.meals[2].name, "Breakfast (copy)");
    assert_eq!(
        aggregate_meal(&with_copy.meals[2], &catalog),
        aggregate_meal(&with_copy.meals[0], &catalog)
    );
    // Same ingredients, so the shopping list is unchanged
    assert_eq!(
        build_shopping_list(&with_copy, &catalog),
        build_shopping_list(&plan, &catalog)
    );
    assert_ne!(plan_fingerprint(&plan).unwrap(), plan_fingerprint(&with_copy).unwrap());

    // The copy still has milk, so dropping it from the original keeps it listed
    let milk_id = plan.meals[0].entries[1].id.clone();
    let edited = remove_food_entry(&with_copy, &milk_id);
    assert_eq!(build_shopping_list(&edited, &catalog).total_items(), 4);

    let copy_milk_id = edited.meals[2].entries[1].id.clone();
    let edited = remove_food_entry(&edited, &copy_milk_id);
    let list = build_shopping_list(&edited, &catalog);
    assert_eq!(list.total_items(), 3);
    assert!(list.get(ShoppingCategory::Dairy).is_empty());
}

#[test]
fn test_checked_state_survives_regeneration() {
    let catalog = FoodCatalog::with_reference_table().unwrap();
    let plan = build_day(["taco_009", "taco_010", "taco_001", "taco_003"]);
    let mut store = InMemoryCheckedStore::new();

    let list = build_shopping_list(&plan, &catalog);
    let rice = list.get(ShoppingCategory::Grains)[1].normalized_name.clone();
    assert!(store.toggle("patient-42", &rice));

    // Adding a food rebuilds the list; the mark still applies
    let lunch_id = plan.meals[1].id.clone();
    let plan = add_food_entry(&plan, &lunch_id, FoodEntry::new("taco_014".into(), 80.0, "g".into())).unwrap();
    let list = build_shopping_list(&plan, &catalog);
    let progress = list.progress(&store, "patient-42");
    assert_eq!(progress.checked, 1);
    assert_eq!(progress.total, 5);
    assert!((progress.percent - 20.0).abs() < 1e-9);
}

#[test]
fn test_share_text_export() {
    let catalog = FoodCatalog::with_reference_table().unwrap();
    let plan = build_day(["taco_009", "taco_010", "taco_001", "taco_003"]);
    let list = build_shopping_list(&plan, &catalog);

    let text = ShoppingListExport::from_list(&list, "Semana 1").to_text();
    assert_eq!(
        text,
        "🛒 Semana 1\n\n\
         🍗 Proteins:\n- 120 g Peito de frango grelhado\n\n\
         🥛 Dairy:\n- 200 ml Leite desnatado\n\n\
         🌾 Grains:\n- 50 g Aveia em flocos\n- 150 g Arroz branco cozido\n"
    );
}
