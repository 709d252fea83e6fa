//! # Shopping List Tests
//!
//! Aggregation laws of the shopping list over imported and hand-built weeks.

use meal_planner::csv_importer::import_csv;
use meal_planner::id_generator::SequentialIds;
use meal_planner::meal_model::{Day, GroceryCategory, Ingredient, MealSlot, MealType, Recipe};
use meal_planner::shopping_list::{category_priority, compare_names, generate_shopping_list};
use std::cmp::Ordering;
use std::collections::HashMap;

fn week() -> Vec<MealSlot> {
    let chilaquiles = Recipe::new("r1", "Chilaquiles")
        .with_servings(2)
        .with_ingredients(vec![
            Ingredient::new("i1", "tortilla", 6.0, "piece", GroceryCategory::Bakery),
            Ingredient::new("i2", "salsa verde", 1.0, "cup", GroceryCategory::Pantry),
            Ingredient::new("i3", "queso fresco", 50.0, "g", GroceryCategory::DairyAndEggs),
        ]);
    let ensalada = Recipe::new("r2", "Ensalada")
        .with_servings(1)
        .with_ingredients(vec![
            Ingredient::new("i4", "lechuga", 0.5, "piece", GroceryCategory::Produce),
            Ingredient::new("i5", "Aguacate", 1.0, "piece", GroceryCategory::Produce),
            Ingredient::new("i6", "atún", 1.0, "can", GroceryCategory::MeatAndSeafood),
        ]);
    let pozole = Recipe::new("r3", "Pozole")
        .with_servings(4)
        .with_ingredients(vec![
            Ingredient::new("i7", "maíz pozolero", 500.0, "g", GroceryCategory::Other),
            Ingredient::new("i8", "carne de cerdo", 400.0, "g", GroceryCategory::MeatAndSeafood),
            Ingredient::new("i9", "tortilla", 4.0, "piece", GroceryCategory::Bakery),
        ]);

    vec![
        MealSlot::new(Day::Monday, MealType::Breakfast).with_recipe(chilaquiles.clone(), Some(1)),
        MealSlot::new(Day::Monday, MealType::Lunch).with_recipe(ensalada.clone(), None),
        MealSlot::new(Day::Tuesday, MealType::Dinner).with_recipe(pozole, Some(2)),
        MealSlot::new(Day::Thursday, MealType::Breakfast).with_recipe(chilaquiles, Some(4)),
        MealSlot::new(Day::Friday, MealType::Lunch).with_recipe(ensalada, Some(3)),
        MealSlot::new(Day::Sunday, MealType::Dinner),
    ]
}

fn double_servings(meals: &[MealSlot]) -> Vec<MealSlot> {
    meals
        .iter()
        .map(|slot| {
            let mut slot = slot.clone();
            if slot.recipe.is_some() {
                slot.servings = slot.effective_servings().map(|s| s * 2);
            }
            slot
        })
        .collect()
}

#[test]
fn test_amounts_equal_sum_of_scaled_amounts() {
    let meals = week();
    let list = generate_shopping_list(&meals);

    let mut expected: HashMap<(String, String), f64> = HashMap::new();
    for slot in &meals {
        let Some(recipe) = &slot.recipe else { continue };
        let ratio = f64::from(slot.effective_servings().unwrap()) / f64::from(recipe.servings);
        for ingredient in &recipe.ingredients {
            *expected
                .entry((ingredient.name.clone(), ingredient.unit.clone()))
                .or_default() += ingredient.amount * ratio;
        }
    }

    assert_eq!(list.len(), expected.len());
    for item in &list {
        let want = expected[&(item.name.clone(), item.unit.clone())];
        assert!((item.amount - want).abs() < 1e-9, "{}: {} != {}", item.name, item.amount, want);
    }

    let tortilla = list.iter().find(|i| i.name == "tortilla").unwrap();
    // 6 * 1/2 + 4 * 2/4 + 6 * 4/2
    assert_eq!(tortilla.amount, 17.0);
    assert_eq!(tortilla.recipe_names, vec!["Chilaquiles", "Pozole"]);
}

#[test]
fn test_doubling_servings_doubles_amounts() {
    let meals = week();
    let list = generate_shopping_list(&meals);
    let doubled = generate_shopping_list(&double_servings(&meals));

    assert_eq!(list.len(), doubled.len());
    for (single, double) in list.iter().zip(&doubled) {
        assert_eq!(single.name, double.name);
        assert!((double.amount - 2.0 * single.amount).abs() < 1e-9);
    }
}

#[test]
fn test_category_then_name_order() {
    let list = generate_shopping_list(&week());

    for pair in list.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (pa, pb) = (category_priority(a.category), category_priority(b.category));
        assert!(pa <= pb, "{:?} listed before {:?}", a.category, b.category);
        if pa == pb {
            assert_ne!(compare_names(&a.name, &b.name), Ordering::Greater);
        }
    }

    let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Aguacate",
            "lechuga",
            "queso fresco",
            "atún",
            "carne de cerdo",
            "tortilla",
            "salsa verde",
            "maíz pozolero",
        ]
    );
}

#[test]
fn test_imported_week_list() {
    let csv = "Día,Tiempo,Ingrediente,Porción\n\
               Lunes,Desayuno,Huevo,2pza\n\
               Martes,Desayuno,Huevo,2pza\n\
               Martes,Desayuno,Leche,1 taza\n\
               Martes,Comida,Leche,250ml\n";
    let plan = import_csv(csv, &mut SequentialIds::new()).unwrap();
    let list = generate_shopping_list(&plan.meals);

    let summary: Vec<(&str, f64, &str)> = list
        .iter()
        .map(|i| (i.name.as_str(), i.amount, i.unit.as_str()))
        .collect();
    // Same name with different units stays separate
    assert_eq!(
        summary,
        vec![("Huevo", 4.0, "piece"), ("Leche", 1.0, "cup"), ("Leche", 250.0, "ml")]
    );
}
