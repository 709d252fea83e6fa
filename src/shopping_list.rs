//! # Shopping List Aggregator
//!
//! Merges the ingredients of every assigned meal slot of a week into one shopping list.
//! Each slot's ingredients are scaled by its serving ratio, then summed per
//! `(name, unit)` pair. The list is ordered by aisle and then by name, ignoring case
//! and accents so that `"Árbol"` sorts next to `"arroz"`.
//!
//! The aggregator is a pure function: regenerating the list returns every item with
//! `completed = false`.

use crate::meal_model::{GroceryCategory, MealSlot, ShoppingListItem};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Aisle order of the shopping list
const CATEGORY_ORDER: [GroceryCategory; 8] = [
    GroceryCategory::Produce,
    GroceryCategory::DairyAndEggs,
    GroceryCategory::MeatAndSeafood,
    GroceryCategory::Bakery,
    GroceryCategory::Frozen,
    GroceryCategory::Pantry,
    GroceryCategory::Beverages,
    GroceryCategory::Other,
];

/// Position of `category` in the shopping list, lower first
pub fn category_priority(category: GroceryCategory) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_ORDER.len())
}

/// Lower-cased `name` with combining diacritical marks removed
///
/// # Examples
///
/// ```rust
/// use meal_planner::shopping_list::fold_name;
///
/// assert_eq!(fold_name("Atún"), "atun");
/// assert_eq!(fold_name("Piña"), "pina");
/// ```
pub fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Total order on ingredient names: accent- and case-insensitive first, then
/// case-insensitive, then exact
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Build the shopping list for a week of meal slots
///
/// # Examples
///
/// ```rust
/// use meal_planner::meal_model::{Day, GroceryCategory, Ingredient, MealSlot, MealType, Recipe};
/// use meal_planner::shopping_list::generate_shopping_list;
///
/// let recipe = Recipe::new("r1", "Arroz")
///     .with_servings(2)
///     .with_ingredients(vec![Ingredient::new("i1", "arroz", 1.0, "cup", GroceryCategory::Pantry)]);
/// let meals = vec![
///     MealSlot::new(Day::Monday, MealType::Lunch).with_recipe(recipe.clone(), Some(4)),
///     MealSlot::new(Day::Tuesday, MealType::Lunch).with_recipe(recipe, None),
/// ];
///
/// let list = generate_shopping_list(&meals);
/// assert_eq!(list.len(), 1);
/// assert_eq!(list[0].amount, 3.0);
/// ```
pub fn generate_shopping_list(meals: &[MealSlot]) -> Vec<ShoppingListItem> {
    let mut items: Vec<ShoppingListItem> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for slot in meals {
        let (Some(recipe), Some(ratio)) = (slot.recipe.as_ref(), slot.serving_ratio()) else {
            continue;
        };

        for ingredient in &recipe.ingredients {
            let amount = ingredient.amount * ratio;
            let key = (ingredient.name.clone(), ingredient.unit.clone());

            match index.get(&key) {
                Some(&position) => {
                    let item = &mut items[position];
                    item.amount += amount;
                    if !item.recipe_names.contains(&recipe.name) {
                        item.recipe_names.push(recipe.name.clone());
                    }
                }
                None => {
                    index.insert(key, items.len());
                    items.push(ShoppingListItem {
                        id: ingredient.id.clone(),
                        name: ingredient.name.clone(),
                        amount,
                        unit: ingredient.unit.clone(),
                        category: ingredient.category,
                        completed: false,
                        recipe_names: vec![recipe.name.clone()],
                    });
                }
            }
        }
    }

    items.sort_by(|a, b| {
        category_priority(a.category)
            .cmp(&category_priority(b.category))
            .then_with(|| compare_names(&a.name, &b.name))
    });

    debug!(
        slots = meals.len(),
        items = items.len(),
        "Shopping list generated"
    );
    items
}
