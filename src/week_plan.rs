//! # Week Grid
//!
//! Helpers over the fixed 7x5 grid of meal slots. Every function edits cells in place
//! by slot id and leaves the grid shape untouched.

use crate::meal_model::{Day, MealSlot, MealType, Recipe};
use log::debug;

/// The 35 empty slots of a week, day-major in canonical order
pub fn empty_week() -> Vec<MealSlot> {
    Day::ALL
        .iter()
        .flat_map(|day| MealType::ALL.iter().map(move |meal_type| MealSlot::new(*day, *meal_type)))
        .collect()
}

/// Overwrite the cells of `week` with the imported `meals` that share their slot id
///
/// Returns how many cells were replaced.
pub fn apply_meals(week: &mut [MealSlot], meals: &[MealSlot]) -> usize {
    let mut applied = 0;
    for meal in meals {
        if let Some(cell) = week.iter_mut().find(|cell| cell.id == meal.id) {
            *cell = meal.clone();
            applied += 1;
        } else {
            debug!("No cell for imported slot '{}'", meal.id);
        }
    }
    applied
}

/// Put `recipe` in a cell, cooked for the recipe's own servings
pub fn assign_recipe(week: &mut [MealSlot], slot_id: &str, recipe: Recipe) -> bool {
    match week.iter_mut().find(|cell| cell.id == slot_id) {
        Some(cell) => {
            cell.servings = Some(recipe.base_servings());
            cell.recipe = Some(recipe);
            true
        }
        None => false,
    }
}

/// Empty a cell
pub fn clear_slot(week: &mut [MealSlot], slot_id: &str) -> bool {
    match week.iter_mut().find(|cell| cell.id == slot_id) {
        Some(cell) => {
            cell.recipe = None;
            cell.servings = None;
            true
        }
        None => false,
    }
}

/// Change the servings of a cell, never below one
pub fn set_servings(week: &mut [MealSlot], slot_id: &str, servings: u32) -> bool {
    match week.iter_mut().find(|cell| cell.id == slot_id) {
        Some(cell) => {
            cell.servings = Some(servings.max(1));
            true
        }
        None => false,
    }
}

/// Replace every assigned copy of an edited recipe, matched by id
pub fn replace_recipe(week: &mut [MealSlot], recipe: &Recipe) -> usize {
    let mut replaced = 0;
    for cell in week.iter_mut() {
        if cell.recipe.as_ref().is_some_and(|assigned| assigned.id == recipe.id) {
            cell.recipe = Some(recipe.clone());
            replaced += 1;
        }
    }
    replaced
}

/// Clear every cell holding the recipe with `recipe_id`
pub fn remove_recipe(week: &mut [MealSlot], recipe_id: &str) -> usize {
    let mut removed = 0;
    for cell in week.iter_mut() {
        if cell.recipe.as_ref().is_some_and(|assigned| assigned.id == recipe_id) {
            cell.recipe = None;
            cell.servings = None;
            removed += 1;
        }
    }
    removed
}
