//! # Nutrition Totals
//!
//! Sums recipe nutrition over a week of meal slots. A recipe's nutrition is expressed
//! for its base servings and is scaled by the same serving ratio the shopping list uses.

use crate::meal_model::{Day, MealSlot, Nutrition};
use std::collections::BTreeMap;

/// Scaled nutrition of one slot, `None` when the slot is empty
pub fn slot_nutrition(slot: &MealSlot) -> Option<Nutrition> {
    let recipe = slot.recipe.as_ref()?;
    let ratio = slot.serving_ratio()?;
    Some(recipe.nutrition.scaled(ratio))
}

/// Nutrition of every assigned slot added together
pub fn total_nutrition(meals: &[MealSlot]) -> Nutrition {
    let mut total = Nutrition::default();
    for nutrition in meals.iter().filter_map(slot_nutrition) {
        total += nutrition;
    }
    total
}

/// Totals per day, in week order; days without an assigned slot are absent
pub fn nutrition_by_day(meals: &[MealSlot]) -> BTreeMap<Day, Nutrition> {
    let mut by_day: BTreeMap<Day, Nutrition> = BTreeMap::new();
    for slot in meals {
        if let Some(nutrition) = slot_nutrition(slot) {
            *by_day.entry(slot.day).or_default() += nutrition;
        }
    }
    by_day
}
