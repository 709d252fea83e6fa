//! # Day and Meal-Type Vocabulary
//!
//! Lookup tables resolving dialect-specific day and meal-type labels (English names,
//! Spanish names with or without accents, and the planner's own slot codes such as
//! `Snack M` / `Snack V`) onto the canonical [`Day`] and [`MealType`] values.

use crate::meal_model::{Day, MealType};

/// Day tokens, lower-case. Marker search in free text walks this list in order.
const DAY_TOKENS: &[(&str, Day)] = &[
    ("monday", Day::Monday),
    ("tuesday", Day::Tuesday),
    ("wednesday", Day::Wednesday),
    ("thursday", Day::Thursday),
    ("friday", Day::Friday),
    ("saturday", Day::Saturday),
    ("sunday", Day::Sunday),
    ("domingo", Day::Sunday),
    ("lunes", Day::Monday),
    ("martes", Day::Tuesday),
    ("miércoles", Day::Wednesday),
    ("miercoles", Day::Wednesday),
    ("jueves", Day::Thursday),
    ("viernes", Day::Friday),
    ("sábado", Day::Saturday),
    ("sabado", Day::Saturday),
];

/// Meal-type tokens, lower-case. Longer, more specific labels come first so that
/// marker search never stops at a shorter label contained in a longer one.
const MEAL_TYPE_TOKENS: &[(&str, MealType)] = &[
    ("morning snack", MealType::MorningSnack),
    ("afternoon snack", MealType::AfternoonSnack),
    ("snack m", MealType::MorningSnack),
    ("snack v", MealType::AfternoonSnack),
    ("colación m", MealType::MorningSnack),
    ("colacion m", MealType::MorningSnack),
    ("colación v", MealType::AfternoonSnack),
    ("colacion v", MealType::AfternoonSnack),
    ("breakfast", MealType::Breakfast),
    ("lunch", MealType::Lunch),
    ("dinner", MealType::Dinner),
    ("desayuno", MealType::Breakfast),
    ("comida", MealType::Lunch),
    ("cena", MealType::Dinner),
];

/// Resolve a whole cell value to a day (`"Lunes"`, `"monday"`, `"Miércoles"`)
pub fn resolve_day(raw: &str) -> Option<Day> {
    let key = raw.trim().to_lowercase();
    DAY_TOKENS
        .iter()
        .find(|(token, _)| *token == key)
        .map(|(_, day)| *day)
}

/// Resolve a whole cell value to a meal type (`"Desayuno"`, `"Snack M"`, `"Dinner"`)
pub fn resolve_meal_type(raw: &str) -> Option<MealType> {
    let key = raw.trim().to_lowercase();
    MEAL_TYPE_TOKENS
        .iter()
        .find(|(token, _)| *token == key)
        .map(|(_, meal_type)| *meal_type)
}

/// Find a day name anywhere in an already lower-cased line of free text
pub fn find_day_marker(lower_line: &str) -> Option<Day> {
    DAY_TOKENS
        .iter()
        .find(|(token, _)| lower_line.contains(token))
        .map(|(_, day)| *day)
}

/// Find a meal-type label anywhere in an already lower-cased line of free text
pub fn find_meal_marker(lower_line: &str) -> Option<MealType> {
    MEAL_TYPE_TOKENS
        .iter()
        .find(|(token, _)| lower_line.contains(token))
        .map(|(_, meal_type)| *meal_type)
}
