//! # Export Module
//!
//! Plain-text renderings of a shopping list and of a week of meals.
//!
//! - [`shopping_list_text`]: one check-list line per item
//! - [`shopping_list_csv`]: one CSV record per item, grouped by aisle
//! - [`meal_plan_csv`]: the week as a normalized `Día,Tiempo,Ingrediente,Porción`
//!   export that [`import_csv`](crate::csv_importer::import_csv) reads back

use crate::meal_model::{Day, MealSlot, MealType, ShoppingListItem};
use crate::row_parser::quote_field;

const SHOPPING_LIST_HEADER: &str = "Category,Item,Amount,Unit,Recipes,Completed";
const MEAL_PLAN_HEADER: &str = "Día,Tiempo,Ingrediente,Porción";

/// Amount with at most two decimals and no trailing zeros
///
/// # Examples
///
/// ```rust
/// use meal_planner::export::format_amount;
///
/// assert_eq!(format_amount(150.0), "150");
/// assert_eq!(format_amount(0.25), "0.25");
/// assert_eq!(format_amount(1.5), "1.5");
/// assert_eq!(format_amount(1.0 / 3.0), "0.33");
/// ```
pub fn format_amount(amount: f64) -> String {
    let text = format!("{:.2}", amount);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Check-list rendering, `"○ 2 piece Huevo"` or `"✓ ..."` once completed
pub fn shopping_list_text(items: &[ShoppingListItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{} {} {} {}",
                if item.completed { '✓' } else { '○' },
                format_amount(item.amount),
                item.unit,
                item.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV rendering with a header row; recipe names are joined with `"; "`
pub fn shopping_list_csv(items: &[ShoppingListItem]) -> String {
    let mut lines = vec![SHOPPING_LIST_HEADER.to_string()];
    lines.extend(items.iter().map(|item| {
        [
            item.category.as_str().to_string(),
            item.name.clone(),
            format_amount(item.amount),
            item.unit.clone(),
            item.recipe_names.join("; "),
            item.completed.to_string(),
        ]
        .iter()
        .map(|field| quote_field(field))
        .collect::<Vec<_>>()
        .join(",")
    }));
    lines.join("\n")
}

/// Slot code used for a meal type in normalized exports
fn meal_code(meal_type: MealType) -> &'static str {
    match meal_type {
        MealType::MorningSnack => "Snack M",
        MealType::AfternoonSnack => "Snack V",
        other => other.as_str(),
    }
}

/// Normalized CSV export of a week, one row per scaled ingredient
///
/// Rows follow the canonical week order. Ingredients whose scaled amount is zero are
/// written with a `nan` portion.
pub fn meal_plan_csv(meals: &[MealSlot]) -> String {
    let mut lines = vec![MEAL_PLAN_HEADER.to_string()];

    for day in Day::ALL {
        for meal_type in MealType::ALL {
            for slot in meals.iter().filter(|m| m.day == day && m.meal_type == meal_type) {
                let (Some(recipe), Some(ratio)) = (slot.recipe.as_ref(), slot.serving_ratio()) else {
                    continue;
                };
                for ingredient in &recipe.ingredients {
                    let amount = ingredient.amount * ratio;
                    let portion = if amount > 0.0 {
                        format!("{}{}", format_amount(amount), ingredient.unit)
                    } else {
                        "nan".to_string()
                    };
                    lines.push(
                        [day.as_str(), meal_code(meal_type), ingredient.name.as_str(), portion.as_str()]
                            .iter()
                            .map(|field| quote_field(field))
                            .collect::<Vec<_>>()
                            .join(","),
                    );
                }
            }
        }
    }

    lines.join("\n")
}
