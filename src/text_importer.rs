//! # Text Meal Plan Importer
//!
//! Imports a meal plan from text already extracted from a PDF. The text is a sequence
//! of marker lines (`"Lunes"`, `"Desayuno"`, `"Colación V (opcional)"`) followed by
//! free-text meal descriptions. Description lines under the same day and meal marker
//! are folded into one recipe for that cell.

use crate::id_generator::IdGenerator;
use crate::import_config::ImportConfig;
use crate::import_errors::ImportError;
use crate::meal_model::{Day, ImportedPlan, MealSlot, MealType, Recipe};
use crate::text_extractor::{extract_with_config, RecipeDraft};
use crate::vocabulary::{find_day_marker, find_meal_marker};
use std::collections::HashMap;
use tracing::{debug, info, trace};

/// Lines equal to this marker-like word carry no meal
const OPTIONAL_MARKER: &str = "opcional";

/// Description lines collected for one week cell
#[derive(Debug)]
struct Cell {
    day: Day,
    meal_type: MealType,
    drafts: Vec<RecipeDraft>,
}

/// Import a meal plan from extracted text with the default configuration
pub fn import_text(text: &str, ids: &mut dyn IdGenerator) -> Result<ImportedPlan, ImportError> {
    import_text_with_config(text, ids, &ImportConfig::default())
}

/// Import a meal plan from extracted text
///
/// # Examples
///
/// ```rust
/// use meal_planner::id_generator::SequentialIds;
/// use meal_planner::import_config::ImportConfig;
/// use meal_planner::text_importer::import_text_with_config;
///
/// let text = "Lunes\nDesayuno\n2 pzas de huevo revueltos con jitomate\n";
/// let plan = import_text_with_config(text, &mut SequentialIds::new(), &ImportConfig::default()).unwrap();
///
/// assert_eq!(plan.meals[0].id, "Monday-Breakfast");
/// assert_eq!(plan.recipes[0].name, "Huevo revueltos recipe");
/// ```
pub fn import_text_with_config(
    text: &str,
    ids: &mut dyn IdGenerator,
    config: &ImportConfig,
) -> Result<ImportedPlan, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let cells = collect_cells(text, ids, config);
    let plan = materialize(cells, ids, config);

    if plan.meals.is_empty() {
        return Err(ImportError::NoMeals);
    }

    info!(
        meals = plan.meals.len(),
        recipes = plan.recipes.len(),
        "Text meal plan imported"
    );
    Ok(plan)
}

/// Walk the lines, tracking the current day and meal marker
fn collect_cells(text: &str, ids: &mut dyn IdGenerator, config: &ImportConfig) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::new();
    let mut cell_index: HashMap<(Day, MealType), usize> = HashMap::new();
    let mut current_day: Option<Day> = None;
    let mut current_meal: Option<MealType> = None;

    for (index, line) in text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let lower = line.to_lowercase();

        if let Some(day) = find_day_marker(&lower) {
            trace!(line = index + 1, %day, "Day marker");
            current_day = Some(day);
            continue;
        }
        if let Some(meal_type) = find_meal_marker(&lower) {
            trace!(line = index + 1, %meal_type, "Meal marker");
            current_meal = Some(meal_type);
            continue;
        }

        let (Some(day), Some(meal_type)) = (current_day, current_meal) else {
            trace!(line = index + 1, "Text before any day and meal marker");
            continue;
        };
        if lower == OPTIONAL_MARKER || line.chars().count() <= config.min_description_len {
            debug!(line = index + 1, text = line, "Skipping short line");
            continue;
        }

        let Some(draft) = extract_with_config(line, ids, config) else {
            continue;
        };

        // A cell revisited after another marker keeps folding into the same recipe
        match cell_index.get(&(day, meal_type)) {
            Some(&existing) => cells[existing].drafts.push(draft),
            None => {
                cell_index.insert((day, meal_type), cells.len());
                cells.push(Cell {
                    day,
                    meal_type,
                    drafts: vec![draft],
                });
            }
        }
    }

    cells
}

/// Fold each cell's drafts into one recipe and emit a slot per cell
fn materialize(cells: Vec<Cell>, ids: &mut dyn IdGenerator, config: &ImportConfig) -> ImportedPlan {
    let mut plan = ImportedPlan::default();
    let mut by_key: HashMap<(String, String), usize> = HashMap::new();

    for cell in cells {
        let Some(recipe) = fold_drafts(cell.drafts, cell.meal_type, ids, config) else {
            continue;
        };

        let key = (recipe.name.clone(), recipe.description.clone());
        let index = match by_key.get(&key) {
            Some(&index) => {
                debug!(recipe = %recipe.name, "Reusing recipe with identical description");
                index
            }
            None => {
                by_key.insert(key, plan.recipes.len());
                plan.recipes.push(recipe);
                plan.recipes.len() - 1
            }
        };

        plan.meals.push(
            MealSlot::new(cell.day, cell.meal_type)
                .with_recipe(plan.recipes[index].clone(), Some(config.default_servings)),
        );
    }

    plan
}

fn fold_drafts(
    drafts: Vec<RecipeDraft>,
    meal_type: MealType,
    ids: &mut dyn IdGenerator,
    config: &ImportConfig,
) -> Option<Recipe> {
    let mut drafts = drafts.into_iter();
    let first = drafts.next()?;
    let mut description = first.description;
    let mut ingredients = first.ingredients;

    for draft in drafts {
        description.push(' ');
        description.push_str(&draft.description);
        ingredients.extend(draft.ingredients);
    }

    let mut recipe = config
        .new_recipe(ids.next_id("recipe"), first.name, meal_type, ingredients)
        .with_description(description);
    recipe.instructions = first.instructions;
    Some(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::SequentialIds;
    use crate::meal_model::RecipeCategory;

    fn import(text: &str) -> Result<ImportedPlan, ImportError> {
        import_text(text, &mut SequentialIds::new())
    }

    #[test]
    fn test_markers_set_the_cell() {
        let text = "PLAN SEMANAL\n\
                    Lunes\n\
                    Desayuno\n\
                    2 pzas de huevo con 1 taza de frijoles\n\
                    Comida\n\
                    150 g de pollo asado con ensalada\n";
        let plan = import(text).unwrap();

        let ids: Vec<&str> = plan.meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["Monday-Breakfast", "Monday-Lunch"]);
        assert_eq!(plan.recipes.len(), 2);
        assert_eq!(plan.recipes[0].ingredients.len(), 2);
        assert_eq!(plan.recipes[1].category, RecipeCategory::Lunch);
        assert_eq!(plan.meals[0].servings, Some(1));
    }

    #[test]
    fn test_consecutive_lines_fold_into_one_recipe() {
        let text = "Martes\nCena\n1 taza de arroz blanco cocido\n100 g de pescado a la plancha\n";
        let plan = import(text).unwrap();

        assert_eq!(plan.meals.len(), 1);
        let recipe = &plan.recipes[0];
        assert_eq!(recipe.name, "Arroz blanco cocido recipe");
        assert_eq!(
            recipe.description,
            "1 taza de arroz blanco cocido 100 g de pescado a la plancha"
        );
        assert_eq!(recipe.ingredients.len(), 2);
    }

    #[test]
    fn test_revisited_cell_stays_one_slot() {
        let text = "Lunes\n\
                    Desayuno\n\
                    2 pzas de huevo revueltos\n\
                    Comida\n\
                    150 g de pollo asado\n\
                    Desayuno\n\
                    1 taza de avena cocida\n";
        let plan = import(text).unwrap();

        let ids: Vec<&str> = plan.meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["Monday-Breakfast", "Monday-Lunch"]);

        let breakfast = plan.meals[0].recipe.as_ref().unwrap();
        let names: Vec<&str> = breakfast.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["huevo revueltos", "avena cocida"]);
        assert_eq!(
            breakfast.description,
            "2 pzas de huevo revueltos 1 taza de avena cocida"
        );
    }

    #[test]
    fn test_description_must_exceed_threshold() {
        // Exactly ten characters is still too short
        let text = "Lunes\nCena\n1 pza pera\n";
        assert_eq!("1 pza pera".chars().count(), 10);
        assert_eq!(import(text), Err(ImportError::NoMeals));

        let text = "Lunes\nCena\n1 pza de pera\n";
        assert_eq!(import(text).unwrap().meals.len(), 1);
    }

    #[test]
    fn test_optional_and_short_lines_skipped() {
        let text = "Miércoles\nColación V\nopcional\nfruta\n1 pza de manzana verde picada\n";
        let plan = import(text).unwrap();
        assert_eq!(plan.meals[0].id, "Wednesday-Afternoon Snack");
        assert_eq!(plan.recipes[0].ingredients[0].name, "manzana verde picada");
    }

    #[test]
    fn test_marker_line_with_optional_note() {
        let text = "Jueves\nColación M (opcional)\n30 g de almendras naturales\n";
        let plan = import(text).unwrap();
        assert_eq!(plan.meals[0].meal_type, MealType::MorningSnack);
        assert_eq!(plan.recipes[0].category, RecipeCategory::Snack);
    }

    #[test]
    fn test_identical_meals_share_a_recipe() {
        let text = "Lunes\nCena\nQuesadillas de queso oaxaca\nMartes\nCena\nQuesadillas de queso oaxaca\n";
        let plan = import(text).unwrap();
        assert_eq!(plan.meals.len(), 2);
        assert_eq!(plan.recipes.len(), 1);
        assert_eq!(
            plan.meals[0].recipe.as_ref().unwrap().id,
            plan.meals[1].recipe.as_ref().unwrap().id
        );
    }

    #[test]
    fn test_text_without_cells() {
        assert_eq!(import(""), Err(ImportError::EmptyInput));
        assert_eq!(
            import("Menú de la semana\nPreparar 150 g de pollo con verduras\n"),
            Err(ImportError::NoMeals)
        );
    }
}
