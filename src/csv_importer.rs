//! # CSV Meal Plan Importer
//!
//! Turns a tabular meal plan export into meal slots and recipes.
//!
//! ## Pipeline
//!
//! 1. Drop blank lines and resolve the header through the first matching
//!    [`ColumnDialect`](crate::column_dialects::ColumnDialect)
//! 2. Resolve each data row's day and meal type, parse its portion and categorize its
//!    ingredient; rows that cannot be resolved are skipped and logged
//! 3. Group ingredients per `(day, meal type)` cell in canonical week order
//! 4. Resolve one recipe per cell: reuse by declared recipe id, then by declared recipe
//!    name, otherwise create a new one
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::csv_importer::import_csv;
//! use meal_planner::id_generator::SequentialIds;
//! use meal_planner::meal_model::{Day, MealType};
//!
//! let csv = "Día,Tiempo,Ingrediente,Porción\nLunes,Desayuno,Huevo,2pza\n";
//! let plan = import_csv(csv, &mut SequentialIds::new()).unwrap();
//!
//! assert_eq!(plan.meals.len(), 1);
//! assert_eq!(plan.meals[0].day, Day::Monday);
//! assert_eq!(plan.meals[0].meal_type, MealType::Breakfast);
//! assert_eq!(plan.recipes[0].ingredients[0].unit, "piece");
//! ```

use crate::categorizer::categorize;
use crate::column_dialects::{default_dialects, ColumnDialect, ColumnMap, MIXED};
use crate::id_generator::IdGenerator;
use crate::import_config::ImportConfig;
use crate::import_errors::ImportError;
use crate::meal_model::{Day, ImportedPlan, Ingredient, MealSlot, MealType, Recipe};
use crate::portion_parser::{is_blank_portion, parse_portion};
use crate::row_parser::parse_row;
use crate::text_extractor::capitalize_first;
use crate::vocabulary::{resolve_day, resolve_meal_type};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 4] = ["day", "meal type", "ingredient", "portion"];

/// Ingredients collected for one week cell, with the recipe declared by its first row
#[derive(Debug, Default)]
struct MealGroup {
    ingredients: Vec<Ingredient>,
    recipe_id: Option<String>,
    recipe_name: Option<String>,
}

/// CSV importer with an ordered list of header dialects
pub struct CsvImporter {
    dialects: Vec<Box<dyn ColumnDialect>>,
    config: ImportConfig,
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new(ImportConfig::default())
    }
}

impl CsvImporter {
    /// Importer trying the default Spanish, English and mixed dialects
    pub fn new(config: ImportConfig) -> Self {
        Self::with_dialects(default_dialects(), config)
    }

    /// Importer trying `dialects` in order
    pub fn with_dialects(dialects: Vec<Box<dyn ColumnDialect>>, config: ImportConfig) -> Self {
        Self { dialects, config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import a CSV meal plan export
    ///
    /// Fails when the input has fewer than `min_lines` non-blank lines, when no dialect
    /// recognizes the header, or when no row produced a meal.
    pub fn import(
        &self,
        text: &str,
        ids: &mut dyn IdGenerator,
    ) -> Result<ImportedPlan, ImportError> {
        if text.trim().is_empty() {
            return Err(ImportError::EmptyInput);
        }

        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() < self.config.min_lines {
            return Err(ImportError::TooFewLines { found: lines.len() });
        }

        let header = parse_row(lines[0]);
        let (dialect, columns) = self.resolve_header(&header)?;
        debug!(dialect, columns = ?columns, "CSV header resolved");

        let groups = self.group_rows(&lines[1..], &columns, ids);
        let plan = self.materialize(groups, ids);

        if plan.meals.is_empty() {
            return Err(ImportError::NoMeals);
        }

        info!(
            dialect,
            meals = plan.meals.len(),
            recipes = plan.recipes.len(),
            "CSV meal plan imported"
        );
        Ok(plan)
    }

    fn resolve_header(&self, header: &[String]) -> Result<(&'static str, ColumnMap), ImportError> {
        self.dialects
            .iter()
            .find_map(|dialect| {
                dialect
                    .resolve_columns(header)
                    .map(|columns| (dialect.name(), columns))
            })
            .ok_or_else(|| {
                let mut missing = MIXED.missing_columns(header);
                if missing.is_empty() {
                    missing = REQUIRED_COLUMNS.to_vec();
                }
                ImportError::MissingColumns { missing }
            })
    }

    fn group_rows(
        &self,
        rows: &[&str],
        columns: &ColumnMap,
        ids: &mut dyn IdGenerator,
    ) -> BTreeMap<(Day, MealType), MealGroup> {
        let mut groups: BTreeMap<(Day, MealType), MealGroup> = BTreeMap::new();

        for (index, line) in rows.iter().enumerate() {
            // The header is row 1
            let row_number = index + 2;
            let row = parse_row(line);
            let cell = |column: usize| row.get(column).map(String::as_str).unwrap_or("");
            let optional_cell = |column: Option<usize>| {
                column
                    .map(cell)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
            };

            let Some(day) = resolve_day(cell(columns.day)) else {
                debug!(row = row_number, value = cell(columns.day), "Skipping row: unknown day");
                continue;
            };
            let Some(meal_type) = resolve_meal_type(cell(columns.meal_type)) else {
                debug!(
                    row = row_number,
                    value = cell(columns.meal_type),
                    "Skipping row: unknown meal type"
                );
                continue;
            };
            let name = cell(columns.ingredient);
            if name.is_empty() {
                debug!(row = row_number, "Skipping row: missing ingredient");
                continue;
            }
            let portion_text = cell(columns.portion);
            if is_blank_portion(portion_text) {
                debug!(row = row_number, ingredient = name, "Skipping row: blank portion");
                continue;
            }

            let portion = parse_portion(portion_text);
            let ingredient = Ingredient::new(
                ids.next_id("ingredient"),
                name,
                portion.amount,
                portion.unit,
                categorize(name),
            );

            groups
                .entry((day, meal_type))
                .or_insert_with(|| MealGroup {
                    ingredients: Vec::new(),
                    recipe_id: optional_cell(columns.recipe_id),
                    recipe_name: optional_cell(columns.recipe_name),
                })
                .ingredients
                .push(ingredient);
        }

        groups
    }

    fn materialize(
        &self,
        groups: BTreeMap<(Day, MealType), MealGroup>,
        ids: &mut dyn IdGenerator,
    ) -> ImportedPlan {
        let mut plan = ImportedPlan::default();
        let mut by_id: HashMap<String, usize> = HashMap::new();
        let declared: HashSet<String> = groups
            .values()
            .filter_map(|group| group.recipe_id.clone())
            .collect();

        for ((day, meal_type), group) in groups {
            if group.ingredients.is_empty() {
                continue;
            }

            let existing = group
                .recipe_id
                .as_ref()
                .and_then(|id| by_id.get(id).copied())
                .or_else(|| {
                    let name = group.recipe_name.as_ref()?;
                    plan.recipes.iter().position(|recipe| &recipe.name == name)
                });

            let index = match existing {
                Some(index) => {
                    debug!(
                        recipe = %plan.recipes[index].name,
                        slot = %MealSlot::slot_id(day, meal_type),
                        "Reusing recipe"
                    );
                    index
                }
                None => {
                    let id = match group.recipe_id {
                        Some(id) => id,
                        None => fresh_recipe_id(&declared, &by_id, ids),
                    };
                    let recipe = self.new_recipe(id, group.recipe_name, meal_type, group.ingredients);
                    debug!(recipe = %recipe.name, id = %recipe.id, "Created recipe");
                    by_id.insert(recipe.id.clone(), plan.recipes.len());
                    plan.recipes.push(recipe);
                    plan.recipes.len() - 1
                }
            };

            plan.meals.push(
                MealSlot::new(day, meal_type)
                    .with_recipe(plan.recipes[index].clone(), Some(self.config.default_servings)),
            );
        }

        plan
    }

    fn new_recipe(
        &self,
        id: String,
        declared_name: Option<String>,
        meal_type: MealType,
        ingredients: Vec<Ingredient>,
    ) -> Recipe {
        let name = declared_name.unwrap_or_else(|| {
            let names: Vec<&str> = ingredients
                .iter()
                .take(self.config.name_ingredient_count)
                .map(|ingredient| ingredient.name.as_str())
                .collect();
            capitalize_first(&names.join(", "))
        });
        let description = format!("Imported meal with {} ingredients", ingredients.len());

        self.config
            .new_recipe(id, name, meal_type, ingredients)
            .with_description(description)
    }
}

/// Generated recipe id that collides neither with a recipe already built nor with any
/// id declared anywhere in the file
fn fresh_recipe_id(
    declared: &HashSet<String>,
    taken: &HashMap<String, usize>,
    ids: &mut dyn IdGenerator,
) -> String {
    loop {
        let id = ids.next_id("recipe");
        if !declared.contains(&id) && !taken.contains_key(&id) {
            return id;
        }
    }
}

/// Import a CSV meal plan with the default dialects and configuration
pub fn import_csv(text: &str, ids: &mut dyn IdGenerator) -> Result<ImportedPlan, ImportError> {
    CsvImporter::default().import(text, ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::SequentialIds;
    use crate::meal_model::GroceryCategory;

    fn import(text: &str) -> Result<ImportedPlan, ImportError> {
        import_csv(text, &mut SequentialIds::new())
    }

    #[test]
    fn test_single_row() {
        let plan = import("Día,Tiempo,Ingrediente,Porción\nLunes,Desayuno,Huevo,2pza").unwrap();

        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.recipes.len(), 1);
        let slot = &plan.meals[0];
        assert_eq!(slot.id, "Monday-Breakfast");
        assert_eq!(slot.servings, Some(1));

        let ingredient = &plan.recipes[0].ingredients[0];
        assert_eq!(ingredient.name, "Huevo");
        assert_eq!(ingredient.amount, 2.0);
        assert_eq!(ingredient.unit, "piece");
        assert_eq!(ingredient.category, GroceryCategory::DairyAndEggs);
    }

    #[test]
    fn test_rows_grouped_per_cell() {
        let csv = "Día,Tiempo,Ingrediente,Porción\n\
                   Lunes,Comida,Pollo,150g\n\
                   Lunes,Comida,Arroz,1/2tza\n\
                   Lunes,Comida,Tomate,1\n\
                   Lunes,Comida,Cebolla,0.5\n";
        let plan = import(csv).unwrap();

        assert_eq!(plan.meals.len(), 1);
        let recipe = &plan.recipes[0];
        assert_eq!(recipe.ingredients.len(), 4);
        assert_eq!(recipe.name, "Pollo, Arroz, Tomate");
        assert_eq!(recipe.description, "Imported meal with 4 ingredients");
    }

    #[test]
    fn test_slots_in_week_order() {
        let csv = "Day,MealType,Ingredient,Portion\n\
                   Wednesday,Dinner,tortilla,2\n\
                   Monday,Snack V,manzana,1\n\
                   Monday,Breakfast,avena,1/2 taza\n";
        let plan = import(csv).unwrap();
        let ids: Vec<&str> = plan.meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Monday-Breakfast", "Monday-Afternoon Snack", "Wednesday-Dinner"]
        );
    }

    #[test]
    fn test_unresolvable_rows_skipped() {
        let csv = "Día,Tiempo,Ingrediente,Porción\n\
                   Feriado,Desayuno,Huevo,2\n\
                   Lunes,Brunch,Huevo,2\n\
                   Lunes,Desayuno,,2\n\
                   Lunes,Desayuno,Leche,nan\n\
                   Lunes,Desayuno,Pan,1\n";
        let plan = import(csv).unwrap();
        assert_eq!(plan.recipes[0].ingredients.len(), 1);
        assert_eq!(plan.recipes[0].ingredients[0].name, "Pan");
    }

    #[test]
    fn test_recipe_reused_by_id() {
        let csv = "RecipeId,RecipeName,Day,MealType,Ingredient,Portion\n\
                   r-7,Chilaquiles,Monday,Breakfast,tortilla,3\n\
                   r-7,Chilaquiles,Tuesday,Breakfast,tortilla,3\n";
        let plan = import(csv).unwrap();

        assert_eq!(plan.meals.len(), 2);
        assert_eq!(plan.recipes.len(), 1);
        assert_eq!(plan.recipes[0].id, "r-7");
        assert_eq!(plan.meals[1].recipe.as_ref().unwrap().id, "r-7");
    }

    #[test]
    fn test_recipe_reused_by_name() {
        let csv = "Day,MealType,Ingredient,Portion,RecipeName\n\
                   Monday,Lunch,frijoles,1 taza,Frijoles charros\n\
                   Friday,Lunch,frijoles,2 tazas,Frijoles charros\n";
        let plan = import(csv).unwrap();

        assert_eq!(plan.recipes.len(), 1);
        // First occurrence wins
        assert_eq!(plan.recipes[0].ingredients[0].amount, 1.0);
        assert_eq!(plan.meals[1].recipe.as_ref().unwrap().ingredients[0].amount, 1.0);
    }

    #[test]
    fn test_declared_id_without_name() {
        let csv = "RecipeId,Day,MealType,Ingredient,Portion\nabc,Monday,Dinner,pescado,200g\n";
        let plan = import(csv).unwrap();
        assert_eq!(plan.recipes[0].id, "abc");
        assert_eq!(plan.recipes[0].name, "Pescado");
    }

    #[test]
    fn test_format_errors() {
        assert_eq!(import("   \n"), Err(ImportError::EmptyInput));
        assert_eq!(
            import("Día,Tiempo,Ingrediente,Porción\n\n"),
            Err(ImportError::TooFewLines { found: 1 })
        );
        assert_eq!(
            import("Día,Tiempo,Cantidad\nLunes,Desayuno,2\n"),
            Err(ImportError::MissingColumns {
                missing: vec!["ingredient", "portion"]
            })
        );
        assert_eq!(
            import("Día,Tiempo,Ingrediente,Porción\nFeriado,Desayuno,Huevo,2\n"),
            Err(ImportError::NoMeals)
        );
    }

    #[test]
    fn test_ids_are_deterministic() {
        let plan = import("Día,Tiempo,Ingrediente,Porción\nLunes,Desayuno,Huevo,2pza").unwrap();
        assert_eq!(plan.recipes[0].ingredients[0].id, "ingredient-1");
        assert_eq!(plan.recipes[0].id, "recipe-2");
    }

    #[test]
    fn test_generated_id_skips_declared_ids() {
        let csv = "RecipeId,Day,MealType,Ingredient,Portion\n\
                   recipe-3,Monday,Dinner,pescado,200g\n\
                   ,Tuesday,Dinner,arroz,1 taza\n";
        let plan = import(csv).unwrap();
        let ids: Vec<&str> = plan.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["recipe-3", "recipe-4"]);
    }

    #[test]
    fn test_generated_id_skips_id_declared_later_in_week() {
        let csv = "RecipeId,Day,MealType,Ingredient,Portion\n\
                   ,Monday,Dinner,pescado,200g\n\
                   recipe-3,Tuesday,Dinner,arroz,1 taza\n";
        let plan = import(csv).unwrap();

        let ids: Vec<&str> = plan.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["recipe-4", "recipe-3"]);

        let tuesday = plan.meals[1].recipe.as_ref().unwrap();
        assert_eq!(plan.meals[1].id, "Tuesday-Dinner");
        assert_eq!(tuesday.ingredients[0].name, "arroz");
    }
}
