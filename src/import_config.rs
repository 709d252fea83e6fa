//! # Import Configuration Module
//!
//! Thresholds and recipe defaults used by the CSV and text importers.

use crate::meal_model::{Ingredient, MealType, Recipe};

// Constants for import configuration
pub const MIN_LINES: usize = 2;
pub const MIN_EXTRACT_LEN: usize = 5;
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const NAME_INGREDIENT_COUNT: usize = 3;
pub const DEFAULT_COOK_TIME: u32 = 30; // minutes
pub const DEFAULT_CUISINE: &str = "Mexican";
pub const DEFAULT_SERVINGS: u32 = 1;

/// Boilerplate steps given to recipes whose source carries no instructions
pub const DEFAULT_INSTRUCTIONS: [&str; 3] = [
    "Prepare all ingredients as listed",
    "Follow traditional cooking methods for this dish",
    "Cook until done and serve hot",
];

/// Configuration structure shared by the importers
#[derive(Debug, Clone, PartialEq)]
pub struct ImportConfig {
    /// Minimum number of non-blank lines (header included) a CSV export must have
    pub min_lines: usize,
    /// Lines shorter than this are noise for the free-text extractor
    pub min_extract_len: usize,
    /// Text lines under a day/meal marker must be longer than this to count as descriptions
    pub min_description_len: usize,
    /// How many ingredient names make up a synthesized recipe name
    pub name_ingredient_count: usize,
    /// Cook time in minutes given to imported recipes
    pub default_cook_time: u32,
    pub default_cuisine: String,
    /// Base servings of imported recipes and of the slots that reference them
    pub default_servings: u32,
    pub default_instructions: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            min_lines: MIN_LINES,
            min_extract_len: MIN_EXTRACT_LEN,
            min_description_len: MIN_DESCRIPTION_LEN,
            name_ingredient_count: NAME_INGREDIENT_COUNT,
            default_cook_time: DEFAULT_COOK_TIME,
            default_cuisine: DEFAULT_CUISINE.to_string(),
            default_servings: DEFAULT_SERVINGS,
            default_instructions: DEFAULT_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ImportConfig {
    /// A recipe carrying the import defaults, filed under `meal_type`
    pub fn new_recipe(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        meal_type: MealType,
        ingredients: Vec<Ingredient>,
    ) -> Recipe {
        let mut recipe = Recipe::new(id, name)
            .with_servings(self.default_servings)
            .with_ingredients(ingredients)
            .with_meal_type(meal_type);
        recipe.cook_time = self.default_cook_time;
        recipe.cuisine = self.default_cuisine.clone();
        recipe.instructions = self.default_instructions.clone();
        recipe
    }
}
