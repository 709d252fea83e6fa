//! # Column Dialects
//!
//! Meal plan exports name their columns differently depending on who produced them
//! (`Día,Tiempo,Ingrediente,Porción`, `Day,MealType,Ingredient,Portion,RecipeId,RecipeName`,
//! or a mix of both). Each naming convention is a [`ColumnDialect`]; the importer tries
//! an ordered list of dialects and uses the first one whose [`ColumnDialect::matches`]
//! accepts the header row.
//!
//! Column names are matched by case-insensitive substring, so `"Porción (g)"` still
//! resolves as the portion column.

use log::debug;

/// Column indices of the fields the importer reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub day: usize,
    pub meal_type: usize,
    pub ingredient: usize,
    pub portion: usize,
    pub recipe_id: Option<usize>,
    pub recipe_name: Option<usize>,
}

/// A naming convention for the header row of a meal plan export
pub trait ColumnDialect: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether every required column can be found in `header`
    fn matches(&self, header: &[String]) -> bool;

    /// Resolve the column indices, `None` when a required column is missing
    fn resolve_columns(&self, header: &[String]) -> Option<ColumnMap>;
}

/// Dialect described by substring tokens for every column
#[derive(Debug, Clone)]
pub struct KeywordDialect {
    pub name: &'static str,
    pub day: &'static [&'static str],
    pub meal_type: &'static [&'static str],
    pub ingredient: &'static [&'static str],
    pub portion: &'static [&'static str],
    pub recipe_id: &'static [&'static str],
    pub recipe_name: &'static [&'static str],
}

/// Spanish column names, with and without accents
pub const SPANISH: KeywordDialect = KeywordDialect {
    name: "spanish",
    day: &["día", "dia"],
    meal_type: &["tiempo"],
    ingredient: &["ingrediente"],
    portion: &["porción", "porcion"],
    recipe_id: &["recetaid", "receta id", "id receta"],
    recipe_name: &["nombrereceta", "nombre receta", "nombre de receta"],
};

/// English column names as written by the planner's own export
pub const ENGLISH: KeywordDialect = KeywordDialect {
    name: "english",
    day: &["day"],
    meal_type: &["mealtype", "meal type", "time"],
    ingredient: &["ingredient"],
    portion: &["portion", "quantity"],
    recipe_id: &["recipeid", "recipe id"],
    recipe_name: &["recipename", "recipe name"],
};

/// Any mix of the Spanish and English column names
pub const MIXED: KeywordDialect = KeywordDialect {
    name: "mixed",
    day: &["day", "día", "dia"],
    meal_type: &["mealtype", "meal type", "tiempo", "time"],
    ingredient: &["ingredient", "ingrediente"],
    portion: &["portion", "porción", "porcion", "quantity"],
    recipe_id: &["recipeid", "recipe id", "recetaid", "receta id", "id receta"],
    recipe_name: &[
        "recipename",
        "recipe name",
        "nombrereceta",
        "nombre receta",
        "nombre de receta",
    ],
};

/// The dialects tried by default, most specific first
pub fn default_dialects() -> Vec<Box<dyn ColumnDialect>> {
    vec![Box::new(SPANISH), Box::new(ENGLISH), Box::new(MIXED)]
}

/// Index of the first header cell containing any of `tokens`
fn find_column(lower_header: &[String], tokens: &[&str]) -> Option<usize> {
    lower_header
        .iter()
        .position(|cell| tokens.iter().any(|token| cell.contains(token)))
}

fn lower_cells(header: &[String]) -> Vec<String> {
    header.iter().map(|cell| cell.trim().to_lowercase()).collect()
}

impl KeywordDialect {
    /// Names of the required columns this dialect cannot find in `header`
    pub fn missing_columns(&self, header: &[String]) -> Vec<&'static str> {
        let lower = lower_cells(header);
        let required: [(&'static str, &[&str]); 4] = [
            ("day", self.day),
            ("meal type", self.meal_type),
            ("ingredient", self.ingredient),
            ("portion", self.portion),
        ];
        required
            .into_iter()
            .filter(|(_, tokens)| find_column(&lower, tokens).is_none())
            .map(|(column, _)| column)
            .collect()
    }
}

impl ColumnDialect for KeywordDialect {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, header: &[String]) -> bool {
        self.resolve_columns(header).is_some()
    }

    fn resolve_columns(&self, header: &[String]) -> Option<ColumnMap> {
        let lower = lower_cells(header);
        let map = ColumnMap {
            day: find_column(&lower, self.day)?,
            meal_type: find_column(&lower, self.meal_type)?,
            ingredient: find_column(&lower, self.ingredient)?,
            portion: find_column(&lower, self.portion)?,
            recipe_id: find_column(&lower, self.recipe_id),
            recipe_name: find_column(&lower, self.recipe_name),
        };
        debug!("Header resolved by {} dialect: {:?}", self.name, map);
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row_parser::parse_row;

    #[test]
    fn test_spanish_header() {
        let header = parse_row("Día,Tiempo,Ingrediente,Porción");
        let map = SPANISH.resolve_columns(&header).unwrap();
        assert_eq!((map.day, map.meal_type, map.ingredient, map.portion), (0, 1, 2, 3));
        assert_eq!(map.recipe_id, None);
        assert_eq!(map.recipe_name, None);
    }

    #[test]
    fn test_spanish_header_without_accents() {
        let header = parse_row("dia,tiempo,ingrediente,porcion");
        assert!(SPANISH.matches(&header));
    }

    #[test]
    fn test_english_header_with_recipe_columns() {
        let header = parse_row("RecipeId,RecipeName,Day,MealType,Ingredient,Portion");
        assert!(!SPANISH.matches(&header));
        let map = ENGLISH.resolve_columns(&header).unwrap();
        assert_eq!(map.day, 2);
        assert_eq!(map.meal_type, 3);
        assert_eq!(map.ingredient, 4);
        assert_eq!(map.portion, 5);
        assert_eq!(map.recipe_id, Some(0));
        assert_eq!(map.recipe_name, Some(1));
    }

    #[test]
    fn test_mixed_header_needs_mixed_dialect() {
        let header = parse_row("Day,Tiempo,Ingredient,Porción");
        assert!(!SPANISH.matches(&header));
        assert!(!ENGLISH.matches(&header));
        assert!(MIXED.matches(&header));
    }

    #[test]
    fn test_default_dialect_order() {
        let names: Vec<&str> = default_dialects().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["spanish", "english", "mixed"]);
    }

    #[test]
    fn test_missing_columns_reported() {
        let header = parse_row("Día,Tiempo,Cantidad");
        assert_eq!(MIXED.missing_columns(&header), vec!["ingredient", "portion"]);
    }
}
