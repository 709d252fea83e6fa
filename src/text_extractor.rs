//! # Free-Text Meal Extractor
//!
//! Reads quantity phrases out of an unstructured meal description such as
//! `"Preparar 150 g de pollo con verduras"`. Every phrase of the shape
//! `<number> <unit> de <ingredient>` becomes an [`Ingredient`]; the rest of the line
//! is kept as the description of a synthesized recipe.
//!
//! ## Features
//!
//! - Weight, volume, spoon and count units, tried in that order
//! - Case-insensitive matching (`"2 Tazas de arroz"`)
//! - Ingredient names cut at connector words (`"pollo con verduras"` -> `"pollo"`)
//! - Boilerplate instructions, since meal plan text carries none

use crate::categorizer::categorize;
use crate::id_generator::IdGenerator;
use crate::import_config::ImportConfig;
use crate::meal_model::Ingredient;
use crate::unit_normalizer::normalize_unit;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

lazy_static! {
    /// Quantity phrase patterns, one per unit family, in matching order
    static ref QUANTITY_PATTERNS: [Regex; 4] = [
        // Weight
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(g|gr|gramos?|kg|kilogramos?)\s+de\s+([^,\.\d]+)")
            .expect("weight pattern should be valid"),
        // Volume
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(ml|litros?|l)\s+de\s+([^,\.\d]+)")
            .expect("volume pattern should be valid"),
        // Spoons and cups
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(tazas?|cdtas?|cucharaditas?|cdas?|cucharadas?)\s+de\s+([^,\.\d]+)")
            .expect("spoon pattern should be valid"),
        // Counts
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(pzas?|piezas?|latas?|rebanadas?)\s+de\s+([^,\.\d]+)")
            .expect("count pattern should be valid"),
    ];
}

/// Words that end an ingredient name (`"pollo con verduras"`, `"arroz y frijoles"`)
const NAME_STOP_WORDS: &[&str] = &["con", "y", "e", "en", "para", "sin", "al", "a", "o", "u", "por"];

/// Leading articles dropped from an ingredient name
const NAME_ARTICLES: &[&str] = &["el", "la", "los", "las", "un", "una", "unos", "unas"];

/// A recipe synthesized from one line of free text
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    /// The source line, trimmed
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    /// The source line with every matched quantity phrase removed
    pub leftover: String,
}

/// Uppercase the first character of `text`
///
/// # Examples
///
/// ```rust
/// use meal_planner::text_extractor::capitalize_first;
///
/// assert_eq!(capitalize_first("pollo recipe"), "Pollo recipe");
/// assert_eq!(capitalize_first("ñame"), "Ñame");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extract a recipe draft from one line using the default configuration
///
/// Returns `None` for lines too short to describe a meal.
///
/// # Examples
///
/// ```rust
/// use meal_planner::id_generator::SequentialIds;
/// use meal_planner::text_extractor::extract_from_text;
///
/// let draft = extract_from_text("Preparar 150 g de pollo con verduras", &mut SequentialIds::new()).unwrap();
/// assert_eq!(draft.name, "Pollo recipe");
/// assert_eq!(draft.ingredients[0].name, "pollo");
/// assert_eq!(draft.ingredients[0].amount, 150.0);
///
/// assert!(extract_from_text("ok", &mut SequentialIds::new()).is_none());
/// ```
pub fn extract_from_text(line: &str, ids: &mut dyn IdGenerator) -> Option<RecipeDraft> {
    extract_with_config(line, ids, &ImportConfig::default())
}

/// Extract a recipe draft from one line
pub fn extract_with_config(
    line: &str,
    ids: &mut dyn IdGenerator,
    config: &ImportConfig,
) -> Option<RecipeDraft> {
    let text = line.trim();
    if text.chars().count() < config.min_extract_len {
        trace!("Line too short for extraction: '{}'", text);
        return None;
    }

    let mut ingredients = Vec::new();
    let mut leftover = text.to_string();

    for pattern in QUANTITY_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            let Ok(amount) = captures[1].parse::<f64>() else {
                continue;
            };
            let name = clean_ingredient_name(&captures[3]);
            if name.is_empty() {
                continue;
            }

            trace!("Quantity phrase '{}' -> {} {} {}", &captures[0], amount, &captures[2], name);
            ingredients.push(Ingredient::new(
                ids.next_id("ingredient"),
                name.as_str(),
                amount,
                normalize_unit(&captures[2]),
                categorize(&name),
            ));
            leftover = leftover.replacen(&captures[0], "", 1);
        }
    }

    let name = match ingredients.first() {
        Some(first) => format!("{} recipe", first.name),
        None => name_from_words(text),
    };

    debug!(
        "Extracted {} ingredient(s) from '{}', recipe name '{}'",
        ingredients.len(),
        text,
        name
    );

    Some(RecipeDraft {
        name: capitalize_first(&name),
        description: text.to_string(),
        ingredients,
        instructions: config.default_instructions.clone(),
        leftover: leftover.split_whitespace().collect::<Vec<_>>().join(" "),
    })
}

/// First three meaningful words of a line, or its first three words when none qualify
fn name_from_words(text: &str) -> String {
    let meaningful: Vec<&str> = text
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .take(3)
        .collect();
    if meaningful.is_empty() {
        text.split_whitespace().take(3).collect::<Vec<_>>().join(" ")
    } else {
        meaningful.join(" ")
    }
}

/// Trim a captured ingredient phrase down to the ingredient itself
fn clean_ingredient_name(raw: &str) -> String {
    let mut words: Vec<&str> = raw.split_whitespace().collect();

    if let Some(first) = words.first() {
        if NAME_ARTICLES.contains(&first.to_lowercase().as_str()) && words.len() > 1 {
            words.remove(0);
        }
    }

    if let Some(stop) = words
        .iter()
        .position(|word| NAME_STOP_WORDS.contains(&word.to_lowercase().as_str()))
    {
        if stop > 0 {
            words.truncate(stop);
        }
    }

    words
        .join(" ")
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}
