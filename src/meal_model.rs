//! # Meal Plan Data Model
//!
//! This module defines the data structures shared by the importers, the shopping list
//! aggregator and the callers that render them. Every type serializes to the camelCase
//! JSON shape the planner front-end consumes.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: A food item with a resolved decimal amount, a canonical unit and a
//!   grocery category
//! - **Recipe**: A named group of ingredients expressed for `servings` base servings
//! - **MealSlot**: One (day, meal type) cell of the fixed 7x5 week grid
//! - **ShoppingListItem**: One merged `(name, unit)` line of the weekly shopping list
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::meal_model::{Day, GroceryCategory, Ingredient, MealSlot, MealType, Recipe};
//!
//! let eggs = Ingredient::new("ingredient-1", "Huevo", 2.0, "piece", GroceryCategory::DairyAndEggs);
//! let recipe = Recipe::new("recipe-1", "Huevos").with_ingredients(vec![eggs]);
//! let slot = MealSlot::new(Day::Monday, MealType::Breakfast).with_recipe(recipe, Some(2));
//!
//! assert_eq!(slot.id, "Monday-Breakfast");
//! assert_eq!(slot.serving_ratio(), Some(2.0));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grocery aisle an ingredient is shopped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroceryCategory {
    Produce,
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    #[serde(rename = "Meat & Seafood")]
    MeatAndSeafood,
    Pantry,
    Frozen,
    Bakery,
    Beverages,
    Other,
}

impl GroceryCategory {
    /// All categories in declaration order
    pub const ALL: [GroceryCategory; 8] = [
        GroceryCategory::Produce,
        GroceryCategory::DairyAndEggs,
        GroceryCategory::MeatAndSeafood,
        GroceryCategory::Pantry,
        GroceryCategory::Frozen,
        GroceryCategory::Bakery,
        GroceryCategory::Beverages,
        GroceryCategory::Other,
    ];

    /// Canonical English label, also used for export grouping
    pub fn as_str(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "Produce",
            GroceryCategory::DairyAndEggs => "Dairy & Eggs",
            GroceryCategory::MeatAndSeafood => "Meat & Seafood",
            GroceryCategory::Pantry => "Pantry",
            GroceryCategory::Frozen => "Frozen",
            GroceryCategory::Bakery => "Bakery",
            GroceryCategory::Beverages => "Beverages",
            GroceryCategory::Other => "Other",
        }
    }
}

/// Day of the planning week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// The canonical week order
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

/// One of the five fixed meal slots of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    #[serde(rename = "Morning Snack")]
    MorningSnack,
    Lunch,
    #[serde(rename = "Afternoon Snack")]
    AfternoonSnack,
    Dinner,
}

impl MealType {
    /// The canonical order of the slots within a day
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::MorningSnack,
        MealType::Lunch,
        MealType::AfternoonSnack,
        MealType::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::MorningSnack => "Morning Snack",
            MealType::Lunch => "Lunch",
            MealType::AfternoonSnack => "Afternoon Snack",
            MealType::Dinner => "Dinner",
        }
    }

    /// Recipe category a meal of this type is filed under
    pub fn recipe_category(&self) -> RecipeCategory {
        match self {
            MealType::Breakfast => RecipeCategory::Breakfast,
            MealType::Lunch => RecipeCategory::Lunch,
            MealType::Dinner => RecipeCategory::Dinner,
            MealType::MorningSnack | MealType::AfternoonSnack => RecipeCategory::Snack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Per-recipe nutrition facts, expressed for the recipe's base servings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl Nutrition {
    /// Multiply every field by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
        }
    }
}

impl std::ops::AddAssign for Nutrition {
    fn add_assign(&mut self, other: Self) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.fiber += other.fiber;
    }
}

/// A parsed ingredient with a resolved amount and canonical unit
///
/// Ingredients are never mutated once a parser built them; scaling produces copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    /// The ingredient name as written in the source (e.g. "Huevo", "pollo")
    pub name: String,
    /// Non-negative decimal amount, fractions already resolved
    pub amount: f64,
    /// Canonical unit (e.g. "g", "cup", "piece")
    pub unit: String,
    pub category: GroceryCategory,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        category: GroceryCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            unit: unit.into(),
            category,
        }
    }

    /// Copy of this ingredient with its amount multiplied by `ratio`
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            amount: self.amount * ratio,
            ..self.clone()
        }
    }
}

/// A recipe whose ingredient amounts are expressed for `servings` base servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub category: RecipeCategory,
    pub cuisine: String,
    pub image: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub meal_types: Vec<RecipeCategory>,
    pub nutrition: Nutrition,
}

impl Recipe {
    /// Create an empty single-serving recipe
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cook_time: 0,
            servings: 1,
            difficulty: Difficulty::Medium,
            category: RecipeCategory::Dinner,
            cuisine: String::new(),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            meal_types: Vec::new(),
            nutrition: Nutrition::default(),
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// File this recipe under the category of `meal_type`
    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        let category = meal_type.recipe_category();
        self.category = category;
        self.meal_types = vec![category];
        self
    }

    /// Base servings used as the scaling pivot, never zero
    pub fn base_servings(&self) -> u32 {
        self.servings.max(1)
    }
}

/// One (day, meal type) cell of the week grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    /// `"{day}-{mealType}"`, unique per cell
    pub id: String,
    pub day: Day,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    /// Overrides `recipe.servings` for scaling when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl MealSlot {
    /// Create an empty slot
    pub fn new(day: Day, meal_type: MealType) -> Self {
        Self {
            id: Self::slot_id(day, meal_type),
            day,
            meal_type,
            recipe: None,
            servings: None,
        }
    }

    /// The identifier of the cell for `day` and `meal_type`
    pub fn slot_id(day: Day, meal_type: MealType) -> String {
        format!("{}-{}", day.as_str(), meal_type.as_str())
    }

    pub fn with_recipe(mut self, recipe: Recipe, servings: Option<u32>) -> Self {
        self.recipe = Some(recipe);
        self.servings = servings;
        self
    }

    /// Servings this slot is cooked for
    ///
    /// A missing or zero override falls back to the recipe's own servings.
    pub fn effective_servings(&self) -> Option<u32> {
        let recipe = self.recipe.as_ref()?;
        Some(match self.servings {
            Some(servings) if servings > 0 => servings,
            _ => recipe.base_servings(),
        })
    }

    /// Scale factor applied to the recipe's ingredient amounts, `None` for empty slots
    pub fn serving_ratio(&self) -> Option<f64> {
        let recipe = self.recipe.as_ref()?;
        let servings = self.effective_servings()?;
        Some(f64::from(servings) / f64::from(recipe.base_servings()))
    }
}

/// One merged line of the weekly shopping list, keyed by `(name, unit)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: GroceryCategory,
    pub completed: bool,
    /// Distinct contributing recipe names in first-seen order
    pub recipe_names: Vec<String>,
}

/// Result of an import run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedPlan {
    pub meals: Vec<MealSlot>,
    pub recipes: Vec<Recipe>,
}

/// A saved week of meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub name: String,
    /// ISO date (`YYYY-MM-DD`) the plan was saved on
    pub week: String,
    pub meals: Vec<MealSlot>,
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        meals: Vec<MealSlot>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            week: created_at.format("%Y-%m-%d").to_string(),
            meals,
            created_at,
        }
    }

    /// Number of cells holding a recipe
    pub fn assigned_count(&self) -> usize {
        self.meals.iter().filter(|m| m.recipe.is_some()).count()
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.fract() == 0.0 {
            write!(f, "{} {} {}", self.amount as i64, self.unit, self.name)
        } else {
            write!(f, "{} {} {}", self.amount, self.unit, self.name)
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.meal_type)?;
        if let Some(recipe) = &self.recipe {
            write!(f, ": {}", recipe.name)?;
            if let Some(servings) = self.effective_servings() {
                write!(f, " (x{})", servings)?;
            }
        }
        Ok(())
    }
}
