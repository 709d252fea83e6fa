//! # Ingredient Categorizer
//!
//! Keyword-based classifier assigning a grocery category to an ingredient name.
//! Groups are tested in a fixed order (meat and seafood, dairy and eggs, produce,
//! bakery, pantry) and the first group with a matching keyword wins.

use crate::meal_model::GroceryCategory;
use log::trace;

/// How a keyword is matched against the lower-cased ingredient name
#[derive(Debug, Clone, Copy)]
enum Keyword {
    /// Matches anywhere in the name
    Part(&'static str),
    /// Matches a whole word only ("res" must not match "fresa")
    Word(&'static str),
}

use Keyword::{Part, Word};

const MEAT_AND_SEAFOOD: &[Keyword] = &[
    Part("pollo"),
    Word("res"),
    Part("pescado"),
    Part("carne"),
    Part("atún"),
    Part("atun"),
    Part("salmón"),
    Part("salmon"),
    Part("pavo"),
    Part("molida"),
    Part("filete"),
    Part("falda"),
    Part("pechuga"),
    Part("bistec"),
    Part("jamon"),
    Part("jamón"),
    Part("camarón"),
    Part("camaron"),
    Part("chicken"),
    Part("beef"),
    Part("pork"),
    Part("fish"),
    Part("tuna"),
    Part("turkey"),
    Word("ham"),
];

const DAIRY_AND_EGGS: &[Keyword] = &[
    Part("huevo"),
    Part("leche"),
    Part("queso"),
    Part("yogurt"),
    Part("yogur"),
    Part("crema"),
    Part("panela"),
    Part("mantequilla"),
    Word("egg"),
    Word("eggs"),
    Part("milk"),
    Part("cheese"),
    Part("butter"),
    Part("cream"),
];

const PRODUCE: &[Keyword] = &[
    Part("tomate"),
    Part("cebolla"),
    Part("lechuga"),
    Part("espinaca"),
    Part("apio"),
    Part("pepino"),
    Part("zanahoria"),
    Part("jitomate"),
    Part("nopales"),
    Part("calabacitas"),
    Part("chayote"),
    Part("jicama"),
    Part("jícama"),
    Part("perejil"),
    Part("manzana"),
    Part("piña"),
    Part("naranja"),
    Part("fresa"),
    Part("papaya"),
    Part("melón"),
    Part("melon"),
    Part("almendras"),
    Part("almendra"),
    Part("nuez"),
    Part("cacahuate"),
    Part("verdura"),
    Part("aguacate"),
    Part("plátano"),
    Part("platano"),
    Part("tomato"),
    Part("onion"),
    Part("lettuce"),
    Part("spinach"),
    Part("carrot"),
    Part("apple"),
    Part("banana"),
];

const BAKERY: &[Keyword] = &[
    Word("pan"),
    Part("tortilla"),
    Part("tostada"),
    Part("bolillo"),
    Part("bread"),
];

const PANTRY: &[Keyword] = &[
    Part("aceite"),
    Word("sal"),
    Part("pimienta"),
    Part("avena"),
    Part("arroz"),
    Part("frijol"),
    Part("lentejas"),
    Part("mayonesa"),
    Part("canela"),
    Part("limón"),
    Part("salsa"),
    Part("sopa"),
    Part("azúcar"),
    Part("azucar"),
    Part("oil"),
    Word("salt"),
    Part("rice"),
    Part("beans"),
    Part("oats"),
];

/// Ordered keyword groups, first match wins
const GROUPS: &[(GroceryCategory, &[Keyword])] = &[
    (GroceryCategory::MeatAndSeafood, MEAT_AND_SEAFOOD),
    (GroceryCategory::DairyAndEggs, DAIRY_AND_EGGS),
    (GroceryCategory::Produce, PRODUCE),
    (GroceryCategory::Bakery, BAKERY),
    (GroceryCategory::Pantry, PANTRY),
];

/// Assign a grocery category to an ingredient name
///
/// ```rust
/// use meal_planner::categorizer::categorize;
/// use meal_planner::meal_model::GroceryCategory;
///
/// assert_eq!(categorize("Pechuga de pollo"), GroceryCategory::MeatAndSeafood);
/// assert_eq!(categorize("Huevo"), GroceryCategory::DairyAndEggs);
/// assert_eq!(categorize("Agua mineral"), GroceryCategory::Other);
/// ```
pub fn categorize(name: &str) -> GroceryCategory {
    let lower = name.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    for (category, keywords) in GROUPS {
        let hit = keywords.iter().find(|keyword| match keyword {
            Part(part) => lower.contains(part),
            Word(word) => words.contains(word),
        });
        if let Some(keyword) = hit {
            trace!("Categorized '{}' as {} via {:?}", name, category, keyword);
            return *category;
        }
    }

    GroceryCategory::Other
}
