//! # Unit Normalizer
//!
//! Maps Spanish, English and abbreviated unit tokens onto the canonical unit vocabulary
//! (`g`, `kg`, `ml`, `l`, `cup`, `tsp`, `tbsp`, `piece`, `can`, `slice`, `half`).
//!
//! ```rust
//! use meal_planner::unit_normalizer::normalize_unit;
//!
//! assert_eq!(normalize_unit("Gramos"), "g");
//! assert_eq!(normalize_unit("tza"), "cup");
//! assert_eq!(normalize_unit(""), "piece");
//! assert_eq!(normalize_unit("manojo"), "manojo");
//! ```

use log::trace;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Unit used when a portion carries no unit text at all
pub const DEFAULT_UNIT: &str = "piece";

/// Synonym table, keys are lower-case
static UNIT_MAPPINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Weight units
    map.insert("g", "g");
    map.insert("gr", "g");
    map.insert("grs", "g");
    map.insert("gramo", "g");
    map.insert("gramos", "g");
    map.insert("gram", "g");
    map.insert("grams", "g");
    map.insert("kg", "kg");
    map.insert("kilo", "kg");
    map.insert("kilos", "kg");
    map.insert("kilogramo", "kg");
    map.insert("kilogramos", "kg");

    // Volume units
    map.insert("ml", "ml");
    map.insert("mililitro", "ml");
    map.insert("mililitros", "ml");
    map.insert("l", "l");
    map.insert("lt", "l");
    map.insert("litro", "l");
    map.insert("litros", "l");
    map.insert("tza", "cup");
    map.insert("taza", "cup");
    map.insert("tazas", "cup");
    map.insert("cup", "cup");
    map.insert("cups", "cup");

    // Spoon units
    map.insert("cdta", "tsp");
    map.insert("cdtas", "tsp");
    map.insert("ctdita", "tsp");
    map.insert("cucharadita", "tsp");
    map.insert("cucharaditas", "tsp");
    map.insert("tsp", "tsp");
    map.insert("cda", "tbsp");
    map.insert("cdas", "tbsp");
    map.insert("ctda", "tbsp");
    map.insert("cucharada", "tbsp");
    map.insert("cucharadas", "tbsp");
    map.insert("tbsp", "tbsp");

    // Count units
    map.insert("pza", "piece");
    map.insert("pzas", "piece");
    map.insert("pieza", "piece");
    map.insert("piezas", "piece");
    map.insert("piece", "piece");
    map.insert("pieces", "piece");
    map.insert("lata", "can");
    map.insert("latas", "can");
    map.insert("can", "can");
    map.insert("cans", "can");
    map.insert("rbn", "slice");
    map.insert("rebanada", "slice");
    map.insert("rebanadas", "slice");
    map.insert("slice", "slice");
    map.insert("slices", "slice");
    map.insert("mitad", "half");
    map.insert("mitades", "half");
    map.insert("half", "half");

    map.insert("", DEFAULT_UNIT);

    map
});

/// Normalize a free-form unit token to the canonical unit vocabulary
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Unknown tokens are
/// returned unchanged, so the function is idempotent for every input.
pub fn normalize_unit(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    match UNIT_MAPPINGS.get(key.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => {
            trace!("Unknown unit token '{}', keeping it as-is", raw);
            raw.to_string()
        }
    }
}

/// Check whether `raw` is a known unit token
pub fn is_known_unit(raw: &str) -> bool {
    UNIT_MAPPINGS.contains_key(raw.trim().to_lowercase().as_str())
}
