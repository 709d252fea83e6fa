//! # Portion Parser
//!
//! Parses the free-form portion column of a meal plan export (`"150g"`, `"2pza"`,
//! `"0.5/2tza"`, `"1/2 taza"`, `"nan"`) into a decimal amount and a canonical unit.
//!
//! Parsing never fails: anything that cannot be read as a quantity becomes one unit of
//! whatever the text names, and empty or `nan` portions become one piece.

use crate::unit_normalizer::{normalize_unit, DEFAULT_UNIT};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

static PORTION_PATTERNS: LazyLock<PortionPatterns> = LazyLock::new(PortionPatterns::new);

/// Compiled regex patterns for the supported portion shapes
struct PortionPatterns {
    /// `"0.5/2tza"`, `"1/2 taza"`: numerator and denominator may both be decimals
    fraction: Regex,
    /// `"150g"`, `"3 piece"`, `"2.5"`
    number: Regex,
}

impl PortionPatterns {
    fn new() -> Self {
        Self {
            fraction: Regex::new(r"^(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)\s*(.*)$").unwrap(),
            number: Regex::new(r"^(\d+(?:\.\d+)?)\s*(.*)$").unwrap(),
        }
    }
}

/// A resolved quantity
#[derive(Debug, Clone, PartialEq)]
pub struct Portion {
    pub amount: f64,
    pub unit: String,
}

impl Portion {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// One piece, used for blank and unreadable portions
    pub fn one_piece() -> Self {
        Self::new(1.0, DEFAULT_UNIT)
    }
}

/// Check whether a portion cell carries no quantity (blank or a `nan` export artifact)
pub fn is_blank_portion(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// Parse a portion string into an amount and a canonical unit
///
/// # Examples
///
/// ```rust
/// use meal_planner::portion_parser::{parse_portion, Portion};
///
/// assert_eq!(parse_portion("150g"), Portion::new(150.0, "g"));
/// assert_eq!(parse_portion("0.5/2tza"), Portion::new(0.25, "cup"));
/// assert_eq!(parse_portion("nan"), Portion::new(1.0, "piece"));
/// assert_eq!(parse_portion("al gusto"), Portion::new(1.0, "al gusto"));
/// ```
pub fn parse_portion(raw: &str) -> Portion {
    if is_blank_portion(raw) {
        trace!("Blank portion '{}', defaulting to one piece", raw);
        return Portion::one_piece();
    }

    let portion = raw.trim();

    if let Some(captures) = PORTION_PATTERNS.fraction.captures(portion) {
        let numerator = captures[1].parse::<f64>();
        let denominator = captures[2].parse::<f64>();
        return match (numerator, denominator) {
            (Ok(numerator), Ok(denominator)) if denominator > 0.0 => {
                Portion::new(numerator / denominator, normalize_unit(captures[3].trim()))
            }
            _ => {
                debug!("Unusable fraction in portion '{}', defaulting to one", raw);
                Portion::new(1.0, normalize_unit(captures[3].trim()))
            }
        };
    }

    if let Some(captures) = PORTION_PATTERNS.number.captures(portion) {
        if let Ok(amount) = captures[1].parse::<f64>() {
            return Portion::new(amount, normalize_unit(captures[2].trim()));
        }
    }

    trace!("No leading quantity in portion '{}'", raw);
    Portion::new(1.0, normalize_unit(portion))
}
