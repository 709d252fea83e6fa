//! # Import Error Types Module
//!
//! Errors that abort an import call. Rows that cannot be read and quantities that
//! cannot be parsed are never errors; they are skipped or defaulted and logged.

use thiserror::Error;

/// Fatal format errors of a meal plan import
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The input contained nothing but whitespace
    #[error("The file is empty")]
    EmptyInput,
    /// A CSV export needs a header row and at least one data row
    #[error("The file must contain a header row and at least one data row (found {found} line(s))")]
    TooFewLines { found: usize },
    /// No known header dialect matched the first row
    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },
    /// Parsing finished without producing a single meal
    #[error("No valid meals found in the file")]
    NoMeals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ImportError::TooFewLines { found: 1 }.to_string(),
            "The file must contain a header row and at least one data row (found 1 line(s))"
        );
        assert_eq!(
            ImportError::MissingColumns {
                missing: vec!["ingredient", "portion"]
            }
            .to_string(),
            "Missing required columns: ingredient, portion"
        );
        assert_eq!(ImportError::NoMeals.to_string(), "No valid meals found in the file");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = ImportError::NoMeals.into();
        assert!(err.downcast_ref::<ImportError>().is_some());
    }
}
