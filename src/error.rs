//! Error types for the salary engine.
//!
//! Failures come from three places: loading the reference tables, walking
//! the selection wizard, and evaluating a salary.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// Every fallible engine operation returns it; the HTTP layer maps each
/// variant to a status code.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/practitioners.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Reference data file not found: /missing/practitioners.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A reference data file was not found at the specified path.
    #[error("Reference data file not found: {path}")]
    ConfigNotFound {
        /// Missing file.
        path: String,
    },

    /// A reference data file could not be parsed.
    #[error("Failed to parse reference data file '{path}': {message}")]
    ConfigParseError {
        /// Offending file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// Reference data parsed but violates a table invariant.
    #[error("Invalid reference data in '{table}': {message}")]
    InvalidReferenceData {
        /// The table holding the offending rows.
        table: String,
        /// What was wrong with it.
        message: String,
    },

    /// No practitioner classification matches the selected triple.
    #[error("Classification not found: {main_corp} / {sub_corp} / {grade}")]
    ClassificationNotFound {
        /// The selected main corps.
        main_corp: String,
        /// The selected sub-corps.
        sub_corp: String,
        /// The selected grade.
        grade: String,
    },

    /// No salary scale row exists for a category.
    #[error("Salary scale not found for category '{category}'")]
    SalaryScaleNotFound {
        /// The category that has no scale row.
        category: String,
    },

    /// A wizard selection was rejected.
    #[error("Invalid selection for '{field}': {message}")]
    InvalidSelection {
        /// The field that was rejected.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// Evaluation could not produce a breakdown.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// What went wrong.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidSelection`].
    pub fn invalid_selection(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelection {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
