//! Custom error types for leftover-cli
//!
//! Numeric input never fails (it coerces to zero), so the errors here are the
//! structural ones: bad row references, unknown fields, dates, and file I/O.

use thiserror::Error;

/// The main error type for leftover-cli operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Row index past the end of a collection
    #[error("{section} row {index} not found")]
    RowNotFound { section: &'static str, index: usize },

    /// The first row of every collection is kept
    #[error("The first {section} row cannot be removed")]
    ProtectedRow { section: &'static str },

    /// Field that does not exist on rows of this section
    #[error("{section} rows have no '{field}' field")]
    InvalidField {
        section: &'static str,
        field: &'static str,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for leftover-cli operations
pub type BudgetResult<T> = Result<T, BudgetError>;
