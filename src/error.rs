//! Custom error types for Terminal Budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Message shown to the user whenever an imported file cannot be adopted
pub const INVALID_FILE_FORMAT: &str = "ERROR: Invalid file format";

/// The main error type for Terminal Budget operations
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

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// More than one record matched a short identifier
    #[error("{entity_type} identifier '{identifier}' is ambiguous ({matches} matches)")]
    Ambiguous {
        entity_type: &'static str,
        identifier: String,
        matches: usize,
    },

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Document could not be brought up to the current schema
    #[error("Migration error: {0}")]
    Migration(String),

    /// Imported file could not be parsed or migrated
    #[error("ERROR: Invalid file format ({0})")]
    InvalidFileFormat(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Background image rejected or unreadable
    #[error("Background error: {0}")]
    Background(String),
}

impl BudgetError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from a rejected import
    pub fn is_invalid_file_format(&self) -> bool {
        matches!(self, Self::InvalidFileFormat(_))
    }
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

/// Result type alias for Terminal Budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::expense_not_found("rent");
        assert_eq!(err.to_string(), "Expense not found: rent");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_file_format_message() {
        let err = BudgetError::InvalidFileFormat("expected value at line 1".into());
        assert!(err.to_string().starts_with("ERROR: Invalid file format"));
        assert!(err.is_invalid_file_format());
    }

    #[test]
    fn test_ambiguous_error() {
        let err = BudgetError::Ambiguous {
            entity_type: "Goal",
            identifier: "ab".into(),
            matches: 2,
        };
        assert_eq!(err.to_string(), "Goal identifier 'ab' is ambiguous (2 matches)");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
