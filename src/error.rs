//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;
use crate::models::month::MonthParseError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// An amount could not be parsed, or is outside the accepted range
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A date argument is not a valid YYYY-MM-DD calendar day
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A month argument is not a valid YYYY-MM month
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Reading or writing the persisted ledger failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a storage (persistence) error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

impl From<MonthParseError> for TrackerError {
    fn from(err: MonthParseError) -> Self {
        Self::InvalidMonth(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_from_money_parse_error() {
        let parse_err = Money::parse("ten dollars").unwrap_err();
        let err: TrackerError = parse_err.into();
        assert!(err.is_invalid_amount());
        assert_eq!(err.to_string(), "Invalid amount: Invalid money format: ten dollars");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
        assert!(!err.is_storage());
    }
}
