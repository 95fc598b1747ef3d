//! Custom error types for the credit kiosk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Credits;

/// The main error type for kiosk operations
#[derive(Error, Debug)]
pub enum KioskError {
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

    /// Transfer amount is not a positive credit count
    #[error("Invalid amount: credits to send must be a positive whole number")]
    InvalidAmount,

    /// A debit would take a bounded account below zero
    #[error("Insufficient credits for {account}: need {needed}, have {available}")]
    InsufficientFunds {
        account: String,
        needed: Credits,
        available: Credits,
    },

    /// Redemption requested for an item the store does not carry
    #[error("Unknown store item: {0}")]
    UnknownItem(String),

    /// Internal guard: a balance write contradicts the account's limit flag
    #[error("Invalid balance for account '{account}': {reason}")]
    InvalidBalance { account: String, reason: String },

    /// Sign-in attempted with an unrecognized access code
    #[error("Access denied: unrecognized access code")]
    AccessDenied,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KioskError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
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

    /// Check if this is one of the ledger's domain errors (user-facing,
    /// recoverable, guaranteed to have caused no mutation)
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount
                | Self::InsufficientFunds { .. }
                | Self::UnknownItem(_)
                | Self::InvalidBalance { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KioskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KioskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for kiosk operations
pub type KioskResult<T> = Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KioskError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = KioskError::account_not_found("joe");
        assert_eq!(err.to_string(), "Account not found: joe");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = KioskError::InsufficientFunds {
            account: "Joe".into(),
            needed: Credits::new(12),
            available: Credits::new(5),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient credits for Joe: need 12 credits, have 5 credits"
        );
        assert!(err.is_domain());
    }

    #[test]
    fn test_unknown_item_error() {
        let err = KioskError::UnknownItem("Four holes".into());
        assert_eq!(err.to_string(), "Unknown store item: Four holes");
        assert!(err.is_domain());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kiosk_err: KioskError = io_err.into();
        assert!(matches!(kiosk_err, KioskError::Io(_)));
    }
}
