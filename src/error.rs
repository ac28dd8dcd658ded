//! Custom error types for SmartSpend
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SmartSpend operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Rejected user input (bad target balance, empty description, unparseable amount)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Export requested on an empty transaction set
    #[error("Nothing to export")]
    NothingToExport,

    /// A stored transaction whose amount is not numeric
    #[error("Corrupt record {id}: amount '{raw}' is not numeric")]
    CorruptRecord { id: String, raw: String },

    /// An optional AI collaborator failed or is not configured
    #[error("Assistant unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl SpendError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SmartSpend operations
pub type SpendResult<T> = Result<T, SpendError>;
