//! Custom error types for the wallet
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (a missing ledger file is not one of these)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A raw field value was rejected before any mutation
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Edit target outside the ledger. `index` is zero-based, the message is not.
    #[error("Record #{} does not exist: the ledger holds {len} record(s)", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    /// A total no longer fits in the money type
    #[error("Amount overflow: {0}")]
    Overflow(String),

    /// A stored line could not be turned back into a record
    #[error("Corrupt ledger data at line {line}: {reason}")]
    CorruptData { line: usize, reason: String },
}

impl WalletError {
    /// Create a validation error for the given field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a corrupt data error for a 1-based line number
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an out-of-range edit target
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if stored data failed to parse
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
