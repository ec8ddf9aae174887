//! # Error Types
//!
//! Shared error hierarchy for the Covenant stack. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Crate-local failure modes (registry lookups, detection policy loading,
//! remediation-service calls) define their own error enums next to the code
//! that produces them; this module holds only the cross-cutting variants.

use thiserror::Error;

/// Top-level error type for foundational operations.
#[derive(Error, Debug)]
pub enum CovenantError {
    /// An identifier failed validation at construction.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A timestamp string could not be parsed or violated the UTC-only rule.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// An enum string representation was not recognized.
    #[error("unknown value: {0}")]
    UnknownValue(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
