//! Error types for the issue domain
//!
//! This module defines the errors raised while parsing domain values.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a raw value cannot become a domain value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Identifier is not of the form `PREFIX-NUMBER`
    #[error("invalid identifier '{value}': {reason}")]
    InvalidIdentifier {
        /// The rejected text
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Value is not a member of a closed enum
    #[error("unknown {kind} '{value}'")]
    UnknownVariant {
        /// Which enum was being parsed (`status`, `priority`, `method`)
        kind: &'static str,
        /// The rejected text
        value: String,
    },
}
