//! Error types for the issue store.

use sprintflow_core::{IssueId, ValidationReport};
use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors raised by the store and the mutation applier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Target issue does not exist
    #[error("issue not found: {id}")]
    IssueNotFound {
        /// The missing identifier
        id: IssueId,
    },

    /// Action is well-formed but conflicts with the store (e.g. unknown assignee)
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// Assignee already registered (case-insensitive)
    #[error("assignee already exists: {name}")]
    AssigneeExists {
        /// The existing registry name
        name: String,
    },

    /// Assignee not registered
    #[error("assignee not found: {name}")]
    AssigneeNotFound {
        /// The requested name
        name: String,
    },

    /// Every numeric suffix for this prefix has been issued
    #[error("identifier space exhausted for prefix '{prefix}'")]
    IdSpaceExhausted {
        /// The generator's prefix
        prefix: String,
    },

    /// Configuration could not be read, parsed, or accepted
    #[error("invalid configuration: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },
}

impl EngineError {
    /// Build a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        EngineError::Config {
            reason: reason.into(),
        }
    }
}
