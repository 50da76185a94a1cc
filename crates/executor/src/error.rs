//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: Field-keyed validation problems survive conversion intact

use serde::{Deserialize, Serialize};
use sprintflow_core::FieldProblem;

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `Validation` | Bad submission, fix and resubmit |
/// | Not Found | `IssueNotFound`, `AssigneeNotFound` | Target doesn't exist |
/// | State | `AssigneeExists`, `IdSpaceExhausted` | Store cannot accept the change |
/// | Interpreter | `Interpreter`, `Unfulfillable` | Command could not be turned into an action |
/// | System | `Config`, `Internal` | Setup or invariant failures |
///
/// # Example
///
/// ```ignore
/// use sprintflow_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::Validation { problems }) => {
///         for p in problems {
///             println!("{}: {}", p.field, p.message);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Submission failed field validation; every problem is listed
    #[error("validation failed: {}", summarize(problems))]
    Validation { problems: Vec<FieldProblem> },

    // ==================== Not Found ====================
    /// Issue not found
    #[error("issue not found: {id}")]
    IssueNotFound { id: String },

    /// Assignee not registered
    #[error("assignee not found: {name}")]
    AssigneeNotFound { name: String },

    // ==================== State Errors ====================
    /// Assignee already registered
    #[error("assignee already exists: {name}")]
    AssigneeExists { name: String },

    /// No identifier is left to mint for this prefix
    #[error("identifier space exhausted for prefix '{prefix}'")]
    IdSpaceExhausted { prefix: String },

    // ==================== Interpreter Errors ====================
    /// The interpreter could not be reached or answered badly
    #[error("interpreter error: {reason}")]
    Interpreter { reason: String },

    /// The interpreter answered, but without data its intent requires
    #[error("unfulfillable command: {reason}")]
    Unfulfillable { reason: String },

    // ==================== System Errors ====================
    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Internal error (invariant broken)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

fn summarize(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(|p| format!("{}: {}", p.field, p.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Single-field validation failure.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            problems: vec![FieldProblem {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Field names with problems, for `Validation`; empty otherwise.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Error::Validation { problems } => problems.iter().map(|p| p.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Human-readable messages, one per problem.
    ///
    /// Validation failures yield one `field: message` line per problem;
    /// everything else yields its display string.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Validation { problems } => problems
                .iter()
                .map(|p| format!("{}: {}", p.field, p.message))
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_lists_every_field() {
        let err = Error::Validation {
            problems: vec![
                FieldProblem {
                    field: "title".into(),
                    message: "must not be empty".into(),
                },
                FieldProblem {
                    field: "status".into(),
                    message: "unknown status 'Unknown'".into(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "validation failed: title: must not be empty; status: unknown status 'Unknown'"
        );
        assert_eq!(err.fields(), vec!["title", "status"]);
        assert_eq!(err.messages().len(), 2);
    }

    #[test]
    fn non_validation_has_single_message() {
        let err = Error::IssueNotFound {
            id: "SF-404".into(),
        };
        assert!(err.fields().is_empty());
        assert_eq!(err.messages(), vec!["issue not found: SF-404".to_string()]);
    }
}
