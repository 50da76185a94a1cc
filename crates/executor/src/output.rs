//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on store state).

use serde::{Deserialize, Serialize};
use sprintflow_core::{Issue, IssueId};

use crate::types::CommandOutcome;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use sprintflow_executor::{Command, Output, Executor};
///
/// match executor.execute(Command::IssueGet { id: "SF-001".into() })? {
///     Output::MaybeIssue(Some(issue)) => println!("{}", issue.title),
///     Output::MaybeIssue(None) => println!("Not found"),
///     _ => unreachable!("IssueGet always returns MaybeIssue"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    // ==================== Mutations ====================
    /// A new issue was created
    IssueCreated { id: IssueId },

    /// An existing issue was updated
    IssueUpdated { id: IssueId },

    /// An issue was deleted
    IssueDeleted { id: IssueId },

    // ==================== Queries ====================
    /// All issues, most recent first
    Issues(Vec<Issue>),

    /// One issue, if it exists
    MaybeIssue(Option<Issue>),

    /// Registered assignee names
    Assignees(Vec<String>),

    // ==================== Assignee Registry ====================
    /// An assignee was registered under this name
    AssigneeAdded { name: String },

    /// An assignee was removed; the listed issues were unassigned
    AssigneeRemoved { name: String, unassigned: Vec<IssueId> },

    // ==================== Command Bar ====================
    /// A free-text command was interpreted (and possibly applied)
    CommandResolved(CommandOutcome),
}
