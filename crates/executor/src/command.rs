//! Command enum defining all Sprintflow operations.
//!
//! Commands are the "instruction set" of the tracker. Every operation that can
//! be performed on the store is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};
use sprintflow_core::Action;

use crate::types::FormFields;

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Forms | 3 | Raw form submissions, validated then applied |
/// | Actions | 1 | Pre-validated typed action |
/// | Queries | 2 | Issue reads |
/// | Assignees | 3 | Assignee registry |
/// | Command bar | 1 | Free-text command through the interpreter |
///
/// # Example
///
/// ```ignore
/// use sprintflow_executor::{Command, FormFields};
///
/// let cmd = Command::IssueCreate {
///     fields: FormFields::new().text("title", "Fix login"),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Forms (3) ====================
    /// Create an issue from a form submission.
    /// Returns: `Output::IssueCreated`
    IssueCreate { fields: FormFields },

    /// Update an issue from a form submission (`id` names the target).
    /// Returns: `Output::IssueUpdated`
    IssueUpdate { fields: FormFields },

    /// Delete an issue from a form submission (`issueId` names the target).
    /// Returns: `Output::IssueDeleted`
    IssueDelete { fields: FormFields },

    // ==================== Actions (1) ====================
    /// Apply an already-typed action, recording the form reporter on creates.
    /// Returns: `Output::IssueCreated`, `Output::IssueUpdated` or `Output::IssueDeleted`
    Apply { action: Action },

    // ==================== Queries (2) ====================
    /// List all issues, most recent first.
    /// Returns: `Output::Issues`
    IssueList,

    /// Get one issue.
    /// Returns: `Output::MaybeIssue`
    IssueGet { id: String },

    // ==================== Assignees (3) ====================
    /// List registered assignees.
    /// Returns: `Output::Assignees`
    AssigneeList,

    /// Register an assignee.
    /// Returns: `Output::AssigneeAdded`
    AssigneeAdd { name: String },

    /// Unregister an assignee, unassigning its issues.
    /// Returns: `Output::AssigneeRemoved`
    AssigneeRemove { name: String },

    // ==================== Command bar (1) ====================
    /// Interpret a free-text command and apply the resulting action.
    /// Returns: `Output::CommandResolved`
    Interpret {
        command: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context_id: Option<String>,
    },
}

impl Command {
    /// Variant name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::IssueCreate { .. } => "IssueCreate",
            Command::IssueUpdate { .. } => "IssueUpdate",
            Command::IssueDelete { .. } => "IssueDelete",
            Command::Apply { .. } => "Apply",
            Command::IssueList => "IssueList",
            Command::IssueGet { .. } => "IssueGet",
            Command::AssigneeList => "AssigneeList",
            Command::AssigneeAdd { .. } => "AssigneeAdd",
            Command::AssigneeRemove { .. } => "AssigneeRemove",
            Command::Interpret { .. } => "Interpret",
        }
    }
}
