//! Issue operations.

use sprintflow_core::{Action, Issue, IssueId};

use super::Tracker;
use crate::types::{CommandOutcome, FormFields};
use crate::{Command, Error, Output, Result};

impl Tracker {
    // =========================================================================
    // Form submissions
    // =========================================================================

    /// Create an issue from a form submission.
    ///
    /// Returns the minted identifier.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let id = tracker.create_issue(
    ///     FormFields::new().text("title", "Fix login").text("priority", "High"),
    /// )?;
    /// assert_eq!(id.to_string(), "SF-001");
    /// ```
    pub fn create_issue(&self, fields: FormFields) -> Result<IssueId> {
        match self.executor.execute(Command::IssueCreate { fields })? {
            Output::IssueCreated { id } => Ok(id),
            _ => Err(Error::Internal {
                reason: "Unexpected output for IssueCreate".into(),
            }),
        }
    }

    /// Update an issue from a form submission; `id` names the target.
    ///
    /// Fields not present in the form keep their stored values.
    pub fn update_issue(&self, fields: FormFields) -> Result<IssueId> {
        match self.executor.execute(Command::IssueUpdate { fields })? {
            Output::IssueUpdated { id } => Ok(id),
            _ => Err(Error::Internal {
                reason: "Unexpected output for IssueUpdate".into(),
            }),
        }
    }

    /// Delete an issue from a form submission; `issueId` names the target.
    pub fn delete_issue(&self, fields: FormFields) -> Result<IssueId> {
        match self.executor.execute(Command::IssueDelete { fields })? {
            Output::IssueDeleted { id } => Ok(id),
            _ => Err(Error::Internal {
                reason: "Unexpected output for IssueDelete".into(),
            }),
        }
    }

    /// Apply an already-typed action.
    pub fn apply(&self, action: Action) -> Result<IssueId> {
        match self.executor.execute(Command::Apply { action })? {
            Output::IssueCreated { id } | Output::IssueUpdated { id } | Output::IssueDeleted { id } => {
                Ok(id)
            }
            _ => Err(Error::Internal {
                reason: "Unexpected output for Apply".into(),
            }),
        }
    }

    // =========================================================================
    // Command bar
    // =========================================================================

    /// Interpret a free-text command and apply the resulting action.
    ///
    /// `context_id` is the issue in focus, used when the command names none.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let outcome = tracker.run_command("Assign SF-002 to Alice", None)?;
    /// assert_eq!(outcome.issue_id.as_deref(), Some("SF-002"));
    /// ```
    pub fn run_command(&self, command: &str, context_id: Option<&str>) -> Result<CommandOutcome> {
        match self.executor.execute(Command::Interpret {
            command: command.to_string(),
            context_id: context_id.map(str::to_string),
        })? {
            Output::CommandResolved(outcome) => Ok(outcome),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Interpret".into(),
            }),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All issues, most recent first.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        match self.executor.execute(Command::IssueList)? {
            Output::Issues(issues) => Ok(issues),
            _ => Err(Error::Internal {
                reason: "Unexpected output for IssueList".into(),
            }),
        }
    }

    /// One issue, or `None` if no issue has this identifier.
    pub fn get_issue(&self, id: &str) -> Result<Option<Issue>> {
        match self.executor.execute(Command::IssueGet { id: id.to_string() })? {
            Output::MaybeIssue(issue) => Ok(issue),
            _ => Err(Error::Internal {
                reason: "Unexpected output for IssueGet".into(),
            }),
        }
    }
}
