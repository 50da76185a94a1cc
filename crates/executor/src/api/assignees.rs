//! Assignee registry operations.

use sprintflow_core::IssueId;

use super::Tracker;
use crate::{Command, Error, Output, Result};

impl Tracker {
    /// Registered assignee names, sorted.
    pub fn list_assignees(&self) -> Result<Vec<String>> {
        match self.executor.execute(Command::AssigneeList)? {
            Output::Assignees(names) => Ok(names),
            _ => Err(Error::Internal {
                reason: "Unexpected output for AssigneeList".into(),
            }),
        }
    }

    /// Register an assignee. Fails with `AssigneeExists` if a name differing
    /// only in case is already registered.
    pub fn add_assignee(&self, name: &str) -> Result<String> {
        match self.executor.execute(Command::AssigneeAdd {
            name: name.to_string(),
        })? {
            Output::AssigneeAdded { name } => Ok(name),
            _ => Err(Error::Internal {
                reason: "Unexpected output for AssigneeAdd".into(),
            }),
        }
    }

    /// Unregister an assignee.
    ///
    /// Returns the issues that were assigned to it; they are now unassigned.
    pub fn remove_assignee(&self, name: &str) -> Result<Vec<IssueId>> {
        match self.executor.execute(Command::AssigneeRemove {
            name: name.to_string(),
        })? {
            Output::AssigneeRemoved { unassigned, .. } => Ok(unassigned),
            _ => Err(Error::Internal {
                reason: "Unexpected output for AssigneeRemove".into(),
            }),
        }
    }
}
