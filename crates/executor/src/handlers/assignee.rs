//! Assignee registry command handlers.

use sprintflow_engine::Database;

use crate::convert::convert_result;
use crate::{Error, Output, Result};

/// Handle AssigneeList command.
pub fn assignee_list(db: &Database) -> Result<Output> {
    Ok(Output::Assignees(db.list_assignees()))
}

/// Handle AssigneeAdd command.
pub fn assignee_add(db: &Database, name: String) -> Result<Output> {
    let name = convert_result(db.add_assignee(&name))?;
    Ok(Output::AssigneeAdded { name })
}

/// Handle AssigneeRemove command.
pub fn assignee_remove(db: &Database, name: String) -> Result<Output> {
    if name.trim().is_empty() {
        return Err(Error::invalid_field("name", "must not be empty"));
    }
    let (name, unassigned) = convert_result(db.remove_assignee(&name))?;
    Ok(Output::AssigneeRemoved { name, unassigned })
}
