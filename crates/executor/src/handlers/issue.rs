//! Issue command handlers.
//!
//! Form handlers validate the whole submission first and only then hand a
//! typed action to the store, so a rejected form never reaches the applier.
//! A rejected form still gets the registry check on its assignee, so every
//! problem is reported in one round.

use sprintflow_core::{resolve, Action, IssueId, SentinelSet, ValidationReport};
use sprintflow_engine::{Applied, Database};

use crate::convert::convert_result;
use crate::types::{fields, FormFields};
use crate::validate;
use crate::{Output, Result};

/// Handle IssueCreate command.
pub fn issue_create(db: &Database, fields: FormFields) -> Result<Output> {
    let new = validate::validate_create(&fields)
        .map_err(|report| with_registry_check(db, &fields, report))?;
    apply(db, Action::Create(new))
}

/// Handle IssueUpdate command.
pub fn issue_update(db: &Database, fields: FormFields) -> Result<Output> {
    let update = validate::validate_update(&fields)
        .map_err(|report| with_registry_check(db, &fields, report))?;
    apply(db, Action::Update(update))
}

/// Add the applier's unknown-assignee problem to a failed form report.
fn with_registry_check(
    db: &Database,
    form: &FormFields,
    mut report: ValidationReport,
) -> ValidationReport {
    if report.has_field(fields::ASSIGNEE) {
        return report;
    }
    let name = form
        .get(fields::ASSIGNEE)
        .and_then(|v| v.as_text())
        .and_then(|raw| resolve(raw, SentinelSet::ASSIGNEE));
    if let Some(name) = name {
        if !db.read(|book| book.assignees().contains(&name)) {
            report.push(fields::ASSIGNEE, format!("unknown assignee '{}'", name));
        }
    }
    report
}

/// Handle IssueDelete command.
pub fn issue_delete(db: &Database, fields: FormFields) -> Result<Output> {
    let id = validate::validate_delete(&fields)?;
    apply(db, Action::Delete { id })
}

/// Handle Apply command.
pub fn apply(db: &Database, action: Action) -> Result<Output> {
    let applied = convert_result(db.apply(action, &db.config().form_reporter))?;
    Ok(applied_output(applied))
}

/// Handle IssueList command.
pub fn issue_list(db: &Database) -> Result<Output> {
    Ok(Output::Issues(db.list_issues()))
}

/// Handle IssueGet command.
///
/// A malformed identifier cannot name any issue, so it reads as `None`.
pub fn issue_get(db: &Database, id: String) -> Result<Output> {
    let issue = IssueId::parse(&id).ok().and_then(|id| db.get_issue(&id));
    Ok(Output::MaybeIssue(issue))
}

pub(crate) fn applied_output(applied: Applied) -> Output {
    match applied {
        Applied::Created(id) => Output::IssueCreated { id },
        Applied::Updated(id) => Output::IssueUpdated { id },
        Applied::Deleted(id) => Output::IssueDeleted { id },
    }
}
