//! Mutation applier: commits validated actions to an [`IssueBook`].
//!
//! Every entry point checks the action against the current book first and
//! only then writes, so a failed action leaves the book exactly as it was.
//!
//! | Action | Effect | Failure |
//! |--------|--------|---------|
//! | Create | mint id, insert at head | unknown assignee, blank title |
//! | Update | merge in place, refresh `updated_at` | not found, unknown assignee, blank title |
//! | Delete | remove permanently | not found |

use chrono::{DateTime, Utc};
use sprintflow_core::{
    Action, FieldPatch, IdGenerator, Issue, IssueId, IssueUpdate, NewIssue, ValidationReport,
};

use crate::book::IssueBook;
use crate::error::{EngineError, EngineResult};

/// Everything the applier needs besides the book.
#[derive(Debug, Clone, Copy)]
pub struct ApplyContext<'a> {
    /// Mints ids for creates
    pub generator: &'a IdGenerator,
    /// Timestamp of this mutation
    pub now: DateTime<Utc>,
    /// Reporter recorded on creates
    pub reporter: &'a str,
}

/// What a committed action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A new issue exists
    Created(IssueId),
    /// An existing issue changed
    Updated(IssueId),
    /// An issue is gone
    Deleted(IssueId),
}

impl Applied {
    /// The affected identifier.
    pub fn id(&self) -> &IssueId {
        match self {
            Applied::Created(id) | Applied::Updated(id) | Applied::Deleted(id) => id,
        }
    }
}

/// Apply one action.
pub fn apply(book: &mut IssueBook, action: Action, ctx: &ApplyContext<'_>) -> EngineResult<Applied> {
    let kind = action.name();
    let result = match action {
        Action::Create(new) => create(book, new, ctx).map(Applied::Created),
        Action::Update(update) => update_issue(book, update, ctx).map(Applied::Updated),
        Action::Delete { id } => delete(book, &id).map(Applied::Deleted),
    };
    match &result {
        Ok(applied) => tracing::info!(
            target: "sprintflow::apply",
            action = kind,
            id = %applied.id(),
            "Committed mutation"
        ),
        Err(e) => tracing::debug!(
            target: "sprintflow::apply",
            action = kind,
            error = %e,
            "Rejected mutation"
        ),
    }
    result
}

/// Resolve an assignee against the registry, recording a problem if unknown.
fn canonical_assignee(
    book: &IssueBook,
    name: &str,
    report: &mut ValidationReport,
) -> Option<String> {
    match book.assignees().canonical(name) {
        Some(canonical) => Some(canonical.to_string()),
        None => {
            report.push("assignee", format!("unknown assignee '{}'", name));
            None
        }
    }
}

/// Create an issue and insert it at the head of the book.
pub fn create(book: &mut IssueBook, new: NewIssue, ctx: &ApplyContext<'_>) -> EngineResult<IssueId> {
    let mut report = ValidationReport::new();
    let title = new.title.trim().to_string();
    if title.is_empty() {
        report.push("title", "must not be empty");
    }
    let assignee = new
        .assignee
        .as_deref()
        .and_then(|name| canonical_assignee(book, name, &mut report));
    if !report.is_empty() {
        return Err(EngineError::Validation(report));
    }

    let existing: Vec<String> = book.ids().collect();
    let floor = book.high_water(ctx.generator.prefix());
    let id = ctx
        .generator
        .next_after(existing.iter().map(String::as_str), floor)
        .ok_or_else(|| EngineError::IdSpaceExhausted {
            prefix: ctx.generator.prefix().to_string(),
        })?;

    let issue = Issue {
        id: id.clone(),
        title,
        status: new.status.unwrap_or_default(),
        priority: new.priority.unwrap_or_default(),
        assignee,
        reporter: ctx.reporter.to_string(),
        created_at: ctx.now,
        updated_at: ctx.now,
        description: new.description,
        labels: new.labels,
    };
    book.push_front(issue);
    Ok(id)
}

/// Merge an update into an existing issue.
pub fn update_issue(
    book: &mut IssueBook,
    update: IssueUpdate,
    ctx: &ApplyContext<'_>,
) -> EngineResult<IssueId> {
    let index = book
        .position(&update.id)
        .ok_or_else(|| EngineError::IssueNotFound {
            id: update.id.clone(),
        })?;

    let mut report = ValidationReport::new();
    let title = match update.title {
        Some(t) if t.trim().is_empty() => {
            report.push("title", "must not be empty");
            None
        }
        other => other.map(|t| t.trim().to_string()),
    };
    let assignee = match update.assignee {
        FieldPatch::Set(name) => match canonical_assignee(book, &name, &mut report) {
            Some(canonical) => FieldPatch::Set(canonical),
            None => FieldPatch::Unchanged,
        },
        other => other,
    };
    if !report.is_empty() {
        return Err(EngineError::Validation(report));
    }

    let mut next = book.issues()[index].clone();
    if let Some(title) = title {
        next.title = title;
    }
    if let Some(status) = update.status {
        next.status = status;
    }
    if let Some(priority) = update.priority {
        next.priority = priority;
    }
    assignee.apply_to(&mut next.assignee);
    update.description.apply_to(&mut next.description);
    if let Some(labels) = update.labels {
        next.labels = labels;
    }
    next.touch(ctx.now);

    book.replace_at(index, next);
    Ok(update.id)
}

/// Remove an issue permanently. Its id is never minted again.
pub fn delete(book: &mut IssueBook, id: &IssueId) -> EngineResult<IssueId> {
    let index = book
        .position(id)
        .ok_or_else(|| EngineError::IssueNotFound { id: id.clone() })?;
    let removed = book.remove_at(index);
    Ok(removed.id)
}
