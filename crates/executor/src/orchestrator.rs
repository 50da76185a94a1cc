//! Command resolution: free text to at most one committed mutation.
//!
//! The interpreter does all the reading of the command; this module never
//! re-parses the raw text. It only decides, from the reported intent kind,
//! which action to build and whether enough was extracted to build it.
//!
//! | Intent | Needs | Result |
//! |--------|-------|--------|
//! | `create` | title | create, defaults for anything unusable |
//! | `assign` | target, assignee | assignee set or cleared |
//! | `update-status` | target, valid status | status set |
//! | `update-priority` | target, valid priority | priority set |
//! | `update-title` | target, title | title set |
//! | `update-description` | target, description | general notes set |
//! | other, with target | | acknowledged, store untouched |
//! | other, no target | | no action |
//!
//! A missing requirement is an `Unfulfillable` error, reported once.

use sprintflow_core::{
    resolve, resolve_opt, Action, Description, DescriptionPatch, FieldPatch, IssueId,
    IssueUpdate, NewIssue, Priority, SentinelSet, Status,
};
use sprintflow_engine::{Applied, Database};
use sprintflow_intelligence::{
    Intent, IntentKind, InterpretRequest, Interpreter, CONTEXT_PLACEHOLDER,
};
use tracing::{debug, warn};

use crate::convert::convert_result;
use crate::types::{CommandOutcome, OutcomeStatus};
use crate::{Error, Result};

/// What to do with an interpreted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Commit this action
    Mutate(Action),
    /// An issue was identified, but the intent kind has no handler
    Acknowledge(String),
    /// Nothing to act on
    Nothing,
}

/// Interpret `command` and apply the resulting action.
///
/// `context_id` is the issue in focus when the command was typed; it is used
/// when the command itself names no issue.
pub fn resolve_command(
    db: &Database,
    interpreter: &dyn Interpreter,
    command: &str,
    context_id: Option<&str>,
) -> Result<CommandOutcome> {
    let command = command.trim();
    if command.is_empty() {
        return Err(Error::invalid_field(
            crate::types::fields::COMMAND,
            "must not be empty",
        ));
    }

    let request = InterpretRequest::new(command, context_id);
    let intent = interpreter
        .interpret(&request)
        .map_err(|e| {
            warn!(
                target: "sprintflow::orchestrator",
                error = %e,
                "Interpreter failed"
            );
            Error::from(e)
        })?
        .normalized();

    debug!(
        target: "sprintflow::orchestrator",
        kind = %intent.kind,
        target_id = ?intent.target_id,
        context = %request.context_id,
        "Dispatching intent"
    );

    let decision = plan(&intent, request.context()).map_err(|e| {
        warn!(
            target: "sprintflow::orchestrator",
            kind = %intent.kind,
            error = %e,
            "Unfulfillable intent"
        );
        e
    })?;

    match decision {
        Plan::Mutate(action) => {
            let applied = convert_result(db.apply(action, &db.config().command_reporter))?;
            let message = match &applied {
                Applied::Created(id) => format!("Issue {} created.", id),
                Applied::Updated(id) => format!("Issue {} updated ({}).", id, intent.kind),
                Applied::Deleted(id) => format!("Issue {} deleted.", id),
            };
            Ok(CommandOutcome {
                status: OutcomeStatus::Applied,
                issue_id: Some(applied.id().to_string()),
                message,
                intent,
            })
        }
        Plan::Acknowledge(id) => Ok(CommandOutcome {
            status: OutcomeStatus::Acknowledged,
            message: format!(
                "Command about {} understood as '{}'; no change was made.",
                id, intent.kind
            ),
            issue_id: Some(id),
            intent,
        }),
        Plan::Nothing => Ok(CommandOutcome {
            status: OutcomeStatus::NoAction,
            issue_id: None,
            message: "Command interpreted, no action taken.".to_string(),
            intent,
        }),
    }
}

/// Decide what an intent asks for. Pure; touches no store.
///
/// `context` is the caller's issue in focus (already stripped of the
/// placeholder); it fills in for a missing `targetId`.
pub fn plan(intent: &Intent, context: Option<&str>) -> Result<Plan> {
    let target = intent
        .target_id
        .as_deref()
        .filter(|t| !t.eq_ignore_ascii_case(CONTEXT_PLACEHOLDER))
        .or(context)
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let kind = &intent.kind;
    match kind {
        IntentKind::Create => plan_create(intent).map(Plan::Mutate),
        IntentKind::Other(_) => Ok(match target {
            Some(id) => Plan::Acknowledge(id.to_string()),
            None => Plan::Nothing,
        }),
        IntentKind::Assign
        | IntentKind::UpdateStatus
        | IntentKind::UpdatePriority
        | IntentKind::UpdateTitle
        | IntentKind::UpdateDescription => {
            let raw = target.ok_or_else(|| unfulfillable(kind, "no issue identifier"))?;
            let id = IssueId::parse(raw).map_err(|_| {
                unfulfillable(kind, &format!("'{}' is not an issue identifier", raw))
            })?;
            plan_update(kind, id, intent).map(|u| Plan::Mutate(Action::Update(u)))
        }
    }
}

fn plan_create(intent: &Intent) -> Result<Action> {
    let title = intent
        .title
        .clone()
        .ok_or_else(|| unfulfillable(&intent.kind, "no title"))?;
    // Unusable labels fall back to the defaults instead of failing.
    let mut new = NewIssue::titled(title);
    new.status = intent.status.as_deref().and_then(|s| Status::parse(s).ok());
    new.priority = intent
        .priority
        .as_deref()
        .and_then(|p| Priority::parse(p).ok());
    new.assignee = resolve_opt(intent.assignee.as_deref(), SentinelSet::ASSIGNEE);
    new.description = Description {
        general_notes: intent.description.clone(),
        ..Description::default()
    };
    Ok(Action::Create(new))
}

fn plan_update(kind: &IntentKind, id: IssueId, intent: &Intent) -> Result<IssueUpdate> {
    let update = IssueUpdate::new(id);
    let update = match kind {
        IntentKind::Assign => {
            let raw = required(kind, "assignee", &intent.assignee)?;
            update.with_assignee(FieldPatch::from_option(resolve(
                raw,
                SentinelSet::ASSIGNEE,
            )))
        }
        IntentKind::UpdateStatus => {
            let raw = required(kind, "status", &intent.status)?;
            let status = Status::parse(raw)
                .map_err(|_| unfulfillable(kind, &format!("unknown status '{}'", raw)))?;
            update.with_status(status)
        }
        IntentKind::UpdatePriority => {
            let raw = required(kind, "priority", &intent.priority)?;
            let priority = Priority::parse(raw)
                .map_err(|_| unfulfillable(kind, &format!("unknown priority '{}'", raw)))?;
            update.with_priority(priority)
        }
        IntentKind::UpdateTitle => {
            let raw = required(kind, "title", &intent.title)?;
            update.with_title(raw)
        }
        IntentKind::UpdateDescription => {
            let raw = required(kind, "description", &intent.description)?;
            update.with_description(DescriptionPatch {
                general_notes: FieldPatch::Set(raw.to_string()),
                ..DescriptionPatch::default()
            })
        }
        IntentKind::Create | IntentKind::Other(_) => {
            return Err(Error::Internal {
                reason: format!("'{}' is not an update intent", kind),
            })
        }
    };
    Ok(update)
}

fn required<'a>(kind: &IntentKind, field: &str, value: &'a Option<String>) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| unfulfillable(kind, &format!("no {}", field)))
}

fn unfulfillable(kind: &IntentKind, what: &str) -> Error {
    Error::Unfulfillable {
        reason: format!("'{}' command with {}", kind, what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sf(n: u64) -> IssueId {
        IssueId::new("SF", n).unwrap()
    }

    #[test]
    fn create_defaults_unusable_enums() {
        let intent = Intent::new(IntentKind::Create)
            .with_title("Fix login")
            .with_status("Someday")
            .with_priority("urgent-ish")
            .with_assignee("unassigned");
        let Plan::Mutate(Action::Create(new)) = plan(&intent, None).unwrap() else {
            panic!("expected create");
        };
        assert_eq!(new.title, "Fix login");
        assert_eq!(new.status, None);
        assert_eq!(new.priority, None);
        assert_eq!(new.assignee, None);
    }

    #[test]
    fn create_keeps_valid_enums_and_description() {
        let intent = Intent::new(IntentKind::Create)
            .with_title("Export broken")
            .with_status("in progress")
            .with_priority("HIGH")
            .with_description("CSV export times out");
        let Plan::Mutate(Action::Create(new)) = plan(&intent, None).unwrap() else {
            panic!("expected create");
        };
        assert_eq!(new.status, Some(Status::InProgress));
        assert_eq!(new.priority, Some(Priority::High));
        assert_eq!(
            new.description.general_notes.as_deref(),
            Some("CSV export times out")
        );
    }

    #[test]
    fn create_without_title_is_unfulfillable() {
        let err = plan(&Intent::new(IntentKind::Create), None).unwrap_err();
        assert!(matches!(err, Error::Unfulfillable { .. }));
    }

    #[test]
    fn assign_unassigned_clears() {
        let intent = Intent::new(IntentKind::Assign)
            .with_target("SF-002")
            .with_assignee("unassigned");
        assert_eq!(
            plan(&intent, None).unwrap(),
            Plan::Mutate(Action::Update(
                IssueUpdate::new(sf(2)).with_assignee(FieldPatch::Cleared)
            ))
        );
    }

    #[test]
    fn context_fills_missing_target() {
        let intent = Intent::new(IntentKind::UpdatePriority).with_priority("Critical");
        assert_eq!(
            plan(&intent, Some("SF-009")).unwrap(),
            Plan::Mutate(Action::Update(
                IssueUpdate::new(sf(9)).with_priority(Priority::Critical)
            ))
        );
    }

    #[test]
    fn explicit_target_beats_context() {
        let intent = Intent::new(IntentKind::UpdateTitle)
            .with_target("SF-001")
            .with_title("Renamed");
        let Plan::Mutate(Action::Update(update)) = plan(&intent, Some("SF-005")).unwrap() else {
            panic!("expected update");
        };
        assert_eq!(update.id, sf(1));
    }

    #[test]
    fn placeholder_target_is_ignored() {
        let intent = Intent::new(IntentKind::UpdateStatus)
            .with_target("N/A")
            .with_status("Done");
        assert!(matches!(
            plan(&intent, None),
            Err(Error::Unfulfillable { .. })
        ));
    }

    #[test]
    fn missing_field_is_unfulfillable() {
        for kind in [
            IntentKind::Assign,
            IntentKind::UpdateStatus,
            IntentKind::UpdatePriority,
            IntentKind::UpdateTitle,
            IntentKind::UpdateDescription,
        ] {
            let intent = Intent::new(kind.clone()).with_target("SF-001");
            assert!(
                matches!(plan(&intent, None), Err(Error::Unfulfillable { .. })),
                "{} should need a value",
                kind
            );
        }
    }

    #[test]
    fn invalid_status_is_unfulfillable() {
        let intent = Intent::new(IntentKind::UpdateStatus)
            .with_target("SF-001")
            .with_status("Finished-ish");
        let err = plan(&intent, None).unwrap_err();
        assert!(err.to_string().contains("unknown status"));
    }

    #[test]
    fn malformed_target_is_unfulfillable() {
        let intent = Intent::new(IntentKind::UpdateTitle)
            .with_target("the login one")
            .with_title("x");
        assert!(matches!(
            plan(&intent, None),
            Err(Error::Unfulfillable { .. })
        ));
    }

    #[test]
    fn description_goes_to_general_notes() {
        let intent = Intent::new(IntentKind::UpdateDescription)
            .with_target("SF-003")
            .with_description("Repro on Safari only");
        let Plan::Mutate(Action::Update(update)) = plan(&intent, None).unwrap() else {
            panic!("expected update");
        };
        assert_eq!(
            update.description.general_notes,
            FieldPatch::Set("Repro on Safari only".to_string())
        );
        assert_eq!(update.description.api_name, FieldPatch::Unchanged);
    }

    #[test]
    fn unknown_kind_with_target_is_acknowledged() {
        let intent = Intent::new(IntentKind::Other("close".into())).with_target("SF-004");
        assert_eq!(
            plan(&intent, None).unwrap(),
            Plan::Acknowledge("SF-004".to_string())
        );
    }

    #[test]
    fn unknown_kind_without_target_is_nothing() {
        let intent = Intent::new(IntentKind::Other("hello".into()));
        assert_eq!(plan(&intent, None).unwrap(), Plan::Nothing);
    }
}
