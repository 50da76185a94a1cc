//! End-to-end scenarios through the public `sprintflow` API.
//!
//! Each test drives a [`Tracker`] the way a UI would: form submissions,
//! free-text commands answered by a deterministic interpreter, and the
//! `ActionResponse` a caller renders.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use sprintflow::{
    ActionResponse, Command, Error, FormFields, Intent, IntentKind, Interpreter, OutcomeStatus,
    Priority, StaticInterpreter, Status, Tracker, TrackerConfig,
};
use sprintflow_core::ManualClock;
use sprintflow_engine::{Database, IssueBook};

fn tracker_with(interpreter: Option<Arc<dyn Interpreter>>) -> (Tracker, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap(),
    ));
    let config = TrackerConfig {
        assignees: vec!["Alice".into(), "Bob".into(), "Carol".into()],
        ..TrackerConfig::default()
    };
    let db = Database::build(config, clock.clone(), IssueBook::new()).unwrap();
    let tracker = match interpreter {
        Some(interpreter) => Tracker::with_interpreter(db, interpreter),
        None => Tracker::from_executor(sprintflow::Executor::new(db)),
    };
    (tracker, clock)
}

fn titled(title: &str) -> FormFields {
    FormFields::new().text("title", title)
}

#[test]
fn create_on_empty_store() {
    let (tracker, _) = tracker_with(None);
    let id = tracker.create_issue(titled("Fix login")).unwrap();
    assert_eq!(id.to_string(), "SF-001");

    let issue = tracker.get_issue("SF-001").unwrap().unwrap();
    assert_eq!(issue.status, Status::ToDo);
    assert_eq!(issue.priority, Priority::Medium);
    assert_eq!(issue.assignee, None);
}

#[test]
fn next_id_follows_highest() {
    let (tracker, _) = tracker_with(None);
    for title in ["one", "two", "three"] {
        tracker.create_issue(titled(title)).unwrap();
    }
    assert_eq!(
        tracker.create_issue(titled("four")).unwrap().to_string(),
        "SF-004"
    );
}

#[test]
fn command_assigns_to_nobody() {
    let interpreter: Arc<dyn Interpreter> = Arc::new(StaticInterpreter::new(
        Intent::new(IntentKind::Assign)
            .with_target("SF-002")
            .with_assignee("unassigned"),
    ));
    let (tracker, clock) = tracker_with(Some(interpreter));
    tracker.create_issue(titled("a")).unwrap();
    tracker
        .create_issue(titled("b").text("assignee", "Carol"))
        .unwrap();
    let before = tracker.get_issue("SF-002").unwrap().unwrap();
    clock.advance(Duration::minutes(1));

    let outcome = tracker
        .run_command("Assign SF-002 to unassigned", None)
        .unwrap();
    assert_eq!(outcome.status, OutcomeStatus::Applied);

    let after = tracker.get_issue("SF-002").unwrap().unwrap();
    assert_eq!(after.assignee, None);
    assert!(after.updated_at > before.updated_at);
}

#[test]
fn command_on_missing_issue_changes_nothing() {
    let interpreter: Arc<dyn Interpreter> = Arc::new(StaticInterpreter::new(
        Intent::new(IntentKind::UpdatePriority)
            .with_target("SF-050")
            .with_priority("High"),
    ));
    let (tracker, _) = tracker_with(Some(interpreter));
    tracker.create_issue(titled("a")).unwrap();
    let before = tracker.list_issues().unwrap();

    let err = tracker.run_command("Raise SF-050", None).unwrap_err();
    assert!(matches!(err, Error::IssueNotFound { .. }));
    assert_eq!(tracker.list_issues().unwrap(), before);
}

#[test]
fn unknown_status_fails_validation() {
    let (tracker, _) = tracker_with(None);
    let response = tracker.submit(Command::IssueCreate {
        fields: titled("x").text("status", "Unknown"),
    });
    assert!(!response.success);
    assert_eq!(response.message, "Validation failed.");
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].starts_with("status:"));
    assert!(tracker.list_issues().unwrap().is_empty());
}

#[test]
fn status_only_update_keeps_other_fields() {
    let (tracker, _) = tracker_with(None);
    tracker
        .create_issue(
            titled("Orders 500")
                .text("priority", "High")
                .text("assignee", "Bob")
                .text("labels", "api")
                .text("description_apiName", "orders")
                .text("description_responseCode", "500"),
        )
        .unwrap();
    let before = tracker.get_issue("SF-001").unwrap().unwrap();

    tracker
        .update_issue(FormFields::new().text("id", "SF-001").text("status", "In Review"))
        .unwrap();

    let after = tracker.get_issue("SF-001").unwrap().unwrap();
    assert_eq!(after.status, Status::InReview);
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.assignee, before.assignee);
    assert_eq!(after.labels, before.labels);
    assert_eq!(after.description, before.description);
}

#[test]
fn image_three_way_rule() {
    let (tracker, _) = tracker_with(None);
    tracker
        .create_issue(titled("x").text("description_imageDataUri", "data:image/png;base64,AA=="))
        .unwrap();
    let image = |t: &Tracker| {
        t.get_issue("SF-001")
            .unwrap()
            .unwrap()
            .description
            .image_data_uri
    };

    // Neither value nor flag: unchanged.
    tracker
        .update_issue(FormFields::new().text("id", "SF-001").text("title", "y"))
        .unwrap();
    assert_eq!(image(&tracker).as_deref(), Some("data:image/png;base64,AA=="));

    // New value: replaced.
    tracker
        .update_issue(
            FormFields::new()
                .text("id", "SF-001")
                .text("description_imageDataUri", "data:image/png;base64,BB=="),
        )
        .unwrap();
    assert_eq!(image(&tracker).as_deref(), Some("data:image/png;base64,BB=="));

    // Flag set: cleared.
    tracker
        .update_issue(
            FormFields::new()
                .text("id", "SF-001")
                .text("description_imageDataUri_clear", "on"),
        )
        .unwrap();
    assert_eq!(image(&tracker), None);
}

#[test]
fn deleted_ids_are_never_reused() {
    let (tracker, _) = tracker_with(None);
    tracker.create_issue(titled("a")).unwrap();
    tracker.create_issue(titled("b")).unwrap();
    tracker
        .delete_issue(FormFields::new().text("issueId", "SF-002"))
        .unwrap();
    assert_eq!(tracker.get_issue("SF-002").unwrap(), None);
    assert_eq!(tracker.create_issue(titled("c")).unwrap().to_string(), "SF-003");
}

#[test]
fn removing_an_assignee_unassigns_their_issues() {
    let (tracker, _) = tracker_with(None);
    tracker
        .create_issue(titled("a").text("assignee", "Alice"))
        .unwrap();
    tracker.create_issue(titled("b").text("assignee", "Bob")).unwrap();

    let unassigned = tracker.remove_assignee("Alice").unwrap();
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].to_string(), "SF-001");
    assert_eq!(tracker.get_issue("SF-001").unwrap().unwrap().assignee, None);
    assert_eq!(
        tracker.get_issue("SF-002").unwrap().unwrap().assignee.as_deref(),
        Some("Bob")
    );
    assert_eq!(tracker.list_assignees().unwrap(), vec!["Bob", "Carol"]);
}

#[test]
fn command_response_carries_intent() {
    let interpreter: Arc<dyn Interpreter> = Arc::new(StaticInterpreter::new(
        Intent::new(IntentKind::Create).with_title("Search is slow"),
    ));
    let (tracker, _) = tracker_with(Some(interpreter));

    let response: ActionResponse = tracker.submit(Command::Interpret {
        command: "New issue: search is slow".into(),
        context_id: None,
    });
    assert!(response.success);
    assert_eq!(response.issue_id.as_deref(), Some("SF-001"));
    assert_eq!(response.intent.map(|i| i.kind), Some(IntentKind::Create));
    assert_eq!(
        tracker.get_issue("SF-001").unwrap().unwrap().reporter,
        "AI Assistant"
    );
}

#[test]
fn open_writes_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = Tracker::open(dir.path()).unwrap();
    assert!(dir.path().join("sprintflow.toml").exists());
    assert!(!tracker.executor().has_interpreter());
    assert_eq!(tracker.create_issue(titled("a")).unwrap().to_string(), "SF-001");
}
