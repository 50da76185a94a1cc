//! Test modules for the executor crate.


use std::sync::Arc;

use chrono::{TimeZone, Utc};
use sprintflow_core::ManualClock;
use sprintflow_engine::{Database, IssueBook, TrackerConfig};
use sprintflow_intelligence::Interpreter;

use crate::Executor;

/// A store with a manual clock and the given registered assignees.
pub(crate) fn create_test_db(assignees: &[&str]) -> (Arc<Database>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    ));
    let config = TrackerConfig {
        assignees: assignees.iter().map(|s| s.to_string()).collect(),
        ..TrackerConfig::default()
    };
    let db = Database::build(config, clock.clone(), IssueBook::new()).unwrap();
    (db, clock)
}

/// An executor without an interpreter.
pub(crate) fn create_test_executor() -> Executor {
    let (db, _) = create_test_db(&["Alice", "Bob"]);
    Executor::new(db)
}

/// An executor whose command bar uses `interpreter`.
pub(crate) fn create_test_executor_with(
    interpreter: Arc<dyn Interpreter>,
) -> (Executor, Arc<ManualClock>) {
    let (db, clock) = create_test_db(&["Alice", "Bob"]);
    (Executor::with_interpreter(db, interpreter), clock)
}
