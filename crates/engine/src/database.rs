//! Database struct: the shared handle to an issue store.
//!
//! The Database owns one [`IssueBook`] behind a `parking_lot::RwLock` and
//! hands it to readers and to the mutation applier. It is the explicit store
//! handle passed to every operation; nothing in the crate keeps global state.
//!
//! ## Concurrency
//!
//! Single writer. Every mutation holds the write lock from the moment it
//! inspects the book until it commits, so no reader ever observes a partially
//! applied action.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use sprintflow_core::{Action, Clock, IdGenerator, Issue, IssueId, SystemClock};
use tracing::info;

use crate::apply::{self, Applied, ApplyContext};
use crate::book::IssueBook;
use crate::config::{TrackerConfig, CONFIG_FILE_NAME};
use crate::error::{EngineError, EngineResult};

/// Main database struct.
///
/// # Example
///
/// ```ignore
/// use sprintflow_engine::Database;
/// use sprintflow_core::{Action, NewIssue};
///
/// let db = Database::cache()?;
/// let applied = db.apply(Action::Create(NewIssue::titled("Fix login")), "Web Form")?;
/// assert_eq!(applied.id().to_string(), "SF-001");
/// ```
pub struct Database {
    book: RwLock<IssueBook>,
    generator: IdGenerator,
    clock: Arc<dyn Clock>,
    config: TrackerConfig,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("prefix", &self.generator.prefix())
            .field("issues", &self.book.read().issues().len())
            .finish()
    }
}

impl Database {
    /// Empty in-memory database with default configuration.
    pub fn cache() -> EngineResult<Arc<Self>> {
        Self::with_config(TrackerConfig::default())
    }

    /// Empty database with the given configuration and the system clock.
    pub fn with_config(config: TrackerConfig) -> EngineResult<Arc<Self>> {
        Self::build(config, Arc::new(SystemClock), IssueBook::new())
    }

    /// Database with an explicit clock and initial contents.
    ///
    /// Names in `config.assignees` are added to the book's registry; names
    /// already present are kept as they are.
    pub fn build(
        config: TrackerConfig,
        clock: Arc<dyn Clock>,
        mut book: IssueBook,
    ) -> EngineResult<Arc<Self>> {
        config.validate()?;
        let generator = IdGenerator::new(&config.id_prefix)
            .map_err(|e| EngineError::config(e.to_string()))?;
        for name in &config.assignees {
            match book.assignees_mut().add(name) {
                Ok(_) | Err(EngineError::AssigneeExists { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        info!(
            target: "sprintflow::engine",
            prefix = %config.id_prefix,
            issues = book.issues().len(),
            assignees = book.assignees().len(),
            "Opened issue store"
        );
        Ok(Arc::new(Self {
            book: RwLock::new(book),
            generator,
            clock,
            config,
        }))
    }

    /// Database configured from `<dir>/sprintflow.toml`, writing the default
    /// file first if it is missing.
    pub fn open<P: AsRef<Path>>(dir: P) -> EngineResult<Arc<Self>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| {
            EngineError::config(format!(
                "Failed to create data directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let path = dir.join(CONFIG_FILE_NAME);
        TrackerConfig::write_default_if_missing(&path)?;
        let config = TrackerConfig::from_file(&path)?;
        Self::with_config(config)
    }

    /// Active configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Current time according to this database's clock.
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Run `f` against a consistent view of the book.
    pub fn read<R>(&self, f: impl FnOnce(&IssueBook) -> R) -> R {
        f(&self.book.read())
    }

    /// Run `f` with exclusive access to the book.
    ///
    /// `f` must leave the book consistent when it returns an error; the
    /// applier only writes after all checks pass.
    pub fn write<R>(&self, f: impl FnOnce(&mut IssueBook) -> R) -> R {
        f(&mut self.book.write())
    }

    /// Validate `action` against the store and commit it, as one step.
    pub fn apply(&self, action: Action, reporter: &str) -> EngineResult<Applied> {
        let ctx = ApplyContext {
            generator: &self.generator,
            now: self.clock.now(),
            reporter,
        };
        self.write(|book| apply::apply(book, action, &ctx))
    }

    /// All issues, most recent first.
    pub fn list_issues(&self) -> Vec<Issue> {
        self.read(|book| book.issues().to_vec())
    }

    /// One issue by id.
    pub fn get_issue(&self, id: &IssueId) -> Option<Issue> {
        self.read(|book| book.get(id).cloned())
    }

    /// Registered assignees, sorted.
    pub fn list_assignees(&self) -> Vec<String> {
        self.read(|book| book.assignees().names())
    }

    /// Register an assignee, returning the stored name.
    pub fn add_assignee(&self, name: &str) -> EngineResult<String> {
        let added = self.write(|book| book.assignees_mut().add(name))?;
        info!(target: "sprintflow::engine", name = %added, "Added assignee");
        Ok(added)
    }

    /// Unregister an assignee and unassign every issue that referenced it.
    ///
    /// Returns the removed name and the ids of the issues that were
    /// unassigned.
    pub fn remove_assignee(&self, name: &str) -> EngineResult<(String, Vec<IssueId>)> {
        let now = self.clock.now();
        let (removed, touched) = self.write(|book| {
            let removed = book.assignees_mut().remove(name)?;
            let touched = book.unassign_all(&removed, now);
            Ok::<_, EngineError>((removed, touched))
        })?;
        info!(
            target: "sprintflow::engine",
            name = %removed,
            unassigned = touched.len(),
            "Removed assignee"
        );
        Ok((removed, touched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use sprintflow_core::{FieldPatch, IssueUpdate, ManualClock, NewIssue, Status};
    use tempfile::TempDir;

    fn manual_db(assignees: &[&str]) -> (Arc<Database>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        ));
        let config = TrackerConfig {
            assignees: assignees.iter().map(|s| s.to_string()).collect(),
            ..TrackerConfig::default()
        };
        let db = Database::build(config, clock.clone(), IssueBook::new()).unwrap();
        (db, clock)
    }

    #[test]
    fn cache_starts_empty() {
        let db = Database::cache().unwrap();
        assert!(db.list_issues().is_empty());
        assert!(db.list_assignees().is_empty());
    }

    #[test]
    fn config_seeds_registry() {
        let (db, _) = manual_db(&["Bob", "Alice", "alice"]);
        assert_eq!(db.list_assignees(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn apply_uses_clock_for_timestamps() {
        let (db, clock) = manual_db(&[]);
        let created = db
            .apply(Action::Create(NewIssue::titled("a")), "Web Form")
            .unwrap();
        let issue = db.get_issue(created.id()).unwrap();
        assert_eq!(issue.created_at, issue.updated_at);

        clock.advance(Duration::minutes(3));
        db.apply(
            Action::Update(IssueUpdate::new(created.id().clone()).with_status(Status::Done)),
            "Web Form",
        )
        .unwrap();
        let updated = db.get_issue(created.id()).unwrap();
        assert_eq!(updated.updated_at, issue.created_at + Duration::minutes(3));
        assert_eq!(updated.created_at, issue.created_at);
    }

    #[test]
    fn add_assignee_duplicate_reports_existing() {
        let (db, _) = manual_db(&["Alice"]);
        assert_eq!(
            db.add_assignee("ALICE").unwrap_err(),
            EngineError::AssigneeExists {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn remove_assignee_unassigns_issues() {
        let (db, clock) = manual_db(&["Alice"]);
        let mut new = NewIssue::titled("a");
        new.assignee = Some("Alice".to_string());
        let created = db.apply(Action::Create(new), "Web Form").unwrap();
        clock.advance(Duration::seconds(10));

        let (removed, touched) = db.remove_assignee("alice").unwrap();
        assert_eq!(removed, "Alice");
        assert_eq!(touched, vec![created.id().clone()]);
        let issue = db.get_issue(created.id()).unwrap();
        assert_eq!(issue.assignee, None);
        assert!(issue.updated_at > issue.created_at);
        assert!(db.list_assignees().is_empty());
    }

    #[test]
    fn remove_unknown_assignee_fails() {
        let (db, _) = manual_db(&[]);
        assert!(matches!(
            db.remove_assignee("Ghost"),
            Err(EngineError::AssigneeNotFound { .. })
        ));
    }

    #[test]
    fn failed_apply_leaves_store_untouched() {
        let (db, _) = manual_db(&["Alice"]);
        let created = db
            .apply(Action::Create(NewIssue::titled("a")), "Web Form")
            .unwrap();
        let before = db.list_issues();
        let err = db
            .apply(
                Action::Update(
                    IssueUpdate::new(created.id().clone())
                        .with_status(Status::Done)
                        .with_assignee(FieldPatch::Set("Zed".to_string())),
                ),
                "Web Form",
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert_eq!(db.list_issues(), before);
    }

    #[test]
    fn open_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let db = Database::open(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(db.config().id_prefix, "SF");
    }

    #[test]
    fn open_honours_custom_prefix() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "id_prefix = \"BUG\"\n").unwrap();
        let db = Database::open(dir.path()).unwrap();
        let created = db
            .apply(Action::Create(NewIssue::titled("a")), "Web Form")
            .unwrap();
        assert_eq!(created.id().to_string(), "BUG-001");
    }
}
