//! The Executor - single entry point to the Sprintflow store.
//!
//! The Executor is a dispatcher that routes commands to their handlers and
//! converts results to outputs.

use std::sync::Arc;

use sprintflow_engine::Database;
use sprintflow_intelligence::{ApiInterpreter, Interpreter};
use tracing::debug;

use crate::handlers;
use crate::{Command, Output, Result};

/// The command executor - single entry point to the store.
///
/// The Executor holds a handle to the database and, optionally, an
/// interpreter for free-text commands. All issue state lives in the database.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads. Mutations are
/// serialized by the database's write lock.
///
/// # Example
///
/// ```ignore
/// use sprintflow_executor::{Command, Executor, FormFields};
/// use sprintflow_engine::Database;
///
/// let executor = Executor::new(Database::cache()?);
///
/// // Single command execution
/// let result = executor.execute(Command::IssueCreate {
///     fields: FormFields::new().text("title", "Fix login"),
/// })?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![
///     Command::IssueList,
///     Command::AssigneeList,
/// ]);
/// ```
pub struct Executor {
    db: Arc<Database>,
    interpreter: Option<Arc<dyn Interpreter>>,
}

impl Executor {
    /// Create a new executor wrapping a database.
    ///
    /// If the database configuration has a `[model]` section, free-text
    /// commands are sent to that endpoint.
    pub fn new(db: Arc<Database>) -> Self {
        let interpreter = db
            .config()
            .model
            .as_ref()
            .map(|m| Arc::new(ApiInterpreter::from_config(m)) as Arc<dyn Interpreter>);
        Self { db, interpreter }
    }

    /// Create an executor with an explicit interpreter.
    pub fn with_interpreter(db: Arc<Database>, interpreter: Arc<dyn Interpreter>) -> Self {
        Self {
            db,
            interpreter: Some(interpreter),
        }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(target: "sprintflow::executor", command = cmd.name(), "Executing");
        match cmd {
            // Forms
            Command::IssueCreate { fields } => handlers::issue::issue_create(&self.db, fields),
            Command::IssueUpdate { fields } => handlers::issue::issue_update(&self.db, fields),
            Command::IssueDelete { fields } => handlers::issue::issue_delete(&self.db, fields),

            // Typed actions
            Command::Apply { action } => handlers::issue::apply(&self.db, action),

            // Queries
            Command::IssueList => handlers::issue::issue_list(&self.db),
            Command::IssueGet { id } => handlers::issue::issue_get(&self.db, id),

            // Assignees
            Command::AssigneeList => handlers::assignee::assignee_list(&self.db),
            Command::AssigneeAdd { name } => handlers::assignee::assignee_add(&self.db, name),
            Command::AssigneeRemove { name } => {
                handlers::assignee::assignee_remove(&self.db, name)
            }

            // Command bar
            Command::Interpret {
                command,
                context_id,
            } => handlers::command::interpret(
                &self.db,
                self.interpreter.as_ref(),
                command,
                context_id,
            ),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Each command is executed independently; a failure does not stop the
    /// batch and does not roll back earlier commands.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let results = executor.execute_many(vec![cmd1, cmd2, cmd3]);
    /// // results[0] corresponds to cmd1, etc.
    /// ```
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// True if free-text commands can be interpreted.
    pub fn has_interpreter(&self) -> bool {
        self.interpreter.is_some()
    }
}
