//! High-level typed wrapper for the Executor.
//!
//! The [`Tracker`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```text
//! use sprintflow_executor::{FormFields, Tracker};
//!
//! let tracker = Tracker::open("/path/to/data")?;
//! tracker.add_assignee("Alice")?;
//!
//! let id = tracker.create_issue(FormFields::new().text("title", "Fix login"))?;
//! tracker.update_issue(
//!     FormFields::new().text("id", id.to_string()).text("assignee", "Alice"),
//! )?;
//! ```

mod assignees;
mod issues;

use std::path::Path;
use std::sync::Arc;

use sprintflow_engine::{Database, TrackerConfig};
use sprintflow_intelligence::Interpreter;

use crate::types::ActionResponse;
use crate::{Command, Executor, Result};

/// High-level typed wrapper for tracker operations.
pub struct Tracker {
    executor: Executor,
}

impl Tracker {
    /// Open a tracker configured from `<path>/sprintflow.toml`.
    ///
    /// The directory is created if needed and a default config file is
    /// written if none exists. If the config has a `[model]` section, the
    /// command bar uses that endpoint.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Database::open(path)?;
        Ok(Self::from_executor(Executor::new(db)))
    }

    /// An empty in-memory tracker with default configuration.
    ///
    /// No interpreter is configured; use [`Tracker::with_interpreter`] to
    /// enable free-text commands.
    pub fn cache() -> Result<Self> {
        let db = Database::cache()?;
        Ok(Self::from_executor(Executor::new(db)))
    }

    /// An empty in-memory tracker with the given configuration.
    pub fn with_config(config: TrackerConfig) -> Result<Self> {
        let db = Database::with_config(config)?;
        Ok(Self::from_executor(Executor::new(db)))
    }

    /// A tracker over an existing database and interpreter.
    pub fn with_interpreter(db: Arc<Database>, interpreter: Arc<dyn Interpreter>) -> Self {
        Self::from_executor(Executor::with_interpreter(db, interpreter))
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: Executor) -> Self {
        Self { executor }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Run any command and fold the result into a UI response.
    ///
    /// Never fails: errors become `success: false` responses.
    pub fn submit(&self, cmd: Command) -> ActionResponse {
        ActionResponse::from_result(&self.executor.execute(cmd))
    }
}
