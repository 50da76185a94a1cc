//! Issue store for Sprintflow
//!
//! This crate owns all mutable tracker state:
//! - Database: Shared handle with a single-writer lock
//! - IssueBook: Issues (most recent first), assignee registry, id high-water marks
//! - Mutation applier: Commits create/update/delete actions atomically
//! - TrackerConfig: `sprintflow.toml` loading and defaults
//!
//! Callers never touch an [`IssueBook`] directly while the store is shared;
//! every mutation goes through [`Database::apply`] or the assignee methods.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod apply;
pub mod book;
pub mod config;
pub mod database;
pub mod error;
pub mod registry;

pub use apply::{Applied, ApplyContext};
pub use book::IssueBook;
pub use config::{ModelConfig, TrackerConfig, CONFIG_FILE_NAME};
pub use database::Database;
pub use error::{EngineError, EngineResult};
pub use registry::AssigneeRegistry;
