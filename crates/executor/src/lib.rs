//! # Sprintflow Executor
//!
//! The public API for Sprintflow - an issue tracker mutation engine that
//! accepts structured form submissions and free-text commands.
//!
//! This is the only crate users need to import. It provides:
//! - [`Tracker`] - The main typed interface
//! - [`FormFields`] - Raw form submissions
//! - [`Command`]/[`Output`] - Low-level command interface (for UIs and SDKs)
//! - [`ActionResponse`] - Tagged `{success, message, ...}` result for a UI
//!
//! ## Quick Start
//!
//! ```text
//! use sprintflow_executor::{FormFields, Tracker};
//!
//! let tracker = Tracker::open("/path/to/data")?;
//!
//! // Form submission
//! let id = tracker.create_issue(FormFields::new().text("title", "Fix login"))?;
//!
//! // Free-text command (needs a [model] section in sprintflow.toml)
//! let outcome = tracker.run_command("Set priority of SF-001 to High", None)?;
//! ```
//!
//! ## Submission paths
//!
//! | Path | Validation | Reporter |
//! |------|------------|----------|
//! | Form | every field checked, problems aggregated | `form_reporter` |
//! | Command bar | interpreter output checked per intent | `command_reporter` |
//!
//! Both paths end in the same mutation applier, under the store's write lock.

#![warn(missing_docs)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
mod output;
mod types;

pub mod orchestrator;
pub mod validate;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Tracker;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use types::*;

// Re-export domain types so users don't need sprintflow-core directly
pub use sprintflow_core::{
    Action, Description, DescriptionPatch, FieldPatch, FieldProblem, HttpMethod, Issue, IssueId,
    IssueUpdate, NewIssue, Priority, Status,
};

// Re-export store and configuration types so users don't need sprintflow-engine directly
pub use sprintflow_engine::{Database, ModelConfig, TrackerConfig};

// Re-export interpreter types so users don't need sprintflow-intelligence directly
pub use sprintflow_intelligence::{
    FnInterpreter, Intent, IntentKind, InterpretError, InterpretRequest, Interpreter,
    StaticInterpreter,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
