//! Sprintflow - issue tracker mutation engine
//!
//! Sprintflow keeps a list of issues and accepts two kinds of change
//! requests: structured form submissions, and free-text commands that an
//! external language-model endpoint turns into a structured intent.
//!
//! # Quick Start
//!
//! ```ignore
//! use sprintflow::{FormFields, Tracker};
//!
//! // Create an in-memory tracker
//! let tracker = Tracker::cache()?;
//!
//! // Create an issue from a form
//! let id = tracker.create_issue(FormFields::new().text("title", "Fix login"))?;
//!
//! // Read it back
//! let issue = tracker.get_issue(&id.to_string())?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! The [`Tracker`] struct provides a convenient high-level interface.
//!
//! Internal implementation details (issue book, id generation, interpreter
//! client) are not exposed - only the executor API is public.

// Re-export the public API from sprintflow-executor
pub use sprintflow_executor::*;
