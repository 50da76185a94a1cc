//! Command interpretation
//!
//! This module provides the `Interpreter` trait and the types that cross the
//! boundary between free-text commands and the orchestrator: the request
//! (`command` plus a context identifier) and the structured [`Intent`].
//!
//! # Intent kinds
//!
//! | Kind | Required fields |
//! |------|-----------------|
//! | `create` | `title` |
//! | `assign` | target id, `assignee` |
//! | `update-status` | target id, `status` |
//! | `update-priority` | target id, `priority` |
//! | `update-title` | target id, `title` |
//! | `update-description` | target id, `description` |
//!
//! Any other kind string is preserved as [`IntentKind::Other`].

pub mod api;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod stub;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use api::ApiInterpreter;
pub use error::InterpretError;
pub use stub::{FnInterpreter, StaticInterpreter};

/// Context identifier sent when the caller has no issue in focus.
pub const CONTEXT_PLACEHOLDER: &str = "N/A";

/// Action kind reported by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentKind {
    /// Create a new issue
    Create,
    /// Set or clear the assignee
    Assign,
    /// Change the status
    UpdateStatus,
    /// Change the priority
    UpdatePriority,
    /// Rename
    UpdateTitle,
    /// Replace the general notes
    UpdateDescription,
    /// Anything the orchestrator has no handler for
    Other(String),
}

impl IntentKind {
    /// Canonical wire name.
    pub fn as_str(&self) -> &str {
        match self {
            IntentKind::Create => "create",
            IntentKind::Assign => "assign",
            IntentKind::UpdateStatus => "update-status",
            IntentKind::UpdatePriority => "update-priority",
            IntentKind::UpdateTitle => "update-title",
            IntentKind::UpdateDescription => "update-description",
            IntentKind::Other(kind) => kind,
        }
    }

    /// Parse a kind, ignoring case and treating `_` and spaces as `-`.
    ///
    /// Never fails: unrecognised kinds become [`IntentKind::Other`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let folded: String = raw
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match folded.as_str() {
            "create" => IntentKind::Create,
            "assign" => IntentKind::Assign,
            "update-status" => IntentKind::UpdateStatus,
            "update-priority" => IntentKind::UpdatePriority,
            "update-title" => IntentKind::UpdateTitle,
            "update-description" => IntentKind::UpdateDescription,
            _ => IntentKind::Other(raw.to_string()),
        }
    }

    /// True for every kind that needs a target identifier.
    pub fn targets_existing(&self) -> bool {
        !matches!(self, IntentKind::Create | IntentKind::Other(_))
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for IntentKind {
    fn from(raw: String) -> Self {
        IntentKind::parse(&raw)
    }
}

impl From<IntentKind> for String {
    fn from(kind: IntentKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Structured result of interpreting a command.
///
/// Field values are raw text exactly as the interpreter reported them (after
/// trimming); enum parsing and sentinel resolution happen in the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Action kind
    pub kind: IntentKind,
    /// Identifier found in the command text or taken from the context
    #[serde(default, alias = "target_id", skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    /// Extracted title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Extracted description text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Extracted assignee name (may be the interpreter's "unassigned" marker)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Extracted status label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Extracted priority label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl Intent {
    /// An intent of the given kind with no extracted fields.
    pub fn new(kind: IntentKind) -> Self {
        Self {
            kind,
            target_id: None,
            title: None,
            description: None,
            assignee: None,
            status: None,
            priority: None,
        }
    }

    /// Set the target identifier.
    pub fn with_target(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the assignee.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the status label.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the priority label.
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Trim every field and drop the ones that end up empty.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            kind: self.kind,
            target_id: clean(self.target_id),
            title: clean(self.title),
            description: clean(self.description),
            assignee: clean(self.assignee),
            status: clean(self.status),
            priority: clean(self.priority),
        }
    }
}

/// Input to an interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretRequest {
    /// Free-text command
    pub command: String,
    /// Issue in focus, or [`CONTEXT_PLACEHOLDER`]
    pub context_id: String,
}

impl InterpretRequest {
    /// Build a request, substituting the placeholder for a missing or blank context.
    pub fn new(command: impl Into<String>, context_id: Option<&str>) -> Self {
        let context_id = context_id
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(CONTEXT_PLACEHOLDER);
        Self {
            command: command.into(),
            context_id: context_id.to_string(),
        }
    }

    /// The context identifier, unless it is the placeholder.
    pub fn context(&self) -> Option<&str> {
        if self.context_id.eq_ignore_ascii_case(CONTEXT_PLACEHOLDER) {
            None
        } else {
            Some(&self.context_id)
        }
    }
}

/// Trait for command interpreters.
///
/// Implementations map a free-text command to a structured intent. The trait
/// is object-safe for use as `Arc<dyn Interpreter>`.
///
/// # Implementations
///
/// - `ApiInterpreter`: calls an OpenAI-compatible endpoint
/// - `StaticInterpreter`: returns a canned intent
/// - `FnInterpreter`: wraps a closure
pub trait Interpreter: Send + Sync {
    /// Interpret one command.
    fn interpret(&self, request: &InterpretRequest) -> Result<Intent, InterpretError>;
}
