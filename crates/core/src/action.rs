//! Typed, validated actions.
//!
//! Raw form submissions and interpreter intents are turned into one of these
//! before anything touches the store. Constructing an action performs no
//! registry lookups; those happen when the action is applied.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::issue::Description;
use crate::patch::{DescriptionPatch, FieldPatch};
use crate::types::{IssueId, Priority, Status};

/// Payload of a create action.
///
/// `status` and `priority` are `None` when the submission omitted them; the
/// applier fills in the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    /// Non-empty title
    pub title: String,
    /// Requested status, default `To Do`
    #[serde(default)]
    pub status: Option<Status>,
    /// Requested priority, default `Medium`
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Assignee name, already sentinel-resolved
    #[serde(default)]
    pub assignee: Option<String>,
    /// Initial description
    #[serde(default)]
    pub description: Description,
    /// Initial labels
    #[serde(default)]
    pub labels: BTreeSet<String>,
}

impl NewIssue {
    /// A create payload with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
            priority: None,
            assignee: None,
            description: Description::default(),
            labels: BTreeSet::new(),
        }
    }
}

/// Payload of an update action. Omitted fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    /// Target issue
    pub id: IssueId,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New status
    #[serde(default)]
    pub status: Option<Status>,
    /// New priority
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Assignee change
    #[serde(default)]
    pub assignee: FieldPatch<String>,
    /// Description merge
    #[serde(default)]
    pub description: DescriptionPatch,
    /// Replacement label set
    #[serde(default)]
    pub labels: Option<BTreeSet<String>>,
}

impl IssueUpdate {
    /// An update that changes nothing yet.
    pub fn new(id: IssueId) -> Self {
        Self {
            id,
            title: None,
            status: None,
            priority: None,
            assignee: FieldPatch::Unchanged,
            description: DescriptionPatch::default(),
            labels: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Change the assignee.
    pub fn with_assignee(mut self, assignee: FieldPatch<String>) -> Self {
        self.assignee = assignee;
        self
    }

    /// Merge into the description.
    pub fn with_description(mut self, patch: DescriptionPatch) -> Self {
        self.description = patch;
        self
    }

    /// True when applying this update would change no field.
    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_unchanged()
            && self.description.is_empty()
            && self.labels.is_none()
    }
}

/// A validated mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Create a new issue
    Create(NewIssue),
    /// Patch an existing issue
    Update(IssueUpdate),
    /// Remove an issue permanently
    Delete {
        /// Target issue
        id: IssueId,
    },
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Create(_) => "create",
            Action::Update(_) => "update",
            Action::Delete { .. } => "delete",
        }
    }
}
