//! Types shared by commands and outputs.
//!
//! - [`FormFields`]: raw form submissions (text and blob values)
//! - [`fields`]: the wire names of every form field
//! - [`CommandOutcome`]: what the command bar did with a free-text command
//! - [`ActionResponse`]: the tagged result handed back to a UI

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sprintflow_intelligence::Intent;

use crate::{Error, Output, Result};

/// Form field names as submitted by the UI.
pub mod fields {
    /// Issue title
    pub const TITLE: &str = "title";
    /// Status label
    pub const STATUS: &str = "status";
    /// Priority label
    pub const PRIORITY: &str = "priority";
    /// Assignee name or the unassigned sentinel
    pub const ASSIGNEE: &str = "assignee";
    /// Comma-separated labels
    pub const LABELS: &str = "labels";
    /// Description: API name
    pub const DESCRIPTION_API_NAME: &str = "description_apiName";
    /// Description: HTTP method or the not-applicable sentinel
    pub const DESCRIPTION_METHOD: &str = "description_method";
    /// Description: request payload
    pub const DESCRIPTION_PAYLOAD: &str = "description_payload";
    /// Description: response body
    pub const DESCRIPTION_RESPONSE: &str = "description_response";
    /// Description: integer response code
    pub const DESCRIPTION_RESPONSE_CODE: &str = "description_responseCode";
    /// Description: image (data URI text or an uploaded blob)
    pub const DESCRIPTION_IMAGE: &str = "description_imageDataUri";
    /// Description: explicit image removal flag
    pub const DESCRIPTION_IMAGE_CLEAR: &str = "description_imageDataUri_clear";
    /// Description: free-form notes
    pub const DESCRIPTION_GENERAL_NOTES: &str = "description_generalNotes";
    /// Target of an update
    pub const ID: &str = "id";
    /// Target of a delete
    pub const ISSUE_ID: &str = "issueId";
    /// Command bar text
    pub const COMMAND: &str = "command";
    /// Command bar context identifier
    pub const ISSUE_ID_CONTEXT: &str = "issueIdContext";
}

/// One submitted form value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text input
    Text(String),
    /// File upload
    Blob {
        /// MIME type reported by the client
        #[serde(rename = "contentType")]
        content_type: String,
        /// Raw file contents
        bytes: Vec<u8>,
    },
}

impl FieldValue {
    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Blob { .. } => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// A raw form submission: field name to value.
///
/// A key that is present means the field was submitted (even if blank); an
/// absent key means the field was not part of the form.
///
/// # Example
///
/// ```ignore
/// let form = FormFields::new()
///     .text("title", "Fix login")
///     .text("priority", "High")
///     .blob("description_imageDataUri", "image/png", png_bytes);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, FieldValue>);

impl FormFields {
    /// An empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text value.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Add a file upload.
    pub fn blob(
        mut self,
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.0.insert(
            name.into(),
            FieldValue::Blob {
                content_type: content_type.into(),
                bytes: bytes.into(),
            },
        );
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Value submitted for `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// True if `name` was submitted.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Submitted field names and values, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of submitted fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// What happened to a free-text command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The store was changed
    Applied,
    /// An issue was identified but the intent has no handler
    Acknowledged,
    /// Nothing to act on
    NoAction,
}

/// Result of resolving one free-text command.
///
/// Carries the structured intent regardless of whether the store changed, so
/// a caller can show what the interpreter understood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutcome {
    /// Whether the store changed
    pub status: OutcomeStatus,
    /// Affected or identified issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    /// User-facing summary
    pub message: String,
    /// The interpreter's answer
    pub intent: Intent,
}

/// Tagged result for a UI: success flag, message, and details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    /// True when the request succeeded (including no-op command outcomes)
    pub success: bool,
    /// User-facing summary
    pub message: String,
    /// Affected issue, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    /// One entry per problem; empty on success
    #[serde(default)]
    pub errors: Vec<String>,
    /// Interpreter answer, for command bar submissions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

impl ActionResponse {
    fn ok(message: String, issue_id: Option<String>) -> Self {
        Self {
            success: true,
            message,
            issue_id,
            errors: Vec::new(),
            intent: None,
        }
    }

    /// Fold an execution result into a response. Never fails.
    pub fn from_result(result: &Result<Output>) -> Self {
        match result {
            Ok(output) => Self::from_output(output),
            Err(err) => Self::from_error(err),
        }
    }

    fn from_output(output: &Output) -> Self {
        match output {
            Output::IssueCreated { id } => {
                Self::ok(format!("Issue {} created.", id), Some(id.to_string()))
            }
            Output::IssueUpdated { id } => {
                Self::ok(format!("Issue {} updated.", id), Some(id.to_string()))
            }
            Output::IssueDeleted { id } => {
                Self::ok(format!("Issue {} deleted.", id), Some(id.to_string()))
            }
            Output::AssigneeAdded { name } => Self::ok(format!("Assignee {} added.", name), None),
            Output::AssigneeRemoved { name, .. } => {
                Self::ok(format!("Assignee {} removed.", name), None)
            }
            Output::CommandResolved(outcome) => Self {
                success: true,
                message: outcome.message.clone(),
                issue_id: outcome.issue_id.clone(),
                errors: Vec::new(),
                intent: Some(outcome.intent.clone()),
            },
            Output::Issues(_)
            | Output::MaybeIssue(_)
            | Output::Assignees(_) => Self::ok("OK".to_string(), None),
        }
    }

    fn from_error(err: &Error) -> Self {
        let message = match err {
            Error::Validation { .. } => "Validation failed.".to_string(),
            other => other.to_string(),
        };
        let issue_id = match err {
            Error::IssueNotFound { id } => Some(id.clone()),
            _ => None,
        };
        Self {
            success: false,
            message,
            issue_id,
            errors: err.messages(),
            intent: None,
        }
    }
}
