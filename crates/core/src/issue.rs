//! The issue record and its embedded description.
//!
//! An [`Issue`] is the single record type of the store. Every optional field
//! uses `Option` for "absent"; placeholder literals coming from a form or an
//! interpreter are resolved before a value reaches this module.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{HttpMethod, IssueId, Priority, Status};

/// Structured description of the API call an issue is about.
///
/// `payload` and `response` are opaque text; they are never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    /// Name of the API under discussion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    /// Request method, absent when not applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    /// Request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Response body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Response status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<i64>,
    /// Screenshot or attachment reference (usually a `data:` URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data_uri: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_notes: Option<String>,
}

impl Description {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Description::default()
    }
}

/// A tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Identifier, unique and never reused
    pub id: IssueId,
    /// Non-empty title
    pub title: String,
    /// Workflow state
    pub status: Status,
    /// Urgency
    pub priority: Priority,
    /// Registry name of the assignee, absent when unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Surface that created the issue
    pub reporter: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last successful mutation time, never before `created_at`
    pub updated_at: DateTime<Utc>,
    /// Embedded description
    #[serde(default)]
    pub description: Description,
    /// Free-form labels
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub labels: BTreeSet<String>,
}

impl Issue {
    /// Refresh `updated_at`, never moving it backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

/// Split a comma-separated label list into a trimmed, deduplicated set.
pub fn parse_labels(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(at: DateTime<Utc>) -> Issue {
        Issue {
            id: IssueId::new("SF", 1).unwrap(),
            title: "Fix login".to_string(),
            status: Status::ToDo,
            priority: Priority::Medium,
            assignee: None,
            reporter: "Web Form".to_string(),
            created_at: at,
            updated_at: at,
            description: Description::default(),
            labels: BTreeSet::new(),
        }
    }

    #[test]
    fn test_touch_moves_forward_only() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let mut issue = sample(t1);
        issue.touch(t0);
        assert_eq!(issue.updated_at, t1);
        let t2 = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        issue.touch(t2);
        assert_eq!(issue.updated_at, t2);
        assert_eq!(issue.created_at, t1);
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut issue = sample(t0);
        issue.description.api_name = Some("login".to_string());
        issue.description.response_code = Some(401);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["id"], "SF-001");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["description"]["apiName"], "login");
        assert_eq!(json["description"]["responseCode"], 401);
        assert!(json.get("assignee").is_none());
        assert!(json["description"].get("method").is_none());
    }

    #[test]
    fn test_parse_labels() {
        let labels = parse_labels(" bug, ui ,,bug, backend ");
        let got: Vec<_> = labels.iter().map(String::as_str).collect();
        assert_eq!(got, vec!["backend", "bug", "ui"]);
        assert!(parse_labels("  ").is_empty());
    }

    #[test]
    fn test_description_is_empty() {
        let mut d = Description::default();
        assert!(d.is_empty());
        d.general_notes = Some("n".to_string());
        assert!(!d.is_empty());
    }
}
