//! Core types for the issue store
//!
//! This module defines the foundational value types:
//! - IssueId: `PREFIX-NNN` identifier of an issue
//! - Status: Closed set of workflow states
//! - Priority: Closed set of urgency levels
//! - HttpMethod: Closed set of request methods recorded in a description

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Width of the zero-padded numeric suffix of an [`IssueId`].
pub const ID_PAD_WIDTH: usize = 3;

/// Identifier of an issue, e.g. `SF-007`.
///
/// An IssueId is a prefix of ASCII letters and digits, a single `-`, and a
/// decimal suffix. Identifiers are minted by
/// [`IdGenerator`](crate::id_gen::IdGenerator); parsing accepts any
/// well-formed identifier regardless of prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueId {
    pub(crate) prefix: String,
    pub(crate) number: u64,
}

impl IssueId {
    /// Build an identifier from its parts.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIdentifier`] if the prefix is empty or not
    /// ASCII alphanumeric.
    pub fn new(prefix: &str, number: u64) -> Result<Self, Error> {
        validate_prefix(prefix).map_err(|reason| Error::InvalidIdentifier {
            value: format!("{}-{}", prefix, number),
            reason,
        })?;
        Ok(Self {
            prefix: prefix.to_string(),
            number,
        })
    }

    /// Parse an identifier.
    ///
    /// Leading and trailing whitespace is ignored. The prefix is compared
    /// case-sensitively elsewhere, so `sf-001` and `SF-001` are different ids.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        let invalid = |reason: &str| Error::InvalidIdentifier {
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let (prefix, digits) = trimmed
            .rsplit_once('-')
            .ok_or_else(|| invalid("expected PREFIX-NUMBER"))?;
        validate_prefix(prefix).map_err(|reason| invalid(&reason))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("suffix must be decimal digits"));
        }
        let number = digits
            .parse::<u64>()
            .map_err(|_| invalid("suffix out of range"))?;
        Ok(Self {
            prefix: prefix.to_string(),
            number,
        })
    }

    /// The prefix, e.g. `SF`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The numeric suffix, e.g. `7` for `SF-007`.
    pub fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:0width$}", self.prefix, self.number, width = ID_PAD_WIDTH)
    }
}

impl FromStr for IssueId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IssueId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<IssueId> for String {
    fn from(id: IssueId) -> Self {
        id.to_string()
    }
}

/// Check that an id prefix is non-empty ASCII alphanumeric.
pub fn validate_prefix(prefix: &str) -> Result<(), String> {
    if prefix.is_empty() {
        return Err("prefix must not be empty".to_string());
    }
    if !prefix.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(format!("prefix '{}' must be ASCII alphanumeric", prefix));
    }
    Ok(())
}

/// Normalize an enum label for lookup: lowercase, with spaces, `_` and `-`
/// removed.
fn fold_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical display label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Look up a member by label, ignoring case, spaces, `_` and `-`.
            pub fn parse(s: &str) -> Result<Self, Error> {
                let folded = fold_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|m| fold_label(m.as_str()) == folded)
                    .ok_or_else(|| Error::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

closed_enum! {
    /// Workflow state of an issue.
    Status, "status" {
        /// Not started (default)
        ToDo => "To Do",
        /// Being worked on
        InProgress => "In Progress",
        /// Awaiting review
        InReview => "In Review",
        /// Finished
        Done => "Done",
        /// Waiting on something external
        Blocked => "Blocked",
    }
}

closed_enum! {
    /// Urgency of an issue.
    Priority, "priority" {
        /// Can wait
        Low => "Low",
        /// Normal (default)
        Medium => "Medium",
        /// Needs attention soon
        High => "High",
        /// Drop everything
        Critical => "Critical",
    }
}

closed_enum! {
    /// HTTP method of the API call an issue describes.
    HttpMethod, "method" {
        /// GET
        Get => "GET",
        /// POST
        Post => "POST",
        /// PUT
        Put => "PUT",
        /// PATCH
        Patch => "PATCH",
        /// DELETE
        Delete => "DELETE",
        /// HEAD
        Head => "HEAD",
        /// OPTIONS
        Options => "OPTIONS",
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::ToDo
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_id_display_pads_to_three_digits() {
        let id = IssueId::new("SF", 7).unwrap();
        assert_eq!(id.to_string(), "SF-007");
    }

    #[test]
    fn test_issue_id_display_wide_numbers_print_in_full() {
        let id = IssueId::new("SF", 1234).unwrap();
        assert_eq!(id.to_string(), "SF-1234");
    }

    #[test]
    fn test_issue_id_parse() {
        let id = IssueId::parse(" SF-042 ").unwrap();
        assert_eq!(id.prefix(), "SF");
        assert_eq!(id.number(), 42);
        assert_eq!(id.to_string(), "SF-042");
    }

    #[test]
    fn test_issue_id_parse_rejects_malformed() {
        for bad in ["", "SF", "SF-", "-001", "SF-00a", "S F-001", "SF-+1"] {
            assert!(IssueId::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_issue_id_serde_as_string() {
        let id = IssueId::new("SF", 3).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"SF-003\"");
        let back: IssueId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_status_defaults_and_labels() {
        assert_eq!(Status::default(), Status::ToDo);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Status::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_enum_parse_is_lenient_about_case_and_separators() {
        assert_eq!(Status::parse("to do").unwrap(), Status::ToDo);
        assert_eq!(Status::parse("IN_PROGRESS").unwrap(), Status::InProgress);
        assert_eq!(Status::parse("in-review").unwrap(), Status::InReview);
        assert_eq!(Priority::parse("critical").unwrap(), Priority::Critical);
        assert_eq!(HttpMethod::parse("post").unwrap(), HttpMethod::Post);
    }

    #[test]
    fn test_enum_parse_unknown_names_kind() {
        let err = Status::parse("Unknown").unwrap_err();
        assert!(err.to_string().contains("status"));
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_enum_serde_uses_labels() {
        let json = serde_json::to_string(&Status::ToDo).unwrap();
        assert_eq!(json, "\"To Do\"");
        let back: Priority = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(back, Priority::High);
    }
}
