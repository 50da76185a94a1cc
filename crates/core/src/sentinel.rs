//! Placeholder literals that stand for "no selection".
//!
//! Select inputs cannot submit "nothing", so the form layer uses sentinel
//! literals, and the interpreter reports `unassigned` when a command removes
//! an assignee. These are resolved to `None` at ingestion and never stored.

/// Form-layer literal for "no assignee".
pub const UNASSIGNED_SENTINEL: &str = "__UNASSIGNED__";

/// Interpreter literal for "no assignee".
pub const INTERPRETER_UNASSIGNED: &str = "unassigned";

/// Form-layer literal for "method not applicable".
pub const METHOD_NOT_APPLICABLE_SENTINEL: &str = "__NOT_APPLICABLE__";

/// A set of literals that resolve to "absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelSet {
    literals: &'static [&'static str],
}

impl SentinelSet {
    /// Sentinels used for the assignee relation.
    pub const ASSIGNEE: SentinelSet = SentinelSet {
        literals: &[UNASSIGNED_SENTINEL, INTERPRETER_UNASSIGNED],
    };

    /// Sentinels used for the description method.
    pub const METHOD: SentinelSet = SentinelSet {
        literals: &[METHOD_NOT_APPLICABLE_SENTINEL],
    };

    /// Only the empty string resolves to absent.
    pub const NONE: SentinelSet = SentinelSet { literals: &[] };

    /// True if `raw` is one of this set's literals (case-insensitive, trimmed).
    pub fn contains(&self, raw: &str) -> bool {
        let trimmed = raw.trim();
        self.literals.iter().any(|l| l.eq_ignore_ascii_case(trimmed))
    }
}

/// Resolve a raw UI value to an optional one.
///
/// Empty or whitespace-only text and the set's literals become `None`;
/// anything else passes through trimmed.
pub fn resolve(raw: &str, sentinels: SentinelSet) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || sentinels.contains(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// [`resolve`] for an already-optional value.
pub fn resolve_opt(raw: Option<&str>, sentinels: SentinelSet) -> Option<String> {
    raw.and_then(|r| resolve(r, sentinels))
}
