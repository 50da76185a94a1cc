//! Aggregated, field-keyed validation failures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One problem with one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProblem {
    /// Form field name, e.g. `status` or `description_responseCode`
    pub field: String,
    /// Human-readable explanation
    pub message: String,
}

/// Every problem found in a submission.
///
/// Validation never stops at the first problem, so the caller can show a
/// complete diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    problems: Vec<FieldProblem>,
}

impl ValidationReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// A report with a single problem.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.push(field, message);
        report
    }

    /// Record a problem.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.problems.push(FieldProblem {
            field: field.into(),
            message: message.into(),
        });
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Recorded problems, in discovery order.
    pub fn problems(&self) -> &[FieldProblem] {
        &self.problems
    }

    /// True if some problem is keyed by `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.problems.iter().any(|p| p.field == field)
    }

    /// `Ok(value)` if empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationReport> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", p.field, p.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_aggregates_in_order() {
        let mut report = ValidationReport::new();
        report.push("title", "must not be empty");
        report.push("status", "unknown status 'Nope'");
        assert_eq!(report.problems().len(), 2);
        assert!(report.has_field("status"));
        assert_eq!(
            report.to_string(),
            "title: must not be empty; status: unknown status 'Nope'"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationReport::new().into_result(5), Ok(5));
        assert!(ValidationReport::single("id", "required").into_result(5).is_err());
    }
}
