//! Form validation: raw field maps to typed actions.
//!
//! Pure functions. Every problem in a submission is collected into one
//! [`ValidationReport`] keyed by form field name; nothing is looked up in the
//! store here (unknown assignees are caught when the action is applied).
//!
//! Update semantics per field:
//!
//! | Submitted | Effect |
//! |-----------|--------|
//! | key absent | unchanged |
//! | blank / sentinel | cleared (optional fields) or unchanged (status, priority) |
//! | value | set |
//!
//! The image follows its own rule: the clear flag wins, a non-empty value
//! replaces, anything else keeps the stored image.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sprintflow_core::{
    image_patch, parse_labels, resolve, Description, DescriptionPatch, FieldPatch, HttpMethod,
    IssueId, IssueUpdate, NewIssue, Priority, SentinelSet, Status, ValidationReport,
};

use crate::types::{fields, FieldValue, FormFields};

/// Content type recorded for uploads that did not report one.
const DEFAULT_BLOB_CONTENT_TYPE: &str = "application/octet-stream";

/// Validate a create submission.
pub fn validate_create(form: &FormFields) -> Result<NewIssue, ValidationReport> {
    let mut report = ValidationReport::new();
    let mut reader = Reader {
        form,
        report: &mut report,
    };

    let title = match reader.text(fields::TITLE) {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => {
            reader.report.push(fields::TITLE, "must not be empty");
            String::new()
        }
    };
    let status = reader.status();
    let priority = reader.priority();
    let assignee = reader
        .text(fields::ASSIGNEE)
        .and_then(|a| resolve(a, SentinelSet::ASSIGNEE));
    let labels = reader
        .text(fields::LABELS)
        .map(parse_labels)
        .unwrap_or_default();

    let description = Description {
        api_name: reader
            .text(fields::DESCRIPTION_API_NAME)
            .and_then(|v| resolve(v, SentinelSet::NONE)),
        method: reader.method().flatten(),
        payload: reader.opaque(fields::DESCRIPTION_PAYLOAD),
        response: reader.opaque(fields::DESCRIPTION_RESPONSE),
        response_code: reader.response_code().flatten(),
        image_data_uri: match reader.image_patch() {
            FieldPatch::Set(uri) => Some(uri),
            FieldPatch::Unchanged | FieldPatch::Cleared => None,
        },
        general_notes: reader.opaque(fields::DESCRIPTION_GENERAL_NOTES),
    };

    report.into_result(NewIssue {
        title,
        status,
        priority,
        assignee,
        description,
        labels,
    })
}

/// Validate an update submission. The target comes from the `id` field.
pub fn validate_update(form: &FormFields) -> Result<IssueUpdate, ValidationReport> {
    let mut report = ValidationReport::new();
    let mut reader = Reader {
        form,
        report: &mut report,
    };

    let id = reader.issue_id(fields::ID);

    let title = match reader.text(fields::TITLE) {
        Some(t) if t.trim().is_empty() => {
            reader.report.push(fields::TITLE, "must not be empty");
            None
        }
        other => other.map(|t| t.trim().to_string()),
    };
    let status = reader.status();
    let priority = reader.priority();
    let assignee = match reader.text(fields::ASSIGNEE) {
        Some(a) => FieldPatch::from_option(resolve(a, SentinelSet::ASSIGNEE)),
        None => FieldPatch::Unchanged,
    };
    let labels = reader.text(fields::LABELS).map(parse_labels);

    let description = DescriptionPatch {
        api_name: reader.patch(fields::DESCRIPTION_API_NAME, true),
        method: match reader.method() {
            Some(m) => FieldPatch::from_option(m),
            None => FieldPatch::Unchanged,
        },
        payload: reader.patch(fields::DESCRIPTION_PAYLOAD, false),
        response: reader.patch(fields::DESCRIPTION_RESPONSE, false),
        response_code: match reader.response_code() {
            Some(c) => FieldPatch::from_option(c),
            None => FieldPatch::Unchanged,
        },
        image_data_uri: reader.image_patch(),
        general_notes: reader.patch(fields::DESCRIPTION_GENERAL_NOTES, false),
    };

    let Some(id) = id else {
        return Err(report);
    };
    report.into_result(IssueUpdate {
        id,
        title,
        status,
        priority,
        assignee,
        description,
        labels,
    })
}

/// Validate a delete submission. The target comes from the `issueId` field.
pub fn validate_delete(form: &FormFields) -> Result<IssueId, ValidationReport> {
    let mut report = ValidationReport::new();
    let id = Reader {
        form,
        report: &mut report,
    }
    .issue_id(fields::ISSUE_ID);
    match id {
        Some(id) if report.is_empty() => Ok(id),
        _ => Err(report),
    }
}

/// Encode an upload as a `data:` URI.
pub fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    let content_type = match content_type.trim() {
        "" => DEFAULT_BLOB_CONTENT_TYPE,
        ct => ct,
    };
    format!("data:{};base64,{}", content_type, BASE64.encode(bytes))
}

/// Reads fields out of a form, recording problems as it goes.
struct Reader<'a, 'r> {
    form: &'a FormFields,
    report: &'r mut ValidationReport,
}

impl<'a> Reader<'a, '_> {
    /// Text value of a text-only field. Uploads are reported and ignored.
    fn text(&mut self, name: &str) -> Option<&'a str> {
        match self.form.get(name)? {
            FieldValue::Text(s) => Some(s.as_str()),
            FieldValue::Blob { .. } => {
                self.report.push(name, "expected text, got a file upload");
                None
            }
        }
    }

    /// Opaque text kept verbatim unless blank.
    fn opaque(&mut self, name: &str) -> Option<String> {
        self.text(name)
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
    }

    /// Patch for an optional text field: absent keeps, blank clears.
    fn patch(&mut self, name: &str, trim: bool) -> FieldPatch<String> {
        match self.text(name) {
            None => FieldPatch::Unchanged,
            Some(v) if v.trim().is_empty() => FieldPatch::Cleared,
            Some(v) if trim => FieldPatch::Set(v.trim().to_string()),
            Some(v) => FieldPatch::Set(v.to_string()),
        }
    }

    fn issue_id(&mut self, name: &str) -> Option<IssueId> {
        match self.text(name).map(str::trim) {
            None | Some("") => {
                self.report.push(name, "is required");
                None
            }
            Some(raw) => match IssueId::parse(raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    self.report.push(name, e.to_string());
                    None
                }
            },
        }
    }

    /// Present and non-blank status; unknown labels are problems.
    fn status(&mut self) -> Option<Status> {
        let raw = self.text(fields::STATUS).filter(|s| !s.trim().is_empty())?;
        match Status::parse(raw) {
            Ok(status) => Some(status),
            Err(e) => {
                self.report.push(fields::STATUS, e.to_string());
                None
            }
        }
    }

    fn priority(&mut self) -> Option<Priority> {
        let raw = self.text(fields::PRIORITY).filter(|s| !s.trim().is_empty())?;
        match Priority::parse(raw) {
            Ok(priority) => Some(priority),
            Err(e) => {
                self.report.push(fields::PRIORITY, e.to_string());
                None
            }
        }
    }

    /// `None` when not submitted; `Some(None)` for blank or not-applicable.
    fn method(&mut self) -> Option<Option<HttpMethod>> {
        let raw = self.text(fields::DESCRIPTION_METHOD)?;
        let Some(value) = resolve(raw, SentinelSet::METHOD) else {
            return Some(None);
        };
        match HttpMethod::parse(&value) {
            Ok(method) => Some(Some(method)),
            Err(e) => {
                self.report.push(fields::DESCRIPTION_METHOD, e.to_string());
                None
            }
        }
    }

    /// `None` when not submitted; `Some(None)` for blank. Never zero by default.
    fn response_code(&mut self) -> Option<Option<i64>> {
        let raw = self.text(fields::DESCRIPTION_RESPONSE_CODE)?.trim();
        if raw.is_empty() {
            return Some(None);
        }
        match raw.parse::<i64>() {
            Ok(code) => Some(Some(code)),
            Err(_) => {
                self.report.push(
                    fields::DESCRIPTION_RESPONSE_CODE,
                    format!("'{}' is not an integer", raw),
                );
                None
            }
        }
    }

    fn image_patch(&mut self) -> FieldPatch<String> {
        let clear = self
            .text(fields::DESCRIPTION_IMAGE_CLEAR)
            .map(is_truthy)
            .unwrap_or(false);
        let value = match self.form.get(fields::DESCRIPTION_IMAGE) {
            None => None,
            Some(FieldValue::Text(s)) => Some(s.trim().to_string()),
            Some(FieldValue::Blob {
                content_type,
                bytes,
            }) if !bytes.is_empty() => Some(data_uri(content_type, bytes)),
            Some(FieldValue::Blob { .. }) => None,
        };
        image_patch(clear, value)
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}
