//! Output parser for LLM interpretation responses
//!
//! Extracts one JSON intent object from model output. Tolerant: markdown code
//! fences and prose around the object are ignored, blank fields are dropped.

use super::{Intent, InterpretError};

/// Parse model output into an intent.
///
/// Tolerant parsing:
/// - A ```` ```json ```` fence, if present, is unwrapped
/// - Text before the first `{` and after the matching `}` is ignored
/// - Unknown keys are ignored; blank values count as absent
///
/// # Errors
///
/// [`InterpretError::Parse`] if no JSON object can be found or it has no `kind`.
pub fn parse_intent(text: &str) -> Result<Intent, InterpretError> {
    let body = strip_fence(text);
    let object = extract_object(body)
        .ok_or_else(|| InterpretError::Parse("no JSON object in model reply".to_string()))?;
    let intent: Intent = serde_json::from_str(object)
        .map_err(|e| InterpretError::Parse(format!("invalid intent: {}", e)))?;
    let intent = intent.normalized();
    if intent.kind.as_str().trim().is_empty() {
        return Err(InterpretError::Parse("intent has an empty kind".to_string()));
    }
    Ok(intent)
}

fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };
    let after = &trimmed[start + 3..];
    // Skip the info string ("json") up to the end of the fence line.
    let after = match after.find('\n') {
        Some(nl) => &after[nl + 1..],
        None => after,
    };
    match after.find("```") {
        Some(end) => &after[..end],
        None => after,
    }
}

/// Slice of the first balanced `{...}` object, honouring string literals.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
