//! HTTP helper for OpenAI-compatible chat completions endpoints.
//!
//! One request, one answer: there is no retry here. A failed or timed-out
//! call is reported once and the caller decides whether to resubmit.

use crate::interpret::InterpretError;

/// Maximum number of response characters echoed back in parse errors.
const ERROR_SNIPPET_CHARS: usize = 200;

/// Call an OpenAI-compatible chat completions endpoint and extract the response content.
///
/// Handles:
/// - ureq agent construction with a global timeout
/// - Bearer token auth header
/// - Mapping HTTP status failures to [`InterpretError::Model`]
/// - Parsing `choices[0].message.content` from the response
#[cfg(feature = "api")]
pub fn call_chat_completions(
    url: &str,
    api_key: Option<&str>,
    timeout: std::time::Duration,
    body: &serde_json::Value,
) -> Result<String, InterpretError> {
    let body_bytes = serde_json::to_vec(body)
        .map_err(|e| InterpretError::Parse(format!("failed to serialize request: {}", e)))?;

    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build();
    let agent = ureq::Agent::new_with_config(config);

    let mut request = agent.post(url).header("Content-Type", "application/json");
    if let Some(key) = api_key {
        request = request.header("Authorization", &format!("Bearer {}", key));
    }

    let mut response = request.send(&body_bytes[..]).map_err(map_transport_error)?;

    let response_text = response
        .body_mut()
        .read_to_string()
        .map_err(map_transport_error)?;

    extract_content(&response_text)
}

#[cfg(feature = "api")]
fn map_transport_error(e: ureq::Error) -> InterpretError {
    match e {
        ureq::Error::Timeout(_) => InterpretError::Timeout,
        ureq::Error::StatusCode(code) => {
            InterpretError::Model(format!("endpoint returned HTTP {}", code))
        }
        other => {
            let msg = other.to_string();
            if msg.contains("timed out") || msg.contains("Timeout") {
                InterpretError::Timeout
            } else {
                InterpretError::Network(msg)
            }
        }
    }
}

/// Pull `choices[0].message.content` out of a chat completions response body.
///
/// An `error` object in the body (as returned by most providers on bad
/// requests) becomes [`InterpretError::Model`].
pub fn extract_content(response_text: &str) -> Result<String, InterpretError> {
    let json: serde_json::Value = serde_json::from_str(response_text)
        .map_err(|e| InterpretError::Parse(format!("invalid JSON response: {}", e)))?;

    if let Some(err) = json.get("error") {
        let message = err
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(InterpretError::Model(message));
    }

    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            InterpretError::Parse(format!(
                "unexpected response format: {}",
                snippet(response_text)
            ))
        })
}

fn snippet(text: &str) -> &str {
    match text.char_indices().nth(ERROR_SNIPPET_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
