//! API-based interpreter using an OpenAI-compatible endpoint
//!
//! Calls `{endpoint}/chat/completions` with the interpretation prompt and
//! parses the reply into an [`Intent`].

use sprintflow_engine::ModelConfig;

use super::parser::parse_intent;
use super::{Intent, InterpretError, InterpretRequest, Interpreter};

/// Interpreter that calls an OpenAI-compatible chat completions endpoint.
///
/// Works with Ollama, vLLM, llama.cpp server, OpenAI, and other compatible providers.
#[allow(dead_code)] // fields used behind #[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct ApiInterpreter {
    /// Full URL to the chat completions endpoint
    url: String,
    /// Model name to request
    model: String,
    /// Optional bearer token
    api_key: Option<String>,
    /// Request timeout; exceeding it is a terminal failure
    timeout: std::time::Duration,
    /// Sampling temperature (default: 0.0)
    temperature: f32,
}

/// Response token cap; one intent object fits well within it.
#[cfg(feature = "api")]
const INTERPRET_MAX_TOKENS: u32 = 300;

impl ApiInterpreter {
    /// Create a new ApiInterpreter.
    ///
    /// `endpoint` should be the base URL (e.g. "http://localhost:11434/v1").
    /// The `/chat/completions` path is appended automatically.
    pub fn new(endpoint: &str, model: &str, api_key: Option<&str>, timeout_ms: u64) -> Self {
        let base = endpoint.trim_end_matches('/');
        let url = format!("{}/chat/completions", base);
        Self {
            url,
            model: model.to_string(),
            api_key: api_key.map(|s| s.to_string()),
            timeout: std::time::Duration::from_millis(timeout_ms),
            temperature: 0.0,
        }
    }

    /// Build from the `[model]` section of `sprintflow.toml`.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(
            &config.endpoint,
            &config.model,
            config.api_key.as_deref(),
            config.timeout_ms,
        )
        .with_temperature(config.temperature)
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Endpoint URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make the HTTP call and return the raw response text.
    #[cfg(feature = "api")]
    fn call_api(&self, request: &InterpretRequest) -> Result<String, InterpretError> {
        use super::prompt::build_messages;

        let body = serde_json::json!({
            "model": self.model,
            "messages": build_messages(&request.command, &request.context_id),
            "temperature": self.temperature,
            "max_tokens": INTERPRET_MAX_TOKENS,
        });

        crate::llm_client::call_chat_completions(
            &self.url,
            self.api_key.as_deref(),
            self.timeout,
            &body,
        )
    }

    /// Placeholder for when the `api` feature is not enabled.
    #[cfg(not(feature = "api"))]
    fn call_api(&self, _request: &InterpretRequest) -> Result<String, InterpretError> {
        Err(InterpretError::Unavailable(
            "feature 'api' not enabled".to_string(),
        ))
    }
}

impl Interpreter for ApiInterpreter {
    fn interpret(&self, request: &InterpretRequest) -> Result<Intent, InterpretError> {
        let started = std::time::Instant::now();
        let result = self.call_api(request).and_then(|text| parse_intent(&text));
        match &result {
            Ok(intent) => tracing::debug!(
                target: "sprintflow::interpret",
                model = %self.model,
                kind = %intent.kind,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Interpreted command"
            ),
            Err(e) => tracing::warn!(
                target: "sprintflow::interpret",
                model = %self.model,
                error = %e,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Interpreter call failed"
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_construction() {
        let interpreter = ApiInterpreter::new("http://localhost:11434/v1", "qwen3:4b", None, 5000);
        assert_eq!(interpreter.url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn strips_trailing_slash() {
        let interpreter = ApiInterpreter::new("http://localhost:11434/v1/", "qwen3:4b", None, 5000);
        assert_eq!(interpreter.url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn from_config_copies_settings() {
        let config = ModelConfig {
            endpoint: "http://example.test/v1".to_string(),
            model: "m".to_string(),
            api_key: Some("secret".to_string()),
            timeout_ms: 1234,
            temperature: 0.2,
        };
        let interpreter = ApiInterpreter::from_config(&config);
        assert_eq!(interpreter.url(), "http://example.test/v1/chat/completions");
        assert_eq!(interpreter.api_key.as_deref(), Some("secret"));
        assert_eq!(interpreter.timeout, std::time::Duration::from_millis(1234));
        assert_eq!(interpreter.temperature, 0.2);
    }

    #[cfg(feature = "api")]
    #[test]
    fn unreachable_endpoint_is_terminal_error() {
        // Port 9 (discard) on localhost is closed on test machines.
        let interpreter = ApiInterpreter::new("http://127.0.0.1:9/v1", "m", None, 500);
        let err = interpreter
            .interpret(&InterpretRequest::new("Create \"x\"", None))
            .unwrap_err();
        assert!(matches!(
            err,
            InterpretError::Network(_) | InterpretError::Timeout
        ));
    }
}
