//! Error types for command interpretation

use thiserror::Error;

/// Errors that can occur while interpreting a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// HTTP request failed (network unreachable, connection refused, etc.)
    #[error("network error: {0}")]
    Network(String),
    /// Model reply could not be turned into an intent
    #[error("parse error: {0}")]
    Parse(String),
    /// Model request timed out
    #[error("interpreter request timed out")]
    Timeout,
    /// Model endpoint returned an error response
    #[error("model error: {0}")]
    Model(String),
    /// No interpreter is configured, or its client was compiled out
    #[error("interpreter unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            InterpretError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            InterpretError::Timeout.to_string(),
            "interpreter request timed out"
        );
        assert_eq!(
            InterpretError::Unavailable("no [model] section".into()).to_string(),
            "interpreter unavailable: no [model] section"
        );
    }
}
