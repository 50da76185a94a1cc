//! Tracker configuration via `sprintflow.toml`
//!
//! On first open a default file is written next to the data; to change
//! settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use std::path::Path;

use sprintflow_core::types::validate_prefix;

use crate::error::{EngineError, EngineResult};

/// Config file name placed in the tracker's data directory.
pub const CONFIG_FILE_NAME: &str = "sprintflow.toml";

/// Configuration for the external command interpreter endpoint.
///
/// Persisted in `sprintflow.toml` under the `[model]` section. Without it the
/// command bar is unavailable; form submissions keep working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// OpenAI-compatible API endpoint (e.g. "http://localhost:11434/v1")
    pub endpoint: String,
    /// Model name (e.g. "qwen3:4b")
    pub model: String,
    /// Optional API key for authenticated endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Sampling temperature (default: 0.0)
    #[serde(default)]
    pub temperature: f32,
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Tracker configuration loaded from `sprintflow.toml`.
///
/// # Example
///
/// ```toml
/// id_prefix = "SF"
/// form_reporter = "Web Form"
/// command_reporter = "AI Assistant"
/// assignees = ["Alice", "Bob"]
///
/// # [model]
/// # endpoint = "http://localhost:11434/v1"
/// # model = "qwen3:4b"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Prefix of minted identifiers.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    /// Reporter recorded on issues created through forms.
    #[serde(default = "default_form_reporter")]
    pub form_reporter: String,
    /// Reporter recorded on issues created through the command bar.
    #[serde(default = "default_command_reporter")]
    pub command_reporter: String,
    /// Names registered as assignees on startup.
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Optional interpreter endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelConfig>,
}

fn default_id_prefix() -> String {
    "SF".to_string()
}

fn default_form_reporter() -> String {
    "Web Form".to_string()
}

fn default_command_reporter() -> String {
    "AI Assistant".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            form_reporter: default_form_reporter(),
            command_reporter: default_command_reporter(),
            assignees: Vec::new(),
            model: None,
        }
    }
}

impl TrackerConfig {
    /// Reject values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed id prefix, a blank reporter, or a
    /// blank model endpoint/name.
    pub fn validate(&self) -> EngineResult<()> {
        validate_prefix(&self.id_prefix).map_err(|reason| {
            EngineError::config(format!("id_prefix in {}: {}", CONFIG_FILE_NAME, reason))
        })?;
        if self.form_reporter.trim().is_empty() || self.command_reporter.trim().is_empty() {
            return Err(EngineError::config("reporter names must not be blank"));
        }
        if let Some(model) = &self.model {
            if model.endpoint.trim().is_empty() || model.model.trim().is_empty() {
                return Err(EngineError::config(
                    "[model] requires a non-empty endpoint and model",
                ));
            }
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Sprintflow configuration
#
# Prefix of issue identifiers (PREFIX-001, PREFIX-002, ...).
# ASCII letters and digits only.
id_prefix = "SF"

# Reporter recorded on new issues, per submission surface.
form_reporter = "Web Form"
command_reporter = "AI Assistant"

# Assignees registered at startup.
assignees = []

# Command interpreter endpoint (OpenAI-compatible chat completions).
# Uncomment and configure to enable the command bar.
# [model]
# endpoint = "http://localhost:11434/v1"
# model = "qwen3:4b"
# api_key = "your-api-key"      # optional
# timeout_ms = 10000             # optional, default 10000
# temperature = 0.0              # optional, default 0.0
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: TrackerConfig = toml::from_str(&content).map_err(|e| {
            EngineError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        tracing::debug!(
            target: "sprintflow::config",
            path = %path.display(),
            prefix = %config.id_prefix,
            has_model = config.model.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> EngineResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                EngineError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> EngineResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EngineError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            EngineError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = TrackerConfig::default();
        assert_eq!(config.id_prefix, "SF");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_toml_parses_to_default() {
        let config: TrackerConfig = toml::from_str(TrackerConfig::default_toml()).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn parse_model_section_with_defaults() {
        let config: TrackerConfig = toml::from_str(
            "[model]\nendpoint = \"http://localhost:11434/v1\"\nmodel = \"qwen3:4b\"\n",
        )
        .unwrap();
        let model = config.model.unwrap();
        assert_eq!(model.timeout_ms, 10_000);
        assert_eq!(model.temperature, 0.0);
        assert!(model.api_key.is_none());
    }

    #[test]
    fn invalid_prefix_rejected() {
        let config: TrackerConfig = toml::from_str("id_prefix = \"S-F\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_model_endpoint_rejected() {
        let config: TrackerConfig =
            toml::from_str("[model]\nendpoint = \"\"\nmodel = \"m\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        TrackerConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = TrackerConfig::from_file(&path).unwrap();
        assert_eq!(config.id_prefix, "SF");
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "id_prefix = \"BUG\"\n").unwrap();

        TrackerConfig::write_default_if_missing(&path).unwrap();
        let config = TrackerConfig::from_file(&path).unwrap();
        assert_eq!(config.id_prefix, "BUG");
    }

    #[test]
    fn write_to_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = TrackerConfig {
            assignees: vec!["Alice".to_string()],
            model: Some(ModelConfig {
                endpoint: "http://localhost:8080/v1".to_string(),
                model: "m".to_string(),
                api_key: Some("k".to_string()),
                timeout_ms: 2500,
                temperature: 0.5,
            }),
            ..TrackerConfig::default()
        };
        config.write_to_file(&path).unwrap();
        assert_eq!(TrackerConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn from_file_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let err = TrackerConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
