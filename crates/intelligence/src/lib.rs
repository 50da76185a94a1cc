//! Command interpretation for Sprintflow
//!
//! Free-text commands are turned into structured intents by an external
//! model. This crate owns that boundary:
//! - Intent / IntentKind: The structured result of interpreting a command
//! - Interpreter trait: Object-safe seam the orchestrator calls
//! - ApiInterpreter: OpenAI-compatible chat completions client
//! - StaticInterpreter / FnInterpreter: Deterministic stand-ins
//!
//! # Usage
//!
//! ```ignore
//! use sprintflow_intelligence::{ApiInterpreter, InterpretRequest, Interpreter};
//!
//! let interpreter = ApiInterpreter::new("http://localhost:11434/v1", "qwen3:4b", None, 10_000);
//! let intent = interpreter.interpret(&InterpretRequest::new("Assign SF-002 to Alice", None))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod interpret;
pub mod llm_client;

pub use interpret::{
    ApiInterpreter, FnInterpreter, Intent, IntentKind, InterpretError, InterpretRequest,
    Interpreter, StaticInterpreter, CONTEXT_PLACEHOLDER,
};
