//! Command bar handler.

use std::sync::Arc;

use sprintflow_engine::Database;
use sprintflow_intelligence::Interpreter;

use crate::orchestrator;
use crate::{Error, Output, Result};

/// Handle Interpret command.
pub fn interpret(
    db: &Database,
    interpreter: Option<&Arc<dyn Interpreter>>,
    command: String,
    context_id: Option<String>,
) -> Result<Output> {
    let interpreter = interpreter.ok_or_else(|| Error::Interpreter {
        reason: "no interpreter configured; add a [model] section to sprintflow.toml"
            .to_string(),
    })?;
    let outcome = orchestrator::resolve_command(
        db,
        interpreter.as_ref(),
        &command,
        context_id.as_deref(),
    )?;
    Ok(Output::CommandResolved(outcome))
}
