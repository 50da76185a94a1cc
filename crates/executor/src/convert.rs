//! Error conversion from internal error types.
//!
//! This module provides conversions from validation reports, engine and
//! interpreter errors to the executor's [`Error`] type.

use sprintflow_core::ValidationReport;
use sprintflow_engine::EngineError;
use sprintflow_intelligence::InterpretError;

use crate::Error;

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Error::Validation {
            problems: report.problems().to_vec(),
        }
    }
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::IssueNotFound { id } => Error::IssueNotFound { id: id.to_string() },
            EngineError::Validation(report) => report.into(),
            EngineError::AssigneeExists { name } => Error::AssigneeExists { name },
            EngineError::AssigneeNotFound { name } => Error::AssigneeNotFound { name },
            EngineError::IdSpaceExhausted { prefix } => Error::IdSpaceExhausted { prefix },
            EngineError::Config { reason } => Error::Config { reason },
        }
    }
}

impl From<InterpretError> for Error {
    fn from(err: InterpretError) -> Self {
        Error::Interpreter {
            reason: err.to_string(),
        }
    }
}

/// Convert an engine result into an executor result.
pub(crate) fn convert_result<T>(r: Result<T, EngineError>) -> crate::Result<T> {
    r.map_err(Error::from)
}
