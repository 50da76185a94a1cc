//! Deterministic interpreters for tests and offline use

use parking_lot::Mutex;

use super::{Intent, InterpretError, InterpretRequest, Interpreter};

/// Interpreter that always answers with the same result.
///
/// Every request it receives is recorded so callers can assert on what the
/// orchestrator sent.
#[derive(Debug)]
pub struct StaticInterpreter {
    answer: Result<Intent, InterpretError>,
    requests: Mutex<Vec<InterpretRequest>>,
}

impl StaticInterpreter {
    /// Answer every command with `intent`.
    pub fn new(intent: Intent) -> Self {
        Self {
            answer: Ok(intent),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every command with `error`.
    pub fn failing(error: InterpretError) -> Self {
        Self {
            answer: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<InterpretRequest> {
        self.requests.lock().clone()
    }
}

impl Interpreter for StaticInterpreter {
    fn interpret(&self, request: &InterpretRequest) -> Result<Intent, InterpretError> {
        self.requests.lock().push(request.clone());
        self.answer.clone()
    }
}

/// Interpreter backed by a closure.
pub struct FnInterpreter<F> {
    f: F,
}

impl<F> FnInterpreter<F>
where
    F: Fn(&InterpretRequest) -> Result<Intent, InterpretError> + Send + Sync,
{
    /// Wrap `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Interpreter for FnInterpreter<F>
where
    F: Fn(&InterpretRequest) -> Result<Intent, InterpretError> + Send + Sync,
{
    fn interpret(&self, request: &InterpretRequest) -> Result<Intent, InterpretError> {
        (self.f)(request)
    }
}
