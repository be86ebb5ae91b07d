//! Runtime error type.

use std::fmt;

use crate::environment::UndefinedVariable;

/// The single error channel for evaluation failures (spec §4.4).
///
/// `Display` emits exactly the `<message>\n[line L]` text spec §4.4 pins.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub message: String,
    pub line: usize,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        RuntimeError {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.line)
    }
}

impl std::error::Error for RuntimeError {}

impl From<UndefinedVariable> for RuntimeError {
    fn from(err: UndefinedVariable) -> Self {
        let line = err.line;
        RuntimeError::new(err.to_string(), line)
    }
}
