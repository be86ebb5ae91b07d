//! Lexical analysis error type.

use std::fmt;

/// An error produced while scanning source text.
///
/// Scanning never aborts on an error (spec §4.1): each `ScanError` is
/// collected into the scanner's error list and scanning continues from the
/// next character.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    /// The 1-based line the error was detected on.
    pub line: usize,
    /// A human-readable description of the error.
    pub message: String,
}

impl ScanError {
    pub(super) fn unexpected_character(line: usize, c: char) -> Self {
        ScanError {
            line,
            message: format!("Unexpected character: {c}"),
        }
    }

    pub(super) fn unterminated_string(line: usize) -> Self {
        ScanError {
            line,
            message: "Unterminated string.".to_string(),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for ScanError {}
