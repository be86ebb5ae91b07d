//! Parse error type.

use std::fmt;

use crate::token::{Token, TokenKind};

/// An error produced while parsing.
///
/// Formatted exactly as spec §4.2 pins: `<line> at end: <msg>` when the
/// offending token is `Eof`, else `<line> at '<lexeme>': <msg>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub line: usize,
    at_end: bool,
    lexeme: String,
    pub message: String,
}

impl ParseError {
    pub(super) fn at(token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            line: token.line,
            at_end: token.kind == TokenKind::Eof,
            lexeme: token.lexeme.clone(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.at_end {
            write!(f, "{} at end: {}", self.line, self.message)
        } else {
            write!(f, "{} at '{}': {}", self.line, self.lexeme, self.message)
        }
    }
}

impl std::error::Error for ParseError {}
