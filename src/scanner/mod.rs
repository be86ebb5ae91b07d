//! Lexical analysis.
//!
//! This module provides the [`Scanner`], which turns source text into an
//! ordered stream of [`Token`](crate::token::Token)s plus a list of
//! [`ScanError`]s. Scanning always consumes the entire input; a lexical
//! error never aborts scanning (spec §4.1).
//!
//! # Module Structure
//!
//! - [`error`] - The [`ScanError`] type
//! - `cursor` - Position tracking and one/two-character lookahead
//! - `tokens` - Per-token recognition (literals, identifiers, punctuation)
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - The token types this module produces
//! * [`crate::parser`] - Consumes the token stream this module produces

mod cursor;
mod error;
mod tokens;


pub use error::ScanError;

use crate::token::{Token, TokenKind};

/// Scans Lox-family source text into tokens.
///
/// The scanner is one-pass with one-character lookahead via [`peek`] and
/// two-character lookahead via [`peek_next`] (both crate-private). It is
/// designed to be used once per source file, via [`Scanner::scan`].
///
/// [`peek`]: Scanner::peek
/// [`peek_next`]: Scanner::peek_next
pub struct Scanner {
    /// The source text, as a contiguous run of Unicode scalar values.
    chars: Vec<char>,
    /// Index of the current (not yet consumed) character.
    current: usize,
    /// Current line number (1-based). Incremented on every `\n` consumed.
    line: usize,
}

impl Scanner {
    /// Creates a scanner over `source`.
    pub fn new(source: &str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
        }
    }

    /// Scans the entire input, returning the tokens (always ending in a
    /// single `Eof`) and any lexical errors encountered along the way.
    pub fn scan(mut self) -> (Vec<Token>, Vec<ScanError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            match self.scan_token() {
                Ok(Some(token)) => {
                    tracing::trace!(kind = ?token.kind, lexeme = %token.lexeme, "scanned token");
                    tokens.push(token);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(%err, "lexical error");
                    errors.push(err);
                }
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        tracing::debug!(
            token_count = tokens.len(),
            error_count = errors.len(),
            "scanning complete"
        );
        (tokens, errors)
    }
}
