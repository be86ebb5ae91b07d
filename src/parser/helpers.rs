//! Token navigation helpers shared by the expression and statement parsers.

use super::error::ParseError;
use super::Parser;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// Safe to call at any position: `new` requires a non-empty token list
    /// ending in `Eof`, and [`advance`](Self::advance) never steps past it.
    pub(super) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(super) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(super) fn is_eof(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_eof() {
            self.pos += 1;
        }
        self.previous()
    }

    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// Returns `true` if the current token is any of `kinds`, without
    /// consuming it.
    pub(super) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        !self.is_eof() && kinds.contains(&self.current_kind())
    }

    /// Consumes the current token and returns `true` if it matches any of
    /// `kinds`; otherwise leaves the cursor untouched and returns `false`.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if self.check_any(kinds) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to be `kind` and consumes it, or records a
    /// parse error at the current token.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.current_kind() == kind {
            Ok(self.advance())
        } else {
            Err(ParseError::at(self.current(), message))
        }
    }

    /// The "missing-left-operand" diagnostic (spec §4.2): called before
    /// descending into a binary production, when the current token is one
    /// of that production's own operators.
    pub(super) fn check_missing_left_operand(&self, kinds: &[TokenKind]) -> Result<(), ParseError> {
        if self.check_any(kinds) {
            let tok = self.current();
            Err(ParseError::at(
                tok,
                format!("{}: left operand required", tok.lexeme),
            ))
        } else {
            Ok(())
        }
    }

    /// Panic-mode synchronization (spec §4.2): advance past the error token,
    /// then keep advancing until just past the next `;` or until the next
    /// token starts a new declaration.
    pub(super) fn synchronize(&mut self) {
        self.advance();
        while !self.is_eof() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            if self.check_any(&[
                TokenKind::Class,
                TokenKind::Fun,
                TokenKind::Var,
                TokenKind::For,
                TokenKind::If,
                TokenKind::While,
                TokenKind::Print,
                TokenKind::Return,
            ]) {
                return;
            }
            self.advance();
        }
    }
}
