//! Recursive-descent parser (spec §4.2).
//!
//! Turns a token stream into an AST. Two entry points: [`Parser::parse_program`]
//! for `parse`/`run` mode (a sequence of declarations), and
//! [`Parser::parse_expression`] for `evaluate` mode (a single expression,
//! optionally followed by a trailing `;`).

mod error;
mod expr;
mod helpers;
mod stmt;

pub use error::ParseError;

use crate::ast::{Expr as ExprNode, Stmt};
use crate::token::Token;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token list must not be empty");
        Parser {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parses a full program: a sequence of declarations up to `Eof`,
    /// synchronizing and continuing past each parse error.
    pub fn parse_program(mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();
        while !self.is_eof() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    tracing::debug!(%err, "parse error");
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }
        tracing::debug!(
            statement_count = statements.len(),
            error_count = self.errors.len(),
            "parsing complete"
        );
        (statements, self.errors)
    }

    /// Parses a single expression, for `evaluate` mode. Accepts (and
    /// discards) one trailing `;`, then requires `Eof`.
    pub fn parse_expression(mut self) -> Result<ExprNode, Vec<ParseError>> {
        let result = self.expression();
        match result {
            Ok(expr) if self.errors.is_empty() => {
                self.match_any(&[crate::token::TokenKind::Semicolon]);
                Ok(expr)
            }
            Ok(_) => Err(self.errors),
            Err(err) => {
                self.errors.push(err);
                Err(self.errors)
            }
        }
    }
}
