//! Statement and declaration grammar (spec §4.2).
//!
//! ```text
//! program     → declaration* EOF
//! declaration → varDecl | statement
//! varDecl     → "var" IDENTIFIER ( "=" expression )? ";"
//! statement   → exprStmt | printStmt | block
//! printStmt   → "print" expression ";"
//! block       → "{" declaration* "}"
//! exprStmt    → expression ";"?
//! ```

use super::error::ParseError;
use super::Parser;
use crate::ast::Stmt;
use crate::token::TokenKind;

type SResult = Result<Stmt, ParseError>;

impl Parser {
    pub(super) fn declaration(&mut self) -> SResult {
        if self.match_any(&[TokenKind::Var]) {
            return self.var_declaration();
        }
        self.statement()
    }

    fn var_declaration(&mut self) -> SResult {
        let name = self
            .consume(TokenKind::Identifier, "Expect variable name.")?
            .clone();

        let initializer = if self.match_any(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> SResult {
        if self.match_any(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> SResult {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check_any(&[TokenKind::RightBrace]) && !self.is_eof() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.record_and_synchronize(err);
                }
            }
        }
        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// Pushes `err` onto the accumulated error list and synchronizes,
    /// mirroring `parse_program`'s recovery so one bad statement inside a
    /// block does not abort the rest of the file.
    fn record_and_synchronize(&mut self, err: ParseError) {
        self.errors.push(err);
        self.synchronize();
    }

    fn expression_statement(&mut self) -> SResult {
        let inner = self.expression()?;
        let has_semicolon = self.match_any(&[TokenKind::Semicolon]);
        Ok(Stmt::Expression {
            inner,
            has_semicolon,
        })
    }
}
