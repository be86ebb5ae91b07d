//! Per-token recognition for the scanner.

use super::error::ScanError;
use super::Scanner;
use crate::token::{Literal, Token, TokenKind};

impl Scanner {
    /// Scans and returns the next token, or the error produced while trying.
    ///
    /// Returns `Ok(None)` for input that produces no token at all (skipped
    /// whitespace, a line comment, or an unterminated string once the error
    /// itself has already been recorded by the caller).
    pub(super) fn scan_token(&mut self) -> Result<Option<Token>, ScanError> {
        let start = self.current;
        let line = self.line;
        let c = self.advance();

        let kind = match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            '-' => Some(TokenKind::Minus),
            '+' => Some(TokenKind::Plus),
            ';' => Some(TokenKind::Semicolon),
            '*' => Some(TokenKind::Star),
            '?' => Some(TokenKind::Question),
            ':' => Some(TokenKind::Colon),
            '!' => Some(self.one_or_two('=', TokenKind::BangEqual, TokenKind::Bang)),
            '=' => Some(self.one_or_two('=', TokenKind::EqualEqual, TokenKind::Equal)),
            '<' => Some(self.one_or_two('=', TokenKind::LessEqual, TokenKind::Less)),
            '>' => Some(self.one_or_two('=', TokenKind::GreaterEqual, TokenKind::Greater)),
            '/' => {
                if self.advance_if('/') {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                    None
                } else {
                    Some(TokenKind::Slash)
                }
            }
            ' ' | '\t' | '\r' | '\n' => None,
            '"' => return self.scan_string(start, line).map(Some),
            c if c.is_ascii_digit() => return Ok(Some(self.scan_number(start, line))),
            c if c.is_ascii_alphabetic() || c == '_' => {
                return Ok(Some(self.scan_identifier(start, line)))
            }
            c => return Err(ScanError::unexpected_character(line, c)),
        };

        Ok(kind.map(|kind| {
            let lexeme = self.lexeme_from(start);
            Token::new(kind, lexeme, line)
        }))
    }

    /// Consumes a second `=` if present, returning `two` if it was and `one`
    /// otherwise.
    fn one_or_two(&mut self, second: char, two: TokenKind, one: TokenKind) -> TokenKind {
        if self.advance_if(second) {
            two
        } else {
            one
        }
    }

    /// Scans a string literal. The opening `"` has already been consumed.
    fn scan_string(&mut self, start: usize, line: usize) -> Result<Token, ScanError> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(ScanError::unterminated_string(line));
        }

        self.advance(); // closing quote
        let lexeme = self.lexeme_from(start);
        // Inner text: drop the surrounding quotes, no escape processing.
        let inner = lexeme[1..lexeme.len() - 1].to_string();
        Ok(Token::with_literal(
            TokenKind::String,
            lexeme,
            Literal::Str(inner),
            line,
        ))
    }

    /// Scans a number literal. The first digit has already been consumed.
    fn scan_number(&mut self, start: usize, line: usize) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume '.'
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = self.lexeme_from(start);
        let value: f64 = lexeme
            .parse()
            .expect("number lexeme scanned from digits and at most one dot must parse");
        Token::with_literal(TokenKind::Number, lexeme, Literal::Number(value), line)
    }

    /// Scans an identifier or keyword. The first character has already been
    /// consumed.
    fn scan_identifier(&mut self, start: usize, line: usize) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = self.lexeme_from(start);
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, line)
    }
}
