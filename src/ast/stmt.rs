//! Statement nodes.

use super::expr::Expr;
use crate::token::Token;

/// A statement, as a closed tagged variant.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An expression evaluated for its side effects; `has_semicolon`
    /// records whether a trailing `;` was present (spec §3, used by the
    /// printer and by "evaluate" mode's no-semicolon convention).
    Expression { inner: Expr, has_semicolon: bool },
    /// `print <inner>;`.
    Print(Expr),
    /// `var <name> ( = <initializer> )? ;`.
    Var { name: Token, initializer: Option<Expr> },
    /// `{ <statements> }`.
    Block(Vec<Stmt>),
}
