//! AST printer (spec §4.5).
//!
//! Renders expressions as parenthesized prefix text and statements as their
//! `parse`-mode line. Used by `parse` mode and by tests that want a
//! structural comparison without pattern-matching the tree by hand.

use crate::ast::{Expr, Stmt};

/// Renders `expr` as `(<op> <child1> <child2> …)`, `(group <inner>)`, a bare
/// literal for `Literal`/`Variable`, or `(? : test then else)` for
/// `Ternary`.
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => value.display_ast(),
        Expr::Grouping(inner) => parenthesize("group", &[inner]),
        Expr::Unary { op, right } => parenthesize(&op.lexeme, &[right]),
        Expr::Binary { left, op, right } => parenthesize(&op.lexeme, &[left, right]),
        Expr::Ternary { test, then, else_, .. } => parenthesize("? :", &[test, then, else_]),
        Expr::Variable(name) => name.lexeme.clone(),
        Expr::Assign { name, value } => parenthesize(&format!("= {}", name.lexeme), &[value]),
    }
}

fn parenthesize(head: &str, exprs: &[&Expr]) -> String {
    let mut out = String::from("(");
    out.push_str(head);
    for e in exprs {
        out.push(' ');
        out.push_str(&print_expr(e));
    }
    out.push(')');
    out
}

/// Renders `stmt` the way `parse` mode prints one line per top-level
/// statement.
pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression {
            inner,
            has_semicolon,
        } => {
            if *has_semicolon {
                format!("{};", print_expr(inner))
            } else {
                print_expr(inner)
            }
        }
        Stmt::Print(inner) => format!("print {}", print_expr(inner)),
        Stmt::Var { name, initializer } => match initializer {
            Some(init) => format!("var {} = {}", name.lexeme, print_expr(init)),
            None => format!("var {}", name.lexeme),
        },
        Stmt::Block(statements) => {
            let mut out = String::from("{ ");
            for s in statements {
                out.push_str(&print_stmt(s));
                out.push(' ');
            }
            out.push('}');
            out
        }
    }
}
