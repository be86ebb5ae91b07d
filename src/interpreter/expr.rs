//! Expression evaluation (spec §4.4 "Expression semantics").

use super::{Interpreter, RuntimeError};
use crate::ast::Expr;
use crate::token::TokenKind;
use crate::value::Value;

type VResult = Result<Value, RuntimeError>;

impl Interpreter {
    /// Evaluates a single expression against the interpreter's current
    /// environment. Public so `evaluate` mode can drive it directly without
    /// going through [`Interpreter::interpret`].
    pub fn evaluate(&mut self, expr: &Expr) -> VResult {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, right } => self.eval_unary(op, right),
            Expr::Binary { left, op, right } => self.eval_binary(left, op, right),
            Expr::Ternary {
                test,
                qmark,
                then,
                else_,
            } => self.eval_ternary(test, qmark, then, else_),
            Expr::Variable(name) => {
                let value = self.env.borrow().get(name)?;
                Ok(value)
            }
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            }
        }
    }

    fn eval_unary(&mut self, op: &crate::token::Token, right: &Expr) -> VResult {
        let right = self.evaluate(right)?;
        match op.kind {
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::new("Operand must be a number.", op.line)),
            },
            other => unreachable!("unary operator token kind {other:?} not produced by the parser"),
        }
    }

    fn eval_binary(&mut self, left: &Expr, op: &crate::token::Token, right: &Expr) -> VResult {
        // Full evaluation of both sides, left-to-right, before dispatch
        // (spec §4.4: "no short-circuit").
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op.kind {
            TokenKind::Minus => numeric(left, right, op.line, |a, b| a - b),
            TokenKind::Star => numeric(left, right, op.line, |a, b| a * b),
            TokenKind::Slash => numeric(left, right, op.line, |a, b| a / b),
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                _ => Err(RuntimeError::new(
                    "Operands must be numbers or strings.",
                    op.line,
                )),
            },
            TokenKind::Less => comparison(left, right, op.line, |a, b| a < b),
            TokenKind::LessEqual => comparison(left, right, op.line, |a, b| a <= b),
            TokenKind::Greater => comparison(left, right, op.line, |a, b| a > b),
            TokenKind::GreaterEqual => comparison(left, right, op.line, |a, b| a >= b),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            TokenKind::Comma => Ok(right),
            other => unreachable!("binary operator token kind {other:?} not produced by the parser"),
        }
    }

    fn eval_ternary(
        &mut self,
        test: &Expr,
        qmark: &crate::token::Token,
        then: &Expr,
        else_: &Expr,
    ) -> VResult {
        match self.evaluate(test)? {
            Value::Bool(true) => self.evaluate(then),
            Value::Bool(false) => self.evaluate(else_),
            _ => Err(RuntimeError::new("Operand must be a boolean.", qmark.line)),
        }
    }
}

fn numeric(left: Value, right: Value, line: usize, f: impl Fn(f64, f64) -> f64) -> VResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
        _ => Err(RuntimeError::new("Operands must be numbers.", line)),
    }
}

fn comparison(left: Value, right: Value, line: usize, f: impl Fn(f64, f64) -> bool) -> VResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(f(a, b))),
        _ => Err(RuntimeError::new("Operands must be numbers.", line)),
    }
}
