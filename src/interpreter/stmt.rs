//! Statement execution (spec §4.4 "Statement semantics").

use super::{Interpreter, RuntimeError};
use crate::ast::Stmt;
use crate::environment::Environment;
use crate::value::Value;

impl Interpreter {
    pub(super) fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expression { inner, .. } => {
                self.evaluate(inner)?;
                Ok(())
            }
            Stmt::Print(inner) => {
                let value = self.evaluate(inner)?;
                println!("{}", value.display_runtime());
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.borrow_mut().define(name.lexeme.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => self.execute_block(statements),
        }
    }

    /// Runs `statements` in a fresh child environment, restoring the
    /// enclosing one on the way out whether the block succeeded or a
    /// runtime error aborted it partway through (spec §5: "push/pop must be
    /// exception-safe").
    fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        let child = Environment::new_child(&self.env);
        let previous = std::mem::replace(&mut self.env, child);

        let mut result = Ok(());
        for stmt in statements {
            result = self.execute(stmt);
            if result.is_err() {
                break;
            }
        }

        self.env = previous;
        result
    }
}
