//! Tree-walking evaluator (spec §4.4).

mod error;
mod expr;
mod stmt;

pub use error::RuntimeError;

use crate::ast::Stmt;
use crate::environment::{Env, Environment};

/// Walks an AST against a live [`Environment`] chain.
///
/// One `Interpreter` owns the global environment for the lifetime of a
/// `run`/`evaluate` invocation (spec §4.3: "the global environment lives for
/// the evaluator's lifetime").
pub struct Interpreter {
    env: Env,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new_global(),
        }
    }

    /// Executes a full program, stopping at the first runtime error (spec
    /// §4.4: "a runtime error, which aborts the rest of the program").
    pub fn interpret(&mut self, program: &[Stmt]) -> Result<(), RuntimeError> {
        tracing::debug!(statement_count = program.len(), "interpreting program");
        for stmt in program {
            if let Err(err) = self.execute(stmt) {
                tracing::debug!(%err, "runtime error");
                return Err(err);
            }
        }
        Ok(())
    }
}
