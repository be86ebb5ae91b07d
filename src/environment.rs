//! Lexical environments (spec §4.3).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::token::Token;
use crate::value::Value;

/// A chained scope: a name-to-value map plus an optional parent link.
///
/// Wrapped in `Rc<RefCell<_>>` so a [`Env`] handle can be shared between the
/// interpreter's "current environment" pointer and any closures that might
/// later need to outlive the block that created them; blocks themselves
/// only ever hold one handle at a time (spec §5 "Resource scoping").
#[derive(Debug)]
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Env>,
}

/// A shared handle to an [`Environment`].
pub type Env = Rc<RefCell<Environment>>;

impl Environment {
    /// Creates a new, empty global environment with no parent.
    pub fn new_global() -> Env {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            parent: None,
        }))
    }

    /// Creates a new environment nested inside `parent` (spec §5: created
    /// on block entry).
    pub fn new_child(parent: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Binds `name` to `value` in this scope, overwriting any existing
    /// binding at this level (spec §4.3: redefinition is allowed).
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks up `name_tok`, searching this scope and then each ancestor in
    /// turn.
    pub fn get(&self, name_tok: &Token) -> Result<Value, UndefinedVariable> {
        if let Some(value) = self.values.get(&name_tok.lexeme) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().get(name_tok),
            None => Err(UndefinedVariable {
                name: name_tok.lexeme.clone(),
                line: name_tok.line,
            }),
        }
    }

    /// Assigns `value` to the nearest scope (searching outward from this
    /// one) that already defines `name_tok`.
    pub fn assign(&mut self, name_tok: &Token, value: Value) -> Result<(), UndefinedVariable> {
        if self.values.contains_key(&name_tok.lexeme) {
            self.values.insert(name_tok.lexeme.clone(), value);
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name_tok, value),
            None => Err(UndefinedVariable {
                name: name_tok.lexeme.clone(),
                line: name_tok.line,
            }),
        }
    }
}

/// The failure common to [`Environment::get`] and [`Environment::assign`]
/// when no scope in the chain defines the name.
#[derive(Debug, Clone, PartialEq)]
pub struct UndefinedVariable {
    pub name: String,
    pub line: usize,
}

impl std::fmt::Display for UndefinedVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Undefined variable '{}'.", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(name: &str) -> Token {
        Token::new(crate::token::TokenKind::Identifier, name, 1)
    }

    #[test]
    fn test_define_then_get() {
        let global = Environment::new_global();
        global.borrow_mut().define("a", Value::Number(1.0));
        assert_eq!(global.borrow().get(&tok("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn test_get_undefined_fails() {
        let global = Environment::new_global();
        let err = global.borrow().get(&tok("missing")).unwrap_err();
        assert_eq!(err.to_string(), "Undefined variable 'missing'.");
    }

    #[test]
    fn test_child_resolves_through_parent() {
        let global = Environment::new_global();
        global.borrow_mut().define("a", Value::Number(1.0));
        let child = Environment::new_child(&global);
        assert_eq!(child.borrow().get(&tok("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn test_child_shadowing_does_not_affect_parent() {
        let global = Environment::new_global();
        global.borrow_mut().define("a", Value::Number(1.0));
        let child = Environment::new_child(&global);
        child.borrow_mut().define("a", Value::Number(2.0));
        assert_eq!(child.borrow().get(&tok("a")).unwrap(), Value::Number(2.0));
        assert_eq!(global.borrow().get(&tok("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn test_assign_updates_nearest_defining_scope() {
        let global = Environment::new_global();
        global.borrow_mut().define("a", Value::Number(1.0));
        let child = Environment::new_child(&global);
        child.borrow_mut().assign(&tok("a"), Value::Number(9.0)).unwrap();
        assert_eq!(global.borrow().get(&tok("a")).unwrap(), Value::Number(9.0));
    }

    #[test]
    fn test_assign_undefined_fails() {
        let global = Environment::new_global();
        let err = global
            .borrow_mut()
            .assign(&tok("missing"), Value::Nil)
            .unwrap_err();
        assert_eq!(err.to_string(), "Undefined variable 'missing'.");
    }

    #[test]
    fn test_redefinition_in_same_scope_is_allowed() {
        let global = Environment::new_global();
        global.borrow_mut().define("a", Value::Number(1.0));
        global.borrow_mut().define("a", Value::Str("x".to_string()));
        assert_eq!(
            global.borrow().get(&tok("a")).unwrap(),
            Value::Str("x".to_string())
        );
    }
}
