use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// A lexically-chained mapping from names to values.
///
/// Environments form a tree rooted at the global scope: each one holds its
/// own bindings and an optional parent link. Lookups and assignments walk
/// the parent chain; definitions always land in the receiver. Environments
/// are shared through `Rc` because a closure may keep its defining scope
/// alive long after that scope has otherwise returned, and bindings sit
/// behind a `RefCell` so mutations made through one holder are observable
/// through every other.
///
/// # Example
/// ```
/// use parlance::interpreter::{environment::Environment, value::core::Value};
///
/// let globals = Environment::global();
/// globals.define("x", Value::Integer(1));
///
/// let inner = Environment::with_parent(globals.clone());
/// assert!(matches!(inner.get("x"), Some(Value::Integer(1))));
///
/// // Assignment walks the chain and mutates the defining scope.
/// inner.assign("x", Value::Integer(2), 1).unwrap();
/// assert!(matches!(globals.get("x"), Some(Value::Integer(2))));
///
/// // Definition shadows instead.
/// inner.define("x", Value::Integer(3));
/// assert!(matches!(globals.get("x"), Some(Value::Integer(2))));
/// ```
#[derive(Debug)]
pub struct Environment {
    parent: Option<Rc<Environment>>,
    values: RefCell<HashMap<String, Value>>,
}

impl Environment {
    /// Creates the global environment, which has no parent.
    #[must_use]
    pub fn global() -> Rc<Self> {
        Rc::new(Self { parent: None,
                       values: RefCell::new(HashMap::new()), })
    }

    /// Creates a new environment nested inside `parent`.
    #[must_use]
    pub fn with_parent(parent: Rc<Self>) -> Rc<Self> {
        Rc::new(Self { parent: Some(parent),
                       values: RefCell::new(HashMap::new()), })
    }

    /// Defines `name` in this environment, shadowing any binding of the
    /// same name in an enclosing scope.
    pub fn define(&self, name: &str, value: Value) {
        self.values.borrow_mut().insert(name.to_string(), value);
    }

    /// Looks up `name`, walking the parent chain outward.
    ///
    /// Returns a clone of the bound value, or `None` when no enclosing
    /// scope defines the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.values.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref().and_then(|parent| parent.get(name)),
        }
    }

    /// Assigns `value` to the nearest enclosing binding of `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] when the chain reaches
    /// the global scope without finding the name.
    pub fn assign(&self, name: &str, value: Value, line: usize) -> Result<(), RuntimeError> {
        let mut values = self.values.borrow_mut();
        if let Some(slot) = values.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        drop(values);

        match &self.parent {
            Some(parent) => parent.assign(name, value, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }
}
