use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, function::Function},
    },
    util::num::index_to_usize,
};

impl Interpreter<'_> {
    /// Looks up a variable in the current scope chain.
    pub(crate) fn eval_variable(&mut self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment()
            .get(name)
            .ok_or_else(|| {
                RuntimeError::UndefinedVariable { name: name.to_string(),
                                                  line }.into()
            })
    }

    /// Evaluates the elements of an array literal, in source order, and
    /// packs them into a fresh array value.
    pub(crate) fn eval_array_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            values.push(self.eval(element)?);
        }

        Ok(values.into())
    }

    /// Evaluates an array indexing expression.
    ///
    /// The array expression is evaluated first, then the index. The indexed
    /// value must be an array, the index an integer within bounds.
    pub(crate) fn eval_array_index(&mut self,
                                   array: &Expr,
                                   index: &Expr,
                                   line: usize)
                                   -> EvalResult<Value> {
        let array_value = self.eval(array)?;
        let index_value = self.eval(index)?;

        let Value::Array(items) = array_value else {
            return Err(RuntimeError::TypeError { details: format!("Cannot index a {} value",
                                                                  array_value.type_name()),
                                                 line }.into());
        };

        let Value::Integer(raw) = index_value else {
            return Err(RuntimeError::NonIntegerIndex { line }.into());
        };

        let items = items.borrow();

        index_to_usize(raw).and_then(|index| items.get(index))
                           .cloned()
                           .ok_or_else(|| {
                               RuntimeError::IndexOutOfBounds { len: items.len(),
                                                                index: raw,
                                                                line }.into()
                           })
    }

    /// Evaluates a variable assignment with create-or-update semantics:
    /// when some enclosing scope binds the name, that binding is updated;
    /// otherwise the name is defined in the current scope. The assigned
    /// value is also the expression's value.
    pub(crate) fn eval_assignment(&mut self,
                                  name: &str,
                                  value: &Expr,
                                  line: usize)
                                  -> EvalResult<Value> {
        let value = self.eval(value)?;

        if self.environment().assign(name, value.clone(), line).is_err() {
            self.environment().define(name, value.clone());
        }

        Ok(value)
    }

    /// Evaluates an element assignment, `arr[i] = value`.
    ///
    /// The array, index, and value expressions are evaluated in that order.
    /// Arrays are reference values, so the store is visible through every
    /// binding that shares the array.
    pub(crate) fn eval_index_assignment(&mut self,
                                        array: &Expr,
                                        index: &Expr,
                                        value: &Expr,
                                        line: usize)
                                        -> EvalResult<Value> {
        let array_value = self.eval(array)?;
        let index_value = self.eval(index)?;
        let value = self.eval(value)?;

        let Value::Array(items) = array_value else {
            return Err(RuntimeError::TypeError { details: format!("Cannot index a {} value",
                                                                  array_value.type_name()),
                                                 line }.into());
        };

        let Value::Integer(raw) = index_value else {
            return Err(RuntimeError::NonIntegerIndex { line }.into());
        };

        let mut items = items.borrow_mut();
        let len = items.len();

        match index_to_usize(raw).and_then(|index| items.get_mut(index)) {
            Some(slot) => {
                *slot = value.clone();
                Ok(value)
            },
            None => Err(RuntimeError::IndexOutOfBounds { len,
                                                         index: raw,
                                                         line }.into()),
        }
    }

    /// Evaluates a function declaration: builds a user function capturing
    /// the current environment as its closure and binds it to the declared
    /// name in that same environment.
    pub(crate) fn eval_function_def(&mut self, def: &FunctionDef) -> EvalResult<Value> {
        let function = Function::User { declaration: Rc::new(def.clone()),
                                        closure:     Rc::clone(self.environment()), };

        self.environment().define(&def.name, Value::Function(Rc::new(function)));

        Ok(Value::Nil)
    }
}
