use std::rc::Rc;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter, Interrupt},
        value::core::Value,
    },
};

/// The signature shared by all native built-ins.
///
/// A native receives the interpreter (for access to the input provider and
/// output sink), the already-evaluated argument values, and the call-site
/// line for error reporting.
pub type NativeFn =
    for<'a, 'io> fn(&'a mut Interpreter<'io>, Vec<Value>, usize) -> EvalResult<Value>;

/// A callable handle.
///
/// Two kinds of callables exist: native built-ins backed by a Rust function
/// pointer, and user functions carrying their declaration and the
/// environment captured at the definition site (the closure). User bodies
/// are shared behind `Rc`, so repeated calls re-read one tree.
#[derive(Debug)]
pub enum Function {
    /// A built-in installed into the global environment at startup.
    Native {
        /// The name the built-in is bound to, for diagnostics.
        name:  &'static str,
        /// The declared number of parameters.
        arity: usize,
        /// The implementation.
        func:  NativeFn,
    },
    /// A function declared in the program.
    User {
        /// The parsed declaration: name, parameters, body.
        declaration: Rc<FunctionDef>,
        /// The environment captured where the function was defined.
        closure:     Rc<Environment>,
    },
}

impl Function {
    /// The declared number of positional parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Native { arity, .. } => *arity,
            Self::User { declaration, .. } => declaration.params.len(),
        }
    }

    /// Invokes the callable with already-evaluated arguments.
    ///
    /// The argument count is validated against the arity first. A user
    /// function runs in a fresh environment parented to its closure (not to
    /// the caller's scope); parameters are bound positionally, with nil
    /// backfill should the argument vector come up short. A return signal
    /// raised inside the body is caught here and becomes the call result;
    /// otherwise the body's last value is returned. The caller's
    /// environment is restored on every exit path.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ArityMismatch`] on an argument count
    /// mismatch, or whatever runtime error the body raises.
    pub fn call(&self,
                interpreter: &mut Interpreter<'_>,
                arguments: Vec<Value>,
                line: usize)
                -> EvalResult<Value> {
        if arguments.len() != self.arity() {
            return Err(RuntimeError::ArityMismatch { expected: self.arity(),
                                                     found: arguments.len(),
                                                     line }.into());
        }

        match self {
            Self::Native { func, .. } => func(interpreter, arguments, line),
            Self::User { declaration, closure } => {
                let frame = Environment::with_parent(Rc::clone(closure));

                let mut arguments = arguments.into_iter();
                for param in &declaration.params {
                    frame.define(param, arguments.next().unwrap_or(Value::Nil));
                }

                let outcome = interpreter.with_environment(frame, |interpreter| {
                                              let mut last = Value::Nil;
                                              for statement in &declaration.body {
                                                  last = interpreter.eval_statement(statement)?;
                                              }
                                              Ok(last)
                                          });

                match outcome {
                    Err(Interrupt::Return(value)) => Ok(value),
                    other => other,
                }
            },
        }
    }
}
