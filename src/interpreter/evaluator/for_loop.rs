use std::rc::Rc;

use crate::{
    ast::{Expr, Stmt},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a `for` loop.
    ///
    /// The loop owns a nested environment: the initialization expression
    /// runs inside it once, then the body and the increment run while the
    /// condition stays truthy. Names created by the header or the body are
    /// therefore invisible to the enclosing scope once the loop exits. The
    /// nested scope is unwound on normal exit and on unwinding exits alike,
    /// because the swap-and-restore wrapper makes no distinction between
    /// them.
    ///
    /// The result is the value of the last body execution, or nil when the
    /// body never ran.
    pub(crate) fn eval_for(&mut self,
                           init: &Expr,
                           condition: &Expr,
                           increment: &Expr,
                           body: &Stmt)
                           -> EvalResult<Value> {
        let loop_env = Environment::with_parent(Rc::clone(self.environment()));

        self.with_environment(loop_env, |interpreter| {
                let mut result = Value::Nil;

                interpreter.eval(init)?;

                while interpreter.eval(condition)?.is_truthy() {
                    result = interpreter.eval_statement(body)?;
                    interpreter.eval(increment)?;
                }

                Ok(result)
            })
    }
}
