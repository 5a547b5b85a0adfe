use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a function call.
    ///
    /// The callee name is resolved through the environment first, then each
    /// argument is evaluated in source order, and finally the call is
    /// applied. Arity is validated by the callable itself.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedVariable`] when the name is unbound.
    /// - [`RuntimeError::TypeError`] when the name is bound to a
    ///   non-function value.
    /// - Whatever the callable raises, including arity mismatches.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let callee =
            self.environment()
                .get(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                 line })?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument)?);
        }

        match callee {
            Value::Function(function) => function.call(self, args, line),
            other => Err(RuntimeError::TypeError { details: format!("'{name}' is not callable, it is a {} value",
                                                                    other.type_name()),
                                                   line }.into()),
        }
    }
}
