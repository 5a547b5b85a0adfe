use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a unary operation on an already-evaluated operand.
    ///
    /// `not` yields the boolean negation of the operand's truthiness and is
    /// defined for every value. Negation is defined for numbers only;
    /// integer negation wraps, so `-i64::MIN` is `i64::MIN` rather than a
    /// panic.
    pub(crate) fn eval_unary(op: UnaryOperator,
                             value: &Value,
                             line: usize)
                             -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                Value::Real(r) => Ok(Value::Real(-r)),
                _ => Err(RuntimeError::TypeError { details: format!("Cannot negate a {} value",
                                                                    value.type_name()),
                                                   line }.into()),
            },
        }
    }
}
