use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates an equality or ordering comparison.
    ///
    /// Equality uses [`Value::equals`]: differing types compare unequal
    /// except the numeric variants, which compare by floating value. The
    /// ordering operators are all derived from `<` and `==` so the
    /// identities `a <= b  ==  a < b or a == b`, `a > b  ==  not (a <= b)`,
    /// and `a >= b  ==  not (a < b)` hold by construction.
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(Value::Bool(match op {
                           Equal => left.equals(right),
                           NotEqual => !left.equals(right),
                           Less => less_than(left, right, line)?,
                           LessEqual => less_than(left, right, line)? || left.equals(right),
                           Greater => !(less_than(left, right, line)? || left.equals(right)),
                           GreaterEqual => !less_than(left, right, line)?,
                           _ => unreachable!(),
                       }))
    }
}

/// The primitive ordering relation the derived operators build on.
///
/// Defined for numeric pairs (compared as floats) and string pairs
/// (compared lexicographically). Every other combination is a type error.
fn less_than(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(a < b),
        _ => match (left.as_real(), right.as_real()) {
            (Some(a), Some(b)) => Ok(a < b),
            _ => Err(RuntimeError::TypeError { details: format!("Cannot compare {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                               line }.into()),
        },
    }
}
