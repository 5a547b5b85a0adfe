use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::Interpreter,
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a logical operation over two truthiness-coerced operands.
    ///
    /// Both operands were already evaluated by the binary dispatch, so
    /// `and` and `or` do not short-circuit; side effects of the right-hand
    /// side always happen. The result is always a boolean.
    pub(crate) fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        use BinaryOperator::{And, Or};

        match op {
            And => Value::Bool(left.is_truthy() && right.is_truthy()),
            Or => Value::Bool(left.is_truthy() || right.is_truthy()),
            _ => unreachable!(),
        }
    }
}
