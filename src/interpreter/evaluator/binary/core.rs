use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation between two already-evaluated values.
    ///
    /// Arithmetic operators route to the scalar evaluator (which also
    /// covers string concatenation for `+`), comparison operators to the
    /// comparison evaluator, and `and`/`or` to the logic evaluator. Both
    /// operands have been evaluated by the caller, left before right, so
    /// the logical operators are eager by construction.
    pub(crate) fn eval_binary(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, line),

            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },

            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
