use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` concatenates when either side is a string, formatting both
    /// operands with their display form. Otherwise both operands must be
    /// numeric; a mixed integer/float pair promotes to float. `/` rejects a
    /// zero divisor of either numeric type. `%` requires two integers and a
    /// non-zero right operand. Integer arithmetic wraps on 64-bit overflow,
    /// so boundary values like `i64::MIN / -1` have a defined result in
    /// every build profile.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Integer, Real, Str};

        if op == Add && (matches!(left, Str(_)) || matches!(right, Str(_))) {
            return Ok(Str(format!("{left}{right}")));
        }

        if op == Mod {
            return match (left, right) {
                (Integer(_), Integer(0)) => Err(RuntimeError::DivisionByZero { line }.into()),
                // wrapping_rem: i64::MIN % -1 yields 0 instead of panicking.
                (Integer(a), Integer(b)) => Ok(Integer(a.wrapping_rem(*b))),
                _ => Err(RuntimeError::TypeError { details: format!("Cannot apply '%' to {} and {}, both operands must be integers",
                                                                    left.type_name(),
                                                                    right.type_name()),
                                                   line }.into()),
            };
        }

        if !left.is_number() || !right.is_number() {
            return Err(RuntimeError::TypeError { details: format!("Cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line }.into());
        }

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Add => Ok(Integer(a.wrapping_add(*b))),
                Sub => Ok(Integer(a.wrapping_sub(*b))),
                Mul => Ok(Integer(a.wrapping_mul(*b))),
                Div => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line }.into())
                    } else {
                        // wrapping_div: i64::MIN / -1 wraps back to i64::MIN.
                        Ok(Integer(a.wrapping_div(*b)))
                    }
                },
                _ => unreachable!(),
            },
            _ => {
                // Mixed operands promote to float; as_real cannot fail here.
                let (a, b) = match (left.as_real(), right.as_real()) {
                    (Some(a), Some(b)) => (a, b),
                    _ => unreachable!(),
                };

                match op {
                    Add => Ok(Real(a + b)),
                    Sub => Ok(Real(a - b)),
                    Mul => Ok(Real(a * b)),
                    Div => {
                        if b == 0.0 {
                            Err(RuntimeError::DivisionByZero { line }.into())
                        } else {
                            Ok(Real(a / b))
                        }
                    },
                    _ => unreachable!(),
                }
            },
        }
    }
}
