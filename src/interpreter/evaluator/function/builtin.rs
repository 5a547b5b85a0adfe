use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::{
            core::Value,
            function::{Function, NativeFn},
        },
    },
    util::num::len_to_i64,
};

/// The native functions pre-bound in the global environment, as
/// `(name, arity, implementation)` triples.
const BUILTINS: &[(&str, usize, NativeFn)] =
    &[("show", 1, show), ("shownl", 1, shownl), ("ask", 0, ask), ("size", 1, size)];

/// Installs the built-in functions and the `nextl` newline constant into
/// `globals`. Called once at interpreter construction.
pub(crate) fn install(globals: &Environment) {
    for &(name, arity, func) in BUILTINS {
        globals.define(name, Value::Function(Rc::new(Function::Native { name, arity, func })));
    }

    globals.define("nextl", Value::Str("\n".to_string()));
}

/// Writes the display form of its argument to the output sink. Returns nil.
fn show(interpreter: &mut Interpreter<'_>, args: Vec<Value>, line: usize) -> EvalResult<Value> {
    interpreter.write_value(&args[0], false, line)?;
    Ok(Value::Nil)
}

/// Writes the display form of its argument plus a newline. Returns nil.
fn shownl(interpreter: &mut Interpreter<'_>, args: Vec<Value>, line: usize) -> EvalResult<Value> {
    interpreter.write_value(&args[0], true, line)?;
    Ok(Value::Nil)
}

/// Reads one line from the input provider and returns it as a string.
fn ask(interpreter: &mut Interpreter<'_>, _args: Vec<Value>, line: usize) -> EvalResult<Value> {
    interpreter.read_input(line)
}

/// Returns the length of an array or string as an integer.
fn size(_interpreter: &mut Interpreter<'_>, args: Vec<Value>, line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(items) => Ok(Value::Integer(len_to_i64(items.borrow().len()))),
        Value::Str(s) => Ok(Value::Integer(len_to_i64(s.len()))),
        other => Err(RuntimeError::TypeError { details: format!("Cannot take the size of a {} value",
                                                                other.type_name()),
                                               line }.into()),
    }
}
