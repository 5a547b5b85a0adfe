use std::{
    io::{BufRead, Write},
    mem,
    rc::Rc,
};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::builtin,
        value::core::Value,
    },
};

/// A non-local exit unwinding through the evaluation stack.
///
/// Evaluation either fails with a runtime error or unwinds with a return
/// signal. The two are kept distinguishable because a return signal is not
/// an error: it is caught at the nearest user-function call boundary and
/// becomes the call's result. Only a signal that escapes the whole program
/// is converted into an error.
#[derive(Debug)]
pub enum Interrupt {
    /// A runtime failure; propagates to the top-level driver.
    Error(RuntimeError),
    /// A `return` statement carrying its value; caught at function call
    /// boundaries only.
    Return(Value),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Interrupt`] describing why evaluation stopped.
pub type EvalResult<T> = Result<T, Interrupt>;

/// The tree-walking interpreter.
///
/// Owns the global environment, the current-environment pointer, and the
/// process-wide line-input provider and line-output sink. Construction
/// installs the built-ins (`show`, `shownl`, `ask`, `size`, and the `nextl`
/// constant) into the global scope.
///
/// Scoped constructs (the for-loop and user-function calls) switch the
/// active environment through [`Interpreter::with_environment`], which
/// restores the previous scope on every exit path: normal completion,
/// runtime error, and return-signal propagation alike.
pub struct Interpreter<'io> {
    globals:     Rc<Environment>,
    environment: Rc<Environment>,
    input:       Box<dyn BufRead + 'io>,
    output:      Box<dyn Write + 'io>,
}

impl<'io> Interpreter<'io> {
    /// Creates an interpreter reading lines from `input` and writing to
    /// `output`, with the built-ins pre-bound in the global environment.
    pub fn new(input: impl BufRead + 'io, output: impl Write + 'io) -> Self {
        let globals = Environment::global();
        builtin::install(&globals);

        Self { globals:     Rc::clone(&globals),
               environment: globals,
               input:       Box::new(input),
               output:      Box::new(output), }
    }

    /// The global environment.
    #[must_use]
    pub fn globals(&self) -> &Rc<Environment> {
        &self.globals
    }

    /// Executes a whole program and returns the value of its last
    /// statement, or nil for an empty program.
    ///
    /// # Errors
    /// Returns the first runtime error raised. A return signal escaping to
    /// this level is a host-level error, reported as
    /// [`RuntimeError::ReturnOutsideFunction`].
    pub fn run(&mut self, program: &[Stmt]) -> Result<Value, RuntimeError> {
        let mut last = Value::Nil;

        for statement in program {
            last = match self.eval_statement(statement) {
                Ok(value) => value,
                Err(Interrupt::Error(error)) => return Err(error),
                Err(Interrupt::Return(_)) => {
                    return Err(RuntimeError::ReturnOutsideFunction { line:
                                                                         statement.line_number() });
                },
            };
        }

        self.output.flush().ok();
        Ok(last)
    }

    /// Evaluates a single statement and returns its value.
    ///
    /// Statement values follow the source semantics: an expression
    /// statement yields the expression's value, `show`/`shownl` yield the
    /// printed value, control-flow statements yield the value of the last
    /// statement their body ran (nil when nothing ran), and a function
    /// declaration yields nil.
    pub fn eval_statement(&mut self, statement: &Stmt) -> EvalResult<Value> {
        match statement {
            Stmt::Expression { expr, .. } => self.eval(expr),
            Stmt::Print { expr, newline, line } => {
                let value = self.eval(expr)?;
                self.write_value(&value, *newline, *line)?;
                Ok(value)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.eval_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval_statement(else_branch)
                } else {
                    Ok(Value::Nil)
                }
            },
            Stmt::While { condition, body, .. } => {
                let mut result = Value::Nil;

                while self.eval(condition)?.is_truthy() {
                    for statement in body {
                        result = self.eval_statement(statement)?;
                    }
                }

                Ok(result)
            },
            Stmt::For { init,
                        condition,
                        increment,
                        body,
                        .. } => self.eval_for(init, condition, increment, body),
            Stmt::Function(def) => self.eval_function_def(def),
            Stmt::Return { expr, .. } => {
                let value = self.eval(expr)?;
                Err(Interrupt::Return(value))
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operand
    /// evaluation order is left to right throughout; a function call
    /// resolves its callee first, then evaluates each argument in source
    /// order, then applies the call.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Self::eval_binary(*op, &lhs, &rhs, *line)
            },
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements),
            Expr::ArrayIndex { array, index, line } => self.eval_array_index(array, index, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::Assignment { name, value, line } => self.eval_assignment(name, value, *line),
            Expr::IndexAssignment { array,
                                    index,
                                    value,
                                    line, } => {
                self.eval_index_assignment(array, index, value, *line)
            },
            Expr::Input { line } => self.read_input(*line),
        }
    }

    /// Runs `f` with `environment` as the active scope, restoring the
    /// previous scope afterwards regardless of how `f` exits.
    pub(crate) fn with_environment<T>(&mut self,
                                      environment: Rc<Environment>,
                                      f: impl FnOnce(&mut Self) -> T)
                                      -> T {
        let previous = mem::replace(&mut self.environment, environment);
        let result = f(self);
        self.environment = previous;
        result
    }

    /// The currently active environment.
    pub(crate) fn environment(&self) -> &Rc<Environment> {
        &self.environment
    }

    /// Writes `toString(value)` to the output sink, optionally followed by
    /// a newline, and flushes so prompts appear before any blocking read.
    pub(crate) fn write_value(&mut self,
                              value: &Value,
                              newline: bool,
                              line: usize)
                              -> EvalResult<()> {
        let written = if newline {
            writeln!(self.output, "{value}")
        } else {
            write!(self.output, "{value}")
        };

        written.and_then(|()| self.output.flush())
               .map_err(|error| {
                   RuntimeError::Io { details: error.to_string(),
                                      line }.into()
               })
    }

    /// Reads one line from the input provider and returns it as a string
    /// value, without the trailing line terminator. End of input yields the
    /// empty string.
    pub(crate) fn read_input(&mut self, line: usize) -> EvalResult<Value> {
        let mut buffer = String::new();

        self.input.read_line(&mut buffer).map_err(|error| {
                                             Interrupt::from(RuntimeError::Io { details:
                                                                                    error.to_string(),
                                                                                line })
                                         })?;

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        Ok(Value::Str(buffer))
    }
}
