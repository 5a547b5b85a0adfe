#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable no enclosing scope defines.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator or call was applied to operands of the wrong type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An array was indexed by a non-integer value.
    NonIntegerIndex {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array index fell outside the array bounds.
    IndexOutOfBounds {
        /// The length of the array.
        len:   usize,
        /// The index that was actually requested.
        index: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied at a call.
    ArityMismatch {
        /// The declared arity of the callable.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Division or modulo with a zero divisor.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` unwound all the way to the top level without crossing a
    /// function call boundary.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input provider or output sink failed.
    Io {
        /// Details from the underlying I/O error.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::NonIntegerIndex { line } => {
                write!(f, "Error on line {line}: Array index must be an integer.")
            },
            Self::IndexOutOfBounds { len, index, line } => write!(f,
                                                                  "Error on line {line}: Array index {index} out of bounds for length {len}."),
            Self::ArityMismatch { expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Expected {expected} arguments but got {found}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside of a function.")
            },
            Self::Io { details, line } => {
                write!(f, "Error on line {line}: Input/output failed: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
