/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include lexical failures (unexpected
/// characters, unterminated strings), grammar violations, and unexpected
/// end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, type mismatches, index failures, arity mismatches, division
/// by zero, and escaped return signals.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
