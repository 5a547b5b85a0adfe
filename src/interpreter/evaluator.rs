/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic, string
/// concatenation, comparisons, and eager logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` itself, the evaluation result and interrupt
/// types, and the statement/expression dispatch.
pub mod core;

/// Evaluation of for-loop statements.
///
/// Runs the loop header and body inside a dedicated scope that is unwound
/// on every exit path.
pub mod for_loop;

/// Utility evaluation routines.
///
/// Shared helpers for variables, literals, arrays, and assignment forms.
pub mod utils;

/// Function evaluation.
///
/// Handles call dispatch for user-defined functions and the native
/// built-in table installed into the global environment.
pub mod function;
