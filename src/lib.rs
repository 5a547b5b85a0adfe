//! # parlance
//!
//! parlance is a tree-walking interpreter for a small, natural-language-
//! flavored imperative scripting language. It lexes source text into
//! tokens, parses them into an abstract syntax tree by recursive descent,
//! and evaluates that tree directly against a lexically-scoped environment
//! model with first-class functions and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::interpreter::{
    evaluator::core::Interpreter,
    lexer::lex,
    parser::core::parse,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. It standardizes error reporting and carries
/// detailed information about failures, including source positions.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for user feedback.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, values,
/// environments, and error handling to provide a complete runtime for
/// source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
pub mod util;

/// Executes a program from source text and returns its final value.
///
/// The source is lexed, parsed, and executed against a fresh interpreter
/// wired to the given line-input provider and line-output sink. Lexical
/// and grammar errors are printed to the error sink and execution proceeds
/// with an empty program, mirroring the parser's recovery contract; the
/// final value is then nil.
///
/// # Errors
/// Returns an error when evaluation raises a runtime error.
///
/// # Examples
/// ```
/// use std::io;
///
/// use parlance::run_source;
///
/// let mut output = Vec::new();
/// run_source("shownl 1 + 2 * 3", io::empty(), &mut output).unwrap();
///
/// assert_eq!(output, b"7\n");
///
/// // Undefined variables are runtime errors.
/// let mut output = Vec::new();
/// assert!(run_source("shownl missing", io::empty(), &mut output).is_err());
/// ```
pub fn run_source<'io>(source: &str,
                       input: impl BufRead + 'io,
                       output: impl Write + 'io)
                       -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = match lex(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{error}");
            Vec::new()
        },
    };

    let program = parse(&mut tokens.iter().peekable());

    let mut interpreter = Interpreter::new(input, output);
    let value = interpreter.run(&program)?;

    Ok(value)
}
