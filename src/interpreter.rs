/// The environment module implements the lexical scope chain.
///
/// Environments map names to values and link to their enclosing scope.
/// Lookups and assignments walk outward toward the global scope; closures
/// keep captured environments alive after their defining scope returns.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages the current scope,
/// dispatches function calls, and produces results. It is the core
/// execution engine of the interpreter.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens with
/// source positions, fusing two-word natural operators and discarding
/// whitespace and comments. This is the first stage of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST by recursive descent, with one function per precedence
/// level. Grammar violations are reported with source positions, and the
/// top-level entry point recovers by synchronizing to a statement boundary.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum with all supported variants, the
/// callable `Function` type, and the conversion, truthiness, equality, and
/// formatting rules shared by the evaluator.
pub mod value;
