use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{binary::parse_assignment, statement::parse_statement, utils::synchronize},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program, recovering from the first grammar violation.
///
/// On a parse error, the message (with line and column) is printed to the
/// error sink, the token stream is synchronized to the next statement
/// boundary, and an empty program is returned so the driver still has
/// something to execute.
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> Vec<Stmt>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match parse_program(tokens) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{error}");
            synchronize(tokens);
            Vec::new()
        },
    }
}

/// Parses statements until the token stream is exhausted.
///
/// # Errors
/// Returns a [`ParseError`] on the first grammar violation, leaving
/// recovery to the caller.
///
/// # Examples
/// ```
/// use parlance::interpreter::{lexer::lex, parser::core::parse_program};
///
/// let tokens = lex("shownl 1 + 2 * 3").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.len(), 1);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Errors
/// Returns a [`ParseError`] when no expression can be parsed here.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    parse_assignment(tokens)
}
