use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (numeric negation) and `not` (logical
/// negation). Unary operators are right-associative, so `not -x` parses as
/// `not (-x)`, and they bind tighter than every binary operator.
///
/// Grammar:
/// ```text
///     unary := ("-" | "not") unary
///            | primary postfix*
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    if let Some((Token::Minus, pos)) = tokens.peek() {
        let line = pos.line;
        tokens.next();

        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else if let Some((Token::Not, pos)) = tokens.peek() {
        let line = pos.line;
        tokens.next();

        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                           expr: Box::new(expr),
                           line })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses postfix operators applied to an expression.
///
/// Two postfix constructs exist:
///
/// 1. **Calls** `name(args...)`. The callee must be a bare identifier at
///    this point; chained call heads such as `f(1)(2)` or `arr[0]()` are
///    rejected.
/// 2. **Array indexing** `expr[index]`, which chains freely: `a[0][1]`.
///
/// Grammar:
/// ```text
///     postfix := "(" arguments? ")"
///              | "[" expression "]"
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    loop {
        if let Some((Token::LParen, pos)) = tokens.peek() {
            let pos = *pos;
            tokens.next();

            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

            node = match node {
                Expr::Variable { name, line } => Expr::FunctionCall { name,
                                                                      arguments,
                                                                      line },
                _ => return Err(ParseError::ExpectedFunctionName { pos }),
            };
            continue;
        }

        if let Some((Token::LBracket, pos)) = tokens.peek() {
            let line = pos.line;
            tokens.next();

            let index = parse_expression(tokens)?;
            expect_token(tokens, &Token::RBracket, "']' after array index")?;

            node = Expr::ArrayIndex { array: Box::new(node),
                                      index: Box::new(index),
                                      line };
            continue;
        }

        break;
    }

    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer, float, and string literals
/// - identifiers
/// - `ask`, which reads a line of input
/// - `nextl`, which resolves the pre-bound newline constant
/// - parenthesized expressions
/// - array literals `[ ... ]`
///
/// Grammar (simplified):
/// ```text
///     primary := INTEGER | FLOAT | STRING | IDENT | ASK | NEXTL
///              | "(" expression ")"
///              | "[" arguments? "]"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Integer(n), pos) => {
            let (n, line) = (*n, pos.line);
            tokens.next();
            Ok(Expr::Literal { value: n.into(),
                               line })
        },
        (Token::Real(r), pos) => {
            let (r, line) = (*r, pos.line);
            tokens.next();
            Ok(Expr::Literal { value: r.into(),
                               line })
        },
        (Token::Str(s), pos) => {
            let (s, line) = (s.clone(), pos.line);
            tokens.next();
            Ok(Expr::Literal { value: s.into(),
                               line })
        },
        (Token::Identifier(name), pos) => {
            let (name, line) = (name.clone(), pos.line);
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        (Token::Ask, pos) => {
            let line = pos.line;
            tokens.next();
            Ok(Expr::Input { line })
        },
        (Token::NextL, pos) => {
            // The newline constant is an ordinary global, resolved through
            // the environment like any other name.
            let line = pos.line;
            tokens.next();
            Ok(Expr::Variable { name: "nextl".to_string(),
                                line })
        },
        (Token::LParen, _) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')' after expression")?;
            Ok(expr)
        },
        (Token::LBracket, pos) => {
            let line = pos.line;
            tokens.next();
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::ArrayLiteral { elements, line })
        },
        (token, pos) => Err(ParseError::UnexpectedToken { token: format!("Expected expression, found {token:?}"),
                                                          pos:   *pos, }),
    }
}
