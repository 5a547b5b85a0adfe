use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses an assignment expression.
///
/// Grammar: `assignment := logicalOr ("=" assignment)?`
///
/// Assignment is right-associative. The left-hand side is validated after
/// the fact: a variable reference becomes a plain assignment, an index
/// expression becomes an element assignment, and anything else is rejected
/// as an invalid assignment target.
///
/// Compound assignment (`+=`, `-=`, `*=`, `/=`) is accepted on a plain
/// variable and desugars to the equivalent `x = x <op> value` tree.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let expr = parse_logical_or(tokens)?;

    if let Some((Token::Assign, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();

        let value = Box::new(parse_assignment(tokens)?);

        return match expr {
                   Expr::Variable { name, line } => Ok(Expr::Assignment { name, value, line }),
                   Expr::ArrayIndex { array, index, line } => {
                       Ok(Expr::IndexAssignment { array, index, value, line })
                   },
                   _ => Err(ParseError::InvalidAssignmentTarget { pos }),
               };
    }

    let compound = match tokens.peek() {
        Some((Token::PlusAssign, pos)) => Some((BinaryOperator::Add, *pos)),
        Some((Token::MinusAssign, pos)) => Some((BinaryOperator::Sub, *pos)),
        Some((Token::StarAssign, pos)) => Some((BinaryOperator::Mul, *pos)),
        Some((Token::SlashAssign, pos)) => Some((BinaryOperator::Div, *pos)),
        _ => None,
    };

    if let Some((op, pos)) = compound {
        tokens.next();

        let value = parse_assignment(tokens)?;

        return match expr {
                   Expr::Variable { name, line } => {
                       let current = Expr::Variable { name: name.clone(),
                                                      line };
                       Ok(Expr::Assignment { name,
                                             value: Box::new(Expr::BinaryOp { left: Box::new(current),
                                                                              op,
                                                                              right:
                                                                                  Box::new(value),
                                                                              line }),
                                             line })
                   },
                   _ => Err(ParseError::InvalidAssignmentTarget { pos }),
               };
    }

    Ok(expr)
}

/// Parses logical OR expressions.
///
/// Grammar: `logicalOr := logicalAnd ("or" logicalAnd)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut left = parse_logical_and(tokens)?;

    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Or)
        {
            let line = pos.line;
            tokens.next();

            let right = parse_logical_and(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Grammar: `logicalAnd := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut left = parse_equality(tokens)?;

    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::And)
        {
            let line = pos.line;
            tokens.next();

            let right = parse_equality(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
///
/// The word forms `equals` and `isnt` tokenize to the same kinds as `==`
/// and `!=`, so they need no handling of their own here.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut left = parse_comparison(tokens)?;

    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            let line = pos.line;
            tokens.next();

            let right = parse_comparison(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses relational comparison expressions.
///
/// Grammar: `comparison := term ((">" | "<" | ">=" | "<=") term)*`
///
/// The fused natural operators (`greater than`, `at most`, ...) arrive from
/// the lexer as the corresponding symbolic kinds.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut left = parse_term(tokens)?;

    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Less
                       | BinaryOperator::Greater
                       | BinaryOperator::LessEqual
                       | BinaryOperator::GreaterEqual)
        {
            let line = pos.line;
            tokens.next();

            let right = parse_term(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut left = parse_factor(tokens)?;

    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = pos.line;
            tokens.next();

            let right = parse_factor(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Grammar: `factor := unary (("*" | "/" | "%") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut left = parse_unary(tokens)?;

    loop {
        if let Some((token, pos)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = pos.line;
            tokens.next();

            let right = parse_unary(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator, `None` for all other tokens.
///
/// # Example
/// ```
/// use parlance::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
