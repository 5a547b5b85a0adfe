use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call argument lists, and
/// parameter lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either a comma to continue the list or the specified closing
/// token to end it. The closing token is consumed. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut items = Vec::new();

    if let Some((token, _)) = tokens.peek()
       && token == closing
    {
        tokens.next();

        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((token, _)) if token == closing => {
                tokens.next();
                break;
            },
            Some((token, pos)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {token:?}"),
                                                         pos:   *pos, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok(items)
}

/// Parses a plain identifier and returns its name.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {token:?}"),
                                              pos:   *pos, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// `context` describes what the grammar wanted, in the form used by the
/// error message: `"';' after for loop condition"`.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          context: &str)
                                                          -> ParseResult<Pos>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    match tokens.next() {
        Some((token, pos)) if token == expected => Ok(*pos),
        Some((token, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {context}, found {token:?}"),
                                              pos:   *pos, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Skips tokens until a statement boundary.
///
/// Advances past the offending token, then scans forward until it finds a
/// `;` (which it consumes) or a statement-starter keyword (which it leaves
/// for the next statement).
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Pos)>
{
    tokens.next();

    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Semicolon => {
                tokens.next();
                return;
            },
            Token::Function
            | Token::If
            | Token::While
            | Token::For
            | Token::Return
            | Token::Show
            | Token::ShowNl
            | Token::Ask => return,
            _ => {
                tokens.next();
            },
        }
    }
}
