use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Stmt},
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if ... endif` conditional,
/// - a `while ... endwhile` loop,
/// - a `for ...; ...; ... ... endfor` loop,
/// - a `function ... endfunction` declaration,
/// - a `return` statement,
/// - a `show`/`shownl` print statement,
/// - an expression used as a statement.
///
/// # Errors
/// Returns a [`ParseError`](crate::error::ParseError) when the statement is
/// malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let line = tokens.peek().map_or(0, |(_, pos)| pos.line);

    match tokens.peek() {
        Some((Token::If, _)) => {
            tokens.next();
            parse_if(tokens, line)
        },
        Some((Token::While, _)) => {
            tokens.next();
            parse_while(tokens, line)
        },
        Some((Token::For, _)) => {
            tokens.next();
            parse_for(tokens, line)
        },
        Some((Token::Function, _)) => {
            tokens.next();
            parse_function(tokens, line)
        },
        Some((Token::Return, _)) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            Ok(Stmt::Return { expr, line })
        },
        Some((Token::Show, _)) => {
            tokens.next();
            parse_print(tokens, false, line)
        },
        Some((Token::ShowNl, _)) => {
            tokens.next();
            parse_print(tokens, true, line)
        },
        _ => {
            let expr = parse_expression(tokens)?;
            Ok(Stmt::Expression { expr, line })
        },
    }
}

/// Parses an `if` statement, after the `if` keyword has been consumed.
///
/// Grammar: `ifStmt := IF expression statement (ELSE statement)? ENDIF`
///
/// Each branch guards exactly one statement; a multi-statement branch needs
/// no extra syntax only when it is itself a control-flow statement.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let condition = parse_expression(tokens)?;
    let then_branch = Box::new(parse_statement(tokens)?);

    let else_branch = if matches!(tokens.peek(), Some((Token::Else, _))) {
        tokens.next();
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    expect_token(tokens, &Token::EndIf, "'endif' after if statement")?;

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  line })
}

/// Parses a `while` statement, after the `while` keyword has been consumed.
///
/// Grammar: `whileStmt := WHILE expression block ENDWHILE`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    expect_token(tokens, &Token::EndWhile, "'endwhile' after while loop")?;

    Ok(Stmt::While { condition, body, line })
}

/// Parses a `for` statement, after the `for` keyword has been consumed.
///
/// Grammar: `forStmt := FOR expression ";" expression ";" expression
/// statement ENDFOR`
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let init = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';' after for loop initialization")?;

    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';' after for loop condition")?;

    let increment = parse_expression(tokens)?;
    let body = Box::new(parse_statement(tokens)?);

    expect_token(tokens, &Token::EndFor, "'endfor' after for loop")?;

    Ok(Stmt::For { init,
                   condition,
                   increment,
                   body,
                   line })
}

/// Parses a function declaration, after the `function` keyword has been
/// consumed.
///
/// Grammar: `funcDecl := FUNCTION IDENT "(" (IDENT ("," IDENT)*)? ")" block
/// ENDFUNCTION`
fn parse_function<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let name = parse_identifier(tokens)?;

    expect_token(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let body = parse_block(tokens)?;

    expect_token(tokens, &Token::EndFunction, "'endfunction' after function body")?;

    Ok(Stmt::Function(FunctionDef { name,
                                    params,
                                    body,
                                    line }))
}

/// Parses a `show`/`shownl` statement, after the keyword has been consumed.
///
/// Grammar: `printStmt := (SHOW | SHOWNL) expression`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, newline: bool, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let expr = parse_expression(tokens)?;
    Ok(Stmt::Print { expr, newline, line })
}

/// Parses a statement block.
///
/// A block is a sequence of statements terminated by any `END*` keyword or
/// by the end of the token stream; the terminator is left for the caller to
/// consume. Blocks do not introduce a scope of their own.
///
/// Grammar: `block := statement*`
fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, Pos)>
{
    let mut statements = Vec::new();

    while let Some((token, _)) = tokens.peek() {
        if matches!(token,
                    Token::EndIf | Token::EndWhile | Token::EndFor | Token::EndFunction)
        {
            break;
        }

        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
