use logos::Logos;

use crate::error::ParseError;

/// A position in the source text, 1-based in both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    /// The source line, starting at 1.
    pub line:   usize,
    /// The source column, starting at 1.
    pub column: usize,
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Natural-language
/// comparison forms tokenize to the same kind as their symbolic spelling:
/// `equals` is `==`, `isnt` is `!=`, and the two-word forms `greater than`,
/// `less than`, `at least`, and `at most` fuse to `>`, `<`, `>=`, and `<=`
/// (see [`lex`]).
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Float literal tokens, such as `3.14`. A digit is required on both
    /// sides of the decimal point; there is no exponent syntax.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens. The enclosed characters are taken verbatim;
    /// there is no escape processing. Newlines are permitted inside a
    /// literal.
    #[regex(r#""[^"]*""#, parse_str)]
    Str(String),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `endif`
    #[token("endif")]
    EndIf,
    /// `while`
    #[token("while")]
    While,
    /// `endwhile`
    #[token("endwhile")]
    EndWhile,
    /// `for`
    #[token("for")]
    For,
    /// `endfor`
    #[token("endfor")]
    EndFor,
    /// `function`
    #[token("function")]
    Function,
    /// `endfunction`
    #[token("endfunction")]
    EndFunction,
    /// `return`
    #[token("return")]
    Return,
    /// `show`
    #[token("show")]
    Show,
    /// `shownl`
    #[token("shownl")]
    ShowNl,
    /// `nextl`, the pre-bound newline constant.
    #[token("nextl")]
    NextL,
    /// `ask`
    #[token("ask")]
    Ask,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens; variable or function names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.` run through end of line and are discarded.
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Whitespace, including newlines, separates tokens and is discarded.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `==`, also written `equals`.
    #[token("==")]
    #[token("equals")]
    EqualEqual,
    /// `!=`, also written `isnt`. A standalone `!` is a lexical error.
    #[token("!=")]
    #[token("isnt")]
    BangEqual,
    /// `>=`, also written `at least`.
    #[token(">=")]
    GreaterEqual,
    /// `<=`, also written `at most`.
    #[token("<=")]
    LessEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Assign,
    /// `>`, also written `greater than`.
    #[token(">")]
    Greater,
    /// `<`, also written `less than`.
    #[token("<")]
    Less,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the delimiting quotes from a string literal slice.
fn parse_str(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Maps a pair of adjacent words to the comparison operator they fuse into.
///
/// Only the four two-word natural operators are recognized; any other pair
/// is left as two separate identifier tokens.
fn natural_operator(first: &str, second: &str) -> Option<Token> {
    match (first, second) {
        ("greater", "than") => Some(Token::Greater),
        ("less", "than") => Some(Token::Less),
        ("at", "least") => Some(Token::GreaterEqual),
        ("at", "most") => Some(Token::LessEqual),
        _ => None,
    }
}

/// Advances line bookkeeping across `source[from..to]`.
fn advance_position(source: &str, from: usize, to: usize, line: &mut usize, line_start: &mut usize) {
    for (offset, byte) in source.as_bytes()[from..to].iter().enumerate() {
        if *byte == b'\n' {
            *line += 1;
            *line_start = from + offset + 1;
        }
    }
}

/// Tokenizes an entire source string.
///
/// Produces the token stream together with the 1-based line/column position
/// of each token. Whitespace and `#` comments are skipped. After ordinary
/// tokenization, adjacent identifier pairs separated by single-line
/// whitespace are fused into two-word natural operators; a pair that is not
/// in the operator table is left untouched, which reproduces the
/// scan-ahead-and-restore behavior the fusion requires (`at most` becomes
/// `<=`, while `at mostly` stays two identifiers).
///
/// # Errors
/// Returns a [`ParseError`] describing the first lexical failure: an
/// unterminated string or a character no token can start with (including a
/// standalone `!`).
///
/// # Examples
/// ```
/// use parlance::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("x at least 10").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::GreaterEqual,
///                 Token::Integer(10)]);
///
/// // A standalone '!' is not a token.
/// assert!(lex("!x").is_err());
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, Pos)>, ParseError> {
    let mut tokens: Vec<(Token, Pos)> = Vec::new();
    let mut lexer = Token::lexer(source);

    let mut line = 1;
    let mut line_start = 0;
    let mut previous_end = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();

        advance_position(source, previous_end, span.start, &mut line, &mut line_start);
        let pos = Pos { line,
                        column: span.start - line_start + 1, };

        let token = match result {
            Ok(token) => token,
            Err(()) => {
                let found = lexer.slice();
                return Err(if found.starts_with('"') {
                               ParseError::UnterminatedString { pos }
                           } else {
                               ParseError::UnexpectedCharacter { found: found.to_string(),
                                                                 pos }
                           });
            },
        };

        // String literals may span lines; account for their interior.
        advance_position(source, span.start, span.end, &mut line, &mut line_start);

        let fused = match (&token, tokens.last()) {
            (Token::Identifier(second), Some((Token::Identifier(first), first_pos)))
                if source.as_bytes()[previous_end..span.start].iter()
                                                              .all(|b| *b == b' ' || *b == b'\t') =>
            {
                natural_operator(first, second).map(|op| (op, *first_pos))
            },
            _ => None,
        };

        if let Some((op, first_pos)) = fused {
            tokens.pop();
            tokens.push((op, first_pos));
        } else {
            tokens.push((token, pos));
        }

        previous_end = span.end;
    }

    Ok(tokens)
}
