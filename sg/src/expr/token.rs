//! Tokenizer and identifier screening

use std::fmt;

use super::number::Number;
use super::program;
use crate::{GenError, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(Number),
    Ident(String),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Ident(name) => write!(f, "name '{}'", name),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::StarStar => write!(f, "'**'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Character offset in the input
    pub position: usize,
}

/// Split `input` into tokens
///
/// Lexing does not stop at the first unexpected character: the whole input is
/// scanned so that every identifier can be screened against the allow-list.
/// A disallowed identifier takes precedence over any syntax error.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut first_error: Option<GenError> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || (c == '.' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit())) {
            let (number, end) = lex_number(&chars, i)?;
            tokens.push(Token {
                kind: TokenKind::Number(number),
                position: start,
            });
            i = end;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let name: String = chars[start..i].iter().collect();
            tokens.push(Token {
                kind: TokenKind::Ident(name),
                position: start,
            });
            continue;
        }

        let kind = match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Some(TokenKind::StarStar)
            }
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };
        i += 1;

        match kind {
            Some(kind) => tokens.push(Token { kind, position: start }),
            None => {
                if first_error.is_none() {
                    first_error = Some(GenError::syntax(start, format!("unexpected character '{}'", c)));
                }
            }
        }
    }

    screen_identifiers(&tokens)?;

    match first_error {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}

/// Reject any identifier that is not an allow-listed constant or function
fn screen_identifiers(tokens: &[Token]) -> Result<()> {
    for token in tokens {
        if let TokenKind::Ident(name) = &token.kind {
            if !program::is_allowed(name) {
                return Err(GenError::DisallowedIdentifier { name: name.clone() });
            }
        }
    }
    Ok(())
}

/// Lex a numeric literal starting at `start`; returns the value and the end offset
fn lex_number(chars: &[char], start: usize) -> Result<(Number, usize)> {
    let mut i = start;
    let mut is_float = false;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        is_float = true;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            is_float = true;
            i = j;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    let text: String = chars[start..i].iter().collect();
    let number = if is_float {
        Number::Float(parse_float(&text, start)?)
    } else {
        match text.parse::<i64>() {
            Ok(value) => Number::Int(value),
            Err(_) => Number::Float(parse_float(&text, start)?),
        }
    };
    Ok((number, i))
}

fn parse_float(text: &str, position: usize) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| GenError::syntax(position, format!("invalid number '{}'", text)))
}
