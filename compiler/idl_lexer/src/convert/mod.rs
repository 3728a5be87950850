//! Raw token to lexeme conversion.
//!
//! Numeric literals are validated here rather than in logos callbacks so
//! that overflow and malformed digits surface as positioned `LexError`s.

use idl_ir::{LineOffsetTable, Position, TokenKind};

use crate::lex_error::{LexError, LexErrorKind};
use crate::raw_token::RawToken;

/// Structural punctuation that never reaches the parser as a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Delim {
    Semicolon,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
}

impl Delim {
    pub(crate) fn as_char(self) -> char {
        match self {
            Delim::Semicolon => ';',
            Delim::LBrace => '{',
            Delim::RBrace => '}',
            Delim::LParen => '(',
            Delim::RParen => ')',
            Delim::LBracket => '[',
            Delim::RBracket => ']',
            Delim::Comma => ',',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LexemeKind {
    Token(TokenKind),
    Delim(Delim),
}

/// A converted raw token with its start position.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Lexeme {
    pub kind: LexemeKind,
    pub pos: Position,
}

/// Converts raw tokens to lexemes, tracking positions.
pub(crate) struct Converter<'src> {
    source: &'src str,
    lines: LineOffsetTable,
}

impl<'src> Converter<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Converter {
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    pub(crate) fn position(&self, offset: usize) -> Position {
        self.lines.position(self.source, offset)
    }

    /// Convert one raw token. Comments yield `None`.
    pub(crate) fn convert(
        &self,
        raw: RawToken,
        slice: &str,
        offset: usize,
    ) -> Result<Option<Lexeme>, LexError> {
        let pos = self.position(offset);
        let kind = match raw {
            RawToken::Comment => return Ok(None),
            RawToken::Semicolon => LexemeKind::Delim(Delim::Semicolon),
            RawToken::LBrace => LexemeKind::Delim(Delim::LBrace),
            RawToken::RBrace => LexemeKind::Delim(Delim::RBrace),
            RawToken::LParen => LexemeKind::Delim(Delim::LParen),
            RawToken::RParen => LexemeKind::Delim(Delim::RParen),
            RawToken::LBracket => LexemeKind::Delim(Delim::LBracket),
            RawToken::RBracket => LexemeKind::Delim(Delim::RBracket),
            RawToken::Comma => LexemeKind::Delim(Delim::Comma),
            RawToken::At => LexemeKind::Token(TokenKind::At),
            RawToken::Colon => LexemeKind::Token(TokenKind::Colon),
            RawToken::Dot => LexemeKind::Token(TokenKind::Dot),
            RawToken::Eq => LexemeKind::Token(TokenKind::Eq),
            RawToken::Minus => LexemeKind::Token(TokenKind::Minus),
            RawToken::Bang => LexemeKind::Token(TokenKind::Bang),
            RawToken::HexInt => LexemeKind::Token(parse_int(slice, &slice[2..], 16, pos)?),
            RawToken::OctInt => LexemeKind::Token(parse_int(slice, &slice[2..], 8, pos)?),
            RawToken::Int => LexemeKind::Token(parse_int(slice, slice, 10, pos)?),
            RawToken::Float => LexemeKind::Token(parse_float(slice, pos)?),
            RawToken::String => {
                let body = &slice[1..slice.len() - 1];
                LexemeKind::Token(TokenKind::String(self.cook_string(body, offset + 1)?))
            }
            RawToken::UnterminatedString => {
                return Err(LexError::new(pos, LexErrorKind::UnterminatedString));
            }
            RawToken::Word => LexemeKind::Token(
                TokenKind::keyword(slice).unwrap_or_else(|| TokenKind::Ident(slice.to_string())),
            ),
        };
        Ok(Some(Lexeme { kind, pos }))
    }

    /// Resolve escapes in a string body starting at byte `offset`.
    fn cook_string(&self, body: &str, offset: usize) -> Result<String, LexError> {
        let mut cooked = String::with_capacity(body.len());
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            if c != '\\' {
                cooked.push(c);
                continue;
            }
            let escaped = match chars.next() {
                Some((_, 'n')) => '\n',
                Some((_, 't')) => '\t',
                Some((_, 'r')) => '\r',
                Some((_, '0')) => '\0',
                Some((_, '\\')) => '\\',
                Some((_, '"')) => '"',
                Some((_, '\'')) => '\'',
                Some((_, other)) => {
                    return Err(LexError::new(
                        self.position(offset + i),
                        LexErrorKind::InvalidEscape(other),
                    ));
                }
                // The raw token regex never ends a string on a backslash.
                None => {
                    return Err(LexError::new(
                        self.position(offset + i),
                        LexErrorKind::UnterminatedString,
                    ));
                }
            };
            cooked.push(escaped);
        }
        Ok(cooked)
    }
}

fn parse_int(slice: &str, digits: &str, radix: u32, pos: Position) -> Result<TokenKind, LexError> {
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() {
        return Err(LexError::new(
            pos,
            LexErrorKind::InvalidNumber(slice.to_string()),
        ));
    }
    u64::from_str_radix(&digits, radix)
        .map(TokenKind::Int)
        .map_err(|_| LexError::new(pos, LexErrorKind::IntegerOutOfRange(slice.to_string())))
}

fn parse_float(slice: &str, pos: Position) -> Result<TokenKind, LexError> {
    let text: String = slice.chars().filter(|c| *c != '_').collect();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(TokenKind::float(value)),
        _ => Err(LexError::new(
            pos,
            LexErrorKind::InvalidNumber(slice.to_string()),
        )),
    }
}
