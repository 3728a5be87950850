//! Lexer error types.
//!
//! A lex error is fatal to the whole file: the statement tree cannot be
//! built, so the parser never runs.

use idl_ir::Position;
use thiserror::Error;

/// A lexer error at a source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{pos}: {kind}")]
pub struct LexError {
    pub pos: Position,
    pub kind: LexErrorKind,
}

impl LexError {
    #[cold]
    pub fn new(pos: Position, kind: LexErrorKind) -> Self {
        LexError { pos, kind }
    }
}

/// What went wrong while lexing.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerOutOfRange(String),
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
    #[error("unclosed delimiter `{0}`")]
    UnclosedDelimiter(char),
    #[error("unmatched closing delimiter `{0}`")]
    UnmatchedDelimiter(char),
    #[error("`{0}` is not allowed here")]
    MisplacedPunctuation(char),
    #[error("expected `;` or `{{` after statement")]
    MissingTerminator,
    #[error("block has no header")]
    BlockWithoutHeader,
}
