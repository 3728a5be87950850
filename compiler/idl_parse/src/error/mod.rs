//! Parse error types.
//!
//! A [`ParseError`] is either fatal (the statement that produced it is
//! dropped) or advisory (a warning recorded next to a successfully parsed
//! declaration). Lexer failures are converted into fatal parse errors so that
//! callers see a single error list.
//!
//! `ErrorContext` supplies Elm-style "while parsing X" notes.

mod context;
mod warning;


use std::fmt;

use idl_diagnostic::{Diagnostic, ErrorCode, Severity};
use idl_ir::{Position, TokenTag};
use idl_lexer::{LexError, LexErrorKind};

use crate::recovery::{describe, TokenSet};

pub use context::ErrorContext;
pub use warning::ParseWarning;

/// A parse error or warning at a source position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// `Error` for fatal errors, `Warning` for advisories.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the problem was detected.
    pub pos: Position,
    /// Context for "while parsing X" notes.
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new fatal parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, pos: Position) -> Self {
        ParseError {
            code,
            severity: Severity::Error,
            message: message.into(),
            pos,
            context: None,
        }
    }

    /// Create a non-fatal advisory.
    #[cold]
    pub fn advisory(code: ErrorCode, message: impl Into<String>, pos: Position) -> Self {
        ParseError {
            code,
            severity: Severity::Warning,
            message: message.into(),
            pos,
            context: None,
        }
    }

    /// Create an "expected X, found Y" error from a set of expected tokens.
    ///
    /// Uses `E1002` when an identifier is the only acceptable token.
    #[cold]
    pub fn from_expected_tokens(expected: &TokenSet, found: TokenTag, pos: Position) -> Self {
        let code = if *expected == TokenSet::single(TokenTag::Ident) {
            ErrorCode::E1002
        } else {
            ErrorCode::E1001
        };
        ParseError::new(code, expected_message(expected, found), pos)
    }

    /// Like [`from_expected_tokens`](Self::from_expected_tokens), tagged with
    /// the production that required the tokens.
    ///
    /// Values and types get their own codes.
    #[cold]
    pub fn from_expected_tokens_with_context(
        expected: &TokenSet,
        found: TokenTag,
        pos: Position,
        context: ErrorContext,
    ) -> Self {
        let mut error = ParseError::from_expected_tokens(expected, found, pos);
        if let Some(code) = context.expected_code() {
            error.code = code;
        }
        error.context = Some(format!("while parsing {}", context.description()));
        error
    }

    /// Add or replace the context note.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Whether this error drops the statement that produced it.
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Convert to a diagnostic for emitters.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = if self.is_fatal() {
            Diagnostic::error(self.code, self.message.clone(), self.pos)
        } else {
            Diagnostic::warning(self.code, self.message.clone(), self.pos)
        };
        diagnostic.with_label(self.context.as_deref().unwrap_or("here"))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.message)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<&LexError> for ParseError {
    fn from(error: &LexError) -> Self {
        let code = match &error.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::IntegerOutOfRange(_) | LexErrorKind::InvalidNumber(_) => {
                ErrorCode::E0003
            }
            LexErrorKind::UnclosedDelimiter(_) => ErrorCode::E0004,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0005,
            LexErrorKind::MissingTerminator => ErrorCode::E0006,
            LexErrorKind::UnmatchedDelimiter(_) => ErrorCode::E0007,
            LexErrorKind::MisplacedPunctuation(_) => ErrorCode::E0008,
            LexErrorKind::BlockWithoutHeader => ErrorCode::E0009,
        };
        ParseError::new(code, error.kind.to_string(), error.pos)
    }
}

fn expected_message(expected: &TokenSet, found: TokenTag) -> String {
    format!(
        "expected {}, found {}",
        expected.format_expected(),
        describe(found)
    )
}
