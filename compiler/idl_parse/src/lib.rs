//! Declaration parser for the schema IDL.
//!
//! Consumes the statement tree built by `idl_lexer` and produces
//! [`Declaration`]s. Every statement is parsed in isolation: a statement
//! that fails contributes exactly one error and no declaration, and parsing
//! continues with the next statement. Nothing is thrown past
//! [`parse_file`]; all diagnostics come back in [`ParseOutput`].
//!
//! # Architecture
//!
//! - [`Cursor`] walks one statement's tokens (or one group sublist).
//! - Productions return a [`ParseOutcome`] that tells a failure which
//!   consumed tokens from one that did not, and are sequenced with the
//!   [`one_of!`], [`require!`], [`chain!`] and [`committed!`] macros.
//! - [`ParserSnapshot`] rewinds both the cursor and the diagnostic scope, so
//!   a failed alternative leaves no trace.
//! - [`ErrorCollector`] owns the diagnostics of one statement scope.
//! - [`check_ordinal`] applies the ordinal exhaustion policy.

mod collector;
mod cursor;
mod error;
mod grammar;
mod ordinal;
mod outcome;
mod recovery;
mod snapshot;

#[cfg(test)]
mod tests;

use idl_diagnostic::Diagnostic;
use idl_ir::{Declaration, Located, Position, Statement, Token, TokenTag};
use tracing::debug;

pub use collector::ErrorCollector;
pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseWarning};
pub use ordinal::{check_ordinal, OrdinalLimits, OrdinalVerdict, EXHAUSTION_WINDOW};
pub use outcome::ParseOutcome;
pub use recovery::TokenSet;
pub use snapshot::ParserSnapshot;

use grammar::Scope;

/// Parser state for one statement, or one sublist inside a group.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    limits: OrdinalLimits,
    diagnostics: ErrorCollector,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`.
    ///
    /// `fallback` positions end-of-statement errors for an empty slice.
    pub fn new(tokens: &'a [Token], fallback: Position, limits: OrdinalLimits) -> Self {
        Parser {
            cursor: Cursor::new(tokens, fallback),
            limits,
            diagnostics: ErrorCollector::new(),
        }
    }

    /// Capture the cursor position and diagnostic count.
    #[inline]
    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.cursor.position(), self.diagnostics.mark())
    }

    /// Rewind to `snapshot`, dropping diagnostics recorded since.
    #[inline]
    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.diagnostics.rollback(snapshot.diagnostics_len);
    }

    pub fn limits(&self) -> OrdinalLimits {
        self.limits
    }

    /// Diagnostics recorded so far in this scope.
    pub fn diagnostics(&self) -> &ErrorCollector {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> ErrorCollector {
        self.diagnostics
    }

    // Cursor delegation

    #[inline]
    fn current_tag(&self) -> TokenTag {
        self.cursor.current_tag()
    }

    #[inline]
    fn current_pos(&self) -> Position {
        self.cursor.current_pos()
    }

    #[inline]
    fn check(&self, tag: TokenTag) -> bool {
        self.cursor.check(tag)
    }

    #[inline]
    fn advance(&mut self) -> Option<&'a Token> {
        self.cursor.advance()
    }

    /// Consume the current token if it has `tag`.
    #[inline]
    fn eat(&mut self, tag: TokenTag) -> bool {
        if self.check(tag) {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline]
    fn expect(&mut self, tag: TokenTag) -> Result<&'a Token, ParseError> {
        self.cursor.expect(tag)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<Located<String>, ParseError> {
        self.cursor.expect_ident()
    }

    #[inline]
    fn expect_end(&self) -> Result<(), ParseError> {
        self.cursor.expect_end()
    }

    /// Fail without consuming, reporting the current token.
    #[cold]
    fn empty_err<T>(&self, expected: TokenSet) -> ParseOutcome<T> {
        ParseOutcome::empty_err(expected, self.current_tag(), self.current_pos())
    }

    /// Run `f`, tagging any committed error with "while parsing {context}".
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> ParseOutcome<T>,
    ) -> ParseOutcome<T> {
        f(self).with_error_context(context)
    }

    /// Record an advisory in the current scope.
    fn warn(&mut self, warning: ParseWarning) {
        self.diagnostics.warn(warning.into_error());
    }
}

/// Everything produced by parsing one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub file: String,
    /// Successfully parsed top-level declarations, in source order.
    pub declarations: Vec<Declaration>,
    /// Fatal errors and advisories, in source order.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Whether any statement failed to parse.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(ParseError::is_fatal)
    }

    pub fn fatal_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(|e| e.is_fatal())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(|e| !e.is_fatal())
    }

    pub fn error_count(&self) -> usize {
        self.fatal_errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Convert every error and warning for an emitter.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Lex and parse one file with the default ordinal limits.
pub fn parse_file(filename: &str, source: &str) -> ParseOutput {
    parse_file_with_limits(filename, source, OrdinalLimits::default())
}

/// Lex and parse one file.
///
/// A lexer error is fatal to the file: the output holds no declarations and
/// exactly that error.
pub fn parse_file_with_limits(filename: &str, source: &str, limits: OrdinalLimits) -> ParseOutput {
    let statements = match idl_lexer::lex(filename, source) {
        Ok(statements) => statements,
        Err(error) => {
            debug!(file = filename, error = %error, "lexing failed");
            return ParseOutput {
                file: filename.to_string(),
                declarations: Vec::new(),
                errors: vec![ParseError::from(&error)],
            };
        }
    };

    let (declarations, errors) = parse_statements(&statements, limits);
    let output = ParseOutput {
        file: filename.to_string(),
        declarations,
        errors,
    };
    debug!(
        file = filename,
        statements = statements.len(),
        declarations = output.declarations.len(),
        errors = output.error_count(),
        warnings = output.warning_count(),
        "parsed file"
    );
    output
}

/// Parse an already-built statement tree as a file scope.
pub fn parse_statements(
    statements: &[Located<Statement>],
    limits: OrdinalLimits,
) -> (Vec<Declaration>, Vec<ParseError>) {
    let mut collector = ErrorCollector::new();
    let declarations = grammar::parse_scope(statements, Scope::File, limits, &mut collector);
    (declarations, collector.into_vec())
}
