//! Lexer for the schema IDL using logos.
//!
//! Produces the statement tree consumed by the parser: `;`-terminated
//! `Line`s and `{ ... }` `Block`s, with `( ... )` and `[ ... ]` runs already
//! extracted into comma-separated list tokens. Any lexical problem is fatal
//! to the file and reported as a single [`LexError`].

mod convert;
mod grouper;
mod lex_error;
mod raw_token;

use logos::Logos;
use tracing::debug;

use idl_ir::{Located, Statement};

pub use lex_error::{LexError, LexErrorKind};

use convert::Converter;
use grouper::Grouper;
use raw_token::RawToken;

/// Lex `source` into a statement tree.
///
/// `filename` is only used for logging.
pub fn lex(filename: &str, source: &str) -> Result<Vec<Located<Statement>>, LexError> {
    let converter = Converter::new(source);
    let mut lexemes = Vec::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let span = raw.span();
        let Ok(token) = result else {
            let pos = converter.position(span.start);
            let found = source[span.start..].chars().next().unwrap_or('\u{fffd}');
            return Err(LexError::new(pos, LexErrorKind::InvalidCharacter(found)));
        };
        if let Some(lexeme) = converter.convert(token, raw.slice(), span.start)? {
            lexemes.push(lexeme);
        }
    }

    let end_pos = converter.position(source.len());
    let statements = Grouper::new(lexemes.into_iter(), end_pos).file()?;
    debug!(
        file = filename,
        statements = statements.len(),
        "lexed statement tree"
    );
    Ok(statements)
}

#[cfg(test)]
mod tests;
