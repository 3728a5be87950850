//! Token cursor for navigating one statement's tokens.
//!
//! Every statement (and every sublist of a `( … )` or `[ … ]` group) gets its
//! own cursor, so "end of input" always means "end of statement".

use idl_diagnostic::ErrorCode;
use idl_ir::{Located, Position, Token, TokenKind, TokenTag};
use tracing::trace;

use crate::recovery::{describe, TokenSet};
use crate::ParseError;

/// Cursor over a borrowed token slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Reported for errors at the end of the slice.
    end_pos: Position,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `tokens`.
    ///
    /// `fallback` positions end-of-statement errors when `tokens` is empty.
    pub fn new(tokens: &'a [Token], fallback: Position) -> Self {
        let end_pos = tokens.last().map_or(fallback, |token| token.pos);
        Cursor {
            tokens,
            pos: 0,
            end_pos,
        }
    }

    /// Index of the current token.
    ///
    /// Compare before and after a parse to tell whether tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly (used by snapshot restore).
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len(), "position past end of tokens");
        self.pos = pos;
    }

    /// The current token, or `None` at the end of the statement.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_tag(&self) -> TokenTag {
        self.current()
            .map_or(TokenTag::EndOfStatement, |token| token.value.tag())
    }

    /// Position of the current token, or of the last one at the end.
    #[inline]
    pub fn current_pos(&self) -> Position {
        self.current().map_or(self.end_pos, |token| token.pos)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.current_tag() == tag
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        trace!(
            pos = self.pos,
            kind = %token.value.display_name(),
            at = %token.pos,
            "advance"
        );
        self.pos += 1;
        Some(token)
    }

    /// Consume a token with the given tag or fail without consuming.
    #[inline]
    pub fn expect(&mut self, tag: TokenTag) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.value.tag() == tag => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.make_expect_error(tag)),
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, tag: TokenTag) -> ParseError {
        ParseError::from_expected_tokens(&TokenSet::single(tag), self.current_tag(), self.current_pos())
    }

    /// Consume an identifier.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<Located<String>, ParseError> {
        match self.current() {
            Some(Located {
                value: TokenKind::Ident(name),
                pos,
            }) => {
                self.pos += 1;
                Ok(Located::new(name.clone(), *pos))
            }
            _ => Err(self.make_expect_error(TokenTag::Ident)),
        }
    }

    /// Consume an integer literal.
    #[inline]
    pub fn expect_int(&mut self) -> Result<Located<u64>, ParseError> {
        match self.current() {
            Some(Located {
                value: TokenKind::Int(n),
                pos,
            }) => {
                self.pos += 1;
                Ok(Located::new(*n, *pos))
            }
            _ => Err(self.make_expect_error(TokenTag::Int)),
        }
    }

    /// Consume a string literal.
    #[inline]
    pub fn expect_string(&mut self) -> Result<Located<String>, ParseError> {
        match self.current() {
            Some(Located {
                value: TokenKind::String(s),
                pos,
            }) => {
                self.pos += 1;
                Ok(Located::new(s.clone(), *pos))
            }
            _ => Err(self.make_expect_error(TokenTag::String)),
        }
    }

    /// Consume a `( … )` group, returning its comma-separated sublists.
    pub fn expect_paren_list(&mut self) -> Result<Located<&'a [Vec<Token>]>, ParseError> {
        match self.current() {
            Some(Located {
                value: TokenKind::ParenList(lists),
                pos,
            }) => {
                self.pos += 1;
                Ok(Located::new(lists.as_slice(), *pos))
            }
            _ => Err(self.make_expect_error(TokenTag::ParenList)),
        }
    }

    /// Require that every token has been consumed.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.make_trailing_error())
        }
    }

    #[cold]
    #[inline(never)]
    fn make_trailing_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected end of statement, found {}",
                describe(self.current_tag())
            ),
            self.current_pos(),
        )
    }
}
