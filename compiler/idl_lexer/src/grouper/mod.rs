//! Statement tree builder.
//!
//! Turns the flat lexeme stream into `Line` / `Block` statements and
//! extracts parenthesized and bracketed runs into list tokens split on
//! commas.

use idl_ir::{Located, Position, Statement, Token, TokenKind};
use idl_stack::ensure_sufficient_stack;

use crate::convert::{Delim, Lexeme, LexemeKind};
use crate::lex_error::{LexError, LexErrorKind};

pub(crate) struct Grouper<I: Iterator<Item = Lexeme>> {
    lexemes: I,
    /// Position just past the last character.
    end_pos: Position,
}

impl<I: Iterator<Item = Lexeme>> Grouper<I> {
    pub(crate) fn new(lexemes: I, end_pos: Position) -> Self {
        Grouper { lexemes, end_pos }
    }

    /// Build the file-level statement list.
    pub(crate) fn file(mut self) -> Result<Vec<Located<Statement>>, LexError> {
        self.statements(None)
    }

    /// Statements up to the `}` closing a block opened at `open`, or to end
    /// of input at file level.
    fn statements(
        &mut self,
        open: Option<Position>,
    ) -> Result<Vec<Located<Statement>>, LexError> {
        ensure_sufficient_stack(|| self.statements_inner(open))
    }

    fn statements_inner(
        &mut self,
        open: Option<Position>,
    ) -> Result<Vec<Located<Statement>>, LexError> {
        let mut statements = Vec::new();
        let mut pending: Vec<Token> = Vec::new();

        loop {
            let Some(lexeme) = self.lexemes.next() else {
                if let Some(open) = open {
                    return Err(LexError::new(open, LexErrorKind::UnclosedDelimiter('{')));
                }
                if !pending.is_empty() {
                    return Err(LexError::new(self.end_pos, LexErrorKind::MissingTerminator));
                }
                return Ok(statements);
            };

            match lexeme.kind {
                LexemeKind::Token(kind) => pending.push(Located::new(kind, lexeme.pos)),
                LexemeKind::Delim(Delim::Semicolon) => {
                    // Empty statements, including a `;` after `}`, are ignored.
                    if let Some(pos) = pending.first().map(|t| t.pos) {
                        let tokens = std::mem::take(&mut pending);
                        statements.push(Located::new(Statement::Line(tokens), pos));
                    }
                }
                LexemeKind::Delim(Delim::LBrace) => {
                    let Some(pos) = pending.first().map(|t| t.pos) else {
                        return Err(LexError::new(lexeme.pos, LexErrorKind::BlockWithoutHeader));
                    };
                    let header = std::mem::take(&mut pending);
                    let children = self.statements(Some(lexeme.pos))?;
                    statements.push(Located::new(Statement::Block(header, children), pos));
                }
                LexemeKind::Delim(Delim::RBrace) => {
                    if open.is_none() {
                        return Err(LexError::new(
                            lexeme.pos,
                            LexErrorKind::UnmatchedDelimiter('}'),
                        ));
                    }
                    if let Some(first) = pending.first() {
                        return Err(LexError::new(first.pos, LexErrorKind::MissingTerminator));
                    }
                    return Ok(statements);
                }
                LexemeKind::Delim(Delim::LParen) => {
                    let items = self.group(lexeme.pos, Delim::LParen, Delim::RParen)?;
                    pending.push(Located::new(TokenKind::ParenList(items), lexeme.pos));
                }
                LexemeKind::Delim(Delim::LBracket) => {
                    let items = self.group(lexeme.pos, Delim::LBracket, Delim::RBracket)?;
                    pending.push(Located::new(TokenKind::BracketList(items), lexeme.pos));
                }
                LexemeKind::Delim(closer @ (Delim::RParen | Delim::RBracket)) => {
                    return Err(LexError::new(
                        lexeme.pos,
                        LexErrorKind::UnmatchedDelimiter(closer.as_char()),
                    ));
                }
                LexemeKind::Delim(Delim::Comma) => {
                    return Err(LexError::new(
                        lexeme.pos,
                        LexErrorKind::MisplacedPunctuation(','),
                    ));
                }
            }
        }
    }

    /// Comma-separated sublists up to `close`. `()` yields no sublists; a
    /// trailing comma yields a final empty sublist.
    fn group(
        &mut self,
        open_pos: Position,
        open: Delim,
        close: Delim,
    ) -> Result<Vec<Vec<Token>>, LexError> {
        ensure_sufficient_stack(|| self.group_inner(open_pos, open, close))
    }

    fn group_inner(
        &mut self,
        open_pos: Position,
        open: Delim,
        close: Delim,
    ) -> Result<Vec<Vec<Token>>, LexError> {
        let mut items = Vec::new();
        let mut current: Vec<Token> = Vec::new();

        loop {
            let Some(lexeme) = self.lexemes.next() else {
                return Err(LexError::new(
                    open_pos,
                    LexErrorKind::UnclosedDelimiter(open.as_char()),
                ));
            };

            match lexeme.kind {
                LexemeKind::Token(kind) => current.push(Located::new(kind, lexeme.pos)),
                LexemeKind::Delim(Delim::Comma) => items.push(std::mem::take(&mut current)),
                LexemeKind::Delim(delim) if delim == close => {
                    if !current.is_empty() || !items.is_empty() {
                        items.push(current);
                    }
                    return Ok(items);
                }
                LexemeKind::Delim(Delim::LParen) => {
                    let nested = self.group(lexeme.pos, Delim::LParen, Delim::RParen)?;
                    current.push(Located::new(TokenKind::ParenList(nested), lexeme.pos));
                }
                LexemeKind::Delim(Delim::LBracket) => {
                    let nested = self.group(lexeme.pos, Delim::LBracket, Delim::RBracket)?;
                    current.push(Located::new(TokenKind::BracketList(nested), lexeme.pos));
                }
                LexemeKind::Delim(closer @ (Delim::RParen | Delim::RBracket)) => {
                    return Err(LexError::new(
                        lexeme.pos,
                        LexErrorKind::UnmatchedDelimiter(closer.as_char()),
                    ));
                }
                LexemeKind::Delim(other) => {
                    return Err(LexError::new(
                        lexeme.pos,
                        LexErrorKind::MisplacedPunctuation(other.as_char()),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
