//! The statement tree produced by the lexer.

use crate::{Located, Token};

/// One unit of source structure.
///
/// A `Line` is a flat token run terminated by `;`. A `Block` is a header
/// token run followed by `{ ... }` holding nested statements. The tree is
/// produced once by the lexer and only read by the parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    Line(Vec<Token>),
    Block(Vec<Token>, Vec<Located<Statement>>),
}

impl Statement {
    /// The line's tokens, or the block's header tokens.
    pub fn tokens(&self) -> &[Token] {
        match self {
            Statement::Line(tokens) | Statement::Block(tokens, _) => tokens,
        }
    }

    /// Nested statements, if this is a block.
    pub fn children(&self) -> Option<&[Located<Statement>]> {
        match self {
            Statement::Line(_) => None,
            Statement::Block(_, children) => Some(children),
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Statement::Block(..))
    }
}
