//! IDL IR - shared data definitions for the schema IDL compiler.
//!
//! This crate contains the data structures passed between compiler phases:
//! - Positions and `Located<T>` for source locations
//! - Tokens and the `Statement` tree produced by the lexer
//! - Declaration AST nodes produced by the parser
//! - A renderer that prints declarations back to source text
//!
//! Every type derives `Clone, Eq, PartialEq, Hash, Debug`. Floats are stored
//! as `u64` bits so that tokens and AST nodes stay `Eq + Hash`.

pub mod ast;
mod line_table;
mod position;
pub mod render;
mod statement;
mod token;

pub use ast::{DeclName, Declaration, FieldAssignment, FieldValue, MethodParam, TypeExpression};
pub use line_table::LineOffsetTable;
pub use position::{Located, Position, Positioned};
pub use render::render;
pub use statement::Statement;
pub use token::{Token, TokenKind, TokenTag};
