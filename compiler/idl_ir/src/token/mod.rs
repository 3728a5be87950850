//! Token definitions for the IDL.
//!
//! Tokens are produced by the lexer already grouped: parenthesized and
//! bracketed runs are extracted into `ParenList` / `BracketList` tokens whose
//! payload is the comma-separated sublists.

mod tag;

pub use tag::TokenTag;

use std::fmt;

use crate::Located;

/// A positioned token.
pub type Token = Located<TokenKind>;

/// Token kinds for the IDL.
///
/// Float literals store bits as u64 for Hash compatibility.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier: `Foo`, `bar_baz`
    Ident(String),
    /// Integer literal: `42`, `0xff` (negation is applied by the parser)
    Int(u64),
    /// Float literal: `1.5`, `2e10` (stored as bits)
    Float(u64),
    /// String literal with escapes resolved.
    String(String),
    /// `( a, b )` split on commas into token sublists.
    ParenList(Vec<Vec<Token>>),
    /// `[ a, b ]` split on commas into token sublists.
    BracketList(Vec<Vec<Token>>),

    At,
    Colon,
    Dot,
    Eq,
    Minus,
    Bang,

    In,
    Import,
    Using,
    Const,
    Enum,
    Struct,
    Union,
    Interface,
    Option,
}

impl TokenKind {
    /// Create a float token from a value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// The compact tag for this kind.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Float(_) => TokenTag::Float,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::ParenList(_) => TokenTag::ParenList,
            TokenKind::BracketList(_) => TokenTag::BracketList,
            TokenKind::At => TokenTag::At,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Dot => TokenTag::Dot,
            TokenKind::Eq => TokenTag::Eq,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Bang => TokenTag::Bang,
            TokenKind::In => TokenTag::KwIn,
            TokenKind::Import => TokenTag::KwImport,
            TokenKind::Using => TokenTag::KwUsing,
            TokenKind::Const => TokenTag::KwConst,
            TokenKind::Enum => TokenTag::KwEnum,
            TokenKind::Struct => TokenTag::KwStruct,
            TokenKind::Union => TokenTag::KwUnion,
            TokenKind::Interface => TokenTag::KwInterface,
            TokenKind::Option => TokenTag::KwOption,
        }
    }

    /// Name used in diagnostics ("found ...").
    pub fn display_name(&self) -> &'static str {
        self.tag().friendly_name()
    }

    /// Map a word to its keyword token, if it is reserved.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "in" => TokenKind::In,
            "import" => TokenKind::Import,
            "using" => TokenKind::Using,
            "const" => TokenKind::Const,
            "enum" => TokenKind::Enum,
            "struct" => TokenKind::Struct,
            "union" => TokenKind::Union,
            "interface" => TokenKind::Interface,
            "option" => TokenKind::Option,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "Ident({name})"),
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            TokenKind::String(s) => write!(f, "String({s:?})"),
            TokenKind::ParenList(items) => f.debug_tuple("ParenList").field(items).finish(),
            TokenKind::BracketList(items) => f.debug_tuple("BracketList").field(items).finish(),
            other => write!(f, "{}", other.display_name()),
        }
    }
}
