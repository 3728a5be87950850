//! Raw tokens recognized by logos, before literal conversion and grouping.

use logos::Logos;

/// Raw token from logos.
///
/// Keywords are not listed here: identifiers are matched as words and
/// mapped to keywords during conversion.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    // === Structure ===
    #[token(";")]
    Semicolon,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    // === Punctuation ===
    #[token("@")]
    At,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,

    // === Literals ===
    #[regex(r"0x[0-9a-fA-F_]+")]
    HexInt,
    #[regex(r"0o[0-7_]+")]
    OctInt,
    #[regex(r"[0-9][0-9_]*")]
    Int,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,
    /// A string literal that reaches end of line or input without its
    /// closing quote.
    #[regex(r#""([^"\\\n]|\\[^\n])*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
}
