//! Compact discriminant tag for `TokenKind`.

/// Compact discriminant tag for `TokenKind`.
///
/// | Range | Category |
/// |-------|----------|
/// | 0-5   | Literals and groups |
/// | 6-11  | Punctuation |
/// | 12-20 | Keywords |
/// | 21    | End of statement (cursor sentinel, never lexed) |
///
/// The parser's `TokenSet` is a `u32` bitset indexed by these values, so all
/// discriminants must stay below 32.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // === Literals and groups ===
    Ident = 0,
    Int = 1,
    Float = 2,
    String = 3,
    ParenList = 4,
    BracketList = 5,

    // === Punctuation ===
    At = 6,
    Colon = 7,
    Dot = 8,
    Eq = 9,
    Minus = 10,
    Bang = 11,

    // === Keywords ===
    KwIn = 12,
    KwImport = 13,
    KwUsing = 14,
    KwConst = 15,
    KwEnum = 16,
    KwStruct = 17,
    KwUnion = 18,
    KwInterface = 19,
    KwOption = 20,

    // === Special ===
    EndOfStatement = 21,
}

impl TokenTag {
    /// Largest discriminant value.
    pub const MAX_DISCRIMINANT: u8 = TokenTag::EndOfStatement as u8;

    const ALL: [TokenTag; 22] = [
        TokenTag::Ident,
        TokenTag::Int,
        TokenTag::Float,
        TokenTag::String,
        TokenTag::ParenList,
        TokenTag::BracketList,
        TokenTag::At,
        TokenTag::Colon,
        TokenTag::Dot,
        TokenTag::Eq,
        TokenTag::Minus,
        TokenTag::Bang,
        TokenTag::KwIn,
        TokenTag::KwImport,
        TokenTag::KwUsing,
        TokenTag::KwConst,
        TokenTag::KwEnum,
        TokenTag::KwStruct,
        TokenTag::KwUnion,
        TokenTag::KwInterface,
        TokenTag::KwOption,
        TokenTag::EndOfStatement,
    ];

    /// The discriminant as an index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Convert a discriminant index back to a tag.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Human-readable name for "expected X, found Y" messages.
    pub const fn friendly_name(self) -> &'static str {
        match self {
            TokenTag::Ident => "identifier",
            TokenTag::Int => "integer",
            TokenTag::Float => "float",
            TokenTag::String => "string",
            TokenTag::ParenList => "(",
            TokenTag::BracketList => "[",
            TokenTag::At => "@",
            TokenTag::Colon => ":",
            TokenTag::Dot => ".",
            TokenTag::Eq => "=",
            TokenTag::Minus => "-",
            TokenTag::Bang => "!",
            TokenTag::KwIn => "in",
            TokenTag::KwImport => "import",
            TokenTag::KwUsing => "using",
            TokenTag::KwConst => "const",
            TokenTag::KwEnum => "enum",
            TokenTag::KwStruct => "struct",
            TokenTag::KwUnion => "union",
            TokenTag::KwInterface => "interface",
            TokenTag::KwOption => "option",
            TokenTag::EndOfStatement => "end of statement",
        }
    }
}
