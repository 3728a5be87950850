//! Token sets for expected-token reporting.
//!
//! Each statement is parsed in isolation, so recovery never needs to skip
//! tokens: a failed statement is dropped as a whole. What remains of recovery
//! is knowing which tokens would have been accepted, so that failed
//! alternatives can be merged into one "expected X, Y, or Z" message.

use idl_ir::TokenTag;

// TokenSet uses a u32 bitset, so every tag index must fit in 0..32.
const _: () = assert!(
    TokenTag::MAX_DISCRIMINANT < 32,
    "TokenSet uses u32 bitset; all tag indices must be < 32"
);

/// A set of token tags with O(1) membership testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSet(u32);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single tag.
    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        Self(1u32 << tag.index())
    }

    /// Add a tag to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u32 << tag.index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, tag: TokenTag) -> bool {
        (self.0 & (1u32 << tag.index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of tags in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the tags in this set, in tag order.
    pub fn iter(&self) -> impl Iterator<Item = TokenTag> {
        let bits = self.0;
        (0..=TokenTag::MAX_DISCRIMINANT)
            .filter(move |i| bits & (1u32 << i) != 0)
            .filter_map(TokenTag::from_index)
    }

    /// Union with another set (non-const mutation).
    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        self.0 |= other.0;
    }

    /// Format this set for error messages.
    ///
    /// Returns "`:`" for one tag, "`:` or `=`" for two, and
    /// "`using`, `const`, or `enum`" for more. Token classes such as
    /// identifiers are written without backticks.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self.iter().map(describe).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => single.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Describe a tag for "expected X, found Y" messages.
pub fn describe(tag: TokenTag) -> String {
    match tag {
        TokenTag::Ident
        | TokenTag::Int
        | TokenTag::Float
        | TokenTag::String
        | TokenTag::EndOfStatement => tag.friendly_name().to_string(),
        _ => format!("`{}`", tag.friendly_name()),
    }
}

/// Tokens that can start a declaration name.
pub const DECL_NAME_START: TokenSet = TokenSet::new()
    .with(TokenTag::KwImport)
    .with(TokenTag::Dot)
    .with(TokenTag::Ident);

/// Tokens that can start a constant or default value.
pub const VALUE_START: TokenSet = TokenSet::new()
    .with(TokenTag::Int)
    .with(TokenTag::Float)
    .with(TokenTag::String)
    .with(TokenTag::Ident)
    .with(TokenTag::BracketList)
    .with(TokenTag::ParenList)
    .with(TokenTag::Minus);

/// Tokens that may follow `-` in a value.
pub const NUMBER: TokenSet = TokenSet::new()
    .with(TokenTag::Int)
    .with(TokenTag::Float);
