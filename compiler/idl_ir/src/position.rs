//! Source positions.
//!
//! Diagnostics in the IDL are reported by line and column, so every leaf that
//! may be blamed (names, ordinals, literals) is wrapped in [`Located`].

use std::fmt;

/// A 1-based line/column position in a source file.
///
/// Ordering is lexicographic (line first), which matches source order within
/// one file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of a file.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A value tagged with the position where it starts in the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Located<T> {
    pub value: T,
    pub pos: Position,
}

impl<T> Located<T> {
    #[inline]
    pub const fn new(value: T, pos: Position) -> Self {
        Located { value, pos }
    }

    /// Transform the value, keeping the position.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Located<U> {
        Located {
            value: f(self.value),
            pos: self.pos,
        }
    }

    /// Borrow the value, keeping the position.
    pub fn as_ref(&self) -> Located<&T> {
        Located {
            value: &self.value,
            pos: self.pos,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl Located<String> {
    /// Borrow the string payload.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Trait for AST nodes that can be blamed at a source position.
pub trait Positioned {
    /// The position where this node starts.
    fn pos(&self) -> Position;
}

impl<T> Positioned for Located<T> {
    fn pos(&self) -> Position {
        self.pos
    }
}
