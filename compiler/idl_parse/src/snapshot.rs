//! Parser snapshots for speculative parsing.
//!
//! A snapshot records the cursor position and the length of the current
//! diagnostic scope. Restoring rewinds both, so an abandoned alternative
//! leaves neither consumed tokens nor warnings behind.

/// Lightweight parser state for backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    /// Token index in the cursor.
    pub cursor_pos: usize,
    /// Number of diagnostics recorded in the current scope.
    pub diagnostics_len: usize,
}

impl ParserSnapshot {
    pub(crate) fn new(cursor_pos: usize, diagnostics_len: usize) -> Self {
        Self {
            cursor_pos,
            diagnostics_len,
        }
    }
}
