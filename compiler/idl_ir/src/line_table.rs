//! Byte offset to line/column conversion.
//!
//! The lexer works on byte offsets; everything downstream speaks in
//! [`Position`]s. The table is built once per file and queried per token.

use crate::Position;

/// Pre-computed line offset table for O(log L) line/column lookup.
///
/// ```
/// use idl_ir::{LineOffsetTable, Position};
///
/// let source = "struct A;\nstruct B;";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.position(source, 0), Position::new(1, 1));
/// assert_eq!(table.position(source, 10), Position::new(2, 1));
/// assert_eq!(table.position(source, 17), Position::new(2, 8));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        LineOffsetTable { offsets }
    }

    /// Number of lines in the source (an empty file has one line).
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Get the 1-based position of a byte offset.
    ///
    /// Columns count characters, not bytes, from the start of the line.
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.offsets.get(line_idx).copied().unwrap_or(0);
        let end = offset.min(source.len());
        let column = source
            .get(line_start..end)
            .map_or(end - line_start, |text| text.chars().count());

        Position::new(saturating_u32(line_idx + 1), saturating_u32(column + 1))
    }
}

#[inline]
fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let table = LineOffsetTable::build("");
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.position("", 0), Position::START);
    }

    #[test]
    fn test_newline_belongs_to_its_line() {
        let source = "ab\ncd";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.position(source, 2), Position::new(1, 3));
        assert_eq!(table.position(source, 3), Position::new(2, 1));
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "# héllo\nx";
        let table = LineOffsetTable::build(source);
        // 'l' after the two-byte 'é'
        assert_eq!(table.position(source, 5), Position::new(1, 5));
    }
}
