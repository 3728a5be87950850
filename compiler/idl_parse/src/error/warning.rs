//! Parse warnings (non-fatal diagnostics).

use idl_diagnostic::ErrorCode;
use idl_ir::Position;

use super::ParseError;

/// A parse warning.
///
/// Warnings are recorded alongside the declaration that produced them and
/// never prevent the declaration from being kept.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseWarning {
    /// An ordinal within the exhaustion window, written without `!`.
    OrdinalNearMaximum {
        /// Position of the ordinal literal.
        pos: Position,
        /// The declared member's name.
        name: String,
        ordinal: u64,
        max: u64,
    },
}

impl ParseWarning {
    pub fn pos(&self) -> Position {
        match self {
            ParseWarning::OrdinalNearMaximum { pos, .. } => *pos,
        }
    }

    /// Convert to an advisory [`ParseError`].
    pub fn into_error(self) -> ParseError {
        match self {
            ParseWarning::OrdinalNearMaximum {
                pos,
                name,
                ordinal,
                max,
            } => ParseError::advisory(
                ErrorCode::W1001,
                format!(
                    "ordinal @{ordinal} of `{name}` is close to the maximum of {max}; \
                     write `@{ordinal}!` to acknowledge that ordinals are running out"
                ),
                pos,
            ),
        }
    }
}
