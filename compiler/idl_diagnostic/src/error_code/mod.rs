//! Error codes for all IDL diagnostics.
//!
//! The first digit of a code names the phase that produced it.

use std::fmt;

/// Error codes for all IDL diagnostics.
///
/// Format: `E####` / `W####` where the first digit indicates the phase:
/// - E0xxx: Lexer errors (fatal to the whole file)
/// - E1xxx: Parser errors (fatal to one statement)
/// - W1xxx: Parser warnings (advisory)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal (out of range or malformed)
    E0003,
    /// Unclosed delimiter
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Missing `;` at end of input
    E0006,
    /// Unmatched closing delimiter
    E0007,
    /// Misplaced `,` `;` `{` or `}`
    E0008,
    /// Block without a header
    E0009,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected identifier
    E1002,
    /// Blocks are not allowed here
    E1003,
    /// Ordinal exceeds the maximum
    E1004,
    /// Expected value
    E1005,
    /// Expected type
    E1006,

    // Parser Warnings (W1xxx)
    /// Ordinal close to the maximum without acknowledgment
    W1001,
}

impl ErrorCode {
    /// All variants, in declaration order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::W1001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// One-line description, for `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "unclosed delimiter",
            ErrorCode::E0005 => "invalid escape sequence",
            ErrorCode::E0006 => "missing statement terminator",
            ErrorCode::E0007 => "unmatched closing delimiter",
            ErrorCode::E0008 => "misplaced punctuation",
            ErrorCode::E0009 => "block without a header",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected identifier",
            ErrorCode::E1003 => "blocks are not allowed here",
            ErrorCode::E1004 => "ordinal exceeds the maximum",
            ErrorCode::E1005 => "expected value",
            ErrorCode::E1006 => "expected type",
            ErrorCode::W1001 => "ordinal close to the maximum",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"` or `"w1001"`.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
