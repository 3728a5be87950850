//! Parse outcomes.
//!
//! Every production in this grammar consumes at least one token when it
//! succeeds, so success has one shape. Failure records whether tokens were
//! consumed:
//!
//! | | consumed | nothing consumed |
//! |---|---|---|
//! | success | `ConsumedOk` | |
//! | failure | `ConsumedErr` | `EmptyErr` |
//!
//! `EmptyErr` carries the set of tokens that would have been accepted, so a
//! failed ordered choice can report "expected `enum`, `struct`, or
//! `interface`" instead of only the last alternative's complaint.
//!
//! Ordered choice ([`one_of!`](crate::one_of)) backtracks on *every* failure,
//! consumed or not, and reports whichever failure got furthest.

use idl_ir::{Position, TokenTag};

use crate::error::ErrorContext;
use crate::recovery::TokenSet;
use crate::ParseError;

/// Result of one production.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "parse outcomes must be handled"]
pub enum ParseOutcome<T> {
    /// Parsed successfully after consuming tokens.
    ConsumedOk { value: T },
    /// Failed after consuming tokens.
    ConsumedErr { error: ParseError },
    /// Failed without consuming tokens.
    EmptyErr {
        expected: TokenSet,
        found: TokenTag,
        position: Position,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        ParseOutcome::ConsumedOk { value }
    }

    #[cold]
    pub fn consumed_err(error: ParseError) -> Self {
        ParseOutcome::ConsumedErr { error }
    }

    #[cold]
    pub fn empty_err(expected: TokenSet, found: TokenTag, position: Position) -> Self {
        ParseOutcome::EmptyErr {
            expected,
            found,
            position,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ParseOutcome::ConsumedOk { .. })
    }

    /// Position a failure is reported at.
    pub fn failure_pos(&self) -> Option<Position> {
        match self {
            ParseOutcome::ConsumedErr { error } => Some(error.pos),
            ParseOutcome::EmptyErr { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Attach "while parsing X" to a committed error that has no context yet.
    ///
    /// `EmptyErr` is left alone: nothing of `X` was seen.
    pub fn with_error_context(self, context: ErrorContext) -> Self {
        match self {
            ParseOutcome::ConsumedErr { mut error } => {
                if error.context.is_none() {
                    error.context = Some(format!("while parsing {}", context.description()));
                }
                ParseOutcome::ConsumedErr { error }
            }
            other => other,
        }
    }

    /// Convert to a `Result`, building an "expected X, found Y" error for
    /// `EmptyErr`.
    pub fn into_result(self) -> Result<T, ParseError> {
        match self {
            ParseOutcome::ConsumedOk { value } => Ok(value),
            ParseOutcome::ConsumedErr { error } => Err(error),
            ParseOutcome::EmptyErr {
                expected,
                found,
                position,
            } => Err(ParseError::from_expected_tokens(&expected, found, position)),
        }
    }

    /// Pick the failure to report from two failed alternatives.
    ///
    /// The later position wins. On a tie a consumed failure beats an empty
    /// one, and two empty failures merge their expected sets. A success
    /// passed as either argument is returned as is.
    pub fn furthest(first: Self, second: Self) -> Self {
        let (Some(first_pos), Some(second_pos)) = (first.failure_pos(), second.failure_pos())
        else {
            return if first.is_ok() { first } else { second };
        };
        if second_pos > first_pos {
            return second;
        }
        if first_pos > second_pos {
            return first;
        }
        match (first, second) {
            (
                ParseOutcome::EmptyErr {
                    mut expected,
                    found,
                    position,
                },
                ParseOutcome::EmptyErr {
                    expected: other, ..
                },
            ) => {
                expected.union_with(&other);
                ParseOutcome::EmptyErr {
                    expected,
                    found,
                    position,
                }
            }
            (ParseOutcome::EmptyErr { .. }, consumed) => consumed,
            (first, _) => first,
        }
    }
}

/// Try alternatives in order, backtracking after every failure.
///
/// Returns the first success. If all alternatives fail, returns the failure
/// chosen by [`ParseOutcome::furthest`]. The snapshot taken before the first
/// alternative is restored after each failure, which also rolls back any
/// diagnostics the failed alternative recorded.
///
/// ```ignore
/// one_of!(self,
///     self.enum_decl(body),
///     self.struct_decl(body),
///     self.interface_decl(body),
/// )
/// ```
#[macro_export]
macro_rules! one_of {
    ($self:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let original = $self.snapshot();
        match $first {
            outcome @ $crate::ParseOutcome::ConsumedOk { .. } => outcome,
            failure => {
                $self.restore(original);
                $crate::one_of!(@rest $self, original, failure $(, $rest)*)
            }
        }
    }};

    (@rest $self:expr, $original:expr, $failure:expr $(,)?) => {{
        $failure
    }};

    (@rest $self:expr, $original:expr, $failure:expr, $next:expr $(, $rest:expr)* $(,)?) => {{
        match $next {
            outcome @ $crate::ParseOutcome::ConsumedOk { .. } => outcome,
            failure => {
                $self.restore($original);
                let furthest = $crate::ParseOutcome::furthest($failure, failure);
                $crate::one_of!(@rest $self, $original, furthest $(, $rest)*)
            }
        }
    }};
}

/// Mandatory element after commitment.
///
/// `EmptyErr` is upgraded to `ConsumedErr` with the given [`ErrorContext`].
#[macro_export]
macro_rules! require {
    ($self:expr, $parser:expr, $context:expr) => {{
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value } => value,
            $crate::ParseOutcome::ConsumedErr { error } => {
                return $crate::ParseOutcome::ConsumedErr { error };
            }
            $crate::ParseOutcome::EmptyErr {
                expected,
                found,
                position,
            } => {
                let error = $crate::ParseError::from_expected_tokens_with_context(
                    &expected, found, position, $context,
                );
                return $crate::ParseOutcome::ConsumedErr { error };
            }
        }
    }};
}

/// Sequence a sub-production, propagating both kinds of failure unchanged.
///
/// Use for the leading element of a production, where an `EmptyErr` still
/// means "this production did not start here".
#[macro_export]
macro_rules! chain {
    ($self:expr, $parser:expr) => {{
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value } => value,
            $crate::ParseOutcome::ConsumedErr { error } => {
                return $crate::ParseOutcome::ConsumedErr { error };
            }
            $crate::ParseOutcome::EmptyErr {
                expected,
                found,
                position,
            } => {
                return $crate::ParseOutcome::EmptyErr {
                    expected,
                    found,
                    position,
                };
            }
        }
    }};
}

/// Bridge a `Result<T, ParseError>` after commitment: `Err` becomes
/// `ConsumedErr` from the enclosing function.
#[macro_export]
macro_rules! committed {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(error) => {
                return $crate::ParseOutcome::ConsumedErr { error };
            }
        }
    };
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
