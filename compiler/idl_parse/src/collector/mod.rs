//! Diagnostic accumulation.
//!
//! One [`ErrorCollector`] is owned per statement scope. A statement that
//! parses merges its scope into the parent's; a statement that fails
//! discards its scope and contributes only the single fatal error that
//! ended it.

use crate::ParseError;

/// Ordered list of diagnostics for one scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorCollector {
    diagnostics: Vec<ParseError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory diagnostic.
    pub fn warn(&mut self, warning: ParseError) {
        debug_assert!(!warning.is_fatal(), "warn() expects an advisory");
        self.diagnostics.push(warning);
    }

    /// Record the error that ended a statement.
    pub fn push_failure(&mut self, error: ParseError) {
        self.diagnostics.push(error);
    }

    /// Append a child scope's diagnostics, keeping their order.
    pub fn merge(&mut self, child: ErrorCollector) {
        self.diagnostics.extend(child.diagnostics);
    }

    /// Current length, for later [`rollback`](Self::rollback).
    #[inline]
    pub fn mark(&self) -> usize {
        self.diagnostics.len()
    }

    /// Drop everything recorded since `mark`.
    #[inline]
    pub fn rollback(&mut self, mark: usize) {
        self.diagnostics.truncate(mark);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<ParseError> {
        self.diagnostics
    }
}
