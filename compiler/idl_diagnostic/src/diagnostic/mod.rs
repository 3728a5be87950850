//! The diagnostic value handed from the parser to emitters.

use std::fmt;

use idl_ir::Position;

use crate::ErrorCode;

/// Whether a diagnostic dropped a statement or only advises.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported problem, anchored at a single source position.
///
/// `label` is the short text printed next to the position, such as
/// "while parsing a field declaration".
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub pos: Position,
    pub label: String,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode, message: impl Into<String>, pos: Position) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            pos,
            label: String::new(),
        }
    }

    #[cold]
    pub fn warning(code: ErrorCode, message: impl Into<String>, pos: Position) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(code, message, pos)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        write!(f, "\n  --> {}", self.pos)?;
        if !self.label.is_empty() {
            write!(f, ": {}", self.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
