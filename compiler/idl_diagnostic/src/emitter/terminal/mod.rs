//! Human-readable output.
//!
//! ```text
//! warning[W1001]: ordinal @65533 of `f` is close to the maximum of 65534; ...
//!   --> schema.idl:2:6: here
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// When to use ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always or never)"
            )),
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    file_name: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            file_name: None,
        }
    }

    /// Print positions as `file:line:column`.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Wrap `text` in `style` when colors are on.
    fn paint(&self, text: &str, style: &str) -> String {
        if self.colors {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn severity_style(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let style = Self::severity_style(diagnostic.severity);
        let severity = self.paint(diagnostic.severity.as_str(), style);
        let code = self.paint(&format!("[{}]", diagnostic.code), BOLD);
        let location = match &self.file_name {
            Some(name) => format!("{name}:{}", diagnostic.pos),
            None => diagnostic.pos.to_string(),
        };
        let label = if diagnostic.label.is_empty() {
            String::new()
        } else {
            format!(": {}", self.paint(&diagnostic.label, style))
        };
        let _ = writeln!(
            self.writer,
            "{severity}{code}: {}\n  --> {location}{label}\n",
            diagnostic.message
        );
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let count = |n: usize, noun: &str| {
            if n == 1 {
                format!("1 {noun}")
            } else {
                format!("{n} {noun}s")
            }
        };
        let line = match (error_count, warning_count) {
            (0, 0) => return,
            (0, w) => format!("{}: {} emitted", self.paint("warning", YELLOW), count(w, "warning")),
            (e, 0) => format!("{}: {} found", self.paint("error", RED), count(e, "error")),
            (e, w) => format!(
                "{}: {} and {} found",
                self.paint("error", RED),
                count(e, "error"),
                count(w, "warning")
            ),
        };
        let _ = writeln!(self.writer, "{line}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
