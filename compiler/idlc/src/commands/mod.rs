//! Command handlers for the IDL compiler CLI.
//!
//! Each handler returns `true` when the file parsed without errors. Shared
//! utilities live here in the module root.

mod ast;
mod check;
mod format;

pub use ast::ast_file;
pub use check::check_file;
pub use format::{format_file, format_output};

use std::io::IsTerminal;

use idl_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use idl_parse::{parse_file_with_limits, ParseOutput};

use crate::Options;

/// Read a source file, or report the failure and return `None`.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            eprintln!("error: cannot read `{path}`: {e}");
            None
        }
    }
}

/// Read and parse `path` with the configured limits.
pub(crate) fn parse_path(path: &str, options: &Options) -> Option<ParseOutput> {
    let source = read_file(path)?;
    Some(parse_file_with_limits(path, &source, options.limits))
}

/// Emit all diagnostics of `output` through `emitter`, followed by a summary
/// when there was anything to report.
pub fn emit_diagnostics(output: &ParseOutput, emitter: &mut dyn DiagnosticEmitter) {
    let diagnostics = output.to_diagnostics();
    emitter.emit_all(&diagnostics);
    if !diagnostics.is_empty() {
        emitter.emit_summary(output.error_count(), output.warning_count());
    }
    emitter.flush();
}

/// Report diagnostics as configured: JSON on stdout or text on stderr.
pub(crate) fn report(output: &ParseOutput, options: &Options) {
    if options.json {
        let mut emitter = JsonEmitter::new(std::io::stdout()).with_file_name(&output.file);
        emitter.begin();
        emitter.emit_all(&output.to_diagnostics());
        emitter.end();
        emitter.flush();
    } else {
        let is_tty = std::io::stderr().is_terminal();
        let mut emitter =
            TerminalEmitter::stderr(options.color, is_tty).with_file_name(&output.file);
        emit_diagnostics(output, &mut emitter);
    }
}
