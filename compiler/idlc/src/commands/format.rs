//! The `format` command: print a file in canonical form.

use idl_ir::render;
use idl_parse::ParseOutput;

use crate::Options;

use super::{parse_path, report};

/// Canonical source for a parsed file.
///
/// Files with errors are not formatted, since failed statements would be
/// dropped from the output. Acknowledged ordinals keep their `!`.
pub fn format_output(output: &ParseOutput) -> Option<String> {
    if output.has_errors() {
        None
    } else {
        Some(render(&output.declarations))
    }
}

/// Print the canonical form of a file on stdout.
pub fn format_file(path: &str, options: &Options) -> bool {
    let Some(output) = parse_path(path, options) else {
        return false;
    };
    report(&output, options);
    match format_output(&output) {
        Some(formatted) => {
            print!("{formatted}");
            true
        }
        None => false,
    }
}
