//! The `check` command: parse a file and report diagnostics.

use crate::Options;

use super::{parse_path, report};

/// Parse a file and report every error and warning.
pub fn check_file(path: &str, options: &Options) -> bool {
    let Some(output) = parse_path(path, options) else {
        return false;
    };
    report(&output, options);
    if output.has_errors() {
        return false;
    }
    if !options.json {
        println!(
            "OK: {path} ({} declarations, {} warnings)",
            output.declarations.len(),
            output.warning_count()
        );
    }
    true
}
