//! The `ast` command: dump parsed declarations.

use crate::Options;

use super::{parse_path, report};

/// Print the declarations that parsed, then report diagnostics.
///
/// Unlike `format`, this prints partial results for files with errors.
pub fn ast_file(path: &str, options: &Options) -> bool {
    let Some(output) = parse_path(path, options) else {
        return false;
    };
    println!("{:#?}", output.declarations);
    report(&output, options);
    !output.has_errors()
}
