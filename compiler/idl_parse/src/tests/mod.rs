//! Parser tests.

mod properties;

use idl_ir::{Declaration, Located};

use crate::{parse_file, ParseOutput};

fn parse(source: &str) -> ParseOutput {
    parse_file("test.idl", source)
}

/// Parse `source`, failing the test on any diagnostic.
fn parse_clean(source: &str) -> Vec<Declaration> {
    let output = parse(source);
    assert!(
        output.errors.is_empty(),
        "unexpected diagnostics: {:?}",
        output.errors
    );
    output.declarations
}

fn names(declarations: &[Declaration]) -> Vec<&str> {
    declarations
        .iter()
        .map(|decl| decl.name().map_or("", Located::as_str))
        .collect()
}

fn kinds(declarations: &[Declaration]) -> Vec<&'static str> {
    declarations.iter().map(Declaration::kind_name).collect()
}
