use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_error_and_warning() {
    let pos = Position::new(3, 9);
    let error = Diagnostic::error(ErrorCode::E1001, "expected `:`, found `=`", pos)
        .with_label("while parsing a field declaration");
    assert!(error.is_error());
    assert_eq!(error.pos, Position::new(3, 9));
    assert_eq!(error.label, "while parsing a field declaration");

    let warning = Diagnostic::warning(ErrorCode::W1001, "near maximum", Position::new(1, 4));
    assert!(!warning.is_error());
    assert_eq!(warning.code, ErrorCode::W1001);
    assert_eq!(warning.message, "near maximum");
}

#[test]
fn test_diagnostic_display() {
    let pos = Position::new(4, 3);
    let diag =
        Diagnostic::error(ErrorCode::E1003, "blocks are not allowed here", pos).with_label("here");
    assert_eq!(
        diag.to_string(),
        "error[E1003]: blocks are not allowed here\n  --> 4:3: here"
    );

    let bare = Diagnostic::warning(ErrorCode::W1001, "near maximum", Position::new(2, 1));
    assert_eq!(bare.to_string(), "warning[W1001]: near maximum\n  --> 2:1");
}
