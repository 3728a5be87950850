use idl_ir::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn sample() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001, "expected `:`, found `=`", Position::new(3, 12))
        .with_label("while parsing a field declaration")
}

fn emit(mode: ColorMode, file_name: Option<&str>) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
        if let Some(file_name) = file_name {
            emitter = emitter.with_file_name(file_name);
        }
        emitter.emit(&sample());
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = emit(ColorMode::Never, None);
    assert_eq!(
        text,
        "error[E1001]: expected `:`, found `=`\n  --> 3:12: while parsing a field declaration\n\n"
    );
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = emit(ColorMode::Always, None);
    assert!(text.starts_with("\x1b[1;31merror\x1b[0m"), "{text}");
    assert!(text.contains("E1001"));
}

#[test]
fn test_file_name_prefix() {
    let text = emit(ColorMode::Never, Some("schema.idl"));
    assert!(text.contains("--> schema.idl:3:12: while parsing"), "{text}");
}

#[test]
fn test_unlabeled_warning() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit(&Diagnostic::warning(ErrorCode::W1001, "near maximum", Position::new(2, 6)));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "warning[W1001]: near maximum\n  --> 2:6\n\n"
    );
}

#[test]
fn test_emit_summary() {
    let summary = |errors, warnings| {
        let mut output = Vec::new();
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        emitter.emit_summary(errors, warnings);
        String::from_utf8(output).unwrap()
    };

    assert_eq!(summary(1, 0), "error: 1 error found\n");
    assert_eq!(summary(2, 1), "error: 2 errors and 1 warning found\n");
    assert_eq!(summary(0, 3), "warning: 3 warnings emitted\n");
    assert_eq!(summary(0, 0), "");
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}
