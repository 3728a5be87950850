use idl_ir::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(emit: impl FnOnce(&mut JsonEmitter<&mut Vec<u8>>)) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = JsonEmitter::new(&mut output).with_file_name("dir\\a.idl");
        emitter.begin();
        emit(&mut emitter);
        emitter.end();
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_json_emitter() {
    let text = render(|emitter| {
        emitter.emit(
            &Diagnostic::error(ErrorCode::E1001, "expected `\"`", Position::new(1, 4))
                .with_label("while parsing an import"),
        );
    });
    assert_eq!(
        text,
        "[\n  {\"code\": \"E1001\", \"severity\": \"error\", \"file\": \"dir\\\\a.idl\", \
         \"line\": 1, \"column\": 4, \"message\": \"expected `\\\"`\", \
         \"label\": \"while parsing an import\"}\n]\n"
    );
}

#[test]
fn test_json_emitter_separates_objects() {
    let text = render(|emitter| {
        emitter.emit_all(&[
            Diagnostic::error(ErrorCode::E1003, "blocks are not allowed here", Position::new(2, 1)),
            Diagnostic::warning(ErrorCode::W1001, "near maximum", Position::new(5, 3)),
        ]);
        emitter.emit_summary(1, 1);
    });
    assert_eq!(text.matches("},\n  {").count(), 1);
    assert!(text.contains("\"severity\": \"warning\""));
    assert!(!text.contains("\"label\""));
    assert!(text.ends_with("\"line\": 5, \"column\": 3, \"message\": \"near maximum\"}\n]\n"));
}

#[test]
fn test_json_emitter_empty() {
    assert_eq!(render(|_| {}), "[\n\n]\n");
}
