//! Behavioral guarantees of the parser as a whole.

use idl_diagnostic::ErrorCode;
use idl_ir::{render, DeclName, Declaration, FieldValue, Located, Position};
use pretty_assertions::assert_eq;

use super::{names, parse, parse_clean};
use crate::OrdinalLimits;

const VALID: [&str; 4] = [
    "using A = B;",
    "const c :Int32 = 1;",
    "struct S;",
    "enum E;",
];

#[test]
fn test_single_invalid_statement_is_isolated() {
    for broken in 0..VALID.len() {
        let lines: Vec<&str> = VALID
            .iter()
            .enumerate()
            .map(|(i, line)| if i == broken { "const = ;" } else { line })
            .collect();
        let output = parse(&lines.join("\n"));

        let expected: Vec<&str> = ["A", "c", "S", "E"]
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != broken)
            .map(|(_, name)| *name)
            .collect();
        assert_eq!(names(&output.declarations), expected);
        assert_eq!(output.errors.len(), 1);
        let expected_line = u32::try_from(broken + 1).unwrap_or(u32::MAX);
        assert_eq!(output.errors[0].pos.line, expected_line);
    }
}

#[test]
fn test_ordinal_near_maximum() {
    let max = OrdinalLimits::default().max_field;

    let output = parse(&format!("struct S {{\n  f @{} :Int32;\n}}\n", max - 1));
    assert_eq!(output.declarations[0].children().len(), 1);
    assert_eq!(output.errors.len(), 1);
    assert!(!output.errors[0].is_fatal());
    assert_eq!(output.errors[0].code, ErrorCode::W1001);
    assert!(output.errors[0].message.contains("`f`"));
    assert!(output.errors[0].message.contains("65533"));
    assert!(output.errors[0].message.contains("65534"));

    let decls = parse_clean(&format!("struct S {{\n  f @{}! :Int32;\n}}\n", max - 1));
    assert_eq!(decls[0].children().len(), 1);
}

#[test]
fn test_ordinal_well_below_maximum() {
    let max = OrdinalLimits::default().max_field;
    let decls = parse_clean(&format!("struct S {{\n  f @{} :Int32;\n}}\n", max - 40));
    assert_eq!(decls[0].children().len(), 1);
}

#[test]
fn test_block_under_field_fails_only_inner_statement() {
    let output = parse(
        "struct Outer {\n\
         \x20 f @0 :Int32 {\n\
         \x20   nested @1 :Int32 {\n\
         \x20     option x = 1;\n\
         \x20   }\n\
         \x20 }\n\
         \x20 g @2 :Int32;\n\
         }\n",
    );
    assert_eq!(names(&output.declarations), vec!["Outer"]);
    let children = output.declarations[0].children();
    assert_eq!(names(children), vec!["f", "g"]);
    assert!(children[0].children().is_empty());

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1003);
    assert_eq!(output.errors[0].message, "blocks are not allowed here");
    assert_eq!(output.errors[0].pos, Position::new(3, 5));
}

#[test]
fn test_absolute_member_chain() {
    let decls = parse_clean("using X = .a.b.c;");
    let Declaration::Alias { target, .. } = &decls[0] else {
        panic!("expected an alias");
    };
    let name = |text: &str, column| Located::new(text.to_string(), Position::new(1, column));
    assert_eq!(
        target,
        &DeclName::Member(
            Box::new(DeclName::Member(
                Box::new(DeclName::Absolute(name("a", 12))),
                name("b", 14),
            )),
            name("c", 16),
        )
    );
}

#[test]
fn test_list_with_negated_integer() {
    let decls = parse_clean("const xs :List(Int32) = [1, 2, -3];");
    let Declaration::Constant { value, .. } = &decls[0] else {
        panic!("expected a constant");
    };
    let FieldValue::List(items) = &value.value else {
        panic!("expected a list");
    };
    let items: Vec<&FieldValue> = items.iter().map(|item| &item.value).collect();
    assert_eq!(
        items,
        vec![
            &FieldValue::Integer(1),
            &FieldValue::Integer(2),
            &FieldValue::Integer(-3)
        ]
    );
}

#[test]
fn test_render_round_trip() {
    let source = r#"
option file_id = 0xabcd;
using Base = import "/base.idl".Base;
const pi :Float64 = 3.14159;
struct Shape {
  id @0 :UInt64 = 0;
  spare @65533! :Bool;
  union kind @1! {
    circle @2 in kind :Float64;
    square @3 in kind :Float64 = -1.5;
  }
  tags @4 :List(Text) = ["a", "b\n"];
  meta @5 :Map(Text, Base) {
    option deprecated = (reason = "old", since = [1, 2]);
  }
  enum Unit {
    mm @0;
    cm @1;
  }
}
interface Canvas {
  draw @0 (shape :Shape, scale :Float32 = 1.0) :Void;
  clear @1 () :.Base.Empty;
  reset @65535! () :Void;
}
"#;
    let first = parse_clean(source);
    let rendered = render(&first);
    let second = parse_clean(&rendered);
    assert_eq!(render(&second), rendered);
    assert_eq!(second.len(), first.len());
}

#[test]
fn test_acknowledged_ordinal_survives_rendering() {
    let source = "struct S {\n  last @65530! :Int32;\n}\n";
    let rendered = render(&parse_clean(source));
    assert_eq!(rendered, source);
    assert_eq!(parse(&rendered).errors, Vec::new());
}

#[test]
fn test_deeply_nested_blocks() {
    const DEPTH: usize = 1000;
    let mut source = String::new();
    for i in 0..DEPTH {
        source.push_str(&format!("struct S{i} {{\n"));
    }
    source.push_str(&format!(
        "leaf @0 :{}Text{} = {}1{};\n",
        "List(".repeat(DEPTH),
        ")".repeat(DEPTH),
        "[".repeat(DEPTH),
        "]".repeat(DEPTH),
    ));
    source.push_str(&"}\n".repeat(DEPTH));

    let decls = parse_clean(&source);
    let mut depth = 0;
    let mut level = decls.as_slice();
    while let [Declaration::Struct { children, .. }] = level {
        depth += 1;
        level = children;
    }
    assert_eq!(depth, DEPTH);
    assert_eq!(names(level), vec!["leaf"]);

    let rendered = render(&decls);
    assert_eq!(render(&parse_clean(&rendered)), rendered);
}
