use pretty_assertions::assert_eq;

use idl_ir::{Position, Token, TokenKind};

use super::*;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.value.clone()).collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.into())
}

#[test]
fn test_lex_line_and_block() {
    let source = "# header comment\nusing Id = UInt64;\nstruct Foo {\n  id @0 :Id;\n};\n";
    let Ok(statements) = lex("test.idl", source) else {
        panic!("expected the source to lex");
    };
    assert_eq!(statements.len(), 2);

    assert_eq!(statements[0].pos, Position::new(2, 1));
    assert_eq!(
        kinds(statements[0].value.tokens()),
        vec![TokenKind::Using, ident("Id"), TokenKind::Eq, ident("UInt64")]
    );

    let Statement::Block(header, children) = &statements[1].value else {
        panic!("expected a block");
    };
    assert_eq!(kinds(header), vec![TokenKind::Struct, ident("Foo")]);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].pos, Position::new(4, 3));
    assert_eq!(
        kinds(children[0].value.tokens()),
        vec![
            ident("id"),
            TokenKind::At,
            TokenKind::Int(0),
            TokenKind::Colon,
            ident("Id")
        ]
    );
}

#[test]
fn test_lex_groups() {
    let Ok(statements) = lex("test.idl", "const xs :List(Int32) = [1, -2];") else {
        panic!("expected the source to lex");
    };
    let tokens = statements[0].value.tokens();
    assert_eq!(
        tokens[4].value,
        TokenKind::ParenList(vec![vec![Located::new(
            ident("Int32"),
            Position::new(1, 16)
        )]])
    );
    let TokenKind::BracketList(items) = &tokens[6].value else {
        panic!("expected a bracket list");
    };
    assert_eq!(items.len(), 2);
    assert_eq!(kinds(&items[1]), vec![TokenKind::Minus, TokenKind::Int(2)]);
}

#[test]
fn test_lex_empty_parens() {
    let Ok(statements) = lex("test.idl", "ping @0 () :Void;") else {
        panic!("expected the source to lex");
    };
    assert_eq!(statements[0].value.tokens()[3].value, TokenKind::ParenList(Vec::new()));
}

#[test]
fn test_lex_unterminated_string() {
    let err = lex("test.idl", "const s :Text = \"abc;\n");
    assert_eq!(
        err,
        Err(LexError::new(
            Position::new(1, 17),
            LexErrorKind::UnterminatedString
        ))
    );
}

#[test]
fn test_lex_invalid_character() {
    let err = lex("test.idl", "struct Foo $ {}");
    assert_eq!(
        err,
        Err(LexError::new(
            Position::new(1, 12),
            LexErrorKind::InvalidCharacter('$')
        ))
    );
}

#[test]
fn test_lex_unclosed_block() {
    let err = lex("test.idl", "struct Foo {\n  a @0 :Text;\n");
    assert_eq!(
        err,
        Err(LexError::new(
            Position::new(1, 12),
            LexErrorKind::UnclosedDelimiter('{')
        ))
    );
}

#[test]
fn test_lex_stray_closer() {
    let err = lex("test.idl", "}");
    assert_eq!(
        err,
        Err(LexError::new(
            Position::START,
            LexErrorKind::UnmatchedDelimiter('}')
        ))
    );
}

#[test]
fn test_lex_block_without_header() {
    let err = lex("test.idl", "{ a; }");
    assert_eq!(
        err,
        Err(LexError::new(Position::START, LexErrorKind::BlockWithoutHeader))
    );
}

#[test]
fn test_lex_semicolon_inside_group() {
    let err = lex("test.idl", "f @0 (a; b) :T;");
    assert_eq!(
        err,
        Err(LexError::new(
            Position::new(1, 8),
            LexErrorKind::MisplacedPunctuation(';')
        ))
    );
}

#[test]
fn test_lex_empty_file() {
    assert_eq!(lex("empty.idl", "  # only a comment\n"), Ok(Vec::new()));
}

#[test]
fn test_lex_deeply_nested_blocks() {
    const DEPTH: usize = 1000;
    let mut source = String::new();
    for i in 0..DEPTH {
        source.push_str(&format!("struct S{i} {{\n"));
    }
    source.push_str("leaf @0 :List(List(List(Text)));\n");
    source.push_str(&"}\n".repeat(DEPTH));

    let Ok(statements) = lex("deep.idl", &source) else {
        panic!("expected the source to lex");
    };
    let mut depth = 0;
    let mut level = &statements;
    while let [Located {
        value: Statement::Block(_, children),
        ..
    }] = level.as_slice()
    {
        depth += 1;
        level = children;
    }
    assert_eq!(depth, DEPTH);
    assert_eq!(level.len(), 1);
}

#[test]
fn test_lex_deeply_nested_groups() {
    const DEPTH: usize = 1000;
    let source = format!("const x :T = {}1{};", "[".repeat(DEPTH), "]".repeat(DEPTH));
    let Ok(statements) = lex("deep.idl", &source) else {
        panic!("expected the source to lex");
    };
    let mut depth = 0;
    let mut tokens = statements[0].value.tokens();
    while let Some(Located {
        value: TokenKind::BracketList(lists),
        ..
    }) = tokens.last()
    {
        depth += 1;
        tokens = &lists[0];
    }
    assert_eq!(depth, DEPTH);
    assert_eq!(kinds(tokens), vec![TokenKind::Int(1)]);
}
