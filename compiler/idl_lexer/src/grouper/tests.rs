use pretty_assertions::assert_eq;

use super::*;

fn lexeme(kind: LexemeKind, column: u32) -> Lexeme {
    Lexeme {
        kind,
        pos: Position::new(1, column),
    }
}

fn ident(name: &str, column: u32) -> Lexeme {
    lexeme(LexemeKind::Token(TokenKind::Ident(name.into())), column)
}

fn delim(delim: Delim, column: u32) -> Lexeme {
    lexeme(LexemeKind::Delim(delim), column)
}

fn group(lexemes: Vec<Lexeme>) -> Result<Vec<Located<Statement>>, LexError> {
    Grouper::new(lexemes.into_iter(), Position::new(1, 99)).file()
}

#[test]
fn test_empty_statements_are_skipped() {
    let statements = group(vec![
        delim(Delim::Semicolon, 1),
        ident("a", 3),
        delim(Delim::Semicolon, 4),
        delim(Delim::Semicolon, 5),
    ]);
    assert_eq!(
        statements,
        Ok(vec![Located::new(
            Statement::Line(vec![Located::new(
                TokenKind::Ident("a".into()),
                Position::new(1, 3)
            )]),
            Position::new(1, 3)
        )])
    );
}

#[test]
fn test_trailing_comma_yields_empty_sublist() {
    let statements = group(vec![
        ident("f", 1),
        delim(Delim::LParen, 2),
        ident("a", 3),
        delim(Delim::Comma, 4),
        delim(Delim::RParen, 5),
        delim(Delim::Semicolon, 6),
    ])
    .unwrap_or_default();
    let Some(Statement::Line(tokens)) = statements.first().map(|s| &s.value) else {
        panic!("expected one line statement");
    };
    let TokenKind::ParenList(items) = &tokens[1].value else {
        panic!("expected a paren list");
    };
    assert_eq!(items.len(), 2);
    assert!(items[1].is_empty());
}

#[test]
fn test_mismatched_closer() {
    let err = group(vec![
        ident("f", 1),
        delim(Delim::LParen, 2),
        delim(Delim::RBracket, 3),
    ]);
    assert_eq!(
        err,
        Err(LexError::new(
            Position::new(1, 3),
            LexErrorKind::UnmatchedDelimiter(']')
        ))
    );
}

#[test]
fn test_missing_terminator_reported_at_end() {
    let err = group(vec![ident("a", 1)]);
    assert_eq!(
        err,
        Err(LexError::new(
            Position::new(1, 99),
            LexErrorKind::MissingTerminator
        ))
    );
}
