use idl_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::*;

fn empty(tag: TokenTag, column: u32) -> ParseOutcome<u32> {
    ParseOutcome::empty_err(TokenSet::single(tag), TokenTag::Eq, Position::new(1, column))
}

fn consumed(column: u32) -> ParseOutcome<u32> {
    ParseOutcome::consumed_err(ParseError::new(
        ErrorCode::E1001,
        "unexpected token",
        Position::new(1, column),
    ))
}

#[test]
fn test_predicates() {
    assert!(ParseOutcome::consumed_ok(1).is_ok());
    assert!(!consumed(3).is_ok());
    assert_eq!(ParseOutcome::consumed_ok(1).failure_pos(), None);
    assert_eq!(
        empty(TokenTag::Ident, 2).failure_pos(),
        Some(Position::new(1, 2))
    );
}

#[test]
fn test_into_result_builds_expected_message() {
    let error = empty(TokenTag::Colon, 4).into_result().unwrap_err();
    assert_eq!(error.message, "expected `:`, found `=`");
    assert_eq!(error.pos, Position::new(1, 4));
    assert_eq!(ParseOutcome::consumed_ok(7).into_result(), Ok(7));
}

#[test]
fn test_with_error_context_only_on_consumed() {
    let outcome = consumed(2).with_error_context(ErrorContext::Field);
    let error = outcome.into_result().unwrap_err();
    assert_eq!(
        error.context.as_deref(),
        Some("while parsing a field declaration")
    );

    let outcome = empty(TokenTag::Ident, 1).with_error_context(ErrorContext::Field);
    assert!(matches!(outcome, ParseOutcome::EmptyErr { .. }));
}

#[test]
fn test_with_error_context_keeps_existing() {
    let outcome = consumed(2)
        .with_error_context(ErrorContext::Value)
        .with_error_context(ErrorContext::Field);
    let error = outcome.into_result().unwrap_err();
    assert_eq!(error.context.as_deref(), Some("while parsing a value"));
}

#[test]
fn test_furthest_prefers_later_position() {
    let chosen = ParseOutcome::furthest(consumed(2), consumed(5));
    assert_eq!(chosen.failure_pos(), Some(Position::new(1, 5)));

    let chosen = ParseOutcome::furthest(consumed(6), empty(TokenTag::At, 1));
    assert_eq!(chosen.failure_pos(), Some(Position::new(1, 6)));
}

#[test]
fn test_furthest_tie_prefers_consumed() {
    let chosen = ParseOutcome::furthest(empty(TokenTag::At, 3), consumed(3));
    assert!(matches!(chosen, ParseOutcome::ConsumedErr { .. }));
}

#[test]
fn test_furthest_tie_merges_expected() {
    let chosen = ParseOutcome::furthest(empty(TokenTag::KwEnum, 1), empty(TokenTag::KwStruct, 1));
    let ParseOutcome::EmptyErr { expected, .. } = chosen else {
        panic!("expected EmptyErr");
    };
    assert!(expected.contains(TokenTag::KwEnum));
    assert!(expected.contains(TokenTag::KwStruct));
}

/// Minimal parser state for exercising the macros.
struct Counter {
    pos: usize,
    log: Vec<&'static str>,
}

impl Counter {
    fn snapshot(&self) -> (usize, usize) {
        (self.pos, self.log.len())
    }

    fn restore(&mut self, (pos, len): (usize, usize)) {
        self.pos = pos;
        self.log.truncate(len);
    }

    fn fails_after_consuming(&mut self) -> ParseOutcome<&'static str> {
        self.pos += 2;
        self.log.push("abandoned");
        ParseOutcome::consumed_err(ParseError::new(
            ErrorCode::E1001,
            "unexpected token",
            Position::new(1, 3),
        ))
    }

    fn fails_empty(&mut self) -> ParseOutcome<&'static str> {
        ParseOutcome::empty_err(
            TokenSet::single(TokenTag::KwStruct),
            TokenTag::Eq,
            Position::new(1, 1),
        )
    }

    fn succeeds(&mut self) -> ParseOutcome<&'static str> {
        self.pos += 1;
        self.log.push("kept");
        ParseOutcome::consumed_ok("third")
    }

    fn choose(&mut self) -> ParseOutcome<&'static str> {
        crate::one_of!(self, self.fails_after_consuming(), self.fails_empty(), self.succeeds())
    }

    fn choose_failing(&mut self) -> ParseOutcome<&'static str> {
        crate::one_of!(self, self.fails_empty(), self.fails_after_consuming())
    }

    fn leading(&mut self) -> ParseOutcome<&'static str> {
        let value = crate::chain!(self, self.fails_empty());
        ParseOutcome::consumed_ok(value)
    }

    fn required(&mut self) -> ParseOutcome<&'static str> {
        let value = crate::require!(self, self.fails_empty(), ErrorContext::TypeExpression);
        ParseOutcome::consumed_ok(value)
    }
}

#[test]
fn test_one_of_backtracks_consumed_failures() {
    let mut parser = Counter {
        pos: 0,
        log: Vec::new(),
    };
    assert_eq!(parser.choose().into_result().unwrap(), "third");
    assert_eq!(parser.pos, 1);
    assert_eq!(parser.log, vec!["kept"]);
}

#[test]
fn test_one_of_reports_furthest_failure() {
    let mut parser = Counter {
        pos: 0,
        log: Vec::new(),
    };
    let outcome = parser.choose_failing();
    assert_eq!(outcome.failure_pos(), Some(Position::new(1, 3)));
    assert_eq!(parser.pos, 0);
    assert!(parser.log.is_empty());
}

#[test]
fn test_chain_and_require() {
    let mut parser = Counter {
        pos: 0,
        log: Vec::new(),
    };
    assert!(matches!(parser.leading(), ParseOutcome::EmptyErr { .. }));

    let error = parser.required().into_result().unwrap_err();
    assert_eq!(error.code, ErrorCode::E1006);
    assert_eq!(error.context.as_deref(), Some("while parsing a type"));
}
