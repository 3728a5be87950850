//! Constant and default values.

use idl_ir::{FieldAssignment, FieldValue, Located, TokenKind, TokenTag};

use crate::error::ErrorContext;
use crate::recovery::{NUMBER, VALUE_START};
use crate::{committed, require, ParseError, ParseOutcome, Parser, TokenSet};

impl Parser<'_> {
    /// int | float | string | ident | `[v, ...]` | `(name = v, ...)` |
    /// `- int` | `- float`
    pub(crate) fn field_value(&mut self) -> ParseOutcome<Located<FieldValue>> {
        let Some(token) = self.cursor.current() else {
            return self.empty_err(VALUE_START);
        };
        let pos = token.pos;
        let value = match &token.value {
            TokenKind::Int(n) => {
                self.advance();
                FieldValue::Integer(i128::from(*n))
            }
            TokenKind::Float(bits) => {
                self.advance();
                FieldValue::Float(*bits)
            }
            TokenKind::String(s) => {
                self.advance();
                FieldValue::String(s.clone())
            }
            TokenKind::Ident(name) => {
                self.advance();
                FieldValue::Identifier(name.clone())
            }
            TokenKind::BracketList(lists) => {
                self.advance();
                FieldValue::List(committed!(self.parse_list(lists, pos, Parser::field_value)))
            }
            TokenKind::ParenList(lists) => {
                self.advance();
                FieldValue::Record(committed!(self.parse_list(lists, pos, Parser::record_field)))
            }
            TokenKind::Minus => {
                self.advance();
                committed!(self.negated_number())
            }
            _ => return self.empty_err(VALUE_START),
        };
        ParseOutcome::consumed_ok(Located::new(value, pos))
    }

    /// The literal after a `-`.
    fn negated_number(&mut self) -> Result<FieldValue, ParseError> {
        let value = match self.cursor.current().map(|token| &token.value) {
            Some(TokenKind::Int(n)) => FieldValue::Integer(-i128::from(*n)),
            Some(TokenKind::Float(bits)) => FieldValue::float(-f64::from_bits(*bits)),
            _ => {
                return Err(ParseError::from_expected_tokens_with_context(
                    &NUMBER,
                    self.current_tag(),
                    self.current_pos(),
                    ErrorContext::Value,
                ));
            }
        };
        self.advance();
        Ok(value)
    }

    /// `name = value` inside a record.
    fn record_field(&mut self) -> ParseOutcome<FieldAssignment> {
        if !self.check(TokenTag::Ident) {
            return self.empty_err(TokenSet::single(TokenTag::Ident));
        }
        self.in_error_context(ErrorContext::RecordField, |p| {
            let name = committed!(p.expect_ident());
            committed!(p.expect(TokenTag::Eq));
            let value = require!(p, p.field_value(), ErrorContext::Value);
            ParseOutcome::consumed_ok(FieldAssignment { name, value })
        })
    }
}
