//! Declarations.

use idl_diagnostic::ErrorCode;
use idl_ir::{Declaration, Located, MethodParam, TokenTag};
use tracing::trace;

use super::{Body, Scope};
use crate::error::ErrorContext;
use crate::ordinal::{check_ordinal, OrdinalVerdict};
use crate::{chain, committed, require, ParseError, ParseOutcome, ParseWarning, Parser, TokenSet};

/// The `ident @ int [!]` prefix of unions, fields and methods.
pub(crate) struct NamedOrdinal {
    pub name: Located<String>,
    pub ordinal: Located<u64>,
    pub acknowledged: bool,
}

impl<'a> Parser<'a> {
    /// `option declName = fieldValue`
    pub(crate) fn option_decl(&mut self) -> ParseOutcome<Declaration> {
        if !self.check(TokenTag::KwOption) {
            return self.empty_err(TokenSet::single(TokenTag::KwOption));
        }
        self.in_error_context(ErrorContext::Option, |p| {
            p.advance();
            let name = require!(p, p.decl_name(), ErrorContext::DeclName);
            committed!(p.expect(TokenTag::Eq));
            let value = require!(p, p.field_value(), ErrorContext::Value);
            committed!(p.expect_end());
            ParseOutcome::consumed_ok(Declaration::Option { name, value })
        })
    }

    /// `using ident = declName`
    pub(crate) fn alias_decl(&mut self) -> ParseOutcome<Declaration> {
        if !self.check(TokenTag::KwUsing) {
            return self.empty_err(TokenSet::single(TokenTag::KwUsing));
        }
        self.in_error_context(ErrorContext::Alias, |p| {
            p.advance();
            let name = committed!(p.expect_ident());
            committed!(p.expect(TokenTag::Eq));
            let target = require!(p, p.decl_name(), ErrorContext::DeclName);
            committed!(p.expect_end());
            ParseOutcome::consumed_ok(Declaration::Alias { name, target })
        })
    }

    /// `const ident : typeExpression = fieldValue`
    pub(crate) fn const_decl(&mut self) -> ParseOutcome<Declaration> {
        if !self.check(TokenTag::KwConst) {
            return self.empty_err(TokenSet::single(TokenTag::KwConst));
        }
        self.in_error_context(ErrorContext::Constant, |p| {
            p.advance();
            let name = committed!(p.expect_ident());
            committed!(p.expect(TokenTag::Colon));
            let ty = require!(p, p.type_expression(), ErrorContext::TypeExpression);
            committed!(p.expect(TokenTag::Eq));
            let value = require!(p, p.field_value(), ErrorContext::Value);
            committed!(p.expect_end());
            ParseOutcome::consumed_ok(Declaration::Constant { name, ty, value })
        })
    }

    pub(crate) fn enum_decl(&mut self, body: Body<'a>) -> ParseOutcome<Declaration> {
        self.container_decl(
            TokenTag::KwEnum,
            ErrorContext::Enum,
            body,
            Scope::Enum,
            |name, children| Declaration::Enum { name, children },
        )
    }

    pub(crate) fn struct_decl(&mut self, body: Body<'a>) -> ParseOutcome<Declaration> {
        self.container_decl(
            TokenTag::KwStruct,
            ErrorContext::Struct,
            body,
            Scope::Struct,
            |name, children| Declaration::Struct { name, children },
        )
    }

    pub(crate) fn interface_decl(&mut self, body: Body<'a>) -> ParseOutcome<Declaration> {
        self.container_decl(
            TokenTag::KwInterface,
            ErrorContext::Interface,
            body,
            Scope::Interface,
            |name, children| Declaration::Interface { name, children },
        )
    }

    /// `keyword ident` with an optional body parsed in `scope`.
    fn container_decl(
        &mut self,
        keyword: TokenTag,
        context: ErrorContext,
        body: Body<'a>,
        scope: Scope,
        build: fn(Located<String>, Vec<Declaration>) -> Declaration,
    ) -> ParseOutcome<Declaration> {
        if !self.check(keyword) {
            return self.empty_err(TokenSet::single(keyword));
        }
        self.in_error_context(context, |p| {
            p.advance();
            let name = committed!(p.expect_ident());
            committed!(p.expect_end());
            let children = p.body(body, scope);
            ParseOutcome::consumed_ok(build(name, children))
        })
    }

    /// `union nameWithOrdinal(fieldMax)` with a body of fields.
    pub(crate) fn union_decl(&mut self, body: Body<'a>) -> ParseOutcome<Declaration> {
        if !self.check(TokenTag::KwUnion) {
            return self.empty_err(TokenSet::single(TokenTag::KwUnion));
        }
        let max = self.limits.max_field;
        self.in_error_context(ErrorContext::Union, |p| {
            p.advance();
            let NamedOrdinal {
                name,
                ordinal,
                acknowledged,
            } = require!(p, p.name_with_ordinal(max), ErrorContext::Union);
            committed!(p.expect_end());
            let children = p.body(body, Scope::Union);
            ParseOutcome::consumed_ok(Declaration::Union {
                name,
                ordinal,
                acknowledged,
                children,
            })
        })
    }

    /// `nameWithOrdinal(fieldMax) [in ident] : typeExpression [= fieldValue]`
    pub(crate) fn field_decl(&mut self, body: Body<'a>) -> ParseOutcome<Declaration> {
        let max = self.limits.max_field;
        self.in_error_context(ErrorContext::Field, |p| {
            let NamedOrdinal {
                name,
                ordinal,
                acknowledged,
            } = chain!(p, p.name_with_ordinal(max));
            let union_name = if p.eat(TokenTag::KwIn) {
                Some(committed!(p.expect_ident()))
            } else {
                None
            };
            committed!(p.expect(TokenTag::Colon));
            let ty = require!(p, p.type_expression(), ErrorContext::TypeExpression);
            let default = if p.eat(TokenTag::Eq) {
                Some(require!(p, p.field_value(), ErrorContext::Value))
            } else {
                None
            };
            committed!(p.expect_end());
            let children = p.body(body, Scope::Member);
            ParseOutcome::consumed_ok(Declaration::Field {
                name,
                ordinal,
                acknowledged,
                union_name,
                ty,
                default,
                children,
            })
        })
    }

    /// `nameWithOrdinal(methodMax) ( param, ... ) : typeExpression`
    pub(crate) fn method_decl(&mut self, body: Body<'a>) -> ParseOutcome<Declaration> {
        let max = self.limits.max_method;
        self.in_error_context(ErrorContext::Method, |p| {
            let NamedOrdinal {
                name,
                ordinal,
                acknowledged,
            } = chain!(p, p.name_with_ordinal(max));
            let lists = committed!(p.cursor.expect_paren_list());
            let params = committed!(p.parse_list(lists.value, lists.pos, Parser::method_param));
            committed!(p.expect(TokenTag::Colon));
            let return_type = require!(p, p.type_expression(), ErrorContext::TypeExpression);
            committed!(p.expect_end());
            let children = p.body(body, Scope::Member);
            ParseOutcome::consumed_ok(Declaration::Method {
                name,
                ordinal,
                acknowledged,
                params,
                return_type,
                children,
            })
        })
    }

    /// `ident : typeExpression [= fieldValue]`
    fn method_param(&mut self) -> ParseOutcome<MethodParam> {
        if !self.check(TokenTag::Ident) {
            return self.empty_err(TokenSet::single(TokenTag::Ident));
        }
        self.in_error_context(ErrorContext::MethodParam, |p| {
            let name = committed!(p.expect_ident());
            committed!(p.expect(TokenTag::Colon));
            let ty = require!(p, p.type_expression(), ErrorContext::TypeExpression);
            let default = if p.eat(TokenTag::Eq) {
                Some(require!(p, p.field_value(), ErrorContext::Value))
            } else {
                None
            };
            ParseOutcome::consumed_ok(MethodParam { name, ty, default })
        })
    }

    /// `ident @ int` inside an enum.
    pub(crate) fn enum_value_decl(&mut self, body: Body<'a>) -> ParseOutcome<Declaration> {
        if !self.check(TokenTag::Ident) {
            return self.empty_err(TokenSet::single(TokenTag::Ident));
        }
        self.in_error_context(ErrorContext::EnumValue, |p| {
            let name = committed!(p.expect_ident());
            committed!(p.expect(TokenTag::At));
            let value = committed!(p.cursor.expect_int());
            committed!(p.expect_end());
            let children = p.body(body, Scope::Member);
            ParseOutcome::consumed_ok(Declaration::EnumValue {
                name,
                value,
                children,
            })
        })
    }

    /// `ident @ int [!]`, checked against `max`.
    ///
    /// An ordinal in the exhaustion window without `!` records a warning in
    /// the current scope; one above `max` fails the statement. The marker is
    /// kept so that rendering reproduces it.
    pub(crate) fn name_with_ordinal(&mut self, max: u64) -> ParseOutcome<NamedOrdinal> {
        if !self.check(TokenTag::Ident) {
            return self.empty_err(TokenSet::single(TokenTag::Ident));
        }
        let name = committed!(self.expect_ident());
        committed!(self.expect(TokenTag::At));
        let ordinal = committed!(self.cursor.expect_int());
        let acknowledged = self.eat(TokenTag::Bang);

        let verdict = check_ordinal(ordinal.value, max, acknowledged);
        trace!(
            name = %name.value,
            ordinal = ordinal.value,
            max,
            acknowledged,
            ?verdict,
            "ordinal"
        );
        match verdict {
            OrdinalVerdict::Accepted => {}
            OrdinalVerdict::NeedsAcknowledgment => self.warn(ParseWarning::OrdinalNearMaximum {
                pos: ordinal.pos,
                name: name.value.clone(),
                ordinal: ordinal.value,
                max,
            }),
            OrdinalVerdict::ExceedsMaximum => {
                return ParseOutcome::consumed_err(ParseError::new(
                    ErrorCode::E1004,
                    format!(
                        "ordinal @{} of `{}` exceeds the maximum of {max}",
                        ordinal.value, name.value
                    ),
                    ordinal.pos,
                ));
            }
        }
        ParseOutcome::consumed_ok(NamedOrdinal {
            name,
            ordinal,
            acknowledged,
        })
    }
}
