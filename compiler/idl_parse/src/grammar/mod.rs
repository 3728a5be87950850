//! Grammar productions.
//!
//! Each module extends [`Parser`] with the productions for one part of the
//! language:
//!
//! - [`name`]: declaration names and type expressions
//! - [`value`]: constant and default values
//! - [`decl`]: declarations
//!
//! This module owns statement isolation and the per-scope dispatch tables.

mod decl;
mod name;
mod value;

use idl_diagnostic::ErrorCode;
use idl_ir::{Declaration, Located, Position, Statement, Token};
use idl_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{one_of, ErrorCollector, OrdinalLimits, ParseError, ParseOutcome, Parser};

/// Nested statements of a block, or `None` for a line statement.
pub(crate) type Body<'a> = Option<&'a [Located<Statement>]>;

/// Where a statement appears, which decides the declarations it may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scope {
    File,
    Enum,
    Struct,
    Union,
    Interface,
    /// Body of a field, method or enum value: options only.
    Member,
}

/// Parse each statement in isolation, merging diagnostics into `collector`.
///
/// Block bodies recurse back here once per nesting level.
pub(crate) fn parse_scope(
    statements: &[Located<Statement>],
    scope: Scope,
    limits: OrdinalLimits,
    collector: &mut ErrorCollector,
) -> Vec<Declaration> {
    let mut declarations = Vec::with_capacity(statements.len());
    for statement in statements {
        match ensure_sufficient_stack(|| parse_statement(statement, scope, limits)) {
            Ok((declaration, diagnostics)) => {
                collector.merge(diagnostics);
                declarations.push(declaration);
            }
            Err(error) => {
                debug!(
                    at = %error.pos,
                    code = %error.code,
                    message = %error.message,
                    "statement dropped"
                );
                collector.push_failure(error);
            }
        }
    }
    declarations
}

/// Parse one statement against a fresh diagnostic scope.
fn parse_statement(
    statement: &Located<Statement>,
    scope: Scope,
    limits: OrdinalLimits,
) -> Result<(Declaration, ErrorCollector), ParseError> {
    let mut parser = Parser::new(statement.value.tokens(), statement.pos, limits);
    let outcome = match statement.value.children() {
        None => parser.line_statement(scope),
        Some(body) => parser.block_statement(scope, body, statement.pos),
    };
    let declaration = outcome.into_result()?;
    Ok((declaration, parser.into_diagnostics()))
}

impl<'a> Parser<'a> {
    fn line_statement(&mut self, scope: Scope) -> ParseOutcome<Declaration> {
        match scope {
            Scope::File => one_of!(
                self,
                self.option_decl(),
                self.alias_decl(),
                self.const_decl(),
                self.enum_decl(None),
                self.struct_decl(None),
                self.interface_decl(None),
            ),
            Scope::Enum => one_of!(self, self.option_decl(), self.enum_value_decl(None)),
            Scope::Struct => one_of!(
                self,
                self.option_decl(),
                self.alias_decl(),
                self.const_decl(),
                self.enum_decl(None),
                self.struct_decl(None),
                self.interface_decl(None),
                self.union_decl(None),
                self.field_decl(None),
            ),
            Scope::Union => self.field_decl(None),
            Scope::Interface => one_of!(
                self,
                self.option_decl(),
                self.alias_decl(),
                self.const_decl(),
                self.enum_decl(None),
                self.struct_decl(None),
                self.interface_decl(None),
                self.method_decl(None),
            ),
            Scope::Member => self.option_decl(),
        }
    }

    fn block_statement(
        &mut self,
        scope: Scope,
        children: &'a [Located<Statement>],
        pos: Position,
    ) -> ParseOutcome<Declaration> {
        let body = Some(children);
        match scope {
            Scope::File => one_of!(
                self,
                self.enum_decl(body),
                self.struct_decl(body),
                self.interface_decl(body),
            ),
            Scope::Enum => self.enum_value_decl(body),
            Scope::Struct => one_of!(
                self,
                self.enum_decl(body),
                self.struct_decl(body),
                self.interface_decl(body),
                self.union_decl(body),
                self.field_decl(body),
            ),
            Scope::Union => self.field_decl(body),
            Scope::Interface => one_of!(
                self,
                self.enum_decl(body),
                self.struct_decl(body),
                self.interface_decl(body),
                self.method_decl(body),
            ),
            Scope::Member => ParseOutcome::consumed_err(ParseError::new(
                ErrorCode::E1003,
                "blocks are not allowed here",
                pos,
            )),
        }
    }

    /// Parse a block body in `scope`, or nothing for a line statement.
    ///
    /// Children are isolated individually; their diagnostics land in this
    /// parser's scope.
    fn body(&mut self, body: Body<'a>, scope: Scope) -> Vec<Declaration> {
        match body {
            None => Vec::new(),
            Some(statements) => parse_scope(statements, scope, self.limits, &mut self.diagnostics),
        }
    }

    /// Parse every sublist of a group with `production`.
    ///
    /// Each sublist must be consumed completely. `pos` is the group's
    /// opening delimiter, reported for empty sublists.
    fn parse_list<T>(
        &mut self,
        lists: &'a [Vec<Token>],
        pos: Position,
        production: impl Fn(&mut Parser<'a>) -> ParseOutcome<T>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::with_capacity(lists.len());
        for tokens in lists {
            let mut item = Parser::new(tokens, pos, self.limits);
            let value = ensure_sufficient_stack(|| production(&mut item)).into_result()?;
            item.expect_end()?;
            self.diagnostics.merge(item.diagnostics);
            items.push(value);
        }
        Ok(items)
    }
}
