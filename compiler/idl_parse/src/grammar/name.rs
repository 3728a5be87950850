//! Declaration names and type expressions.

use idl_ir::{DeclName, Located, TokenKind, TokenTag, TypeExpression};

use crate::recovery::DECL_NAME_START;
use crate::{chain, committed, ParseOutcome, Parser};

impl Parser<'_> {
    /// `import "path"` | `.ident` | `ident`, then `(.ident)*`.
    ///
    /// Member segments fold left, so `.a.b.c` is
    /// `Member(Member(Absolute(a), b), c)`.
    pub(crate) fn decl_name(&mut self) -> ParseOutcome<DeclName> {
        let Some(token) = self.cursor.current() else {
            return self.empty_err(DECL_NAME_START);
        };
        let mut name = match &token.value {
            TokenKind::Import => {
                self.advance();
                let path = committed!(self.cursor.expect_string());
                DeclName::Import(Located::new(path.value, token.pos))
            }
            TokenKind::Dot => {
                self.advance();
                DeclName::Absolute(committed!(self.expect_ident()))
            }
            TokenKind::Ident(ident) => {
                self.advance();
                DeclName::Relative(Located::new(ident.clone(), token.pos))
            }
            _ => return self.empty_err(DECL_NAME_START),
        };
        while self.eat(TokenTag::Dot) {
            let member = committed!(self.expect_ident());
            name = DeclName::Member(Box::new(name), member);
        }
        ParseOutcome::consumed_ok(name)
    }

    /// `declName ( typeExpression, ... )?`
    pub(crate) fn type_expression(&mut self) -> ParseOutcome<TypeExpression> {
        let name = chain!(self, self.decl_name());
        let params = if self.check(TokenTag::ParenList) {
            let lists = committed!(self.cursor.expect_paren_list());
            committed!(self.parse_list(lists.value, lists.pos, Parser::type_expression))
        } else {
            Vec::new()
        };
        ParseOutcome::consumed_ok(TypeExpression { name, params })
    }
}
