//! Render declarations back to IDL source text.
//!
//! The output is canonical: two-space indentation, one statement per line,
//! `name @N :Type` spacing, and bodies only where a declaration has children.
//! Re-lexing and re-parsing rendered text yields the same declarations
//! (positions aside).

use std::fmt::{self, Write};

use idl_stack::ensure_sufficient_stack;

use crate::{DeclName, Declaration, FieldAssignment, FieldValue, MethodParam, TypeExpression};

/// Render a list of top-level declarations.
pub fn render(declarations: &[Declaration]) -> String {
    let mut renderer = Renderer::default();
    for declaration in declarations {
        renderer.declaration(declaration);
    }
    renderer.out
}

#[derive(Default)]
struct Renderer {
    out: String,
    depth: usize,
}

impl Renderer {
    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn declaration(&mut self, declaration: &Declaration) {
        self.indent();
        // Writing into a String cannot fail.
        let _ = self.header(declaration);
        ensure_sufficient_stack(|| self.body(declaration.children()));
    }

    fn header(&mut self, declaration: &Declaration) -> fmt::Result {
        let out = &mut self.out;
        match declaration {
            Declaration::Option { name, value } => {
                write!(out, "option {name} = {}", value.value)
            }
            Declaration::Alias { name, target } => write!(out, "using {} = {target}", name.value),
            Declaration::Constant { name, ty, value } => {
                write!(out, "const {} :{ty} = {}", name.value, value.value)
            }
            Declaration::Enum { name, .. } => write!(out, "enum {}", name.value),
            Declaration::EnumValue { name, value, .. } => {
                write!(out, "{} @{}", name.value, value.value)
            }
            Declaration::Struct { name, .. } => write!(out, "struct {}", name.value),
            Declaration::Union {
                name,
                ordinal,
                acknowledged,
                ..
            } => {
                write!(out, "union {}", name.value)?;
                write_ordinal(out, ordinal.value, *acknowledged)
            }
            Declaration::Field {
                name,
                ordinal,
                acknowledged,
                union_name,
                ty,
                default,
                ..
            } => {
                out.push_str(&name.value);
                write_ordinal(out, ordinal.value, *acknowledged)?;
                if let Some(union_name) = union_name {
                    write!(out, " in {}", union_name.value)?;
                }
                write!(out, " :{ty}")?;
                if let Some(default) = default {
                    write!(out, " = {}", default.value)?;
                }
                Ok(())
            }
            Declaration::Interface { name, .. } => write!(out, "interface {}", name.value),
            Declaration::Method {
                name,
                ordinal,
                acknowledged,
                params,
                return_type,
                ..
            } => {
                out.push_str(&name.value);
                write_ordinal(out, ordinal.value, *acknowledged)?;
                out.push_str(" (");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write!(out, "{param}")?;
                }
                write!(out, ") :{return_type}")
            }
        }
    }

    fn body(&mut self, children: &[Declaration]) {
        if children.is_empty() {
            self.out.push_str(";\n");
            return;
        }
        self.out.push_str(" {\n");
        self.depth += 1;
        for child in children {
            self.declaration(child);
        }
        self.depth -= 1;
        self.indent();
        self.out.push_str("}\n");
    }
}

impl fmt::Display for DeclName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclName::Import(path) => {
                f.write_str("import ")?;
                write_string_literal(f, &path.value)
            }
            DeclName::Absolute(name) => write!(f, ".{}", name.value),
            DeclName::Relative(name) => f.write_str(&name.value),
            DeclName::Member(base, member) => write!(f, "{base}.{}", member.value),
        }
    }
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.write_to(f))
    }
}

impl TypeExpression {
    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            f.write_str("(")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{param}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.write_to(f))
    }
}

impl FieldValue {
    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{n}"),
            // Debug formatting always keeps a fraction or exponent, so the
            // text re-lexes as a float.
            FieldValue::Float(bits) => write!(f, "{:?}", f64::from_bits(*bits)),
            FieldValue::String(s) => write_string_literal(f, s),
            FieldValue::Identifier(name) => f.write_str(name),
            FieldValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.value)?;
                }
                f.write_str("]")
            }
            FieldValue::Record(fields) => {
                f.write_str("(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for FieldAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name.value, self.value.value)
    }
}

impl fmt::Display for MethodParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :{}", self.name.value, self.ty)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default.value)?;
        }
        Ok(())
    }
}

/// ` @N`, or ` @N!` when acknowledged.
fn write_ordinal(out: &mut String, ordinal: u64, acknowledged: bool) -> fmt::Result {
    write!(out, " @{ordinal}")?;
    if acknowledged {
        out.push('!');
    }
    Ok(())
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\0' => f.write_str("\\0")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
