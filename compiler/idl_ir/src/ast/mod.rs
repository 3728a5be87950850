//! Declaration AST nodes.
//!
//! Nodes are immutable values built bottom-up by the parser and handed to
//! semantic analysis by value. Every leaf that may be blamed in a diagnostic
//! (names, ordinals, literal values) carries a [`Position`].

use crate::{Located, Position, Positioned};

/// A possibly-qualified reference to a declaration.
///
/// `.a.b.c` is `Member(Member(Absolute(a), b), c)`: the chain is folded
/// left-to-right, so the outermost node is the last `.member` segment.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclName {
    /// `import "path"`
    Import(Located<String>),
    /// `.name`, resolved from the file scope.
    Absolute(Located<String>),
    /// `name`, resolved from the enclosing scope outward.
    Relative(Located<String>),
    /// `base.member`
    Member(Box<DeclName>, Located<String>),
}

impl DeclName {
    /// The innermost (non-member) name of the chain.
    pub fn base(&self) -> &DeclName {
        match self {
            DeclName::Member(base, _) => base.base(),
            other => other,
        }
    }

    /// Member segments from first to last (`.a.b.c` yields `b`, `c`).
    pub fn members(&self) -> Vec<&Located<String>> {
        let mut members = Vec::new();
        let mut current = self;
        while let DeclName::Member(base, member) = current {
            members.push(member);
            current = base;
        }
        members.reverse();
        members
    }
}

impl Positioned for DeclName {
    fn pos(&self) -> Position {
        match self {
            DeclName::Import(name) | DeclName::Absolute(name) | DeclName::Relative(name) => {
                name.pos
            }
            DeclName::Member(base, _) => base.pos(),
        }
    }
}

/// A type reference, possibly parameterized: `List(Map(Text, Int32))`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpression {
    pub name: DeclName,
    pub params: Vec<TypeExpression>,
}

impl TypeExpression {
    /// A type reference without parameters.
    pub fn simple(name: DeclName) -> Self {
        TypeExpression {
            name,
            params: Vec::new(),
        }
    }
}

impl Positioned for TypeExpression {
    fn pos(&self) -> Position {
        self.name.pos()
    }
}

/// A constant or default value.
///
/// Float literals store bits as u64 for Hash compatibility. Integers are
/// widened to `i128` so that negated `u64` literals stay exact.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldValue {
    Integer(i128),
    Float(u64),
    String(String),
    /// A bare identifier, referring symbolically to an enumerant or constant.
    Identifier(String),
    List(Vec<Located<FieldValue>>),
    Record(Vec<FieldAssignment>),
}

impl FieldValue {
    #[inline]
    pub fn float(value: f64) -> Self {
        FieldValue::Float(value.to_bits())
    }

    /// The float payload, if this is a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

/// One `name = value` entry of a record value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldAssignment {
    pub name: Located<String>,
    pub value: Located<FieldValue>,
}

/// One method parameter: `name :Type [= default]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodParam {
    pub name: Located<String>,
    pub ty: TypeExpression,
    pub default: Option<Located<FieldValue>>,
}

/// A schema declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Declaration {
    /// `option name = value;`
    Option {
        name: DeclName,
        value: Located<FieldValue>,
    },
    /// `using Name = target;`
    Alias {
        name: Located<String>,
        target: DeclName,
    },
    /// `const name :Type = value;`
    Constant {
        name: Located<String>,
        ty: TypeExpression,
        value: Located<FieldValue>,
    },
    /// `enum Name { ... }`
    Enum {
        name: Located<String>,
        children: Vec<Declaration>,
    },
    /// `name @3;` inside an enum.
    EnumValue {
        name: Located<String>,
        value: Located<u64>,
        children: Vec<Declaration>,
    },
    /// `struct Name { ... }`
    Struct {
        name: Located<String>,
        children: Vec<Declaration>,
    },
    /// `union name @2 { ... }` inside a struct.
    Union {
        name: Located<String>,
        ordinal: Located<u64>,
        /// Written as `@N!`.
        acknowledged: bool,
        children: Vec<Declaration>,
    },
    /// `name @0 [in union] :Type [= default];`
    Field {
        name: Located<String>,
        ordinal: Located<u64>,
        acknowledged: bool,
        union_name: Option<Located<String>>,
        ty: TypeExpression,
        default: Option<Located<FieldValue>>,
        children: Vec<Declaration>,
    },
    /// `interface Name { ... }`
    Interface {
        name: Located<String>,
        children: Vec<Declaration>,
    },
    /// `name @0 (param :Type, ...) :Return;` inside an interface.
    Method {
        name: Located<String>,
        ordinal: Located<u64>,
        acknowledged: bool,
        params: Vec<MethodParam>,
        return_type: TypeExpression,
        children: Vec<Declaration>,
    },
}

impl Declaration {
    /// Short lowercase name of the declaration kind, for messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Option { .. } => "option",
            Declaration::Alias { .. } => "alias",
            Declaration::Constant { .. } => "constant",
            Declaration::Enum { .. } => "enum",
            Declaration::EnumValue { .. } => "enum value",
            Declaration::Struct { .. } => "struct",
            Declaration::Union { .. } => "union",
            Declaration::Field { .. } => "field",
            Declaration::Interface { .. } => "interface",
            Declaration::Method { .. } => "method",
        }
    }

    /// The declared identifier. Options name a qualified target instead and
    /// return `None`.
    pub fn name(&self) -> Option<&Located<String>> {
        match self {
            Declaration::Option { .. } => None,
            Declaration::Alias { name, .. }
            | Declaration::Constant { name, .. }
            | Declaration::Enum { name, .. }
            | Declaration::EnumValue { name, .. }
            | Declaration::Struct { name, .. }
            | Declaration::Union { name, .. }
            | Declaration::Field { name, .. }
            | Declaration::Interface { name, .. }
            | Declaration::Method { name, .. } => Some(name),
        }
    }

    /// The ordinal of a union, field or method.
    pub fn ordinal(&self) -> Option<&Located<u64>> {
        match self {
            Declaration::Union { ordinal, .. }
            | Declaration::Field { ordinal, .. }
            | Declaration::Method { ordinal, .. } => Some(ordinal),
            _ => None,
        }
    }

    /// Whether the ordinal carries the `!` acknowledgment marker.
    pub fn is_acknowledged(&self) -> bool {
        match self {
            Declaration::Union { acknowledged, .. }
            | Declaration::Field { acknowledged, .. }
            | Declaration::Method { acknowledged, .. } => *acknowledged,
            _ => false,
        }
    }

    /// Nested declarations. Empty for declarations that cannot have a body.
    pub fn children(&self) -> &[Declaration] {
        match self {
            Declaration::Enum { children, .. }
            | Declaration::EnumValue { children, .. }
            | Declaration::Struct { children, .. }
            | Declaration::Union { children, .. }
            | Declaration::Field { children, .. }
            | Declaration::Interface { children, .. }
            | Declaration::Method { children, .. } => children,
            Declaration::Option { .. }
            | Declaration::Alias { .. }
            | Declaration::Constant { .. } => &[],
        }
    }
}

impl Positioned for Declaration {
    fn pos(&self) -> Position {
        match self {
            Declaration::Option { name, .. } => name.pos(),
            other => other.name().map_or(Position::START, |name| name.pos),
        }
    }
}
