//! Error context for "while parsing X" notes.

use idl_diagnostic::ErrorCode;

/// What was being parsed when an error occurred.
///
/// ```ignore
/// self.in_error_context(ErrorContext::Field, |p| {
///     p.field_decl_inner(body)
/// })
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === Declarations ===
    Option,
    Alias,
    Constant,
    Enum,
    EnumValue,
    Struct,
    Union,
    Field,
    Interface,
    Method,
    MethodParam,

    // === Pieces ===
    DeclName,
    TypeExpression,
    Value,
    RecordField,
}

impl ErrorContext {
    /// Noun phrase for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::Option => "an option",
            ErrorContext::Alias => "an alias",
            ErrorContext::Constant => "a constant declaration",
            ErrorContext::Enum => "an enum declaration",
            ErrorContext::EnumValue => "an enum value",
            ErrorContext::Struct => "a struct declaration",
            ErrorContext::Union => "a union declaration",
            ErrorContext::Field => "a field declaration",
            ErrorContext::Interface => "an interface declaration",
            ErrorContext::Method => "a method declaration",
            ErrorContext::MethodParam => "a method parameter",
            ErrorContext::DeclName => "a declaration name",
            ErrorContext::TypeExpression => "a type",
            ErrorContext::Value => "a value",
            ErrorContext::RecordField => "a record field",
        }
    }

    /// Error code for a missing construct of this kind, when it has one.
    pub fn expected_code(self) -> Option<ErrorCode> {
        match self {
            ErrorContext::Value => Some(ErrorCode::E1005),
            ErrorContext::TypeExpression => Some(ErrorCode::E1006),
            _ => None,
        }
    }
}
