//! Diagnostic system for IDL error reporting.
//!
//! A diagnostic is an error code, a message, and the line and column it
//! points at, with an optional label naming what was being parsed.
//!
//! Rendering is left to the [`emitter`] module so that the parser stays free
//! of any output concerns.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
