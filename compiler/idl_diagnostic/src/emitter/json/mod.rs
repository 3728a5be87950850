//! Machine-readable output: one JSON array, one flat object per diagnostic.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    file_name: Option<String>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            file_name: None,
        }
    }

    /// Add a `"file"` member to every object.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let mut object = format!(
            "  {{\"code\": \"{}\", \"severity\": \"{}\"",
            diagnostic.code.as_str(),
            diagnostic.severity
        );
        if let Some(file_name) = &self.file_name {
            object.push_str(&format!(", \"file\": \"{}\"", escape_json(file_name)));
        }
        object.push_str(&format!(
            ", \"line\": {}, \"column\": {}, \"message\": \"{}\"",
            diagnostic.pos.line,
            diagnostic.pos.column,
            escape_json(&diagnostic.message)
        ));
        if !diagnostic.label.is_empty() {
            object.push_str(&format!(", \"label\": \"{}\"", escape_json(&diagnostic.label)));
        }
        object.push('}');
        let _ = write!(self.writer, "{object}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
