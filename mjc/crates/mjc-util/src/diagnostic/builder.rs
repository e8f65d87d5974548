//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use mjc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use mjc_util::Span;
///
/// let diag = DiagnosticBuilder::error("expected `;`, found `}`")
///     .code(DiagnosticCode::E_PAR_EXPECTED_TOKEN)
///     .span(Span::point(7, 2))
///     .note("statements are terminated by `;`")
///     .build();
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Handler;

    #[test]
    fn test_builder_error() {
        let diag = DiagnosticBuilder::error("test error").span(Span::DUMMY).build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test error");
    }

    #[test]
    fn test_builder_code() {
        let diag = DiagnosticBuilder::error("bad token")
            .code(DiagnosticCode::E_PAR_UNEXPECTED_TOKEN)
            .build();
        assert_eq!(diag.code, Some(DiagnosticCode::E_PAR_UNEXPECTED_TOKEN));
    }

    #[test]
    fn test_builder_notes() {
        let diag = DiagnosticBuilder::error("test")
            .note("note 1")
            .note("note 2")
            .build();
        assert_eq!(diag.notes, vec!["note 1", "note 2"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("test error")
            .span(Span::point(1, 1))
            .emit(&handler);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }
}
