//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! diagnostics.
//!
//! # Examples
//!
//! ```
//! use emberc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use emberc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     eprintln!("lexing failed with {} error(s)", handler.error_count());
//! }
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use emberc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// An error in the input
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Render the diagnostic against the source it was reported for.
    ///
    /// The output has a header line, a `file:line:column` locator, then the
    /// offending source line with carets under the span. When the span's
    /// line is not present in `source` the snippet is omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use emberc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    /// use emberc_util::Span;
    ///
    /// let diag = DiagnosticBuilder::error("unexpected character '@'")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .span(Span::new(4, 5, 1, 5))
    ///     .build();
    /// let rendered = diag.render("main.em", "let @ = 5;");
    ///
    /// assert_eq!(
    ///     rendered,
    ///     "error[E1001]: unexpected character '@'\n  --> main.em:1:5\n  1 | let @ = 5;\n    |     ^"
    /// );
    /// ```
    pub fn render(&self, file_name: &str, source: &str) -> String {
        let mut lines = Vec::new();

        match self.code {
            Some(code) => lines.push(format!("{}[{}]: {}", self.level, code, self.message)),
            None => lines.push(format!("{}: {}", self.level, self.message)),
        }
        lines.push(format!(
            "  --> {}:{}:{}",
            file_name, self.span.line, self.span.column
        ));

        let line_index = (self.span.line as usize).checked_sub(1);
        if let Some(text) = line_index.and_then(|index| source.lines().nth(index)) {
            lines.push(self.snippet(text).format());
        }

        lines.join("\n")
    }

    /// Build the caret snippet for `text`, converting byte columns into
    /// character columns.
    fn snippet(&self, text: &str) -> SourceSnippet {
        let offset = (self.span.column as usize).saturating_sub(1);
        let len = self.span.len();
        let start = text.get(..offset).map_or(offset, |prefix| prefix.chars().count()) + 1;
        let width = text
            .get(offset..offset + len)
            .map_or(len, |lexeme| lexeme.chars().count());
        SourceSnippet::new(text, self.span.line as usize, start, start + width)
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics behind interior mutability so that
/// reporting only needs a shared reference. A discarding handler drops
/// everything it is given.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether emitted diagnostics are kept
    recording: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            recording: true,
        }
    }

    /// Create a handler that drops every diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use emberc_util::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::discarding();
    /// DiagnosticBuilder::error("ignored").emit(&handler);
    /// assert!(!handler.has_errors());
    /// ```
    pub fn discarding() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            recording: false,
        }
    }

    /// Returns true if emitted diagnostics are kept
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.recording {
            self.diagnostics.borrow_mut().push(diagnostic);
        }
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .field("recording", &self.recording)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_at(message: &str, span: Span) -> Diagnostic {
        DiagnosticBuilder::error(message).span(span).build()
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(handler.is_recording());
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(error_at("e1", Span::DUMMY));
        handler.emit_diagnostic(error_at("e2", Span::DUMMY));

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_take() {
        let handler = Handler::new();
        handler.emit_diagnostic(error_at("test", Span::DUMMY));
        let taken = handler.take_diagnostics();
        assert_eq!(taken.len(), 1);
        assert!(!handler.has_errors());
        assert!(handler.take_diagnostics().is_empty());
    }

    #[test]
    fn test_discarding_handler_keeps_nothing() {
        let handler = Handler::discarding();
        for _ in 0..100 {
            handler
                .build_error(Span::new(0, 1, 1, 1), "dropped")
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                .emit(&handler);
        }
        assert!(!handler.is_recording());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_render_without_code() {
        let diag = error_at("unterminated block comment", Span::new(6, 8, 2, 1));
        let rendered = diag.render("a.em", "let x\n/* open");

        assert_eq!(
            rendered,
            "error: unterminated block comment\n  --> a.em:2:1\n  2 | /* open\n    | ^^"
        );
    }

    #[test]
    fn test_render_line_out_of_range() {
        let diag = error_at("at end", Span::new(0, 0, 5, 1));
        assert_eq!(diag.render("a.em", "x"), "error: at end\n  --> a.em:5:1");
    }

    #[test]
    fn test_render_caret_after_multibyte_chars() {
        // 'é' and '日' take 2 and 3 bytes, so '@' sits at byte column 12.
        let diag = error_at("unexpected character '@'", Span::new(11, 12, 1, 12));
        let rendered = diag.render("a.em", "é 日 x = @;");
        assert!(rendered.ends_with("  1 | é 日 x = @;\n    |         ^"));
    }

    #[test]
    fn test_render_multibyte_lexeme_is_one_caret() {
        let diag = error_at("unexpected character 'é'", Span::new(2, 4, 1, 3));
        let rendered = diag.render("a.em", "x é y");
        assert!(rendered.ends_with("  1 | x é y\n    |   ^"));
    }

    #[test]
    fn test_serialize_diagnostic() {
        let diag = DiagnosticBuilder::error("bad")
            .span(Span::new(0, 1, 1, 1))
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .build();
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["code"], "E1001");
        assert_eq!(value["span"]["column"], 1);
        assert!(value.get("notes").is_none());
    }
}
