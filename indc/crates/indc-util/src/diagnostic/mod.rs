//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! diagnostics: the [`Diagnostic`] record itself, its [`Level`] and
//! [`DiagnosticCode`], the [`Emitter`] that renders it against a source
//! buffer, and the [`Handler`] that counts what a run has reported.
//!
//! # Examples
//!
//! ```
//! use indc_util::diagnostic::{ColorConfig, Diagnostic, DiagnosticCode, Emitter, Handler};
//! use indc_util::Span;
//!
//! let source = b"var s = \"oops\n";
//! let diag = Diagnostic::error("unterminated string literal", Span::new(8, 14, 1))
//!     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
//!
//! let emitter = Emitter::with_terminal(ColorConfig::Never, false);
//! let text = emitter.render("main.ind", source, &diag).unwrap();
//! assert!(text.starts_with("main.ind:1:9:\nerror: unterminated string literal"));
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(diag);
//! assert!(handler.has_errors());
//! ```

mod codes;
mod emitter;
mod level;

pub use codes::DiagnosticCode;
pub use emitter::{Emitter, SourceSnippet};
pub use level::{ColorConfig, Level};

use crate::Span;
use std::cell::RefCell;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
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
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

/// Handler for collecting and counting diagnostics
///
/// The driver records every diagnostic it prints here and asks the handler
/// at the end of the run whether anything failed.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        tracing::debug!(
            level = %diagnostic.level,
            line = diagnostic.span.line,
            message = %diagnostic.message,
            "diagnostic recorded"
        );
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
