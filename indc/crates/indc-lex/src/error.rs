//! Lexical errors.
//!
//! Every lexical error is fatal for its source unit: the lexer stops at the
//! first one and reports it through [`LexError::to_diagnostic`].

use indc_util::{Diagnostic, DiagnosticCode, Span, SymbolError};
use thiserror::Error;

/// Errors produced while lexing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A byte that cannot start any token
    #[error("unexpected character {}", describe_byte(.byte))]
    UnexpectedCharacter { byte: u8, span: Span },

    /// A string literal with no closing quote
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    /// A backslash followed by an unsupported byte
    #[error("unknown escape sequence \\{}", describe_escape(.escape))]
    InvalidEscape { escape: u8, span: Span },

    /// The string table could not grow
    #[error("string table exhausted: {source}")]
    StringTable {
        #[source]
        source: SymbolError,
        span: Span,
    },
}

impl LexError {
    /// Location of the offending text
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::InvalidEscape { span, .. }
            | LexError::StringTable { span, .. } => *span,
        }
    }

    /// Diagnostic code, if the error has one
    pub fn code(&self) -> Option<DiagnosticCode> {
        match self {
            LexError::UnexpectedCharacter { .. } => Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
            LexError::UnterminatedString { .. } => Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING),
            LexError::InvalidEscape { .. } => Some(DiagnosticCode::E_LEXER_INVALID_ESCAPE),
            LexError::StringTable { .. } => None,
        }
    }

    /// Convert into a diagnostic ready for the emitter
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string(), self.span());
        match self.code() {
            Some(code) => diagnostic.with_code(code),
            None => diagnostic,
        }
    }
}

fn describe_byte(byte: &u8) -> String {
    match *byte {
        b'\t' => "'\\t'".to_string(),
        b'\r' => "'\\r'".to_string(),
        0x21..=0x7e => format!("'{}'", *byte as char),
        other => format!("byte 0x{other:02x}"),
    }
}

fn describe_escape(byte: &u8) -> String {
    match *byte {
        0x21..=0x7e => (*byte as char).to_string(),
        b'\n' => "<newline>".to_string(),
        other => format!("<0x{other:02x}>"),
    }
}

/// Result type for lexer operations
pub type LexResult<T> = Result<T, LexError>;
