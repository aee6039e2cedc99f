//! Core error types for indc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for symbol table operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The handle does not address the start of an entry in this table
    #[error("Symbol not found: offset {offset}")]
    NotFound { offset: u32 },

    /// The arena outgrew the 32-bit handle space
    #[error("String table overflow: arena would exceed {limit} bytes")]
    Overflow { limit: u64 },
}

/// Error type for diagnostic rendering
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagnosticError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for the source being rendered
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        source_len: usize,
        span_start: usize,
        span_end: usize,
    },
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_error_display() {
        let err = SymbolError::NotFound { offset: 7 };
        assert_eq!(err.to_string(), "Symbol not found: offset 7");
    }

    #[test]
    fn test_span_out_of_bounds_display() {
        let err = DiagnosticError::SpanOutOfBounds {
            source_len: 3,
            span_start: 4,
            span_end: 9,
        };
        assert_eq!(
            err.to_string(),
            "Span out of bounds: source has 3 bytes, span is 4..9"
        );
    }
}
