//! indc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by every phase of the indc front end:
//!
//! - [`symbol`] - the per-unit [`StringTable`] and its [`Symbol`] handles
//! - [`span`] - byte ranges into a source buffer
//! - [`diagnostic`] - diagnostic records, the terminal [`Emitter`] and the
//!   [`Handler`] that counts them
//! - [`error`] - error types for the above
//!
//! The lexer depends on all four; downstream phases (a future parser)
//! depend on the same handles and spans, which is why they live here rather
//! than in the lexer crate.
//
// ============================================================================
// STRING INTERNING
// ============================================================================
//
// Each translation unit owns one string table. The table is an append-only
// byte arena; a symbol is the arena offset of an entry. Interning the same
// bytes twice yields the same offset, so identifier and keyword comparison
// downstream is an integer compare:
//
// ```
// arena:  f n \0 m a i n \0 4 2 \0
//         0      3          8
// ```
//
// Nothing is ever removed. The table lives exactly as long as the unit.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{ColorConfig, Diagnostic, DiagnosticCode, Emitter, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult, SymbolError, SymbolResult};
pub use span::Span;
pub use symbol::{InternerStats, StringTable, Symbol};
