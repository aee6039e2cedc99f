//! indc-lex - Lexical Analyzer for the indc language
//!
//! This crate turns the bytes of one source unit into a stream of tokens.
//! Blocks are written with indentation, and the lexer makes them explicit
//! for the parser: it synthesizes `{` and `}` when the indentation level
//! changes and `;` at the end of a line that can end a statement.
//!
//! # Example Usage
//!
//! ```
//! use indc_lex::{Lexer, TokenKind};
//! use indc_util::StringTable;
//!
//! let source = b"fn main ( ) -> int :\n    return 0\n";
//! let mut strings = StringTable::new();
//! let mut lexer = Lexer::new(source, &mut strings);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.advance().unwrap().kind, TokenKind::Fn);
//!
//! // Or iterate through the rest
//! let rest: Result<Vec<_>, _> = lexer.collect();
//! assert_eq!(rest.unwrap().last().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and tokens
//! - [`classify`] - Byte classification table
//! - [`cursor`] - Byte cursor for source traversal
//! - [`lexer`] - Lexer state machine
//! - [`keywords`] - Reserved-word handle cache
//! - [`trace`] - Token trace output
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! `fn`, `var`, `import`, `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `0`, `42`, `007` (digits only, kept as text)
//! - **String**: `"hello\n"` with escapes `\"`, `\n`, `\t`, `\r`, `\0`
//!
//! ## Punctuation
//!
//! `(` `)` `{` `}` `[` `]` `:` `,` `;` `=` `*` `+` `-` `->` `.` `...`
//!
//! # Layout
//!
//! Leading spaces are measured in steps of [`INDENT_WIDTH`]. Tabs and
//! carriage returns are not whitespace; they are lexical errors.

pub mod classify;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;
pub mod trace;

mod edge_cases;

pub use classify::classify;
pub use error::{LexError, LexResult};
pub use keywords::KeywordTable;
pub use lexer::{tokenize, Lexer, INDENT_WIDTH};
pub use token::{Token, TokenKind, KEYWORDS};
pub use trace::{format_token, TokenRecord, TraceFormat, TraceWriter, KIND_WIDTH};
