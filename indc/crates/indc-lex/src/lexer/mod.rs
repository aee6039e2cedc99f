//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct, state and dispatch
//! - `layout` - Indentation tracking, synthesized braces and semicolons
//! - `identifier` - Identifier and reserved-word lexing
//! - `number` - Integer literal lexing
//! - `string` - String literal lexing and escapes
//! - `operator` - Punctuation with lookahead

mod core;
mod identifier;
mod layout;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, Lexer};
pub use self::layout::INDENT_WIDTH;
