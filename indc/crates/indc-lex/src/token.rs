//! Token definitions.
//!
//! [`TokenKind`] is the closed set of token classes the lexer produces, and
//! [`Token`] is one located, classified occurrence of a kind. Reserved words
//! occupy the first, contiguous range of discriminants so that
//! [`TokenKind::is_keyword`] is a single comparison.

use indc_util::{Span, Symbol};
use serde::{Serialize, Serializer};
use std::fmt;

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // ==================== RESERVED WORDS ====================
    /// `fn`
    Fn,
    /// `var`
    Var,
    /// `import`
    Import,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,

    // ==================== LITERALS ====================
    /// Identifier (`main`, `x_1`)
    Identifier,
    /// Decimal integer literal (`42`)
    Integer,
    /// String literal (`"hi\n"`)
    String,

    // ==================== PUNCTUATION ====================
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`, also synthesized on indent
    LBrace,
    /// `}`, also synthesized on dedent
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`, also synthesized at end of line
    Semicolon,
    /// `=`
    Eq,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `->`
    Arrow,
    /// `.`
    Dot,
    /// `...`
    Ellipsis,

    // ==================== CONTROL ====================
    /// A space character; consumed, never emitted
    Space,
    /// A newline; consumed, never emitted
    Eol,
    /// End of input
    Eof,
    /// A byte that starts no token
    Error,
}

/// Reserved words in declaration order, with their canonical spelling.
///
/// The order matches the discriminant order of [`TokenKind`].
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("fn", TokenKind::Fn),
    ("var", TokenKind::Var),
    ("import", TokenKind::Import),
    ("i8", TokenKind::I8),
    ("i16", TokenKind::I16),
    ("i32", TokenKind::I32),
    ("i64", TokenKind::I64),
    ("u8", TokenKind::U8),
    ("u16", TokenKind::U16),
    ("u32", TokenKind::U32),
    ("u64", TokenKind::U64),
];

impl TokenKind {
    /// First reserved word
    pub const FIRST_KEYWORD: TokenKind = TokenKind::Fn;

    /// Last reserved word
    pub const LAST_KEYWORD: TokenKind = TokenKind::U64;

    /// Returns true for reserved words.
    ///
    /// # Examples
    ///
    /// ```
    /// use indc_lex::TokenKind;
    ///
    /// assert!(TokenKind::Fn.is_keyword());
    /// assert!(TokenKind::U64.is_keyword());
    /// assert!(!TokenKind::Identifier.is_keyword());
    /// ```
    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (Self::FIRST_KEYWORD as u8) && (self as u8) <= (Self::LAST_KEYWORD as u8)
    }

    /// Returns true for kinds after which a newline terminates a statement.
    #[inline]
    pub const fn ends_statement(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::Identifier | TokenKind::Integer
        )
    }

    /// The name used in token traces.
    ///
    /// Reserved words and punctuation print their source spelling; the
    /// other kinds print a lowercase word.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Fn => "fn",
            TokenKind::Var => "var",
            TokenKind::Import => "import",
            TokenKind::I8 => "i8",
            TokenKind::I16 => "i16",
            TokenKind::I32 => "i32",
            TokenKind::I64 => "i64",
            TokenKind::U8 => "u8",
            TokenKind::U16 => "u16",
            TokenKind::U32 => "u32",
            TokenKind::U64 => "u64",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::String => "string",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Eq => "=",
            TokenKind::Star => "*",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Arrow => "->",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::Space => "space",
            TokenKind::Eol => "eol",
            TokenKind::Eof => "eof",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified, located token.
///
/// `symbol` is the interned text for reserved words, identifiers, integer
/// and string literals (the string payload is the unescaped content), and
/// `None` for everything else. Synthesized braces have an empty span; a
/// synthesized semicolon spans the newlines it stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Byte range and line
    pub span: Span,
    /// Interned payload
    pub symbol: Option<Symbol>,
}

impl Token {
    /// Create a new token
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, symbol: Option<Symbol>) -> Self {
        Self { kind, span, symbol }
    }

    /// Start byte offset
    #[inline]
    pub const fn start(&self) -> usize {
        self.span.start
    }

    /// End byte offset (exclusive)
    #[inline]
    pub const fn end(&self) -> usize {
        self.span.end
    }

    /// Line the token starts on (1-based)
    #[inline]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns true for the end-of-input token
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_range_matches_table() {
        for (spelling, kind) in KEYWORDS {
            assert!(kind.is_keyword(), "{spelling} should be a keyword");
            assert_eq!(kind.name(), spelling);
        }
        assert_eq!(KEYWORDS[0].1, TokenKind::FIRST_KEYWORD);
        assert_eq!(KEYWORDS[KEYWORDS.len() - 1].1, TokenKind::LAST_KEYWORD);
    }

    #[test]
    fn test_keyword_table_is_in_discriminant_order() {
        for (index, (_, kind)) in KEYWORDS.iter().enumerate() {
            assert_eq!(*kind as u8 as usize, index);
        }
    }

    #[test]
    fn test_non_keywords() {
        for kind in [
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::String,
            TokenKind::LParen,
            TokenKind::Eof,
            TokenKind::Error,
        ] {
            assert!(!kind.is_keyword());
        }
    }

    #[test]
    fn test_ends_statement() {
        assert!(TokenKind::RParen.ends_statement());
        assert!(TokenKind::Identifier.ends_statement());
        assert!(TokenKind::Integer.ends_statement());
        assert!(!TokenKind::String.ends_statement());
        assert!(!TokenKind::Colon.ends_statement());
        assert!(!TokenKind::Fn.ends_statement());
        assert!(!TokenKind::RBrace.ends_statement());
    }

    #[test]
    fn test_display_uses_trace_name() {
        assert_eq!(TokenKind::Arrow.to_string(), "->");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    }

    #[test]
    fn test_kind_serializes_as_name() {
        let json = serde_json::to_string(&TokenKind::Ellipsis).unwrap();
        assert_eq!(json, "\"...\"");
    }
}
