//! Byte classification.
//!
//! A 256-entry table maps every byte to the [`TokenKind`] it would start.
//! The scanners refine the hint afterwards (an identifier hint may become a
//! reserved word, `-` may become `->`, `.` may become `...`).

use crate::token::TokenKind;

static CLASS_TABLE: [TokenKind; 256] = build_table();

const fn build_table() -> [TokenKind; 256] {
    let mut table = [TokenKind::Error; 256];
    let mut byte = 0;
    while byte < 256 {
        table[byte] = hint_for(byte as u8);
        byte += 1;
    }
    table
}

const fn hint_for(byte: u8) -> TokenKind {
    match byte {
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => TokenKind::Identifier,
        b'0'..=b'9' => TokenKind::Integer,
        b'"' => TokenKind::String,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        b'[' => TokenKind::LBracket,
        b']' => TokenKind::RBracket,
        b':' => TokenKind::Colon,
        b',' => TokenKind::Comma,
        b';' => TokenKind::Semicolon,
        b'=' => TokenKind::Eq,
        b'*' => TokenKind::Star,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'.' => TokenKind::Dot,
        b' ' => TokenKind::Space,
        b'\n' => TokenKind::Eol,
        0 => TokenKind::Eof,
        _ => TokenKind::Error,
    }
}

/// Classify one byte.
///
/// # Examples
///
/// ```
/// use indc_lex::{classify, TokenKind};
///
/// assert_eq!(classify(b'x'), TokenKind::Identifier);
/// assert_eq!(classify(b'7'), TokenKind::Integer);
/// assert_eq!(classify(b'-'), TokenKind::Minus);
/// assert_eq!(classify(0), TokenKind::Eof);
/// assert_eq!(classify(b'\t'), TokenKind::Error);
/// ```
#[inline]
pub fn classify(byte: u8) -> TokenKind {
    CLASS_TABLE[byte as usize]
}

/// Returns true if `byte` can continue an identifier
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_underscore() {
        for byte in (b'a'..=b'z').chain(b'A'..=b'Z').chain([b'_']) {
            assert_eq!(classify(byte), TokenKind::Identifier);
        }
    }

    #[test]
    fn test_digits() {
        for byte in b'0'..=b'9' {
            assert_eq!(classify(byte), TokenKind::Integer);
            assert!(is_ident_continue(byte));
        }
    }

    #[test]
    fn test_punctuation() {
        let cases = [
            (b'(', TokenKind::LParen),
            (b')', TokenKind::RParen),
            (b'{', TokenKind::LBrace),
            (b'}', TokenKind::RBrace),
            (b'[', TokenKind::LBracket),
            (b']', TokenKind::RBracket),
            (b':', TokenKind::Colon),
            (b',', TokenKind::Comma),
            (b';', TokenKind::Semicolon),
            (b'=', TokenKind::Eq),
            (b'*', TokenKind::Star),
            (b'+', TokenKind::Plus),
            (b'-', TokenKind::Minus),
            (b'.', TokenKind::Dot),
        ];
        for (byte, kind) in cases {
            assert_eq!(classify(byte), kind, "byte {:?}", byte as char);
        }
    }

    #[test]
    fn test_control_bytes() {
        assert_eq!(classify(b' '), TokenKind::Space);
        assert_eq!(classify(b'\n'), TokenKind::Eol);
        assert_eq!(classify(0), TokenKind::Eof);
        assert_eq!(classify(b'"'), TokenKind::String);
    }

    #[test]
    fn test_everything_else_is_error() {
        for byte in [b'\t', b'\r', b'#', b'!', b'/', b'\'', b'\\', b'<', b'&', 0x7f, 0x80, 0xff] {
            assert_eq!(classify(byte), TokenKind::Error, "byte {byte:#04x}");
        }
    }

    #[test]
    fn test_table_is_total_and_matches_match() {
        for byte in 0..=255u8 {
            assert_eq!(classify(byte), hint_for(byte));
        }
    }
}
