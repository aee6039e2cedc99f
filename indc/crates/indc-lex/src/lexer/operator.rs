//! Punctuation lexing.
//!
//! Most punctuation is a single byte. `-` and `.` look ahead for `->`
//! and `...`.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one-byte punctuation token of the classified kind.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.finish_token(kind, None)
    }

    /// Lexes `-` or `->`.
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current() == b'>' {
            self.cursor.advance();
            self.finish_token(TokenKind::Arrow, None)
        } else {
            self.finish_token(TokenKind::Minus, None)
        }
    }

    /// Lexes `.` or `...`.
    ///
    /// Two dots are two `.` tokens.
    pub(crate) fn lex_dot(&mut self) -> Token {
        if self.cursor.peek(1) == b'.' && self.cursor.peek(2) == b'.' {
            self.cursor.advance_by(3);
            self.finish_token(TokenKind::Ellipsis, None)
        } else {
            self.cursor.advance();
            self.finish_token(TokenKind::Dot, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind::{self, *};
    use crate::tokenize;
    use indc_util::{Span, StringTable};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut strings = StringTable::new();
        tokenize(source.as_bytes(), &mut strings)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_arrow() {
        assert_eq!(kinds("->"), vec![Arrow, Eof]);
    }

    #[test]
    fn test_minus_alone() {
        assert_eq!(kinds("- 1"), vec![Minus, Integer, Semicolon, Eof]);
    }

    #[test]
    fn test_minus_space_gt_is_not_arrow() {
        let mut strings = StringTable::new();
        let err = tokenize(b"- >", &mut strings).unwrap_err();
        assert_eq!(err.span(), Span::new(2, 3, 1));
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(kinds("..."), vec![Ellipsis, Eof]);
    }

    #[test]
    fn test_two_dots_are_two_tokens() {
        assert_eq!(kinds(".."), vec![Dot, Dot, Eof]);
    }

    #[test]
    fn test_four_dots() {
        assert_eq!(kinds("...."), vec![Ellipsis, Dot, Eof]);
    }

    #[test]
    fn test_spans() {
        let mut strings = StringTable::new();
        let tokens = tokenize(b"a->b...", &mut strings).unwrap();
        assert_eq!(tokens[1].kind, Arrow);
        assert_eq!(tokens[1].span, Span::new(1, 3, 1));
        assert_eq!(tokens[3].kind, Ellipsis);
        assert_eq!(tokens[3].span, Span::new(4, 7, 1));
    }

    #[test]
    fn test_variadic_parameter_list() {
        assert_eq!(
            kinds("fn printf(fmt: u8, ...)"),
            vec![Fn, Identifier, LParen, Identifier, Colon, U8, Comma, Ellipsis, RParen, Semicolon, Eof]
        );
    }
}
