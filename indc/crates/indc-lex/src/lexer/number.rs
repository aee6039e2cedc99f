//! Integer literal lexing.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of decimal digits.
    ///
    /// The digits are interned verbatim; no value is computed, so there is
    /// no overflow check and leading zeros are kept.
    pub(crate) fn lex_integer(&mut self) -> LexResult<Token> {
        self.cursor.eat_while(|byte| byte.is_ascii_digit());

        let digits = self.cursor.slice_from(self.token_start);
        let symbol = self.intern(digits)?;

        Ok(self.finish_token(TokenKind::Integer, Some(symbol)))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::{tokenize, Token};
    use indc_util::StringTable;

    fn lex_all(source: &str) -> (Vec<Token>, StringTable) {
        let mut strings = StringTable::new();
        let tokens = tokenize(source.as_bytes(), &mut strings).unwrap();
        (tokens, strings)
    }

    fn text(strings: &StringTable, token: &Token) -> Vec<u8> {
        strings.resolve(token.symbol.unwrap()).unwrap().to_vec()
    }

    #[test]
    fn test_integer() {
        let (tokens, strings) = lex_all("42");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(text(&strings, &tokens[0]), b"42");
    }

    #[test]
    fn test_leading_zeros_kept() {
        let (tokens, strings) = lex_all("007");
        assert_eq!(text(&strings, &tokens[0]), b"007");
    }

    #[test]
    fn test_huge_integer_is_not_evaluated() {
        let digits = "9".repeat(64);
        let (tokens, strings) = lex_all(&digits);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(text(&strings, &tokens[0]), digits.as_bytes());
    }

    #[test]
    fn test_digits_then_letters_split() {
        let (tokens, strings) = lex_all("12abc");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(text(&strings, &tokens[1]), b"abc");
    }

    #[test]
    fn test_minus_is_separate() {
        let (tokens, _) = lex_all("-5");
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].kind, TokenKind::Integer);
    }
}
