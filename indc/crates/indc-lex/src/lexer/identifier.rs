//! Identifier and reserved-word lexing.

use crate::classify::is_ident_continue;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// ASCII letters, digits or underscores. The text is interned and the
    /// handle compared against the cached reserved-word handles.
    pub(crate) fn lex_identifier(&mut self) -> LexResult<Token> {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let symbol = self.intern(text)?;
        let kind = self
            .keywords
            .lookup(symbol)
            .unwrap_or(TokenKind::Identifier);

        Ok(self.finish_token(kind, Some(symbol)))
    }
}
