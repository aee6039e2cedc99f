//! String literal lexing.
//!
//! Supported escapes are `\"`, `\n`, `\t`, `\r` and `\0`. Any other byte
//! after a backslash is an error. A raw newline inside a literal is kept
//! and still advances the line counter. The payload is the unescaped
//! content, without quotes, collected in a growable buffer.

use indc_util::Span;

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        self.scratch.clear();

        loop {
            match self.cursor.current() {
                b'"' => {
                    self.cursor.advance();
                    break;
                },
                b'\\' => {
                    let byte = self.lex_escape()?;
                    self.scratch.push(byte);
                },
                0 => return Err(self.unterminated()),
                byte => {
                    self.scratch.push(byte);
                    self.cursor.advance();
                },
            }
        }

        let content = std::mem::take(&mut self.scratch);
        let symbol = self.intern(&content);
        self.scratch = content;

        Ok(self.finish_token(TokenKind::String, Some(symbol?)))
    }

    /// Decodes one escape sequence, consuming the backslash and the byte after it.
    fn lex_escape(&mut self) -> LexResult<u8> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        self.cursor.advance();

        let escape = self.cursor.current();
        let value = match escape {
            b'"' => b'"',
            b'n' => b'\n',
            b't' => b'\t',
            b'r' => b'\r',
            b'0' => 0,
            0 => return Err(self.unterminated()),
            _ => {
                return Err(LexError::InvalidEscape {
                    escape,
                    span: Span::new(start, start + 2, line),
                })
            },
        };
        self.cursor.advance();
        Ok(value)
    }

    /// The error for a literal that runs into the end of input.
    ///
    /// Spans from the opening quote to the end of input.
    fn unterminated(&self) -> LexError {
        LexError::UnterminatedString {
            span: self.current_span(),
        }
    }
}
