//! Indentation tracking.
//!
//! Blocks are written with indentation instead of braces. At the start of
//! every line the leading spaces are measured; each change of level by one
//! step synthesizes one `{` or `}`, one per call to `advance`. A newline
//! after a token that can end a statement synthesizes a `;`.
//!
//! ```text
//! fn main ( ) -> int :        fn main ( ) -> int :
//!     return 0           =>   { return 0 ;
//!                             }
//! ```

use indc_util::Span;

use super::Lexer;
use crate::token::{Token, TokenKind};

/// Spaces per indentation level.
///
/// Leading spaces are divided by this width and the remainder is dropped,
/// so six spaces is level one.
pub const INDENT_WIDTH: usize = 4;

impl<'a> Lexer<'a> {
    /// Returns a synthesized brace while the emitted level lags the line's level.
    ///
    /// Measures the indentation first when the cursor is at a line start.
    pub(crate) fn pending_brace(&mut self) -> Option<Token> {
        let indent = match self.indent {
            Some(indent) => indent,
            None => {
                let indent = self.measure_indent();
                self.indent = Some(indent);
                indent
            },
        };

        let kind = if self.prev_indent < indent {
            self.prev_indent += 1;
            TokenKind::LBrace
        } else if indent < self.prev_indent {
            self.prev_indent -= 1;
            TokenKind::RBrace
        } else {
            return None;
        };

        let span = Span::point(self.cursor.position(), self.cursor.line());
        Some(Token::new(kind, span, None))
    }

    /// Consumes the leading spaces of a line and returns its level.
    fn measure_indent(&mut self) -> usize {
        self.cursor.eat_while(|byte| byte == b' ') / INDENT_WIDTH
    }

    /// Consumes a run of newlines.
    ///
    /// Returns a `;` spanning the run when the last token can end a
    /// statement. The `;` belongs to the line it terminates.
    pub(crate) fn lex_line_end(&mut self) -> Option<Token> {
        self.cursor.eat_while(|byte| byte == b'\n');
        self.indent = None;
        self.statement_end()
    }

    /// Treats the end of input as a final line end.
    ///
    /// Forces the level to zero so every open block is closed before `Eof`.
    pub(crate) fn close_input(&mut self) -> Option<Token> {
        self.input_closed = true;
        self.indent = Some(0);
        self.statement_end()
    }

    fn statement_end(&self) -> Option<Token> {
        self.last_kind
            .filter(|kind| kind.ends_statement())
            .map(|_| self.finish_token(TokenKind::Semicolon, None))
    }
}
