//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its state and the dispatch
//! loop behind [`Lexer::advance`].

use indc_util::{Span, StringTable, Symbol};
use tracing::{debug, trace};

use crate::classify::classify;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::keywords::KeywordTable;
use crate::token::{Token, TokenKind};

/// Lexer for one source unit.
///
/// The lexer turns a byte buffer into tokens on demand. Besides the tokens
/// written in the source it synthesizes `{` and `}` when the indentation
/// level changes and `;` at the end of a line whose last token can end a
/// statement. Every payload (identifier, reserved word, integer and string
/// literal) is interned into the borrowed [`StringTable`].
///
/// # Example
///
/// ```
/// use indc_lex::{Lexer, TokenKind};
/// use indc_util::StringTable;
///
/// let mut strings = StringTable::new();
/// let mut lexer = Lexer::new(b"var x\n", &mut strings);
///
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Var);
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.advance().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// String table receiving every payload.
    pub(crate) strings: &'a mut StringTable,

    /// Handles of the reserved words in `strings`.
    pub(crate) keywords: KeywordTable,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_line: u32,

    /// Indentation level of the current line; `None` at the start of a line.
    pub(crate) indent: Option<usize>,

    /// Indentation level reflected by the braces emitted so far.
    pub(crate) prev_indent: usize,

    /// Kind of the last token handed out.
    pub(crate) last_kind: Option<TokenKind>,

    /// Set once the end of input has been treated as a final line end.
    pub(crate) input_closed: bool,

    /// Set after `Eof` or an error has been returned.
    finished: bool,

    /// Reused buffer for unescaped string contents.
    pub(crate) scratch: Vec<u8>,

    /// Number of tokens handed out.
    emitted: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`, interning into `strings`.
    ///
    /// The reserved words are interned here, once per lexer.
    pub fn new(source: &'a [u8], strings: &'a mut StringTable) -> Self {
        let keywords = KeywordTable::new(strings);
        debug!(bytes = source.len(), "lexing unit");
        Self {
            cursor: Cursor::new(source),
            strings,
            keywords,
            token_start: 0,
            token_line: 1,
            indent: None,
            prev_indent: 0,
            last_kind: None,
            input_closed: false,
            finished: false,
            scratch: Vec::new(),
            emitted: 0,
        }
    }

    /// Returns the next token.
    ///
    /// Once `Eof` or an error has been returned the lexer is finished and
    /// every further call yields `Eof` again.
    pub fn advance(&mut self) -> LexResult<Token> {
        if self.finished {
            return Ok(self.eof_token());
        }

        match self.scan() {
            Ok(token) => {
                self.last_kind = Some(token.kind);
                self.emitted += 1;
                trace!(
                    kind = token.kind.name(),
                    start = token.span.start,
                    end = token.span.end,
                    line = token.span.line,
                    "token"
                );
                if token.kind == TokenKind::Eof {
                    self.finished = true;
                    debug!(
                        tokens = self.emitted,
                        lines = self.cursor.line(),
                        symbols = self.strings.len(),
                        "lexing finished"
                    );
                }
                Ok(token)
            },
            Err(err) => {
                self.finished = true;
                debug!(error = %err, "lexing stopped");
                Err(err)
            },
        }
    }

    /// Produces one token, ignoring the finished state.
    fn scan(&mut self) -> LexResult<Token> {
        loop {
            if let Some(brace) = self.pending_brace() {
                return Ok(brace);
            }

            self.begin_token();

            match classify(self.cursor.current()) {
                TokenKind::Identifier => return self.lex_identifier(),
                TokenKind::Integer => return self.lex_integer(),
                TokenKind::String => return self.lex_string(),
                TokenKind::Minus => return Ok(self.lex_minus()),
                TokenKind::Dot => return Ok(self.lex_dot()),
                TokenKind::Space => {
                    self.cursor.advance();
                },
                TokenKind::Eol => {
                    if let Some(semicolon) = self.lex_line_end() {
                        return Ok(semicolon);
                    }
                },
                TokenKind::Eof => {
                    if self.input_closed {
                        return Ok(self.finish_token(TokenKind::Eof, None));
                    }
                    if let Some(semicolon) = self.close_input() {
                        return Ok(semicolon);
                    }
                },
                TokenKind::Error => {
                    let byte = self.cursor.current();
                    self.cursor.advance();
                    return Err(LexError::UnexpectedCharacter {
                        byte,
                        span: self.current_span(),
                    });
                },
                kind => return Ok(self.lex_single(kind)),
            }
        }
    }

    /// Marks the cursor position as the start of the next token.
    #[inline]
    pub(crate) fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_line = self.cursor.line();
    }

    /// Span from the token start to the cursor.
    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.position(), self.token_line)
    }

    /// Builds a token covering the bytes consumed since `begin_token`.
    #[inline]
    pub(crate) fn finish_token(&self, kind: TokenKind, symbol: Option<Symbol>) -> Token {
        Token::new(kind, self.current_span(), symbol)
    }

    /// Interns `bytes`, mapping table exhaustion to a lexical error.
    pub(crate) fn intern(&mut self, bytes: &[u8]) -> LexResult<Symbol> {
        let span = self.current_span();
        self.strings
            .try_intern(bytes)
            .map_err(|source| LexError::StringTable { source, span })
    }

    fn eof_token(&self) -> Token {
        Token::new(
            TokenKind::Eof,
            Span::point(self.cursor.position(), self.cursor.line()),
            None,
        )
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current byte offset in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Indentation level of the current line, if already measured.
    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    /// Indentation level the emitted braces currently reflect.
    pub fn prev_indent(&self) -> usize {
        self.prev_indent
    }

    /// Returns true once `Eof` or an error has been returned.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The string table payloads are interned into.
    pub fn strings(&self) -> &StringTable {
        self.strings
    }

    /// The cached handle for a reserved word.
    pub fn keyword_symbol(&self, kind: TokenKind) -> Option<Symbol> {
        self.keywords.symbol(kind)
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    /// Yields every token up to and including `Eof`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.advance())
    }
}

/// Lex a whole unit, returning every token including the final `Eof`.
///
/// # Example
///
/// ```
/// use indc_lex::{tokenize, TokenKind};
/// use indc_util::StringTable;
///
/// let mut strings = StringTable::new();
/// let tokens = tokenize(b"f(x)", &mut strings).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::LParen,
///         TokenKind::Identifier,
///         TokenKind::RParen,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn tokenize(source: &[u8], strings: &mut StringTable) -> LexResult<Vec<Token>> {
    Lexer::new(source, strings).collect()
}
