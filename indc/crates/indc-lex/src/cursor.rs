//! Byte cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a source buffer one byte at a time. Reading past the end
//! yields `0`, so the end of input looks like a terminating NUL to the
//! classifier.

/// A cursor over the bytes of one source unit.
///
/// The cursor tracks the current byte offset and the 1-based line number.
/// The line counter advances once for every `\n` consumed.
///
/// # Example
///
/// ```
/// use indc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"var x");
///
/// assert_eq!(cursor.current(), b'v');
/// cursor.advance();
/// assert_eq!(cursor.current(), b'a');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first byte.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the byte at the cursor, or `0` past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead, or `0` past the end.
    ///
    /// ```
    /// use indc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"...");
    /// assert_eq!(cursor.peek(2), b'.');
    /// assert_eq!(cursor.peek(3), 0);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.source
            .get(self.position + offset)
            .copied()
            .unwrap_or(0)
    }

    /// Moves past the current byte.
    ///
    /// Does nothing at the end of the source.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(&byte) = self.source.get(self.position) {
            if byte == b'\n' {
                self.line += 1;
            }
            self.position += 1;
        }
    }

    /// Advances by `count` bytes.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Consumes bytes while `predicate` holds, returning how many were consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> usize {
        let start = self.position;
        while !self.is_at_end() && predicate(self.current()) {
            self.advance();
        }
        self.position - start
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The bytes from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        let source: &'a [u8] = self.source;
        &source[start.min(self.position)..self.position]
    }
}
