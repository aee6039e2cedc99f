//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range `[start, end)` into the source
//! buffer of one translation unit, plus the 1-based line it starts on.
//! Columns are not stored; the diagnostic emitter derives them from the
//! buffer when it needs them.
//!
//! # Examples
//!
//! ```
//! use indc_util::span::Span;
//!
//! let span = Span::new(10, 20, 1);
//! assert_eq!(span.len(), 10);
//! ```

/// Source location span
///
/// # Examples
///
/// ```
/// use indc_util::span::Span;
///
/// // A span covering bytes 3..5 on line 2
/// let span = Span::new(3, 5, 2);
///
/// // A zero-width span, as used for synthesized tokens
/// let point = Span::point(7, 2);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create a zero-width span at `offset`
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use indc_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1).is_empty());
    /// assert!(!Span::new(10, 20, 1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
