//! Symbol module - String interning for identifiers and literals.
//!
//! This module provides the [`Symbol`] type, a compact (4-byte) handle to an
//! entry of a [`StringTable`]. Each translation unit owns one table; the
//! lexer interns every identifier, keyword, integer and string literal span
//! into it and hands out symbols, so two spans with the same bytes always
//! compare equal as symbols.
//!
//! # Memory Model
//!
//! ```text
//! arena:   f n \0 v a r \0 m a i n \0 ...
//!          ^      ^       ^
//! offsets: 0      3       7
//! ```
//!
//! A symbol is the arena offset of its first byte. The table never removes
//! or moves entries, so a symbol stays valid for the life of its table.
//!
//! # Examples
//!
//! ```
//! use indc_util::symbol::StringTable;
//!
//! let mut table = StringTable::new();
//! let s1 = table.intern_str("hello");
//! let s2 = table.intern_str("hello");
//! let s3 = table.intern_str("world");
//!
//! assert_eq!(s1, s2);
//! assert_ne!(s1, s3);
//! assert_eq!(table.resolve_lossy(s3).unwrap(), "world");
//! ```

mod interner;

pub use interner::{StringTable, ARENA_BLOCK, INDEX_BLOCK};

use std::fmt;

/// Statistics about a string table for profiling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of distinct entries
    pub count: usize,
    /// Arena bytes in use, terminators included
    pub arena_bytes: usize,
    /// Arena bytes allocated
    pub arena_capacity: usize,
    /// Number of times an existing entry was returned
    pub hits: usize,
    /// Number of times a new entry was appended
    pub misses: usize,
}

impl InternerStats {
    /// Fraction of intern calls answered by an existing entry
    ///
    /// # Examples
    ///
    /// ```
    /// use indc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats { hits: 3, misses: 1, ..Default::default() };
    /// assert_eq!(stats.hit_rate(), 0.75);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of intern calls
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

impl fmt::Display for InternerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries, {} arena bytes ({} allocated), {} hits, {} misses",
            self.count, self.arena_bytes, self.arena_capacity, self.hits, self.misses
        )
    }
}

/// Symbol - a handle into a [`StringTable`]
///
/// The wrapped value is the arena offset of the entry. A symbol is only
/// meaningful for the table that produced it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(pub(crate) u32);

impl Symbol {
    /// Build a symbol from a raw arena offset
    ///
    /// Resolving it fails unless the offset starts an entry.
    #[inline]
    pub const fn from_u32(offset: u32) -> Self {
        Self(offset)
    }

    /// The raw arena offset
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}
