//! Per-unit string table backed by a single byte arena.
//!
//! Every entry is stored as its bytes followed by a `0` terminator, and a
//! [`Symbol`] is the arena offset of the first byte. The offset index is
//! kept sorted by construction (append-only), so resolving a handle is a
//! binary search. Deduplication goes through a bucket map keyed by the
//! FxHash of the bytes; candidates in a bucket are confirmed by length,
//! then by content.
//!
//! # Performance Characteristics
//!
//! - **Interning (hit)**: O(1) expected - hash + bucket scan
//! - **Interning (miss)**: amortized O(len) - arena append
//! - **Resolving**: O(log n) in the number of entries

use rustc_hash::{FxHashMap, FxHasher};
use std::borrow::Cow;
use std::hash::Hasher;

use super::{InternerStats, Symbol};
use crate::error::{SymbolError, SymbolResult};

/// Arena growth step in bytes.
pub const ARENA_BLOCK: usize = 4096;

/// Offset index growth step in entries.
pub const INDEX_BLOCK: usize = 256;

/// An append-only intern pool for one translation unit.
///
/// # Examples
///
/// ```
/// use indc_util::symbol::StringTable;
///
/// let mut table = StringTable::new();
/// let a = table.intern(b"main");
/// let b = table.intern(b"main");
/// assert_eq!(a, b);
/// assert_eq!(table.resolve(a).unwrap(), b"main");
/// ```
#[derive(Debug, Default)]
pub struct StringTable {
    /// Entry bytes, each followed by a `0` terminator
    arena: Vec<u8>,

    /// Start offset of every entry, in insertion order
    offsets: Vec<u32>,

    /// FxHash of entry bytes -> entries with that hash
    buckets: FxHashMap<u64, Vec<Symbol>>,

    /// Number of lookups that found an existing entry
    hits: usize,

    /// Number of lookups that appended a new entry
    misses: usize,
}

impl StringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `bytes`, returning the handle of the (possibly pre-existing)
    /// entry.
    ///
    /// # Panics
    ///
    /// Panics if the arena would grow past `u32::MAX` bytes. Use
    /// [`StringTable::try_intern`] where that must be reported instead.
    pub fn intern(&mut self, bytes: &[u8]) -> Symbol {
        match self.try_intern(bytes) {
            Ok(symbol) => symbol,
            Err(err) => panic!("{err}"),
        }
    }

    /// Intern a UTF-8 string
    #[inline]
    pub fn intern_str(&mut self, string: &str) -> Symbol {
        self.intern(string.as_bytes())
    }

    /// Intern `bytes`, reporting arena overflow as an error.
    pub fn try_intern(&mut self, bytes: &[u8]) -> SymbolResult<Symbol> {
        let hash = Self::hash_bytes(bytes);

        if let Some(symbol) = self.find(hash, bytes) {
            self.hits += 1;
            return Ok(symbol);
        }
        self.misses += 1;

        let offset = self.arena.len();
        let new_len = offset + bytes.len() + 1;
        if new_len as u64 > u64::from(u32::MAX) {
            return Err(SymbolError::Overflow {
                limit: u64::from(u32::MAX),
            });
        }

        self.grow_arena(bytes.len() + 1);
        self.arena.extend_from_slice(bytes);
        self.arena.push(0);

        if self.offsets.len() == self.offsets.capacity() {
            self.offsets.reserve_exact(INDEX_BLOCK);
        }
        let symbol = Symbol(offset as u32);
        self.offsets.push(symbol.0);
        self.buckets.entry(hash).or_default().push(symbol);

        tracing::trace!(offset, len = bytes.len(), "interned new entry");
        Ok(symbol)
    }

    /// Look up `bytes` without inserting
    pub fn get(&self, bytes: &[u8]) -> Option<Symbol> {
        self.find(Self::hash_bytes(bytes), bytes)
    }

    /// The bytes of an entry, without its terminator.
    ///
    /// Fails when `symbol` is not the start offset of an entry in this
    /// table (for instance a handle from another unit's table).
    pub fn resolve(&self, symbol: Symbol) -> SymbolResult<&[u8]> {
        match self.offsets.binary_search(&symbol.0) {
            Ok(index) => Ok(self.entry(index)),
            Err(_) => Err(SymbolError::NotFound { offset: symbol.0 }),
        }
    }

    /// The entry decoded as UTF-8, replacing invalid sequences
    pub fn resolve_lossy(&self, symbol: Symbol) -> SymbolResult<Cow<'_, str>> {
        self.resolve(symbol).map(String::from_utf8_lossy)
    }

    /// The entry including its `0` terminator, as laid out in the arena
    pub fn resolve_terminated(&self, symbol: Symbol) -> SymbolResult<&[u8]> {
        let bytes = self.resolve(symbol)?;
        let start = symbol.0 as usize;
        Ok(&self.arena[start..start + bytes.len() + 1])
    }

    /// Number of distinct entries
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true if nothing has been interned
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Bytes used in the arena, terminators included
    #[inline]
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[u8])> + '_ {
        (0..self.offsets.len()).map(move |index| (Symbol(self.offsets[index]), self.entry(index)))
    }

    /// Snapshot of size and hit/miss counters
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.offsets.len(),
            arena_bytes: self.arena.len(),
            arena_capacity: self.arena.capacity(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    fn find(&self, hash: u64, bytes: &[u8]) -> Option<Symbol> {
        let candidates = self.buckets.get(&hash)?;
        candidates.iter().copied().find(|candidate| {
            self.resolve(*candidate)
                .map(|existing| existing.len() == bytes.len() && existing == bytes)
                .unwrap_or(false)
        })
    }

    fn entry(&self, index: usize) -> &[u8] {
        let start = self.offsets[index] as usize;
        let terminator = match self.offsets.get(index + 1) {
            Some(next) => *next as usize - 1,
            None => self.arena.len() - 1,
        };
        &self.arena[start..terminator]
    }

    fn grow_arena(&mut self, additional: usize) {
        let needed = self.arena.len() + additional;
        let capacity = self.arena.capacity();
        if needed > capacity {
            let blocks = (needed - capacity).div_ceil(ARENA_BLOCK);
            let target = capacity + blocks * ARENA_BLOCK;
            self.arena.reserve_exact(target - self.arena.len());
        }
    }

    #[inline]
    fn hash_bytes(bytes: &[u8]) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write(bytes);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_same_string() {
        let mut table = StringTable::new();
        let s1 = table.intern(b"hello");
        let s2 = table.intern(b"hello");
        assert_eq!(s1, s2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_intern_different_strings() {
        let mut table = StringTable::new();
        let s1 = table.intern(b"hello");
        let s2 = table.intern(b"world");
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_first_entry_is_offset_zero() {
        let mut table = StringTable::new();
        assert_eq!(table.intern(b"fn"), Symbol(0));
        assert_eq!(table.intern(b"var"), Symbol(3));
    }

    #[test]
    fn test_equal_spans_from_different_buffers() {
        let source = b"main main";
        let mut table = StringTable::new();
        let a = table.intern(&source[0..4]);
        let b = table.intern(&source[5..9]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_is_distinct_entry() {
        let mut table = StringTable::new();
        let long = table.intern(b"abc");
        let short = table.intern(b"ab");
        assert_ne!(long, short);
        assert_eq!(table.resolve(short).unwrap(), b"ab");
    }

    #[test]
    fn test_entries_are_terminated() {
        let mut table = StringTable::new();
        let sym = table.intern(b"x1");
        assert_eq!(table.resolve_terminated(sym).unwrap(), b"x1\0");
        assert_eq!(table.arena_len(), 3);
    }

    #[test]
    fn test_empty_string() {
        let mut table = StringTable::new();
        let first = table.intern(b"a");
        let empty = table.intern(b"");
        assert_ne!(first, empty);
        assert_eq!(table.resolve(empty).unwrap(), b"");
        assert_eq!(table.intern(b""), empty);
    }

    #[test]
    fn test_interior_nul_byte() {
        let mut table = StringTable::new();
        let sym = table.intern(b"a\0b");
        let other = table.intern(b"a");
        assert_ne!(sym, other);
        assert_eq!(table.resolve(sym).unwrap(), b"a\0b");
    }

    #[test]
    fn test_resolve_unknown_offset() {
        let mut table = StringTable::new();
        table.intern(b"hello");
        assert_eq!(
            table.resolve(Symbol(2)),
            Err(SymbolError::NotFound { offset: 2 })
        );
        assert!(table.resolve(Symbol(600)).is_err());
    }

    #[test]
    fn test_get_does_not_insert() {
        let mut table = StringTable::new();
        assert_eq!(table.get(b"x"), None);
        assert!(table.is_empty());
        let sym = table.intern(b"x");
        assert_eq!(table.get(b"x"), Some(sym));
    }

    #[test]
    fn test_arena_grows_in_blocks() {
        let mut table = StringTable::new();
        table.intern(b"a");
        assert!(table.stats().arena_capacity >= ARENA_BLOCK);
        let big = vec![b'z'; ARENA_BLOCK + 10];
        let sym = table.intern(&big);
        assert_eq!(table.resolve(sym).unwrap(), &big[..]);
        assert!(table.stats().arena_capacity >= 2 * ARENA_BLOCK);
    }

    #[test]
    fn test_many_entries_resolve() {
        let mut table = StringTable::new();
        let symbols: Vec<_> = (0..1000)
            .map(|i| table.intern(format!("ident_{i}").as_bytes()))
            .collect();
        assert_eq!(table.len(), 1000);
        for (i, sym) in symbols.iter().enumerate() {
            assert_eq!(table.resolve_lossy(*sym).unwrap(), format!("ident_{i}"));
        }
    }

    #[test]
    fn test_iter_insertion_order() {
        let mut table = StringTable::new();
        table.intern(b"b");
        table.intern(b"a");
        table.intern(b"b");
        let entries: Vec<_> = table.iter().map(|(_, bytes)| bytes.to_vec()).collect();
        assert_eq!(entries, vec![b"b".to_vec(), b"a".to_vec()]);
    }

    #[test]
    fn test_stats_tracking() {
        let mut table = StringTable::new();
        table.intern(b"new");
        table.intern(b"new");
        table.intern(b"new");
        let stats = table.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.arena_bytes, 4);
    }

    #[test]
    fn test_lossy_resolution() {
        let mut table = StringTable::new();
        let sym = table.intern(&[b'a', 0xff]);
        assert_eq!(table.resolve_lossy(sym).unwrap(), "a\u{fffd}");
    }
}
