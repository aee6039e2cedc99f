//! Reserved-word handles.
//!
//! Every reserved word is interned once when a lexer is created. Scanning an
//! identifier then needs only a handle comparison to decide whether it is a
//! reserved word.

use crate::token::{TokenKind, KEYWORDS};
use indc_util::{StringTable, Symbol};

/// Interned handles for all reserved words of one string table.
#[derive(Clone, Debug)]
pub struct KeywordTable {
    entries: [(Symbol, TokenKind); KEYWORDS.len()],
}

impl KeywordTable {
    /// Intern every reserved word into `strings`.
    pub fn new(strings: &mut StringTable) -> Self {
        let entries = KEYWORDS.map(|(spelling, kind)| (strings.intern_str(spelling), kind));
        Self { entries }
    }

    /// The reserved word `symbol` names, if any.
    #[inline]
    pub fn lookup(&self, symbol: Symbol) -> Option<TokenKind> {
        self.entries
            .iter()
            .find(|(keyword, _)| *keyword == symbol)
            .map(|&(_, kind)| kind)
    }

    /// The cached handle for a reserved-word kind.
    pub fn symbol(&self, kind: TokenKind) -> Option<Symbol> {
        self.entries
            .iter()
            .find(|(_, keyword)| *keyword == kind)
            .map(|&(symbol, _)| symbol)
    }
}
