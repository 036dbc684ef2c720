//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs and carry their kind, terminal or nonterminal.

pub mod set;
pub mod source;

use std::num::NonZeroU32;

pub use self::set::SymbolBitSet;
pub use self::source::{SymbolName, SymbolSource};

/// Whether a symbol is a terminal or a nonterminal. A symbol's kind never changes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum SymbolKind {
    /// A symbol that appears in derived strings.
    Terminal,
    /// A variable, rewritten by the grammar's rules.
    Nonterminal,
}

/// A common grammar symbol type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
    kind: SymbolKind,
}

impl Symbol {
    pub(crate) fn from_index(index: usize, kind: SymbolKind) -> Self {
        let n = u32::try_from(index + 1)
            .ok()
            .and_then(NonZeroU32::new)
            .expect("ran out of Symbol space?");
        Symbol { n, kind }
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }

    /// Returns the symbol's kind.
    #[inline]
    pub fn kind(self) -> SymbolKind {
        self.kind
    }

    /// Checks whether the symbol is a terminal.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self.kind == SymbolKind::Terminal
    }

    /// Checks whether the symbol is a nonterminal.
    #[inline]
    pub fn is_nonterminal(self) -> bool {
        self.kind == SymbolKind::Nonterminal
    }
}
