//! Allocation of named, kinded symbols.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::symbol::{Symbol, SymbolKind};

/// The name of a symbol.
pub type SymbolName = Rc<str>;

/// A source of numeric symbols. Each symbol is allocated together with a name and a kind,
/// and the source can resolve names back to symbols.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    names: Vec<SymbolName>,
    kinds: Vec<SymbolKind>,
    by_name: BTreeMap<SymbolName, Symbol>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new unique symbol with the given name and kind.
    ///
    /// The name must not be in use. Use [`fn find`] first to look up existing symbols.
    ///
    /// [`fn find`]: Self::find
    pub fn next_sym(&mut self, name: &str, kind: SymbolKind) -> Symbol {
        debug_assert!(
            !self.by_name.contains_key(name),
            "symbol name {:?} is already in use",
            name
        );
        let sym = Symbol::from_index(self.names.len(), kind);
        let name: SymbolName = name.into();
        self.names.push(name.clone());
        self.kinds.push(kind);
        self.by_name.insert(name, sym);
        sym
    }

    /// Looks up a symbol by name.
    pub fn find(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of the given symbol.
    ///
    /// # Panics
    ///
    /// Panics if the symbol was not generated by this source.
    pub fn name_of(&self, sym: Symbol) -> &str {
        &self.names[sym.usize()]
    }

    /// Returns the symbol with the given ID, if there is one.
    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        self.kinds
            .get(index)
            .map(|&kind| Symbol::from_index(index, kind))
    }

    /// Checks whether the symbol was generated by this source.
    pub fn owns(&self, sym: Symbol) -> bool {
        self.kinds.get(sym.usize()) == Some(&sym.kind())
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns an iterator over all generated symbols, in order of generation.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .map(|(index, &kind)| Symbol::from_index(index, kind))
    }
}
