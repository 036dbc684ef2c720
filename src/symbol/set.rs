//! Sets of symbols in the form of bit vectors.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::symbol::{Symbol, SymbolSource};

/// A set of symbols in the form of a bit vector.
///
/// The set grows on insertion. Symbols beyond its length are absent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
    source: &'a SymbolSource,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` that spans all symbols of the given source.
    pub fn from_elem(source: &SymbolSource, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(source.num_syms(), elem),
        }
    }

    /// Inserts or removes a symbol.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        let index = sym.usize();
        if index >= self.bit_vec.len() {
            if !elem {
                return;
            }
            self.bit_vec.grow(index + 1 - self.bit_vec.len(), false);
        }
        self.bit_vec.set(index, elem);
    }

    /// Checks whether the symbol is in the set.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Adds all symbols of the other set to this set.
    pub fn union(&mut self, other: &SymbolBitSet) {
        if other.bit_vec.len() > self.bit_vec.len() {
            self.bit_vec
                .grow(other.bit_vec.len() - self.bit_vec.len(), false);
        }
        for (index, present) in other.bit_vec.iter().enumerate() {
            if present {
                self.bit_vec.set(index, true);
            }
        }
    }

    /// Keeps only the symbols present in both sets.
    pub fn intersect(&mut self, other: &SymbolBitSet) {
        for index in 0..self.bit_vec.len() {
            if !other.bit_vec.get(index).unwrap_or(false) {
                self.bit_vec.set(index, false);
            }
        }
    }

    /// Returns the number of symbols in the set.
    pub fn count(&self) -> usize {
        self.bit_vec.iter().filter(|&present| present).count()
    }

    /// Checks whether the set holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

    /// Iterates over symbols in the set. The source restores each symbol's kind.
    pub fn iter<'a>(&'a self, source: &'a SymbolSource) -> Iter<'a> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
            source,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return self.source.symbol_at(id);
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.contains(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
