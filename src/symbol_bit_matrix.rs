//! Relations between symbols, `R(A, B)`, stored as bit matrices.

use std::ops::{self, Deref, DerefMut};

use bit_matrix::BitMatrix;

use crate::grammar::Grammar;
use crate::rule::CfgRule;
use crate::symbol::{Symbol, SymbolSource};

/// A matrix that represents a relation `R(A, B)` between two symbols.
#[derive(Clone, Debug)]
pub struct SymbolBitMatrix {
    bit_matrix: BitMatrix,
}

/// A direct derivation matrix.
pub struct DirectDerivationMatrix(SymbolBitMatrix);
/// A reachability matrix.
pub struct ReachabilityMatrix(SymbolBitMatrix);
/// A unit derivation matrix.
pub struct UnitDerivationMatrix(SymbolBitMatrix);

impl SymbolBitMatrix {
    fn new(num_syms: usize) -> Self {
        SymbolBitMatrix {
            bit_matrix: BitMatrix::new(num_syms, num_syms),
        }
    }

    fn set(&mut self, row: Symbol, col: Symbol, included: bool) {
        self.bit_matrix.set(row.usize(), col.usize(), included);
    }

    /// Creates an iterator over symbols which appear in the given row.
    pub fn iter_row_syms<'a>(
        &'a self,
        row: Symbol,
        source: &'a SymbolSource,
    ) -> impl Iterator<Item = Symbol> + 'a {
        self.bit_matrix
            .iter_row(row.usize())
            .enumerate()
            .filter_map(move |(index, present)| {
                if present {
                    source.symbol_at(index)
                } else {
                    None
                }
            })
    }
}

impl Deref for SymbolBitMatrix {
    type Target = BitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.bit_matrix
    }
}

impl DerefMut for SymbolBitMatrix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bit_matrix
    }
}

impl Deref for DirectDerivationMatrix {
    type Target = SymbolBitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DirectDerivationMatrix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Deref for ReachabilityMatrix {
    type Target = SymbolBitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for UnitDerivationMatrix {
    type Target = SymbolBitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<(Symbol, Symbol)> for SymbolBitMatrix {
    type Output = bool;
    fn index(&self, index: (Symbol, Symbol)) -> &Self::Output {
        if self.bit_matrix[(index.0.usize(), index.1.usize())] {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl DirectDerivationMatrix {
    /// Returns the derivation matrix.
    pub fn reachability(mut self) -> ReachabilityMatrix {
        self.transitive_closure();
        ReachabilityMatrix(self.0)
    }
}

impl UnitDerivationMatrix {
    /// Iterates over nonterminals reachable from `lhs` through one or more unit rules,
    /// leaving out `lhs` itself even when it lies on a cycle.
    pub fn unit_reachable<'a>(
        &'a self,
        lhs: Symbol,
        source: &'a SymbolSource,
    ) -> impl Iterator<Item = Symbol> + 'a {
        self.iter_row_syms(lhs, source)
            .filter(move |&sym| sym != lhs)
    }
}

impl Grammar {
    /// Creates the empty matrix of size `|S|x|S|` where `S`: set of symbols.
    pub fn empty_matrix(&self) -> SymbolBitMatrix {
        SymbolBitMatrix::new(self.num_syms())
    }

    /// Computes the direct derivation matrix over rules accepted by the filter.
    pub fn direct_derivation_matrix_where(
        &self,
        mut filter: impl FnMut(&CfgRule) -> bool,
    ) -> DirectDerivationMatrix {
        let mut derivation = self.empty_matrix();

        for rule in self.rules().filter(|rule| filter(rule)) {
            for &sym in rule.rhs.iter() {
                derivation.set(rule.lhs, sym, true);
            }
        }

        DirectDerivationMatrix(derivation)
    }

    /// Computes the unit derivation matrix.
    ///
    /// A unit derivation is defined with a grammar rule such as:
    /// ```ignore
    /// A ::= B;
    /// ```
    pub fn unit_derivation_matrix(&self) -> UnitDerivationMatrix {
        let mut unit_derivation = self.empty_matrix();

        for rule in self.rules() {
            // A rule of form `A ::= A` derives nothing new. Leaving self-loops out keeps
            // them from being copied back during inlining.
            if rule.is_unit() && rule.lhs != rule.rhs[0] {
                unit_derivation.set(rule.lhs, rule.rhs[0], true);
            }
        }

        unit_derivation.transitive_closure();
        UnitDerivationMatrix(unit_derivation)
    }
}
