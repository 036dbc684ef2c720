//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single symbol on its left-hand side and an array of symbols
//! on its right-hand side. An empty right-hand side stands for an empty
//! alternative.

pub mod builder;

use std::rc::Rc;

use crate::symbol::Symbol;

/// Standard grammar rule representation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CfgRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Rc<[Symbol]>,
}

impl CfgRule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: impl AsRef<[Symbol]>) -> Self {
        CfgRule {
            lhs,
            rhs: rhs.as_ref().into(),
        }
    }

    /// Checks whether the rule has the form `A ::= ()`.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Checks whether the rule has the form `A ::= B`, where `B` is a nonterminal.
    pub fn is_unit(&self) -> bool {
        self.rhs.len() == 1 && self.rhs[0].is_nonterminal()
    }

    /// Checks whether the given symbol occurs on the right-hand side.
    pub fn mentions(&self, sym: Symbol) -> bool {
        self.rhs.contains(&sym)
    }
}
