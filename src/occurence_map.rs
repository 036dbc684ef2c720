//! An index from symbols to the rules that mention them.
//!
//! The worklist closures look up the rules whose right-hand side holds a symbol that
//! just gained a property. Unit rule elimination looks up the rules of each nonterminal
//! it inlines.

use std::collections::BTreeMap;

use crate::rule::CfgRule;
use crate::symbol::Symbol;

type RuleIndex = usize;

/// Maps each symbol to the rules where it occurs.
pub struct OccurenceMap {
    occurences: BTreeMap<Symbol, Occurences>,
    empty_occurences: Occurences,
}

/// Two `Vec`s of rule indices.
#[derive(Clone, Default)]
pub struct Occurences {
    lhs: Vec<RuleIndex>,
    rhs: Vec<RuleIndex>,
}

impl OccurenceMap {
    pub fn from_rules<'a>(rules: impl Iterator<Item = &'a CfgRule>) -> Self {
        let mut occurences = BTreeMap::new();
        for (i, rule) in rules.enumerate() {
            occurences
                .entry(rule.lhs)
                .or_insert_with(Occurences::default)
                .lhs
                .push(i);
            let mut rhs_syms = rule.rhs.to_vec();
            rhs_syms.sort();
            rhs_syms.dedup();
            for rhs_sym in rhs_syms {
                occurences
                    .entry(rhs_sym)
                    .or_insert_with(Occurences::default)
                    .rhs
                    .push(i);
            }
        }
        OccurenceMap {
            occurences,
            empty_occurences: Occurences::default(),
        }
    }

    pub fn get(&self, sym: Symbol) -> &Occurences {
        self.occurences.get(&sym).unwrap_or(&self.empty_occurences)
    }
}

impl Occurences {
    pub fn lhs(&self) -> &[RuleIndex] {
        &self.lhs[..]
    }

    pub fn rhs(&self) -> &[RuleIndex] {
        &self.rhs[..]
    }
}
