//! Elimination of empty rules.
//!
//! Every rule is replaced by the variants obtained by keeping or dropping each nullable
//! occurrence on its right-hand side. A rule with `k` nullable occurrences yields up to
//! `2^k` variants, enumerated as bitmasks over those occurrences. Variants that become
//! empty are discarded, so no nonterminal keeps an empty rule.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::rule::CfgRule;
use crate::symbol::{Symbol, SymbolBitSet};

/// The largest number of nullable occurrences within one rule that can be expanded.
/// Variants are enumerated with `u64` masks.
pub const MAX_NULLABLE_POSITIONS: u32 = 63;

/// The default limit for nullable occurrences within one rule. A rule with `k` nullable
/// occurrences expands to up to `2^k` rules, so large `k` is only practical in theory.
pub const DEFAULT_MAX_NULLABLE_POSITIONS: u32 = MAX_NULLABLE_POSITIONS;

impl Grammar {
    /// Returns the set of nonterminals with an empty rule.
    pub fn nulling_symbols(&self) -> SymbolBitSet {
        let mut nulling = SymbolBitSet::new();
        for rule in self.rules() {
            if rule.is_empty() {
                nulling.set(rule.lhs, true);
            }
        }
        nulling
    }

    /// Returns the set of nullable nonterminals. A nonterminal is nullable if it has an
    /// empty rule, or a rule made only of nullable nonterminals.
    pub fn nullable_symbols(&self) -> SymbolBitSet {
        let mut nullable = self.nulling_symbols();
        // If all symbols on the RHS are nullable, the LHS is also nullable,
        // hence we use `rhs_closure_for_all`.
        self.rhs_closure_for_all(&mut nullable);
        nullable
    }

    /// Eliminates empty rules. Returns the set of nullable symbols, computed before
    /// elimination.
    ///
    /// The language represented by the grammar is preserved, except for the lack of
    /// the empty string if there was one.
    ///
    /// Fails without modifying the grammar if any rule has more than `max_positions`
    /// nullable occurrences.
    pub fn eliminate_empty(&mut self, max_positions: u32) -> Result<SymbolBitSet, GrammarError> {
        let max_positions = max_positions.min(MAX_NULLABLE_POSITIONS);
        let nullable = self.nullable_symbols();
        debug!("{} nullable symbols", nullable.count());

        for rule in self.rules() {
            let positions = rule.rhs.iter().filter(|&&sym| nullable[sym]).count() as u32;
            if positions > max_positions {
                return Err(GrammarError::NullableExpansion {
                    lhs: self.name_of(rule.lhs).into(),
                    positions,
                    limit: max_positions,
                });
            }
        }

        let mut seen = BTreeSet::new();
        let mut rewritten = Vec::with_capacity(self.rules().count());
        for rule in self.rules() {
            for rhs in expand_nullable(&rule.rhs, &nullable) {
                if rhs.is_empty() {
                    continue;
                }
                let variant = CfgRule::new(rule.lhs, rhs);
                if seen.insert(variant.clone()) {
                    rewritten.push(variant);
                }
            }
        }
        trace!("{} rules after empty rule elimination", rewritten.len());

        self.clear_rules();
        for rule in rewritten {
            self.add_rule(rule);
        }
        Ok(nullable)
    }
}

/// Enumerates the variants of a right-hand side. Bit `i` of the mask keeps the `i`-th
/// nullable occurrence. The full mask comes first, so the original rule leads.
fn expand_nullable<'a>(
    rhs: &'a [Symbol],
    nullable: &'a SymbolBitSet,
) -> impl Iterator<Item = Vec<Symbol>> + 'a {
    let positions = rhs.iter().filter(|&&sym| nullable[sym]).count();
    let num_variants = 1u64 << positions;
    (0..num_variants).rev().map(move |mask| {
        let mut nullable_idx = 0;
        let mut result = Vec::with_capacity(rhs.len());
        for &sym in rhs {
            if nullable[sym] {
                if mask & (1 << nullable_idx) != 0 {
                    result.push(sym);
                }
                nullable_idx += 1;
            } else {
                result.push(sym);
            }
        }
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_nullable_enumerates_all_variants() {
        let mut grammar = Grammar::new();
        let [a, b] = grammar.nonterminals_named(["A", "B"]);
        let x = grammar.terminal("x");
        let mut nullable = SymbolBitSet::new();
        nullable.set(a, true);
        nullable.set(b, true);

        let variants: Vec<_> = expand_nullable(&[a, x, b], &nullable).collect();
        assert_eq!(
            variants,
            vec![vec![a, x, b], vec![x, b], vec![a, x], vec![x]]
        );
    }

    #[test]
    fn test_expansion_limit_leaves_grammar_intact() {
        let mut grammar = Grammar::new();
        let [s, a] = grammar.nonterminals_named(["S", "A"]);
        grammar.set_start(s);
        grammar.rule(s).rhs([a, a, a]).rule(a).rhs([]);

        let result = grammar.eliminate_empty(2);
        assert_eq!(
            result.unwrap_err(),
            GrammarError::NullableExpansion {
                lhs: "S".into(),
                positions: 3,
                limit: 2
            }
        );
        assert_eq!(grammar.rules().count(), 2);
    }
}
