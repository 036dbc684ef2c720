//! Names for nonterminals introduced during normalization.

use log::trace;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// Counters for fresh nonterminal names. One instance lives for the duration of a single
/// normalization run and is never reset within it.
///
/// Generated names skip every name already known to the grammar, including the names of
/// removed nonterminals and names generated earlier in the same run.
#[derive(Clone, Copy, Debug)]
pub struct FreshNames {
    next_start: u32,
    next_aux: u32,
    next_proxy: u32,
}

impl Default for FreshNames {
    fn default() -> Self {
        Self::new()
    }
}

impl FreshNames {
    /// Creates a set of counters for a new run.
    pub fn new() -> Self {
        FreshNames {
            next_start: 0,
            next_aux: 1,
            next_proxy: 1,
        }
    }

    /// Generates a new start symbol named after the current one: `S0` for `S`, then
    /// `S1`, and so on.
    pub fn start(&mut self, grammar: &mut Grammar, base: &str) -> Symbol {
        Self::generate(grammar, base, &mut self.next_start)
    }

    /// Generates a nonterminal for a split of a long rule: `X1`, `X2`, and so on.
    pub fn aux(&mut self, grammar: &mut Grammar) -> Symbol {
        Self::generate(grammar, "X", &mut self.next_aux)
    }

    /// Generates a nonterminal that stands for a single terminal: `T1`, `T2`, and so on.
    pub fn proxy(&mut self, grammar: &mut Grammar) -> Symbol {
        Self::generate(grammar, "T", &mut self.next_proxy)
    }

    fn generate(grammar: &mut Grammar, prefix: &str, counter: &mut u32) -> Symbol {
        let name = loop {
            let candidate = format!("{}{}", prefix, *counter);
            *counter += 1;
            if grammar.find(&candidate).is_none() {
                break candidate;
            }
        };
        let num_syms = grammar.num_syms();
        let sym = grammar.nonterminal(&name);
        debug_assert_eq!(
            grammar.num_syms(),
            num_syms + 1,
            "fresh name {} collides with an existing symbol",
            name
        );
        trace!("fresh nonterminal {}", name);
        sym
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_names_skip_existing() {
        let mut grammar = Grammar::new();
        grammar.nonterminals_named(["S", "S0", "X1", "X3"]);
        grammar.terminal("T1");
        let mut fresh = FreshNames::new();

        let start = fresh.start(&mut grammar, "S");
        assert_eq!(grammar.name_of(start), "S1");
        let x2 = fresh.aux(&mut grammar);
        let x4 = fresh.aux(&mut grammar);
        assert_eq!(grammar.name_of(x2), "X2");
        assert_eq!(grammar.name_of(x4), "X4");
        let proxy = fresh.proxy(&mut grammar);
        assert_eq!(grammar.name_of(proxy), "T2");
        assert!(proxy.is_nonterminal());
    }

    #[test]
    fn test_removed_names_are_not_reused() {
        let mut grammar = Grammar::new();
        let mut fresh = FreshNames::new();
        let x1 = fresh.aux(&mut grammar);
        grammar.remove_nonterminal(x1);
        let x2 = FreshNames::new().aux(&mut grammar);
        assert_eq!(grammar.name_of(x2), "X2");
        let x3 = fresh.aux(&mut grammar);
        assert_eq!(grammar.name_of(x3), "X3");
    }
}
