//! Analysis and removal of useless symbols.
//!
//! A nonterminal is useful when it is generating, that is, it derives some string of
//! terminals, and reachable from the start symbol through rules whose symbols are all
//! generating. Generating symbols are found first, over the whole grammar. Reachability
//! is computed second, over the generating part only.

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::rule::CfgRule;
use crate::symbol::{Symbol, SymbolBitSet};

/// Contains the information about usefulness of the grammar's rules.
pub struct Usefulness<'a> {
    grammar: &'a Grammar,
    generating: SymbolBitSet,
    reachable: SymbolBitSet,
}

/// A reference to a useless rule, together with the reason for its uselessness.
#[derive(Copy, Clone, Debug)]
pub struct UselessRule<'a> {
    /// Reference to a rule.
    pub rule: &'a CfgRule,
    /// Indicates whether the rule is unreachable.
    pub unreachable: bool,
    /// Indicates whether the rule mentions a non-generating symbol.
    pub non_generating: bool,
}

impl Grammar {
    /// Returns the set of generating symbols. Terminals are generating. A nonterminal is
    /// generating if one of its rules consists only of generating symbols, which includes
    /// the empty rule.
    pub fn generating_symbols(&self) -> SymbolBitSet {
        let mut generating = self.terminal_set().clone();
        generating.union(&self.nulling_symbols());
        // All symbols on the RHS must be generating for the LHS to be generating.
        self.rhs_closure_for_all(&mut generating);
        generating
    }

    /// Returns the set of nonterminals reachable from the start symbol. The start symbol
    /// reaches itself.
    pub fn reachable_symbols(&self) -> SymbolBitSet {
        self.reachable_where(|_| true)
    }

    fn reachable_where(&self, filter: impl FnMut(&CfgRule) -> bool) -> SymbolBitSet {
        let mut reachable = SymbolBitSet::new();
        if let Some(start) = self.start() {
            let reachability = self.direct_derivation_matrix_where(filter).reachability();
            reachable.set(start, true);
            for sym in reachability.iter_row_syms(start, self.sym_source()) {
                if sym.is_nonterminal() {
                    reachable.set(sym, true);
                }
            }
        }
        reachable
    }

    /// Analyzes usefulness of the grammar's rules.
    pub fn usefulness(&self) -> Usefulness<'_> {
        Usefulness::new(self)
    }

    /// Removes nonterminals that derive no terminal string, and every rule that mentions
    /// them. The start symbol stays a nonterminal even if it derives nothing.
    pub fn remove_non_generating(&mut self) {
        let generating = self.generating_symbols();
        let dead: Vec<Symbol> = self
            .nonterminals()
            .filter(|&sym| !generating[sym])
            .collect();
        for &sym in &dead {
            trace!("non-generating {}", self.name_of(sym));
            if Some(sym) != self.start() {
                self.remove_nonterminal(sym);
            }
        }
        self.retain(|rule| generating[rule.lhs] && rule.rhs.iter().all(|&sym| generating[sym]));
        debug!("removed {} non-generating symbols", dead.len());
    }

    /// Removes nonterminals that cannot be reached from the start symbol, together with
    /// their rules.
    pub fn remove_unreachable(&mut self) {
        let reachable = self.reachable_symbols();
        let dead: Vec<Symbol> = self
            .nonterminals()
            .filter(|&sym| !reachable[sym])
            .collect();
        for &sym in &dead {
            trace!("unreachable {}", self.name_of(sym));
            self.remove_nonterminal(sym);
        }
        debug!("removed {} unreachable symbols", dead.len());
    }

    /// Removes useless symbols and rules. Non-generating symbols go first, and
    /// reachability is computed over what remains. The language represented by the
    /// grammar doesn't change.
    pub fn remove_useless(&mut self) {
        self.remove_non_generating();
        self.remove_unreachable();
    }
}

impl<'a> Usefulness<'a> {
    /// Analyzes usefulness of the grammar's rules. In particular, it checks for generating
    /// and reachable symbols.
    pub fn new(grammar: &'a Grammar) -> Self {
        let generating = grammar.generating_symbols();
        let reachable = grammar.reachable_where(|rule| {
            generating[rule.lhs] && rule.rhs.iter().all(|&sym| generating[sym])
        });
        Usefulness {
            grammar,
            generating,
            reachable,
        }
    }

    /// Checks whether a symbol is generating. Can be used to determine the precise reason
    /// of a rule's uselessness.
    pub fn generating(&self, sym: Symbol) -> bool {
        self.generating[sym]
    }

    /// Checks whether a nonterminal is reachable from the start symbol.
    pub fn reachable(&self, sym: Symbol) -> bool {
        self.reachable[sym]
    }

    /// Checks whether a nonterminal is both generating and reachable.
    pub fn useful(&self, sym: Symbol) -> bool {
        self.generating[sym] && self.reachable[sym]
    }

    /// Classifies a single rule.
    pub fn rule_usefulness<'r>(&self, rule: &'r CfgRule) -> UselessRule<'r> {
        UselessRule {
            rule,
            unreachable: !self.reachable[rule.lhs],
            non_generating: !self.generating[rule.lhs]
                || rule.rhs.iter().any(|&sym| !self.generating[sym]),
        }
    }

    /// Returns an iterator over the grammar's useless rules.
    pub fn useless_rules(&self) -> impl Iterator<Item = UselessRule<'a>> + '_ {
        self.grammar
            .rules()
            .map(move |rule| self.rule_usefulness(rule))
            .filter(|useless| useless.unreachable || useless.non_generating)
    }

    /// Checks whether all nonterminals and rules in the grammar are useful.
    pub fn all_useful(&self) -> bool {
        self.grammar.nonterminals().all(|sym| self.useful(sym)) && self.useless_rules().next().is_none()
    }
}
