//! Rewrites rules into the binary shape required by Chomsky Normal Form.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::fresh::FreshNames;
use crate::grammar::Grammar;
use crate::rule::CfgRule;
use crate::symbol::Symbol;

impl Grammar {
    /// Replaces every terminal that occurs in a rule with two or more symbols by a
    /// nonterminal that derives only that terminal. Each terminal gets a single proxy.
    pub fn lift_terminals(&mut self, fresh: &mut FreshNames) {
        let rules: Vec<CfgRule> = self.rules().cloned().collect();
        let mut proxies: BTreeMap<Symbol, Symbol> = BTreeMap::new();
        self.clear_rules();
        for rule in rules {
            if rule.rhs.len() < 2 || rule.rhs.iter().all(|sym| sym.is_nonterminal()) {
                self.add_rule(rule);
                continue;
            }
            let mut rhs = Vec::with_capacity(rule.rhs.len());
            for &sym in rule.rhs.iter() {
                if sym.is_nonterminal() {
                    rhs.push(sym);
                    continue;
                }
                let proxy = match proxies.get(&sym) {
                    Some(&proxy) => proxy,
                    None => {
                        let proxy = fresh.proxy(self);
                        trace!("proxy {} ::= {}", self.name_of(proxy), self.name_of(sym));
                        self.add_rule(CfgRule::new(proxy, [sym]));
                        proxies.insert(sym, proxy);
                        proxy
                    }
                };
                rhs.push(proxy);
            }
            self.add_rule(CfgRule::new(rule.lhs, rhs));
        }
        debug!("lifted {} terminals", proxies.len());
    }

    /// Splits every rule longer than two symbols. The first two symbols are repeatedly
    /// replaced by a fresh nonterminal that derives them. From `LHS ::= A B C D` to:
    ///
    /// ```ignore
    /// X1 ::= A B;
    /// X2 ::= X1 C;
    /// LHS ::= X2 D;
    /// ```
    ///
    /// Shorter rules are passed through unchanged.
    pub fn binarize(&mut self, fresh: &mut FreshNames) {
        let rules: Vec<CfgRule> = self.rules().cloned().collect();
        let mut num_split = 0;
        self.clear_rules();
        for rule in rules {
            if rule.rhs.len() <= 2 {
                self.add_rule(rule);
                continue;
            }
            num_split += 1;
            let mut rhs = rule.rhs.to_vec();
            while rhs.len() > 2 {
                let mut tail = rhs.split_off(2);
                let pair = fresh.aux(self);
                trace!(
                    "split {} ::= {} {}",
                    self.name_of(pair),
                    self.name_of(rhs[0]),
                    self.name_of(rhs[1])
                );
                self.add_rule(CfgRule::new(pair, &rhs));
                tail.insert(0, pair);
                rhs = tail;
            }
            self.add_rule(CfgRule::new(rule.lhs, rhs));
        }
        debug!("split {} long rules", num_split);
    }
}
