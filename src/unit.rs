//! Elimination of unit rules, which have the form `A ::= B`.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::occurence_map::OccurenceMap;
use crate::rule::CfgRule;

impl Grammar {
    /// Eliminates unit rules. Each nonterminal `A` keeps its own non-unit rules and
    /// receives the non-unit rules of every `B` it reaches through a chain of unit rules.
    /// Cycles such as `A ::= B; B ::= A;` are handled by the closure. Rules of the form
    /// `A ::= A` disappear.
    ///
    /// Empty rules are not unit rules and are kept.
    pub fn eliminate_unit(&mut self) {
        let unit_count = self.rules().filter(|rule| rule.is_unit()).count();
        if unit_count == 0 {
            return;
        }
        debug!("eliminating {} unit rules", unit_count);

        let unit_derivation = self.unit_derivation_matrix();
        let occurence_map = OccurenceMap::from_rules(self.rules());
        let rules = self.rule_slice();

        let mut seen = BTreeSet::new();
        let mut rewritten = vec![];
        for lhs in self.nonterminals() {
            let sources = Some(lhs)
                .into_iter()
                .chain(unit_derivation.unit_reachable(lhs, self.sym_source()));
            for source in sources {
                if source != lhs {
                    trace!("inline {} into {}", self.name_of(source), self.name_of(lhs));
                }
                for &rule_id in occurence_map.get(source).lhs() {
                    let rule = &rules[rule_id];
                    if rule.is_unit() {
                        continue;
                    }
                    let inlined = CfgRule::new(lhs, &rule.rhs[..]);
                    if seen.insert(inlined.clone()) {
                        rewritten.push(inlined);
                    }
                }
            }
        }

        self.clear_rules();
        for rule in rewritten {
            self.add_rule(rule);
        }
    }
}
