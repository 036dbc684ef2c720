//! Grammar rules can be built with the builder pattern.

use crate::grammar::Grammar;
use crate::rule::CfgRule;
use crate::symbol::Symbol;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Option<Symbol>,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Grammar) -> Self {
        RuleBuilder { lhs: None, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.lhs = Some(lhs);
        self
    }

    /// Adds a rule alternative to the grammar.
    ///
    /// # Panics
    ///
    /// Panics if called before [`fn rule`].
    ///
    /// [`fn rule`]: Self::rule
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        let lhs = self.lhs.expect("rule builder: `rhs` called before `rule`");
        self.grammar.add_rule(CfgRule::new(lhs, syms));
        self
    }
}
