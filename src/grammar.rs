//! Definitions of the context-free grammar type.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt::Write;

use crate::error::GrammarError;
use crate::occurence_map::OccurenceMap;
use crate::rule::builder::RuleBuilder;
use crate::rule::CfgRule;
use crate::symbol::{Symbol, SymbolBitSet, SymbolKind, SymbolSource};

/// Context-free grammar type.
///
/// Holds disjoint sets of terminals and nonterminals, a start symbol and a list of rules.
/// Symbols are allocated by the grammar's symbol source and keep their kind for the
/// grammar's lifetime. Removing a nonterminal takes it out of the nonterminal set
/// without releasing its ID or its name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    /// Live terminals.
    terminals: SymbolBitSet,
    /// Live nonterminals.
    nonterminals: SymbolBitSet,
    /// The start symbol.
    start: Option<Symbol>,
    /// The array of rules.
    rules: Vec<CfgRule>,
    #[cfg_attr(feature = "serde", serde(skip))]
    tmp_stack: RefCell<Vec<Symbol>>,
}

impl Grammar {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grammar from symbol names.
    ///
    /// Every name on a right-hand side must be declared as a terminal or a nonterminal,
    /// every left-hand side must be a nonterminal and so must `start`.
    ///
    /// ```
    /// use cfg_normalize::Grammar;
    ///
    /// let grammar = Grammar::from_parts(
    ///     ["a", "b"],
    ///     ["S", "A"],
    ///     "S",
    ///     [("S", vec![vec!["A", "b"]]), ("A", vec![vec!["a"], vec![]])],
    /// )
    /// .unwrap();
    /// assert_eq!(grammar.rules().count(), 3);
    /// ```
    pub fn from_parts<'a, T, N, P, R, Rhs>(
        terminals: T,
        nonterminals: N,
        start: &str,
        productions: P,
    ) -> Result<Self, GrammarError>
    where
        T: IntoIterator<Item = &'a str>,
        N: IntoIterator<Item = &'a str>,
        P: IntoIterator<Item = (&'a str, R)>,
        R: IntoIterator<Item = Rhs>,
        Rhs: AsRef<[&'a str]>,
    {
        let mut grammar = Grammar::new();
        for name in terminals {
            grammar.try_symbol(name, SymbolKind::Terminal)?;
        }
        for name in nonterminals {
            grammar.try_symbol(name, SymbolKind::Nonterminal)?;
        }
        match grammar.find(start) {
            Some(sym) if sym.is_nonterminal() => grammar.set_start(sym),
            _ => {
                return Err(GrammarError::UndeclaredStart { name: start.into() });
            }
        }
        for (lhs_name, alternatives) in productions {
            let lhs = match grammar.find(lhs_name) {
                Some(sym) if sym.is_nonterminal() => sym,
                _ => {
                    return Err(GrammarError::NotANonterminal {
                        name: lhs_name.into(),
                    });
                }
            };
            for alternative in alternatives {
                let rhs = alternative
                    .as_ref()
                    .iter()
                    .map(|&name| {
                        grammar.find(name).ok_or_else(|| GrammarError::UnknownSymbol {
                            lhs: lhs_name.into(),
                            name: name.into(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                grammar.add_rule(CfgRule::new(lhs, rhs));
            }
        }
        Ok(grammar)
    }

    /// Returns the symbol with the given name and kind, generating it if there is none.
    ///
    /// Fails if the name is taken by a symbol of the other kind.
    pub fn try_symbol(&mut self, name: &str, kind: SymbolKind) -> Result<Symbol, GrammarError> {
        let sym = match self.sym_source.find(name) {
            Some(sym) if sym.kind() == kind => sym,
            Some(_) => return Err(GrammarError::KindConflict { name: name.into() }),
            None => self.sym_source.next_sym(name, kind),
        };
        match kind {
            SymbolKind::Terminal => self.terminals.set(sym, true),
            SymbolKind::Nonterminal => self.nonterminals.set(sym, true),
        }
        Ok(sym)
    }

    /// Adds a terminal. Adding a terminal that already exists returns the existing symbol.
    /// Meant for grammars built in code. Use [`fn try_symbol`] for names that may clash.
    ///
    /// # Panics
    ///
    /// Panics if the name belongs to a nonterminal.
    ///
    /// [`fn try_symbol`]: Self::try_symbol
    pub fn terminal(&mut self, name: &str) -> Symbol {
        self.try_symbol(name, SymbolKind::Terminal)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Adds a nonterminal. Adding a nonterminal that already exists returns the existing
    /// symbol. Meant for grammars built in code. Use [`fn try_symbol`] for names that may
    /// clash.
    ///
    /// # Panics
    ///
    /// Panics if the name belongs to a terminal.
    ///
    /// [`fn try_symbol`]: Self::try_symbol
    pub fn nonterminal(&mut self, name: &str) -> Symbol {
        self.try_symbol(name, SymbolKind::Nonterminal)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Adds several nonterminals at once.
    pub fn nonterminals_named<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.nonterminal(name))
    }

    /// Adds several terminals at once.
    pub fn terminals_named<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.terminal(name))
    }

    /// Looks up a symbol by name. Removed nonterminals can still be found.
    pub fn find(&self, name: &str) -> Option<Symbol> {
        self.sym_source.find(name)
    }

    /// Returns the name of the given symbol.
    pub fn name_of(&self, sym: Symbol) -> &str {
        self.sym_source.name_of(sym)
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the start symbol, if one was assigned.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the set of terminals.
    pub fn terminal_set(&self) -> &SymbolBitSet {
        &self.terminals
    }

    /// Returns the set of nonterminals.
    pub fn nonterminal_set(&self) -> &SymbolBitSet {
        &self.nonterminals
    }

    /// Returns an iterator over terminals.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminals.iter(&self.sym_source)
    }

    /// Returns an iterator over nonterminals.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.nonterminals.iter(&self.sym_source)
    }

    /// Checks whether the symbol belongs to this grammar's terminals or nonterminals.
    pub fn is_live(&self, sym: Symbol) -> bool {
        self.sym_source.owns(sym)
            && match sym.kind() {
                SymbolKind::Terminal => self.terminals[sym],
                SymbolKind::Nonterminal => self.nonterminals[sym],
            }
    }

    /// Returns an iterator over the list of grammar rules.
    pub fn rules(&self) -> impl Iterator<Item = &CfgRule> {
        self.rules.iter()
    }

    pub(crate) fn rule_slice(&self) -> &[CfgRule] {
        &self.rules[..]
    }

    /// Returns an iterator over the rules of the given nonterminal.
    pub fn productions(&self, lhs: Symbol) -> impl Iterator<Item = &CfgRule> {
        self.rules.iter().filter(move |rule| rule.lhs == lhs)
    }

    /// Adds a rule to this grammar.
    pub fn add_rule(&mut self, rule: CfgRule) {
        self.rules.push(rule);
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Replaces all rules of the given nonterminal.
    pub fn replace_productions<I, S>(&mut self, lhs: Symbol, alternatives: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[Symbol]>,
    {
        self.rules.retain(|rule| rule.lhs != lhs);
        self.rules.extend(
            alternatives
                .into_iter()
                .map(|rhs| CfgRule::new(lhs, rhs)),
        );
    }

    /// Removes a nonterminal and its rules. Rules that mention it on their
    /// right-hand side are kept.
    pub fn remove_nonterminal(&mut self, sym: Symbol) {
        self.nonterminals.set(sym, false);
        self.rules.retain(|rule| rule.lhs != sym);
    }

    /// Retains only the rules specified by the predicate.
    ///
    /// In other words, removes all the rules for which `f(&rule)`
    /// returns false.
    pub fn retain(&mut self, f: impl FnMut(&CfgRule) -> bool) {
        self.rules.retain(f);
    }

    /// Empties the grammar's rule list.
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Sorts the rule array.
    pub fn sort(&mut self) {
        self.rules.sort();
    }

    /// Removes duplicate rules, keeping the first occurence of each.
    pub fn dedup(&mut self) {
        let mut seen = BTreeSet::new();
        self.rules.retain(|rule| seen.insert(rule.clone()));
    }

    /// Checks the grammar's invariants: the start symbol is a live nonterminal, every LHS
    /// is a live nonterminal, and every RHS symbol is live.
    pub fn validate(&self) -> Result<(), GrammarError> {
        let start = self.start.ok_or(GrammarError::MissingStart)?;
        if !start.is_nonterminal() || !self.is_live(start) {
            return Err(GrammarError::UndeclaredStart {
                name: self.display_name(start),
            });
        }
        for rule in self.rules() {
            if !rule.lhs.is_nonterminal() || !self.is_live(rule.lhs) {
                return Err(GrammarError::NotANonterminal {
                    name: self.display_name(rule.lhs),
                });
            }
            if let Some(&sym) = rule.rhs.iter().find(|&&sym| !self.is_live(sym)) {
                return Err(GrammarError::UnknownSymbol {
                    lhs: self.display_name(rule.lhs),
                    name: self.display_name(sym),
                });
            }
        }
        Ok(())
    }

    fn display_name(&self, sym: Symbol) -> String {
        if self.sym_source.owns(sym) {
            self.name_of(sym).to_string()
        } else {
            format!("#{}", sym.usize())
        }
    }

    /// If **all** symbols on the RHS have the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    ///
    /// Every symbol enters the work stack at most once, when it gains the property,
    /// so the closure takes at most one step per symbol.
    pub fn rhs_closure_for_all(&self, property: &mut SymbolBitSet) {
        let mut tmp_stack = self.tmp_stack.borrow_mut();
        tmp_stack.extend(property.iter(&self.sym_source));

        let occurence_map = OccurenceMap::from_rules(self.rules());

        while let Some(work_sym) = tmp_stack.pop() {
            for &rule_id in occurence_map.get(work_sym).rhs() {
                let rule = &self.rules[rule_id];
                if !property[rule.lhs] && rule.rhs.iter().all(|&sym| property[sym]) {
                    property.set(rule.lhs, true);
                    tmp_stack.push(rule.lhs);
                }
            }
        }

        tmp_stack.clear();
    }

    /// Checks whether the grammar is in Chomsky Normal Form. Every rule must have
    /// the form `A ::= a` or `A ::= B C`. The rule `start ::= ()` is allowed only
    /// when the start symbol never occurs on a right-hand side.
    pub fn is_cnf(&self) -> bool {
        let start_on_rhs = match self.start {
            Some(start) => self.rules().any(|rule| rule.mentions(start)),
            None => true,
        };
        self.rules().all(|rule| match &rule.rhs[..] {
            [] => Some(rule.lhs) == self.start && !start_on_rhs,
            [single] => single.is_terminal(),
            [left, right] => left.is_nonterminal() && right.is_nonterminal(),
            _ => false,
        })
    }

    /// Formats the grammar to a `String`, one line per nonterminal with its alternatives
    /// separated by `|`. The start symbol comes first. The output looks like this:
    ///
    /// ```ignore
    /// S ::= A B | ();
    /// A ::= a;
    /// ```
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        let lhs_order = self
            .start
            .into_iter()
            .chain(self.nonterminals().filter(|&sym| Some(sym) != self.start));
        for lhs in lhs_order {
            let alternatives = self
                .productions(lhs)
                .map(|rule| {
                    if rule.rhs.is_empty() {
                        "()".to_string()
                    } else {
                        rule.rhs
                            .iter()
                            .map(|&sym| self.name_of(sym))
                            .collect::<Vec<_>>()
                            .join(" ")
                    }
                })
                .collect::<Vec<_>>();
            if alternatives.is_empty() {
                continue;
            }
            writeln!(
                &mut result,
                "{} ::= {};",
                self.name_of(lhs),
                alternatives.join(" | ")
            )
            .expect("writing to String failed");
        }
        result
    }
}
