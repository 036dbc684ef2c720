//! Normalization pipelines.
//!
//! Two pipelines are provided. Cleanup removes useless symbols, empty rules and unit
//! rules. CNF additionally wraps the start symbol beforehand and binarizes afterwards.
//! Both eliminate empty rules before unit rules.

use std::fmt;

use log::debug;

use crate::error::GrammarError;
use crate::fresh::FreshNames;
use crate::grammar::Grammar;
use crate::nulling::DEFAULT_MAX_NULLABLE_POSITIONS;
use crate::rule::CfgRule;
use crate::symbol::Symbol;

/// A single step of a normalization pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Adds `S0 ::= S` and makes `S0` the start symbol.
    WrapStart,
    /// Removes non-generating and unreachable symbols.
    RemoveUseless,
    /// Eliminates empty rules.
    RemoveEmpty,
    /// Eliminates unit rules.
    RemoveUnit,
    /// Removes symbols left useless by the previous stages.
    Reduce,
    /// Lifts terminals out of long rules and splits rules longer than two symbols.
    Binarize,
}

const CLEANUP_STAGES: &[Stage] = &[
    Stage::RemoveUseless,
    Stage::RemoveEmpty,
    Stage::RemoveUnit,
    Stage::Reduce,
];

const CNF_STAGES: &[Stage] = &[
    Stage::WrapStart,
    Stage::RemoveUseless,
    Stage::RemoveEmpty,
    Stage::RemoveUnit,
    Stage::Reduce,
    Stage::Binarize,
];

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Stage::WrapStart => "wrap start",
            Stage::RemoveUseless => "remove useless",
            Stage::RemoveEmpty => "remove empty",
            Stage::RemoveUnit => "remove unit",
            Stage::Reduce => "reduce",
            Stage::Binarize => "binarize",
        };
        f.write_str(name)
    }
}

/// Options for a normalization run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NormalizeOptions {
    /// Keep `start ::= ()` if the start symbol is nullable. Off by default, in which case
    /// the empty string is dropped from the language.
    pub keep_empty_start: bool,
    /// Remove useless symbols once more after unit rule elimination. On by default.
    pub reduce_after_unit: bool,
    /// The largest number of nullable occurrences allowed within one rule.
    pub max_nullable_positions: u32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            keep_empty_start: false,
            reduce_after_unit: true,
            max_nullable_positions: DEFAULT_MAX_NULLABLE_POSITIONS,
        }
    }
}

impl NormalizeOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `start ::= ()` is kept.
    pub fn keep_empty_start(mut self, keep: bool) -> Self {
        self.keep_empty_start = keep;
        self
    }

    /// Sets whether useless symbols are removed after unit rule elimination.
    pub fn reduce_after_unit(mut self, reduce: bool) -> Self {
        self.reduce_after_unit = reduce;
        self
    }

    /// Sets the limit of nullable occurrences within one rule.
    pub fn max_nullable_positions(mut self, limit: u32) -> Self {
        self.max_nullable_positions = limit;
        self
    }
}

/// Runs normalization pipelines with the given options.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

/// State of one run.
struct Run {
    grammar: Grammar,
    fresh: FreshNames,
}

impl Normalizer {
    /// Creates a normalizer.
    pub fn new(options: NormalizeOptions) -> Self {
        Normalizer { options }
    }

    /// Removes useless symbols, empty rules and unit rules.
    ///
    /// The given grammar is validated first and left untouched.
    pub fn cleanup(&self, grammar: &Grammar) -> Result<Grammar, GrammarError> {
        self.run(grammar, CLEANUP_STAGES)
    }

    /// Converts to Chomsky Normal Form.
    ///
    /// The given grammar is validated first and left untouched.
    pub fn cnf(&self, grammar: &Grammar) -> Result<Grammar, GrammarError> {
        self.run(grammar, CNF_STAGES)
    }

    fn run(&self, grammar: &Grammar, stages: &[Stage]) -> Result<Grammar, GrammarError> {
        grammar.validate()?;
        let mut run = Run {
            grammar: grammar.clone(),
            fresh: FreshNames::new(),
        };
        for &stage in stages {
            debug!(
                "stage {}: {} rules before",
                stage,
                run.grammar.rules().count()
            );
            self.stage(&mut run, stage)?;
        }
        debug!("normalized: {} rules", run.grammar.rules().count());
        Ok(run.grammar)
    }

    fn stage(&self, run: &mut Run, stage: Stage) -> Result<(), GrammarError> {
        match stage {
            Stage::WrapStart => {
                run.grammar.wrap_start(&mut run.fresh);
            }
            Stage::RemoveUseless => {
                run.grammar.remove_useless();
            }
            Stage::RemoveEmpty => {
                let nullable = run
                    .grammar
                    .eliminate_empty(self.options.max_nullable_positions)?;
                let start_nullable = run.grammar.start().is_some_and(|start| nullable[start]);
                if self.options.keep_empty_start && start_nullable {
                    run.grammar.restore_empty_start(&mut run.fresh);
                }
            }
            Stage::RemoveUnit => {
                run.grammar.eliminate_unit();
            }
            Stage::Reduce => {
                if self.options.reduce_after_unit {
                    run.grammar.remove_useless();
                }
            }
            Stage::Binarize => {
                run.grammar.lift_terminals(&mut run.fresh);
                run.grammar.binarize(&mut run.fresh);
            }
        }
        Ok(())
    }
}

impl Grammar {
    /// Adds a fresh start symbol `S0` with the single rule `S0 ::= S`, where `S` is the
    /// current start symbol. Afterwards, the start symbol never occurs on a right-hand
    /// side. Returns the new start symbol.
    ///
    /// # Panics
    ///
    /// Panics if the grammar has no start symbol.
    pub fn wrap_start(&mut self, fresh: &mut FreshNames) -> Symbol {
        let start = self.start().expect("wrap_start: grammar has no start symbol");
        let base = self.name_of(start).to_string();
        let new_start = fresh.start(self, &base);
        self.add_rule(CfgRule::new(new_start, [start]));
        self.set_start(new_start);
        new_start
    }

    /// Adds `start ::= ()`, wrapping the start symbol first if it occurs on a right-hand
    /// side.
    fn restore_empty_start(&mut self, fresh: &mut FreshNames) {
        let Some(mut start) = self.start() else {
            return;
        };
        if self.rules().any(|rule| rule.mentions(start)) {
            start = self.wrap_start(fresh);
        }
        debug!("keeping the empty rule for {}", self.name_of(start));
        self.add_rule(CfgRule::new(start, []));
    }
}

/// Removes useless symbols, empty rules and unit rules with default options.
///
/// ```
/// use cfg_normalize::{normalize_cleanup, Grammar};
///
/// let grammar = Grammar::from_parts(
///     ["a"],
///     ["S", "A", "C"],
///     "S",
///     [("S", vec![vec!["A"]]), ("A", vec![vec!["a"]]), ("C", vec![vec!["a", "a"]])],
/// )
/// .unwrap();
/// let cleaned = normalize_cleanup(&grammar).unwrap();
/// assert_eq!(cleaned.stringify_to_bnf(), "S ::= a;\n");
/// ```
pub fn normalize_cleanup(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    Normalizer::default().cleanup(grammar)
}

/// Converts to Chomsky Normal Form with default options.
pub fn normalize_cnf(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    Normalizer::default().cnf(grammar)
}
