//! Library for normalizing context-free grammars. Grammars can be reduced to an equivalent
//! grammar without useless symbols, empty rules and unit rules, or converted further to
//! Chomsky Normal Form.
//!
//! ```
//! use cfg_normalize::{normalize_cnf, Grammar};
//!
//! let grammar = Grammar::from_parts(
//!     ["a", "b"],
//!     ["S"],
//!     "S",
//!     [("S", vec![vec!["a", "S", "b"], vec!["a", "b"]])],
//! )
//! .unwrap();
//! let cnf = normalize_cnf(&grammar).unwrap();
//! assert!(cnf.is_cnf());
//! ```

#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![warn(missing_docs, unused_qualifications)]
#![cfg_attr(test, allow(missing_docs))]

pub mod binarize;
pub mod error;
pub mod fresh;
mod grammar;
pub mod normalize;
pub mod nulling;
mod occurence_map;
pub mod rule;
pub mod symbol;
pub mod symbol_bit_matrix;
pub mod unit;
pub mod useful;

pub use crate::error::GrammarError;
pub use crate::fresh::FreshNames;
pub use crate::grammar::Grammar;
pub use crate::normalize::{normalize_cleanup, normalize_cnf, NormalizeOptions, Normalizer, Stage};
pub use crate::nulling::{DEFAULT_MAX_NULLABLE_POSITIONS, MAX_NULLABLE_POSITIONS};
pub use crate::rule::builder::RuleBuilder;
pub use crate::rule::CfgRule;
pub use crate::symbol::{Symbol, SymbolBitSet, SymbolKind, SymbolSource};
pub use crate::useful::{Usefulness, UselessRule};
