//! Errors reported before or during normalization.

use std::error::Error;
use std::fmt;

/// Represents a grammar that cannot be normalized.
///
/// All variants except `NullableExpansion` are detected before any rule is rewritten.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GrammarError {
    /// A rule mentions a symbol that is neither a live terminal nor a live nonterminal.
    UnknownSymbol {
        /// Left-hand side of the offending rule.
        lhs: String,
        /// The unknown symbol.
        name: String,
    },
    /// Rules are given for something that is not a nonterminal.
    NotANonterminal {
        /// The offending left-hand side.
        name: String,
    },
    /// A name is declared both as a terminal and as a nonterminal.
    KindConflict {
        /// The conflicting name.
        name: String,
    },
    /// The grammar has no start symbol.
    MissingStart,
    /// The start symbol is not one of the grammar's nonterminals.
    UndeclaredStart {
        /// The start symbol.
        name: String,
    },
    /// A rule has more nullable occurrences than the configured limit.
    NullableExpansion {
        /// Left-hand side of the offending rule.
        lhs: String,
        /// Number of nullable occurrences on the rule's right-hand side.
        positions: u32,
        /// The configured limit.
        limit: u32,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::UnknownSymbol { lhs, name } => {
                write!(f, "rule for {} mentions unknown symbol {}", lhs, name)
            }
            GrammarError::NotANonterminal { name } => {
                write!(f, "{} has rules but is not a nonterminal", name)
            }
            GrammarError::KindConflict { name } => {
                write!(f, "{} is declared both terminal and nonterminal", name)
            }
            GrammarError::MissingStart => write!(f, "grammar has no start symbol"),
            GrammarError::UndeclaredStart { name } => {
                write!(f, "start symbol {} is not a nonterminal", name)
            }
            GrammarError::NullableExpansion {
                lhs,
                positions,
                limit,
            } => {
                write!(
                    f,
                    "rule for {} has {} nullable occurrences, the limit is {}",
                    lhs, positions, limit
                )
            }
        }
    }
}

impl Error for GrammarError {}
