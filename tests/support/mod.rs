#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use cfg_normalize::*;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rule_to_string(grammar: &Grammar, rule: &CfgRule) -> String {
    let rhs = if rule.rhs.is_empty() {
        "()".to_string()
    } else {
        rule.rhs
            .iter()
            .map(|&sym| grammar.name_of(sym))
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!("{} ::= {}", grammar.name_of(rule.lhs), rhs)
}

/// Compares rules by symbol names, ignoring their order.
pub fn assert_rules(grammar: &Grammar, expected: &[&str]) {
    let mut actual: Vec<String> = grammar
        .rules()
        .map(|rule| rule_to_string(grammar, rule))
        .collect();
    actual.sort();
    let mut expected: Vec<String> = expected.iter().map(|rule| rule.to_string()).collect();
    expected.sort();
    assert!(
        actual == expected,
        "rules differ\nexpected:\n{}\nactual:\n{}\nbnf:\n{}",
        expected.join("\n"),
        actual.join("\n"),
        grammar.stringify_to_bnf()
    );
}

/// Checks that no rule mentions a symbol outside of the grammar.
pub fn assert_closed(grammar: &Grammar) {
    assert_eq!(grammar.validate(), Ok(()), "{}", grammar.stringify_to_bnf());
}

/// Enumerates the strings of terminal names of length up to `max_len` that the start
/// symbol derives.
pub fn language(grammar: &Grammar, max_len: usize) -> BTreeSet<Vec<String>> {
    let mut derived: BTreeMap<Symbol, BTreeSet<Vec<Symbol>>> = BTreeMap::new();
    let mut changed = true;
    while changed {
        changed = false;
        for rule in grammar.rules() {
            let mut partial: BTreeSet<Vec<Symbol>> = BTreeSet::new();
            partial.insert(vec![]);
            for &sym in rule.rhs.iter() {
                let mut next = BTreeSet::new();
                for prefix in &partial {
                    if sym.is_terminal() {
                        if prefix.len() < max_len {
                            let mut string = prefix.clone();
                            string.push(sym);
                            next.insert(string);
                        }
                    } else if let Some(suffixes) = derived.get(&sym) {
                        for suffix in suffixes {
                            if prefix.len() + suffix.len() <= max_len {
                                let mut string = prefix.clone();
                                string.extend(suffix.iter().cloned());
                                next.insert(string);
                            }
                        }
                    }
                }
                partial = next;
            }
            let strings = derived.entry(rule.lhs).or_default();
            for string in partial {
                changed |= strings.insert(string);
            }
        }
    }
    let start = grammar.start().expect("grammar has no start symbol");
    derived
        .remove(&start)
        .unwrap_or_default()
        .into_iter()
        .map(|string| {
            string
                .into_iter()
                .map(|sym| grammar.name_of(sym).to_string())
                .collect()
        })
        .collect()
}

/// Checks that every nonterminal with rules is generating and reachable.
pub fn assert_reduced(grammar: &Grammar) {
    let usefulness = grammar.usefulness();
    let useless: Vec<String> = usefulness
        .useless_rules()
        .map(|useless| rule_to_string(grammar, useless.rule))
        .collect();
    assert!(
        useless.is_empty(),
        "useless rules: {:?}\n{}",
        useless,
        grammar.stringify_to_bnf()
    );
}

pub fn assert_no_empty_or_unit(grammar: &Grammar) {
    for rule in grammar.rules() {
        assert!(
            !rule.is_unit() && !rule.is_empty(),
            "unexpected rule {}",
            rule_to_string(grammar, rule)
        );
    }
}
