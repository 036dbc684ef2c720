mod support;

use cfg_normalize::*;

#[test]
fn test_unreferenced_nonterminal_is_removed() {
    support::init_logging();
    let mut grammar = Grammar::from_parts(
        ["a", "b"],
        ["S", "A", "C"],
        "S",
        [
            ("S", vec![vec!["A", "b"]]),
            ("A", vec![vec!["a"]]),
            ("C", vec![vec!["a", "b"]]),
        ],
    )
    .unwrap();
    let c = grammar.find("C").unwrap();
    assert!(!grammar.usefulness().reachable(c));

    grammar.remove_useless();

    support::assert_rules(&grammar, &["S ::= A b", "A ::= a"]);
    assert!(!grammar.nonterminal_set()[c]);
    assert!(grammar.usefulness().all_useful());
}

#[test]
fn test_non_generating_symbols_are_removed() {
    support::init_logging();
    let mut grammar = Grammar::from_parts(
        ["a"],
        ["S", "A", "B"],
        "S",
        [
            ("S", vec![vec!["A"], vec!["B", "a"]]),
            ("A", vec![vec!["a", "A"], vec!["a"]]),
            ("B", vec![vec!["B", "a"]]),
        ],
    )
    .unwrap();
    let b = grammar.find("B").unwrap();
    let generating = grammar.generating_symbols();
    assert!(!generating[b]);
    {
        let usefulness = grammar.usefulness();
        let useless: Vec<_> = usefulness.useless_rules().collect();
        assert_eq!(useless.len(), 2);
        assert!(useless.iter().all(|rule| rule.non_generating));
    }

    grammar.remove_useless();

    support::assert_rules(&grammar, &["S ::= A", "A ::= a A", "A ::= a"]);
    assert!(!grammar.nonterminal_set()[b]);
}

#[test]
fn test_symbols_reachable_only_through_dead_rules_are_removed() {
    support::init_logging();
    let mut grammar = Grammar::from_parts(
        ["a", "b"],
        ["S", "D", "E"],
        "S",
        [
            ("S", vec![vec!["a"], vec!["D", "E"]]),
            ("D", vec![vec!["D"]]),
            ("E", vec![vec!["b"]]),
        ],
    )
    .unwrap();
    let e = grammar.find("E").unwrap();
    // E is generating, but only S ::= D E reaches it, and D derives nothing.
    assert!(grammar.reachable_symbols()[e]);
    assert!(!grammar.usefulness().reachable(e));

    grammar.remove_useless();

    support::assert_rules(&grammar, &["S ::= a"]);
    assert_eq!(grammar.nonterminals().count(), 1);
}

#[test]
fn test_non_generating_start_keeps_its_symbol() {
    support::init_logging();
    let mut grammar = Grammar::from_parts(
        ["a"],
        ["S", "A"],
        "S",
        [("S", vec![vec!["A"]]), ("A", vec![vec!["a", "A"]])],
    )
    .unwrap();
    let start = grammar.start().unwrap();

    grammar.remove_useless();

    assert_eq!(grammar.rules().count(), 0);
    assert_eq!(grammar.start(), Some(start));
    assert!(grammar.nonterminal_set()[start]);
    assert_eq!(grammar.validate(), Ok(()));
}

#[test]
fn test_terminals_are_kept() {
    support::init_logging();
    let mut grammar = Grammar::from_parts(
        ["a", "unused"],
        ["S"],
        "S",
        [("S", vec![vec!["a"]])],
    )
    .unwrap();
    grammar.remove_useless();
    assert_eq!(grammar.terminals().count(), 2);
}
