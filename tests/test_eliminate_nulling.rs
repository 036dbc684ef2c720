mod support;

use cfg_normalize::*;

#[test]
fn test_eliminate_empty() {
    support::init_logging();
    let mut grammar = Grammar::from_parts(
        ["x", "y", "z"],
        ["S", "Y"],
        "S",
        [
            ("S", vec![vec!["x", "Y", "z"], vec!["Y", "Y"]]),
            ("Y", vec![vec!["y"], vec![]]),
        ],
    )
    .unwrap();

    let nullable = grammar.eliminate_empty(DEFAULT_MAX_NULLABLE_POSITIONS).unwrap();

    let [s, y] = [grammar.find("S").unwrap(), grammar.find("Y").unwrap()];
    assert!(nullable[s]);
    assert!(nullable[y]);
    support::assert_rules(
        &grammar,
        &["S ::= x Y z", "S ::= x z", "S ::= Y Y", "S ::= Y", "Y ::= y"],
    );
}

#[test]
fn test_nullable_through_chain() {
    support::init_logging();
    let mut grammar = Grammar::new();
    let [s, a, b] = grammar.nonterminals_named(["S", "A", "B"]);
    let x = grammar.terminal("x");
    grammar.set_start(s);
    grammar
        .rule(s)
        .rhs([x, a])
        .rule(a)
        .rhs([b, b])
        .rule(b)
        .rhs([])
        .rhs([x]);

    let nulling = grammar.nulling_symbols();
    assert!(nulling[b] && !nulling[a]);
    let nullable = grammar.nullable_symbols();
    assert!(nullable[a] && nullable[b] && !nullable[s]);

    grammar.eliminate_empty(DEFAULT_MAX_NULLABLE_POSITIONS).unwrap();

    support::assert_rules(
        &grammar,
        &["S ::= x A", "S ::= x", "A ::= B B", "A ::= B", "B ::= x"],
    );
}

#[test]
fn test_duplicate_variants_are_merged() {
    support::init_logging();
    let mut grammar = Grammar::from_parts(
        ["x"],
        ["S", "A"],
        "S",
        [
            ("S", vec![vec!["A", "x", "A"], vec!["x"]]),
            ("A", vec![vec!["x"], vec![]]),
        ],
    )
    .unwrap();

    grammar.eliminate_empty(DEFAULT_MAX_NULLABLE_POSITIONS).unwrap();

    support::assert_rules(
        &grammar,
        &[
            "S ::= A x A",
            "S ::= x A",
            "S ::= A x",
            "S ::= x",
            "A ::= x",
        ],
    );
}

#[test]
fn test_nullable_expansion_limit() {
    support::init_logging();
    let grammar = Grammar::from_parts(
        ["x"],
        ["S", "A"],
        "S",
        [
            ("S", vec![vec!["A", "A", "A", "A", "x"]]),
            ("A", vec![vec!["x"], vec![]]),
        ],
    )
    .unwrap();

    let options = NormalizeOptions::new().max_nullable_positions(3);
    let result = Normalizer::new(options).cleanup(&grammar);
    assert_eq!(
        result.unwrap_err(),
        GrammarError::NullableExpansion {
            lhs: "S".into(),
            positions: 4,
            limit: 3,
        }
    );
    assert_eq!(grammar.rules().count(), 3);

    let options = NormalizeOptions::new().max_nullable_positions(4);
    let cleaned = Normalizer::new(options).cleanup(&grammar).unwrap();
    assert_eq!(cleaned.productions(cleaned.start().unwrap()).count(), 5);
}

#[test]
fn test_default_limit_rejects_only_unenumerable_rules() {
    support::init_logging();
    assert_eq!(
        NormalizeOptions::default().max_nullable_positions,
        MAX_NULLABLE_POSITIONS
    );
    let mut grammar = Grammar::new();
    let [s, a] = grammar.nonterminals_named(["S", "A"]);
    let x = grammar.terminal("x");
    grammar.set_start(s);
    grammar.rule(s).rhs(vec![a; 64]).rule(a).rhs([x]).rhs([]);

    assert_eq!(
        normalize_cnf(&grammar).unwrap_err(),
        GrammarError::NullableExpansion {
            lhs: "S".into(),
            positions: 64,
            limit: 63,
        }
    );

    let options = NormalizeOptions::new().max_nullable_positions(1000);
    assert_eq!(
        Normalizer::new(options).cleanup(&grammar).unwrap_err(),
        GrammarError::NullableExpansion {
            lhs: "S".into(),
            positions: 64,
            limit: 63,
        }
    );
}
