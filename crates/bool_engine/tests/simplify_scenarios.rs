//! End-to-end scenarios through parse -> simplify -> verify.

use bool_ast::Expr;
use bool_engine::{simplify, to_sum_of_products, verify_by_truth_table};
use bool_parser::parse;

#[test]
fn test_or_idempotence_scenario() {
    let e = parse("A + A").expect("parse");
    let result = simplify(&e);
    assert_eq!(result.final_expression, Expr::var("A"));
    assert!(result
        .steps
        .iter()
        .any(|s| s.rule_name == "Idempotence (OR)"));
}

#[test]
fn test_contradiction_short_circuit() {
    let e = parse("A * !A").expect("parse");
    let result = simplify(&e);
    assert_eq!(result.final_expression, Expr::constant(false));
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].rule_name, "Contradiction");
}

#[test]
fn test_demorgan_applied_exactly_once() {
    let e = parse("!(A * B)").expect("parse");
    let result = simplify(&e);
    let expected = Expr::or(Expr::not(Expr::var("A")), Expr::not(Expr::var("B")));
    assert_eq!(result.final_expression, expected);
    let demorgan_steps = result
        .steps
        .iter()
        .filter(|s| s.rule_name.starts_with("De Morgan"))
        .count();
    assert_eq!(demorgan_steps, 1);
}

#[test]
fn test_double_negation_scenario() {
    let e = parse("!!A").expect("parse");
    let result = simplify(&e);
    assert_eq!(result.final_expression, Expr::var("A"));
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].rule_name, "Double Negation");
}

#[test]
fn test_tautology_scenario() {
    let e = parse("A + !A").expect("parse");
    let result = simplify(&e);
    assert_eq!(result.final_expression, Expr::constant(true));
    assert_eq!(result.steps[0].rule_name, "Tautology");
}

#[test]
fn test_sop_of_or_matches_truth_table() {
    let e = parse("A + B").expect("parse");
    let sop = to_sum_of_products(&e).expect("within variable ceiling");
    let result = verify_by_truth_table(&e, &sop);
    assert!(result.is_equivalent, "{}", result.details);
    // 3 true rows -> 3 OR'd minterms
    assert_eq!(sop.to_string().matches('+').count(), 2);
}

#[test]
fn test_xnor_verifies_against_expansion() {
    let a = parse("A \\leftrightarrow B").expect("parse latex");
    let b = parse("(A*B)+(!A*!B)").expect("parse");
    let result = verify_by_truth_table(&a, &b);
    assert!(result.is_equivalent, "{}", result.details);
    assert_eq!(result.truth_table.map(|t| t.len()), Some(4));
}

#[test]
fn test_simplification_is_idempotent() {
    for input in [
        "A + A",
        "!(A * B)",
        "(A * 1) + (B * 0)",
        "A + (A * B)",
        "(A * B) + (A * C)",
        "!(!A * !B)",
    ] {
        let e = parse(input).expect("parse");
        let once = simplify(&e).final_expression;
        let twice = simplify(&once).final_expression;
        assert_eq!(twice, once, "second pass found new work for {}", input);
    }
}

#[test]
fn test_absorption_end_to_end() {
    let e = parse("A + (A * B)").expect("parse");
    let result = simplify(&e);
    assert_eq!(result.final_expression, Expr::var("A"));
}

#[test]
fn test_consensus_end_to_end() {
    let e = parse("(A * B) + (!A * C) + (B * C)").expect("parse");
    let result = simplify(&e);
    let expected = parse("(A * B) + (!A * C)").expect("parse");
    assert_eq!(result.final_expression, expected);
    assert!(result.steps.iter().any(|s| s.rule_name == "Consensus"));
}

#[test]
fn test_repaired_input_simplifies() {
    // "A * !" repairs to A * !0, then folds to A
    let e = parse("A * !").expect("parse");
    let result = simplify(&e);
    assert_eq!(result.final_expression, Expr::var("A"));
}
