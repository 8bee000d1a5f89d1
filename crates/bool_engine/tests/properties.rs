//! Engine-level properties: simplification preserves logical equivalence,
//! canonical forms match the source truth table, and the step trace stays
//! within the configured bounds.

use bool_ast::Expr;
use bool_engine::{
    simplify, to_product_of_sums, to_sum_of_products, verify_by_truth_table, Simplifier,
};
use proptest::prelude::*;
use std::rc::Rc;

/// Expressions over a small variable pool so truth tables stay tiny.
fn arb_expr() -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Expr::constant),
        (0u8..4).prop_map(|i| Expr::var(&((b'A' + i) as char).to_string())),
    ];
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::or(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::xor(a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| Expr::xnor(a, b)),
        ]
    })
}

/// Small AND/OR/NOT trees, for properties that need the engine to reach a
/// true fixed point well inside the per-rule application caps.
fn arb_expr_small() -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Expr::constant),
        (0u8..3).prop_map(|i| Expr::var(&((b'A' + i) as char).to_string())),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::and(a, b)),
            (inner.clone(), inner).prop_map(|(a, b)| Expr::or(a, b)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn simplification_preserves_equivalence(e in arb_expr()) {
        let result = simplify(&e);
        let check = verify_by_truth_table(&e, &result.final_expression);
        prop_assert!(check.is_equivalent, "{}", check.details);
    }

    #[test]
    fn simplification_is_idempotent(e in arb_expr_small()) {
        let once = simplify(&e).final_expression;
        let twice = simplify(&once).final_expression;
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn sop_matches_source_truth_table(e in arb_expr()) {
        let sop = to_sum_of_products(&e).expect("within variable ceiling");
        let check = verify_by_truth_table(&e, &sop);
        prop_assert!(check.is_equivalent, "{}", check.details);
    }

    #[test]
    fn pos_matches_source_truth_table(e in arb_expr()) {
        let pos = to_product_of_sums(&e).expect("within variable ceiling");
        let check = verify_by_truth_table(&e, &pos);
        prop_assert!(check.is_equivalent, "{}", check.details);
    }

    #[test]
    fn step_trace_is_bounded(e in arb_expr()) {
        let simplifier = Simplifier::with_default_rules();
        let result = simplifier.simplify(&e);
        // 17 distinct rules, plus one step per operator expansion
        let bound = 17 * simplifier.options.max_applications_per_rule + 4;
        prop_assert!(result.steps.len() <= bound);
    }
}
