//! Round-trip property: formatting an expression in standard notation and
//! re-parsing it yields a structurally equal tree.

use bool_ast::Expr;
use bool_parser::parse;
use proptest::prelude::*;
use std::rc::Rc;

fn arb_expr() -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Expr::constant),
        (0u8..26).prop_map(|i| Expr::var(&((b'A' + i) as char).to_string())),
    ];
    leaf.prop_recursive(6, 48, 2, |inner| {
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
    fn roundtrip_standard_notation(e in arb_expr()) {
        let text = e.to_string();
        let reparsed = parse(&text).expect("formatted output must parse");
        prop_assert_eq!(reparsed, e);
    }
}
