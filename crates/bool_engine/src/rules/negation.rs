//! Negation-chain collapse. Handles arbitrarily long runs of `Not` in a
//! single application, not just depth-2.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;

define_rule!(
    DoubleNegationRule,
    "Double Negation",
    "!!A = A",
    |expr| {
        if let Expr::Not(inner) = &**expr {
            if matches!(&**inner, Expr::Not(_)) {
                let mut depth = 0usize;
                let mut cur = expr;
                while let Expr::Not(next) = &**cur {
                    depth += 1;
                    cur = next;
                }
                let result = if depth % 2 == 0 {
                    cur.clone()
                } else {
                    Expr::not(cur.clone())
                };
                return Some(
                    Rewrite::new(result).desc(format!("collapse {} negations", depth)),
                );
            }
        }
        None
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn test_double_negation() {
        let e = Expr::not(Expr::not(Expr::var("A")));
        assert_eq!(DoubleNegationRule.apply(&e).unwrap().new_expr, Expr::var("A"));
    }

    #[test]
    fn test_long_chain_collapses_in_one_application() {
        // 5 nots -> !A
        let mut e = Expr::var("A");
        for _ in 0..5 {
            e = Expr::not(e);
        }
        assert_eq!(
            DoubleNegationRule.apply(&e).unwrap().new_expr,
            Expr::not(Expr::var("A"))
        );
    }

    #[test]
    fn test_single_not_untouched() {
        let e = Expr::not(Expr::var("A"));
        assert!(DoubleNegationRule.apply(&e).is_none());
    }
}
