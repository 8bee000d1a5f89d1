//! Absorption: `A * (A + B) = A` and `A + (A * B) = A`, with the
//! absorbing operand on either side and the shared term in either slot.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;
use std::rc::Rc;

/// True when `inner` is an Or node with `target` as either operand.
fn or_contains(inner: &Expr, target: &Rc<Expr>) -> bool {
    matches!(inner, Expr::Or(a, b) if a == target || b == target)
}

fn and_contains(inner: &Expr, target: &Rc<Expr>) -> bool {
    matches!(inner, Expr::And(a, b) if a == target || b == target)
}

define_rule!(
    AndAbsorptionRule,
    "Absorption (AND)",
    "A * (A + B) = A",
    |expr| {
        if let Expr::And(l, r) = &**expr {
            if or_contains(r, l) {
                return Some(Rewrite::new(l.clone()).desc(format!("{} absorbs {}", l, r)));
            }
            if or_contains(l, r) {
                return Some(Rewrite::new(r.clone()).desc(format!("{} absorbs {}", r, l)));
            }
        }
        None
    }
);

define_rule!(
    OrAbsorptionRule,
    "Absorption (OR)",
    "A + (A * B) = A",
    |expr| {
        if let Expr::Or(l, r) = &**expr {
            if and_contains(r, l) {
                return Some(Rewrite::new(l.clone()).desc(format!("{} absorbs {}", l, r)));
            }
            if and_contains(l, r) {
                return Some(Rewrite::new(r.clone()).desc(format!("{} absorbs {}", r, l)));
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
    fn test_and_absorption_all_positions() {
        let a = Expr::var("A");
        let b = Expr::var("B");

        for e in [
            Expr::and(a.clone(), Expr::or(a.clone(), b.clone())),
            Expr::and(a.clone(), Expr::or(b.clone(), a.clone())),
            Expr::and(Expr::or(a.clone(), b.clone()), a.clone()),
            Expr::and(Expr::or(b.clone(), a.clone()), a.clone()),
        ] {
            assert_eq!(AndAbsorptionRule.apply(&e).unwrap().new_expr, a);
        }
    }

    #[test]
    fn test_or_absorption() {
        let a = Expr::var("A");
        let b = Expr::var("B");
        let e = Expr::or(a.clone(), Expr::and(a.clone(), b));
        assert_eq!(OrAbsorptionRule.apply(&e).unwrap().new_expr, a);
    }

    #[test]
    fn test_unrelated_terms_do_not_absorb() {
        let e = Expr::and(
            Expr::var("A"),
            Expr::or(Expr::var("B"), Expr::var("C")),
        );
        assert!(AndAbsorptionRule.apply(&e).is_none());
    }
}
