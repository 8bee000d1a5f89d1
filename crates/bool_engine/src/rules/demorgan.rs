//! De Morgan's laws. Self-inverse, so the engine applies this family at
//! most once per simplify call and follows it with negation cleanup.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;

define_rule!(
    DeMorganAndRule,
    "De Morgan (AND)",
    "!(A * B) = !A + !B",
    |expr| {
        if let Expr::Not(inner) = &**expr {
            if let Expr::And(l, r) = &**inner {
                let result = Expr::or(Expr::not(l.clone()), Expr::not(r.clone()));
                return Some(
                    Rewrite::new(result.clone()).desc(format!("{} = {}", expr, result)),
                );
            }
        }
        None
    }
);

define_rule!(
    DeMorganOrRule,
    "De Morgan (OR)",
    "!(A + B) = !A * !B",
    |expr| {
        if let Expr::Not(inner) = &**expr {
            if let Expr::Or(l, r) = &**inner {
                let result = Expr::and(Expr::not(l.clone()), Expr::not(r.clone()));
                return Some(
                    Rewrite::new(result.clone()).desc(format!("{} = {}", expr, result)),
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
    fn test_demorgan_and() {
        let e = Expr::not(Expr::and(Expr::var("A"), Expr::var("B")));
        let expected = Expr::or(Expr::not(Expr::var("A")), Expr::not(Expr::var("B")));
        assert_eq!(DeMorganAndRule.apply(&e).unwrap().new_expr, expected);
    }

    #[test]
    fn test_demorgan_or() {
        let e = Expr::not(Expr::or(Expr::var("A"), Expr::var("B")));
        let expected = Expr::and(Expr::not(Expr::var("A")), Expr::not(Expr::var("B")));
        assert_eq!(DeMorganOrRule.apply(&e).unwrap().new_expr, expected);
    }

    #[test]
    fn test_plain_negation_untouched() {
        let e = Expr::not(Expr::var("A"));
        assert!(DeMorganAndRule.apply(&e).is_none());
        assert!(DeMorganOrRule.apply(&e).is_none());
    }
}
