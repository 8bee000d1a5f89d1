//! Distributive laws in the factoring (shrinking) direction only:
//! `(A * B) + (A * C) = A * (B + C)` and its dual. The expanding
//! direction would grow the tree and fight absorption, so it is not in
//! the library.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;
use std::rc::Rc;

/// Find a factor shared between two 2-operand products, returning the
/// common factor and the two leftovers.
fn common_factor(
    a: &Rc<Expr>,
    b: &Rc<Expr>,
    c: &Rc<Expr>,
    d: &Rc<Expr>,
) -> Option<(Rc<Expr>, Rc<Expr>, Rc<Expr>)> {
    if a == c {
        Some((a.clone(), b.clone(), d.clone()))
    } else if a == d {
        Some((a.clone(), b.clone(), c.clone()))
    } else if b == c {
        Some((b.clone(), a.clone(), d.clone()))
    } else if b == d {
        Some((b.clone(), a.clone(), c.clone()))
    } else {
        None
    }
}

define_rule!(
    FactorAndFromOrRule,
    "Distributive (factor AND)",
    "(A * B) + (A * C) = A * (B + C)",
    |expr| {
        if let Expr::Or(l, r) = &**expr {
            if let (Expr::And(a, b), Expr::And(c, d)) = (&**l, &**r) {
                if let Some((shared, x, y)) = common_factor(a, b, c, d) {
                    let result = Expr::and(shared, Expr::or(x, y));
                    return Some(
                        Rewrite::new(result.clone()).desc(format!("{} = {}", expr, result)),
                    );
                }
            }
        }
        None
    }
);

define_rule!(
    FactorOrFromAndRule,
    "Distributive (factor OR)",
    "(A + B) * (A + C) = A + (B * C)",
    |expr| {
        if let Expr::And(l, r) = &**expr {
            if let (Expr::Or(a, b), Expr::Or(c, d)) = (&**l, &**r) {
                if let Some((shared, x, y)) = common_factor(a, b, c, d) {
                    let result = Expr::or(shared, Expr::and(x, y));
                    return Some(
                        Rewrite::new(result.clone()).desc(format!("{} = {}", expr, result)),
                    );
                }
            }
        }
        None
    }
);
