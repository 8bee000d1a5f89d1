//! Contradiction and tautology recognition: `A * !A = 0`, `A + !A = 1`.
//! Both operand orders match; the engine applies these at any depth and
//! short-circuits the run when the whole expression folds to a constant.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;
use std::rc::Rc;

/// True when one operand is exactly the negation of the other.
fn complementary(l: &Rc<Expr>, r: &Rc<Expr>) -> bool {
    matches!(&**r, Expr::Not(inner) if inner == l)
        || matches!(&**l, Expr::Not(inner) if inner == r)
}

define_rule!(
    ContradictionRule,
    "Contradiction",
    "A * !A = 0",
    |expr| {
        if let Expr::And(l, r) = &**expr {
            if complementary(l, r) {
                return Some(
                    Rewrite::new(Expr::constant(false)).desc(format!("{} = 0", expr)),
                );
            }
        }
        None
    }
);

define_rule!(
    TautologyRule,
    "Tautology",
    "A + !A = 1",
    |expr| {
        if let Expr::Or(l, r) = &**expr {
            if complementary(l, r) {
                return Some(
                    Rewrite::new(Expr::constant(true)).desc(format!("{} = 1", expr)),
                );
            }
        }
        None
    }
);
