//! Constant identities: identity and domination elements for AND/OR, and
//! negation of a constant. These run in the constant-folding phase and
//! again during final cleanup.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;

define_rule!(
    AndIdentityRule,
    "Identity (AND)",
    "A * 1 = A",
    |expr| {
        if let Expr::And(l, r) = &**expr {
            if **l == Expr::Const(true) {
                return Some(Rewrite::new(r.clone()).desc(format!("1 * {} = {}", r, r)));
            }
            if **r == Expr::Const(true) {
                return Some(Rewrite::new(l.clone()).desc(format!("{} * 1 = {}", l, l)));
            }
        }
        None
    }
);

define_rule!(
    AndDominationRule,
    "Domination (AND)",
    "A * 0 = 0",
    |expr| {
        if let Expr::And(l, r) = &**expr {
            if **l == Expr::Const(false) || **r == Expr::Const(false) {
                return Some(
                    Rewrite::new(Expr::constant(false)).desc(format!("{} = 0", expr)),
                );
            }
        }
        None
    }
);

define_rule!(
    OrIdentityRule,
    "Identity (OR)",
    "A + 0 = A",
    |expr| {
        if let Expr::Or(l, r) = &**expr {
            if **l == Expr::Const(false) {
                return Some(Rewrite::new(r.clone()).desc(format!("0 + {} = {}", r, r)));
            }
            if **r == Expr::Const(false) {
                return Some(Rewrite::new(l.clone()).desc(format!("{} + 0 = {}", l, l)));
            }
        }
        None
    }
);

define_rule!(
    OrDominationRule,
    "Domination (OR)",
    "A + 1 = 1",
    |expr| {
        if let Expr::Or(l, r) = &**expr {
            if **l == Expr::Const(true) || **r == Expr::Const(true) {
                return Some(
                    Rewrite::new(Expr::constant(true)).desc(format!("{} = 1", expr)),
                );
            }
        }
        None
    }
);

define_rule!(
    NotConstantRule,
    "Negation of Constant",
    "!0 = 1, !1 = 0",
    |expr| {
        if let Expr::Not(inner) = &**expr {
            if let Expr::Const(v) = **inner {
                return Some(
                    Rewrite::new(Expr::constant(!v))
                        .desc(format!("!{} = {}", v as u8, !v as u8)),
                );
            }
        }
        None
    }
);
