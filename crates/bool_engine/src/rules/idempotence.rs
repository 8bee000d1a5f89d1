//! Idempotence: `A * A = A` and `A + A = A`.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;

define_rule!(
    AndIdempotenceRule,
    "Idempotence (AND)",
    "A * A = A",
    |expr| {
        if let Expr::And(l, r) = &**expr {
            if l == r {
                return Some(
                    Rewrite::new(l.clone()).desc(format!("{} * {} = {}", l, r, l)),
                );
            }
        }
        None
    }
);

define_rule!(
    OrIdempotenceRule,
    "Idempotence (OR)",
    "A + A = A",
    |expr| {
        if let Expr::Or(l, r) = &**expr {
            if l == r {
                return Some(
                    Rewrite::new(l.clone()).desc(format!("{} + {} = {}", l, r, l)),
                );
            }
        }
        None
    }
);
