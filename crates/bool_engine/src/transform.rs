//! Normalization transformers: pure, recursive tree-to-tree rewrites that
//! eliminate whole operator families before rule-based rewriting.
//!
//! Each transformer is idempotent after a single application and rebuilds
//! only the spine above a changed child; untouched substructure is shared.

use bool_ast::Expr;
use std::rc::Rc;

fn map_children(expr: &Rc<Expr>, f: fn(&Rc<Expr>) -> Rc<Expr>) -> Rc<Expr> {
    fn rebuild2(
        expr: &Rc<Expr>,
        l: &Rc<Expr>,
        r: &Rc<Expr>,
        ctor: fn(Rc<Expr>, Rc<Expr>) -> Rc<Expr>,
        f: fn(&Rc<Expr>) -> Rc<Expr>,
    ) -> Rc<Expr> {
        let nl = f(l);
        let nr = f(r);
        if Rc::ptr_eq(&nl, l) && Rc::ptr_eq(&nr, r) {
            expr.clone()
        } else {
            ctor(nl, nr)
        }
    }

    match &**expr {
        Expr::Const(_) | Expr::Var(_) => expr.clone(),
        Expr::Not(inner) => {
            let n = f(inner);
            if Rc::ptr_eq(&n, inner) {
                expr.clone()
            } else {
                Expr::not(n)
            }
        }
        Expr::And(l, r) => rebuild2(expr, l, r, Expr::and, f),
        Expr::Or(l, r) => rebuild2(expr, l, r, Expr::or, f),
        Expr::Xor(l, r) => rebuild2(expr, l, r, Expr::xor, f),
        Expr::Xnor(l, r) => rebuild2(expr, l, r, Expr::xnor, f),
        Expr::Nand(l, r) => rebuild2(expr, l, r, Expr::nand, f),
        Expr::Nor(l, r) => rebuild2(expr, l, r, Expr::nor, f),
    }
}

/// `A <-> B` becomes `(A * B) + (!A * !B)`, applied until no XNOR remains.
pub fn expand_xnor(expr: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::Xnor(l, r) => {
            let l = expand_xnor(l);
            let r = expand_xnor(r);
            Expr::or(
                Expr::and(l.clone(), r.clone()),
                Expr::and(Expr::not(l), Expr::not(r)),
            )
        }
        _ => map_children(expr, expand_xnor),
    }
}

/// `A ^ B` becomes `(A * !B) + (!A * B)`.
pub fn expand_xor(expr: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::Xor(l, r) => {
            let l = expand_xor(l);
            let r = expand_xor(r);
            Expr::or(
                Expr::and(l.clone(), Expr::not(r.clone())),
                Expr::and(Expr::not(l), r),
            )
        }
        _ => map_children(expr, expand_xor),
    }
}

/// `A @ B` becomes `!(A * B)`.
pub fn expand_nand(expr: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::Nand(l, r) => Expr::not(Expr::and(expand_nand(l), expand_nand(r))),
        _ => map_children(expr, expand_nand),
    }
}

/// `A # B` becomes `!(A + B)`.
pub fn expand_nor(expr: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::Nor(l, r) => Expr::not(Expr::or(expand_nor(l), expand_nor(r))),
        _ => map_children(expr, expand_nor),
    }
}

/// Collapse every run of consecutive `Not` wrappers by parity in one pass:
/// an even-length run disappears, an odd-length run leaves a single `Not`.
pub fn eliminate_double_negation(expr: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::Not(_) => {
            let mut depth = 0usize;
            let mut cur = expr;
            while let Expr::Not(inner) = &**cur {
                depth += 1;
                cur = inner;
            }
            let inner = eliminate_double_negation(cur);
            if depth % 2 == 0 {
                inner
            } else if depth == 1 && Rc::ptr_eq(&inner, cur) {
                expr.clone()
            } else {
                Expr::not(inner)
            }
        }
        _ => map_children(expr, eliminate_double_negation),
    }
}

/// Full normalization pre-pass: expand XNOR, XOR, NAND and NOR down to
/// AND/OR/NOT, then collapse negation chains.
pub fn normalize(expr: &Rc<Expr>) -> Rc<Expr> {
    let e = expand_xnor(expr);
    let e = expand_xor(&e);
    let e = expand_nand(&e);
    let e = expand_nor(&e);
    eliminate_double_negation(&e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_xnor() {
        let e = Expr::xnor(Expr::var("A"), Expr::var("B"));
        let expanded = expand_xnor(&e);
        let expected = Expr::or(
            Expr::and(Expr::var("A"), Expr::var("B")),
            Expr::and(Expr::not(Expr::var("A")), Expr::not(Expr::var("B"))),
        );
        assert_eq!(expanded, expected);
        // idempotent after one application
        assert_eq!(expand_xnor(&expanded), expanded);
    }

    #[test]
    fn test_expand_nor() {
        let e = Expr::nor(Expr::var("A"), Expr::var("B"));
        let expected = Expr::not(Expr::or(Expr::var("A"), Expr::var("B")));
        assert_eq!(expand_nor(&e), expected);
    }

    #[test]
    fn test_expand_nested_xnor() {
        let e = Expr::xnor(Expr::var("A"), Expr::xnor(Expr::var("B"), Expr::var("C")));
        let expanded = expand_xnor(&e);
        assert!(!format!("{:?}", expanded).contains("Xnor"));
    }

    #[test]
    fn test_double_negation_even_chain() {
        // !!!!A collapses to A
        let e = Expr::not(Expr::not(Expr::not(Expr::not(Expr::var("A")))));
        assert_eq!(eliminate_double_negation(&e), Expr::var("A"));
    }

    #[test]
    fn test_double_negation_odd_chain() {
        // !!!A collapses to !A
        let e = Expr::not(Expr::not(Expr::not(Expr::var("A"))));
        assert_eq!(eliminate_double_negation(&e), Expr::not(Expr::var("A")));
    }

    #[test]
    fn test_double_negation_below_binary() {
        let e = Expr::and(Expr::not(Expr::not(Expr::var("A"))), Expr::var("B"));
        assert_eq!(
            eliminate_double_negation(&e),
            Expr::and(Expr::var("A"), Expr::var("B"))
        );
    }

    #[test]
    fn test_untouched_tree_is_shared() {
        let e = Expr::and(Expr::var("A"), Expr::var("B"));
        let out = eliminate_double_negation(&e);
        assert!(Rc::ptr_eq(&out, &e));
    }
}
