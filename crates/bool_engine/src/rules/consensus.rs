//! Consensus theorem: `(A * B) + (!A * C) + (B * C) = (A * B) + (!A * C)`.
//!
//! Works on a flattened OR chain. A term is redundant when it is exactly
//! the consensus of two other terms: those two share exactly one
//! complementary variable, and the redundant term is the union of their
//! remaining literals.

use crate::define_rule;
use crate::rule::Rewrite;
use bool_ast::Expr;
use std::collections::BTreeSet;
use std::rc::Rc;

/// A literal: variable name plus polarity (`true` = negated).
type Literal = (String, bool);

fn flatten_or(expr: &Rc<Expr>, out: &mut Vec<Rc<Expr>>) {
    if let Expr::Or(l, r) = &**expr {
        flatten_or(l, out);
        flatten_or(r, out);
    } else {
        out.push(expr.clone());
    }
}

/// Literal set of a pure product term, or None if the term contains
/// anything other than literals.
fn literal_set(expr: &Rc<Expr>) -> Option<BTreeSet<Literal>> {
    fn collect(expr: &Expr, out: &mut BTreeSet<Literal>) -> bool {
        match expr {
            Expr::Var(name) => {
                out.insert((name.clone(), false));
                true
            }
            Expr::Not(inner) => match &**inner {
                Expr::Var(name) => {
                    out.insert((name.clone(), true));
                    true
                }
                _ => false,
            },
            Expr::And(l, r) => collect(l, out) && collect(r, out),
            _ => false,
        }
    }
    let mut set = BTreeSet::new();
    collect(expr, &mut set).then_some(set)
}

/// Rebuild a left-associative OR chain preserving term order.
fn rebuild_or(terms: &[Rc<Expr>]) -> Rc<Expr> {
    let mut iter = terms.iter().cloned();
    let first = iter.next().expect("caller keeps at least one term");
    iter.fold(first, Expr::or)
}

fn consensus_of(
    ti: &BTreeSet<Literal>,
    tj: &BTreeSet<Literal>,
) -> Option<BTreeSet<Literal>> {
    let opposed: Vec<&Literal> = ti
        .iter()
        .filter(|(name, neg)| tj.contains(&(name.clone(), !neg)))
        .collect();
    // exactly one complementary variable, otherwise the consensus is trivial
    if opposed.len() != 1 {
        return None;
    }
    let (name, neg) = opposed[0].clone();
    let mut merged: BTreeSet<Literal> = ti.iter().cloned().collect();
    merged.extend(tj.iter().cloned());
    merged.remove(&(name.clone(), neg));
    merged.remove(&(name, !neg));
    Some(merged)
}

define_rule!(
    ConsensusRule,
    "Consensus",
    "(A * B) + (!A * C) + (B * C) = (A * B) + (!A * C)",
    |expr| {
        if !matches!(&**expr, Expr::Or(_, _)) {
            return None;
        }
        let mut terms = Vec::new();
        flatten_or(expr, &mut terms);
        if terms.len() < 3 {
            return None;
        }
        let sets: Vec<Option<BTreeSet<Literal>>> =
            terms.iter().map(literal_set).collect();

        for k in 0..terms.len() {
            let Some(tk) = &sets[k] else { continue };
            for i in 0..terms.len() {
                if i == k {
                    continue;
                }
                let Some(ti) = &sets[i] else { continue };
                for j in (i + 1)..terms.len() {
                    if j == k {
                        continue;
                    }
                    let Some(tj) = &sets[j] else { continue };
                    if consensus_of(ti, tj).as_ref() == Some(tk) {
                        let remaining: Vec<Rc<Expr>> = terms
                            .iter()
                            .enumerate()
                            .filter(|(idx, _)| *idx != k)
                            .map(|(_, t)| t.clone())
                            .collect();
                        let result = rebuild_or(&remaining);
                        return Some(Rewrite::new(result).desc(format!(
                            "{} is the consensus of {} and {}",
                            terms[k], terms[i], terms[j]
                        )));
                    }
                }
            }
        }
        None
    }
);
