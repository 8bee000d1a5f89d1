//! Canonical minterm/maxterm forms by full truth-table enumeration.

use crate::error::EngineError;
use crate::eval::{assignment_for_row, eval};
use crate::transform;
use bool_ast::Expr;
use std::rc::Rc;

/// Variable ceiling for canonical-form generation. Enumeration is 2^n, so
/// anything larger is rejected up front instead of running away.
pub const MAX_CANONICAL_VARS: usize = 20;

/// Sum-of-products: one minterm per assignment making the expression true,
/// OR-combined left to right in assignment order. Zero true assignments
/// give the constant `0`; a fully constant input is returned unchanged.
pub fn to_sum_of_products(expr: &Rc<Expr>) -> Result<Rc<Expr>, EngineError> {
    build_canonical(expr, true)
}

/// Product-of-sums: one maxterm per assignment making the expression
/// false, AND-combined. Zero false assignments give the constant `1`.
pub fn to_product_of_sums(expr: &Rc<Expr>) -> Result<Rc<Expr>, EngineError> {
    build_canonical(expr, false)
}

fn build_canonical(expr: &Rc<Expr>, sop: bool) -> Result<Rc<Expr>, EngineError> {
    let variables = expr.variables();
    if variables.is_empty() {
        return Ok(expr.clone());
    }
    if variables.len() > MAX_CANONICAL_VARS {
        return Err(EngineError::TooManyVariables {
            count: variables.len(),
            max: MAX_CANONICAL_VARS,
        });
    }

    let prepared = transform::normalize(expr);
    let rows = 1u64 << variables.len();
    let mut terms: Vec<Rc<Expr>> = Vec::new();
    for index in 0..rows {
        let assignment = assignment_for_row(&variables, index);
        // an evaluation failure counts the row as false rather than
        // aborting the whole conversion
        let value = eval(&prepared, &assignment).unwrap_or(false);
        if value == sop {
            terms.push(term_for_assignment(&variables, index, sop));
        }
    }

    Ok(match terms.len() {
        0 => Expr::constant(!sop),
        _ => {
            let mut iter = terms.into_iter();
            let first = iter.next().expect("terms is non-empty");
            if sop {
                iter.fold(first, Expr::or)
            } else {
                iter.fold(first, Expr::and)
            }
        }
    })
}

/// Minterm (AND over literals, `sop == true`) or maxterm (OR over
/// literals) for one assignment. Minterm literals are unnegated where the
/// assignment is true; maxterm literals are negated where it is true.
fn term_for_assignment(variables: &[String], index: u64, sop: bool) -> Rc<Expr> {
    let n = variables.len();
    let mut literals = variables.iter().enumerate().map(|(j, name)| {
        let bit = (index >> (n - 1 - j)) & 1 == 1;
        let keep_plain = bit == sop;
        if keep_plain {
            Expr::var(name)
        } else {
            Expr::not(Expr::var(name))
        }
    });
    let first = literals.next().expect("at least one variable");
    if sop {
        literals.fold(first, Expr::and)
    } else {
        literals.fold(first, Expr::or)
    }
}
