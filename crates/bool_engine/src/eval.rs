//! Truth-value evaluation under a variable assignment.

use crate::error::EngineError;
use bool_ast::Expr;
use rustc_hash::FxHashMap;

pub type Assignment = FxHashMap<String, bool>;

/// Evaluate an expression under an assignment. Every variant evaluates
/// directly; an unbound variable is an evaluation error, never a default.
pub fn eval(expr: &Expr, assignment: &Assignment) -> Result<bool, EngineError> {
    match expr {
        Expr::Const(v) => Ok(*v),
        Expr::Var(name) => assignment
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnboundVariable(name.clone())),
        Expr::Not(inner) => Ok(!eval(inner, assignment)?),
        Expr::And(l, r) => Ok(eval(l, assignment)? && eval(r, assignment)?),
        Expr::Or(l, r) => Ok(eval(l, assignment)? || eval(r, assignment)?),
        Expr::Xor(l, r) => Ok(eval(l, assignment)? != eval(r, assignment)?),
        Expr::Xnor(l, r) => Ok(eval(l, assignment)? == eval(r, assignment)?),
        Expr::Nand(l, r) => Ok(!(eval(l, assignment)? && eval(r, assignment)?)),
        Expr::Nor(l, r) => Ok(!(eval(l, assignment)? || eval(r, assignment)?)),
    }
}

/// Build the assignment for row `index` of a truth table over `variables`
/// (sorted order, first variable in the most significant bit).
pub fn assignment_for_row(variables: &[String], index: u64) -> Assignment {
    let n = variables.len();
    let mut assignment = Assignment::default();
    for (j, name) in variables.iter().enumerate() {
        let bit = (index >> (n - 1 - j)) & 1;
        assignment.insert(name.clone(), bit == 1);
    }
    assignment
}
