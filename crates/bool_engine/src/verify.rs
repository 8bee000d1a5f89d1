//! Equivalence verification by exhaustive truth-table comparison, with a
//! conservative algebraic fallback for infeasible variable counts.

use crate::engine::Simplifier;
use crate::eval::{assignment_for_row, eval};
use bool_ast::Expr;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::debug;

/// Default feasibility ceiling for truth-table verification.
pub const MAX_VERIFY_VARS: usize = 10;

/// How many differing assignments are spelled out in `details`.
const MAX_REPORTED_MISMATCHES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMethod {
    TruthTable,
    Algebraic,
}

/// One row of the comparison table.
#[derive(Debug, Clone)]
pub struct TruthTableRow {
    pub assignment: Vec<(String, bool)>,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone)]
pub struct VerificationResult {
    pub is_equivalent: bool,
    pub method: VerifyMethod,
    pub details: String,
    pub truth_table: Option<Vec<TruthTableRow>>,
}

/// Union of both expressions' variable universes, sorted.
fn combined_variables(a: &Expr, b: &Expr) -> Vec<String> {
    let mut names: BTreeSet<String> = a.variables().into_iter().collect();
    names.extend(b.variables());
    names.into_iter().collect()
}

/// Gate for the exponential check: callers should skip verification (and
/// assume correctness) when this returns false, not treat it as failure.
pub fn is_truth_table_verification_feasible(a: &Expr, b: &Expr, max_variables: usize) -> bool {
    combined_variables(a, b).len() <= max_variables
}

/// Compare two expressions over every assignment of their combined
/// variable universe. Always terminates and never panics; a row that
/// fails to evaluate counts as non-equivalent (a conservative bias: this
/// can produce a false negative, never a silent false positive).
pub fn verify_by_truth_table(a: &Rc<Expr>, b: &Rc<Expr>) -> VerificationResult {
    let variables = combined_variables(a, b);
    let rows = 1u64 << variables.len() as u32;

    let mut table = Vec::with_capacity(rows as usize);
    let mut matching = 0u64;
    let mut mismatches: Vec<String> = Vec::new();
    let mut eval_failures = 0u64;

    for index in 0..rows {
        let assignment = assignment_for_row(&variables, index);
        let left = eval(a, &assignment);
        let right = eval(b, &assignment);

        // an evaluation error defaults the value to false and the row is
        // never counted as equivalent
        let had_failure = left.is_err() || right.is_err();
        let lv = left.unwrap_or(false);
        let rv = right.unwrap_or(false);
        let row_ok = !had_failure && lv == rv;
        if row_ok {
            matching += 1;
        } else {
            if had_failure {
                eval_failures += 1;
            }
            if mismatches.len() < MAX_REPORTED_MISMATCHES {
                let bindings: Vec<String> = variables
                    .iter()
                    .map(|name| {
                        let v = assignment.get(name).copied().unwrap_or(false);
                        format!("{}={}", name, v as u8)
                    })
                    .collect();
                mismatches.push(format!(
                    "{}: left={} right={}",
                    bindings.join(" "),
                    lv as u8,
                    rv as u8
                ));
            }
        }

        table.push(TruthTableRow {
            assignment: variables
                .iter()
                .map(|name| (name.clone(), assignment.get(name).copied().unwrap_or(false)))
                .collect(),
            left: lv,
            right: rv,
        });
    }

    let is_equivalent = matching == rows;
    let mut details = format!("{}/{} rows match", matching, rows);
    if eval_failures > 0 {
        details.push_str(&format!(
            "; {} row(s) failed to evaluate and were counted as non-equivalent",
            eval_failures
        ));
    }
    if !mismatches.is_empty() {
        details.push_str("; differing assignments: ");
        details.push_str(&mismatches.join("; "));
    }

    VerificationResult {
        is_equivalent,
        method: VerifyMethod::TruthTable,
        details,
        truth_table: Some(table),
    }
}

/// Verify equivalence, choosing the method by feasibility: exhaustive
/// truth table within [`MAX_VERIFY_VARS`], otherwise an algebraic
/// comparison that simplifies both sides and compares structurally. The
/// algebraic path is conservative: an inconclusive comparison reports
/// non-equivalence rather than guessing.
pub fn verify(a: &Rc<Expr>, b: &Rc<Expr>) -> VerificationResult {
    if is_truth_table_verification_feasible(a, b, MAX_VERIFY_VARS) {
        return verify_by_truth_table(a, b);
    }

    debug!(
        vars = combined_variables(a, b).len(),
        "truth table infeasible, falling back to algebraic comparison"
    );
    let simplifier = Simplifier::with_default_rules();
    let left = simplifier.simplify(a).final_expression;
    let right = simplifier.simplify(b).final_expression;
    if left == right {
        VerificationResult {
            is_equivalent: true,
            method: VerifyMethod::Algebraic,
            details: "both sides simplify to the same form".to_string(),
            truth_table: None,
        }
    } else {
        VerificationResult {
            is_equivalent: false,
            method: VerifyMethod::Algebraic,
            details: "algebraic comparison inconclusive; reported as non-equivalent".to_string(),
            truth_table: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalent_pair() {
        // !(A * B) vs !A + !B
        let a = Expr::not(Expr::and(Expr::var("A"), Expr::var("B")));
        let b = Expr::or(Expr::not(Expr::var("A")), Expr::not(Expr::var("B")));
        let result = verify_by_truth_table(&a, &b);
        assert!(result.is_equivalent);
        assert_eq!(result.method, VerifyMethod::TruthTable);
        assert_eq!(result.truth_table.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn test_non_equivalent_pair_reports_mismatches() {
        let a = Expr::and(Expr::var("A"), Expr::var("B"));
        let b = Expr::or(Expr::var("A"), Expr::var("B"));
        let result = verify_by_truth_table(&a, &b);
        assert!(!result.is_equivalent);
        assert!(result.details.contains("2/4 rows match"));
        assert!(result.details.contains("left="));
    }

    #[test]
    fn test_variable_universe_is_union() {
        // A vs A * (B + !B): equivalent over {A, B}
        let a = Expr::var("A");
        let b = Expr::and(
            Expr::var("A"),
            Expr::or(Expr::var("B"), Expr::not(Expr::var("B"))),
        );
        let result = verify_by_truth_table(&a, &b);
        assert!(result.is_equivalent);
        assert_eq!(result.truth_table.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn test_feasibility_gate() {
        let mut wide = Expr::var("A");
        for c in b'B'..=b'L' {
            wide = Expr::or(wide, Expr::var(&(c as char).to_string()));
        }
        assert!(!is_truth_table_verification_feasible(
            &wide,
            &Expr::var("A"),
            MAX_VERIFY_VARS
        ));
        assert!(is_truth_table_verification_feasible(
            &Expr::var("A"),
            &Expr::var("B"),
            MAX_VERIFY_VARS
        ));
    }

    #[test]
    fn test_xnor_expansion_equivalence() {
        let a = Expr::xnor(Expr::var("A"), Expr::var("B"));
        let b = Expr::or(
            Expr::and(Expr::var("A"), Expr::var("B")),
            Expr::and(Expr::not(Expr::var("A")), Expr::not(Expr::var("B"))),
        );
        let result = verify_by_truth_table(&a, &b);
        assert!(result.is_equivalent);
    }
}
