//! Boolean-algebra rewrite engine: phased rule-based simplification with
//! a step trace, canonical minterm/maxterm forms, and truth-table
//! equivalence verification.

pub mod canonical;
pub mod engine;
pub mod error;
pub mod eval;
pub mod fingerprint;
pub mod macros;
pub mod phase;
pub mod rule;
pub mod rules;
pub mod step;
pub mod transform;
pub mod verify;

pub use canonical::{to_product_of_sums, to_sum_of_products, MAX_CANONICAL_VARS};
pub use engine::Simplifier;
pub use error::EngineError;
pub use phase::{SimplifyOptions, SimplifyPhase};
pub use step::{SimplificationResult, Step};
pub use verify::{
    is_truth_table_verification_feasible, verify, verify_by_truth_table, VerificationResult,
    VerifyMethod, MAX_VERIFY_VARS,
};

use bool_ast::Expr;
use std::rc::Rc;

/// Simplify with the default rule set and options.
pub fn simplify(expr: &Rc<Expr>) -> SimplificationResult {
    Simplifier::with_default_rules().simplify(expr)
}
