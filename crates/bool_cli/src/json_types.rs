//! JSON output types for the `:json` REPL mode.
//!
//! These structures provide output suitable for scripting and notebooks;
//! expressions are rendered as strings in the standard notation so the
//! payload round-trips through the parser.

use bool_engine::{SimplificationResult, VerificationResult, VerifyMethod};
use serde::Serialize;

/// Result of simplifying a single expression.
#[derive(Serialize, Debug)]
pub struct SimplifyJsonOutput {
    pub ok: bool,
    pub input: String,
    pub result: String,
    pub result_latex: String,
    pub steps_count: usize,
    pub steps: Vec<StepJson>,
}

/// One recorded rule application.
#[derive(Serialize, Debug)]
pub struct StepJson {
    pub rule: String,
    pub formula: String,
    pub description: String,
    pub before: String,
    pub after: String,
}

impl SimplifyJsonOutput {
    pub fn from_result(input: &str, result: &SimplificationResult) -> Self {
        Self {
            ok: true,
            input: input.to_string(),
            result: result.final_expression.to_string(),
            result_latex: result.final_expression.to_latex(),
            steps_count: result.steps.len(),
            steps: result
                .steps
                .iter()
                .map(|step| StepJson {
                    rule: step.rule_name.clone(),
                    formula: step.formula.clone(),
                    description: step.description.clone(),
                    before: step.before.to_string(),
                    after: step.after.to_string(),
                })
                .collect(),
        }
    }
}

/// Result of an equivalence check.
#[derive(Serialize, Debug)]
pub struct VerifyJsonOutput {
    pub ok: bool,
    pub equivalent: bool,
    pub method: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
}

impl VerifyJsonOutput {
    pub fn from_result(result: &VerificationResult) -> Self {
        Self {
            ok: true,
            equivalent: result.is_equivalent,
            method: match result.method {
                VerifyMethod::TruthTable => "truth_table".to_string(),
                VerifyMethod::Algebraic => "algebraic".to_string(),
            },
            details: result.details.clone(),
            rows: result.truth_table.as_ref().map(Vec::len),
        }
    }
}

/// An error result.
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ErrorJsonOutput {
    pub fn with_input(error: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: Some(input.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bool_ast::Expr;
    use bool_engine::simplify;

    #[test]
    fn test_simplify_output_carries_trace() {
        let e = Expr::or(Expr::var("A"), Expr::var("A"));
        let result = simplify(&e);
        let json = SimplifyJsonOutput::from_result("A + A", &result);
        assert!(json.ok);
        assert_eq!(json.result, "A");
        assert_eq!(json.steps_count, json.steps.len());
        assert_eq!(json.steps[0].rule, "Idempotence (OR)");
    }

    #[test]
    fn test_error_output_serializes_without_nulls() {
        let err = ErrorJsonOutput::with_input("empty input", "");
        let text = serde_json::to_string(&err).unwrap();
        assert!(text.contains("\"ok\":false"));
        assert!(!text.contains("null"));
    }
}
