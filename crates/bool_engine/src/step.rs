use bool_ast::Expr;
use std::rc::Rc;

/// One recorded rule application. Snapshots share structure freely: trees
/// are immutable, so `before` can never be mutated out from under `after`.
#[derive(Debug, Clone)]
pub struct Step {
    pub rule_name: String,
    pub formula: String,
    pub description: String,
    pub before: Rc<Expr>,
    pub after: Rc<Expr>,
}

impl Step {
    pub fn new(
        rule_name: &str,
        formula: &str,
        description: impl Into<String>,
        before: Rc<Expr>,
        after: Rc<Expr>,
    ) -> Self {
        Self {
            rule_name: rule_name.to_string(),
            formula: formula.to_string(),
            description: description.into(),
            before,
            after,
        }
    }
}

/// Outcome of one top-level simplify call: the ordered step trace and the
/// final expression. Immutable after return.
#[derive(Debug, Clone)]
pub struct SimplificationResult {
    pub steps: Vec<Step>,
    pub final_expression: Rc<Expr>,
}
