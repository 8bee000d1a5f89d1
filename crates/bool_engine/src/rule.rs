use bool_ast::Expr;
use std::rc::Rc;

/// Result of a rule application containing the new expression and a
/// human-readable description of what happened.
pub struct Rewrite {
    /// The transformed expression
    pub new_expr: Rc<Expr>,
    /// Human-readable description of the transformation
    pub description: String,
}

impl Rewrite {
    pub fn new(new_expr: Rc<Expr>) -> Self {
        Rewrite {
            new_expr,
            description: String::new(),
        }
    }

    pub fn desc(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A named local rewrite rule.
///
/// `apply` returning `None` means the rule does not match at this node;
/// a `Some` whose tree is structurally unchanged (or already seen in the
/// current run) is discarded by the engine rather than recorded. Rules
/// must inspect both operand orders, since trees are not order-normalized.
pub trait Rule {
    /// Short name shown in step traces, e.g. "Idempotence (OR)".
    fn name(&self) -> &'static str;

    /// The law in formula form, e.g. "A + A = A".
    fn formula(&self) -> &'static str;

    fn apply(&self, expr: &Rc<Expr>) -> Option<Rewrite>;
}
