pub mod expression;
pub mod latex;

pub use expression::{Expr, OutputFormat};
pub use latex::LatexExpr;

use std::rc::Rc;

/// Render an expression in the requested output notation.
///
/// Both notations are fully parenthesized so the standard form re-parses
/// to a structurally equal tree.
pub fn format_expr(expr: &Rc<Expr>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Standard => expr.to_string(),
        OutputFormat::Latex => LatexExpr(expr).to_string(),
    }
}
