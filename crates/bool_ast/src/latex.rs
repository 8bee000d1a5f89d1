//! LaTeX rendering of Boolean expressions.
//!
//! Uses the same full parenthesization policy as the standard `Display`
//! impl so the rendered formula is unambiguous without precedence rules.

use crate::Expr;
use std::fmt;

/// Wraps an expression for LaTeX display: `format!("{}", LatexExpr(&e))`.
pub struct LatexExpr<'a>(pub &'a Expr);

impl fmt::Display for LatexExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_latex(self.0, f)
    }
}

fn write_latex(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr {
        Expr::Const(false) => write!(f, "0"),
        Expr::Const(true) => write!(f, "1"),
        Expr::Var(name) => write!(f, "{}", name),
        Expr::Not(inner) => {
            write!(f, "\\lnot (")?;
            write_latex(inner, f)?;
            write!(f, ")")
        }
        Expr::And(l, r) => write_binary(f, l, "\\land", r),
        Expr::Or(l, r) => write_binary(f, l, "\\lor", r),
        Expr::Xor(l, r) => write_binary(f, l, "\\oplus", r),
        Expr::Xnor(l, r) => write_binary(f, l, "\\leftrightarrow", r),
        Expr::Nand(l, r) => write_binary(f, l, "\\uparrow", r),
        Expr::Nor(l, r) => write_binary(f, l, "\\downarrow", r),
    }
}

fn write_binary(f: &mut fmt::Formatter<'_>, l: &Expr, op: &str, r: &Expr) -> fmt::Result {
    write!(f, "(")?;
    write_latex(l, f)?;
    write!(f, " {} ", op)?;
    write_latex(r, f)?;
    write!(f, ")")
}

impl Expr {
    /// Convenience wrapper around [`LatexExpr`].
    pub fn to_latex(&self) -> String {
        LatexExpr(self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_and_or_not() {
        let e = Expr::or(
            Expr::and(Expr::var("A"), Expr::var("B")),
            Expr::not(Expr::var("C")),
        );
        assert_eq!(e.to_latex(), "((A \\land B) \\lor \\lnot (C))");
    }

    #[test]
    fn test_latex_xnor() {
        let e = Expr::xnor(Expr::var("A"), Expr::var("B"));
        assert_eq!(e.to_latex(), "(A \\leftrightarrow B)");
    }
}
