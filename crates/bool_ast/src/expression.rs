use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// A Boolean expression tree.
///
/// Trees are immutable once built: every rewrite produces a new node and
/// shares untouched children through `Rc`. Equality and hashing are
/// structural, independent of node identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Const(bool),
    Var(String),
    Not(Rc<Expr>),
    And(Rc<Expr>, Rc<Expr>),
    Or(Rc<Expr>, Rc<Expr>),
    Xor(Rc<Expr>, Rc<Expr>),
    Xnor(Rc<Expr>, Rc<Expr>),
    Nand(Rc<Expr>, Rc<Expr>),
    Nor(Rc<Expr>, Rc<Expr>),
}

/// Output notation selector for `format_expr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Standard,
    Latex,
}

impl Expr {
    // Helper constructors for cleaner code
    pub fn constant(value: bool) -> Rc<Self> {
        Rc::new(Expr::Const(value))
    }

    pub fn var(name: &str) -> Rc<Self> {
        Rc::new(Expr::Var(name.to_string()))
    }

    pub fn not(operand: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Not(operand))
    }

    pub fn and(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::And(lhs, rhs))
    }

    pub fn or(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Or(lhs, rhs))
    }

    pub fn xor(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Xor(lhs, rhs))
    }

    pub fn xnor(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Xnor(lhs, rhs))
    }

    pub fn nand(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Nand(lhs, rhs))
    }

    pub fn nor(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Nor(lhs, rhs))
    }

    /// True when the expression is a bare constant.
    pub fn is_const(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    /// Sorted list of distinct variable names appearing in the tree.
    pub fn variables(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().collect()
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(name) => {
                names.insert(name.clone());
            }
            Expr::Not(inner) => inner.collect_variables(names),
            Expr::And(l, r)
            | Expr::Or(l, r)
            | Expr::Xor(l, r)
            | Expr::Xnor(l, r)
            | Expr::Nand(l, r)
            | Expr::Nor(l, r) => {
                l.collect_variables(names);
                r.collect_variables(names);
            }
        }
    }

    /// Number of nodes in the tree. Used by the engine as a cheap size metric.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(inner) => 1 + inner.node_count(),
            Expr::And(l, r)
            | Expr::Or(l, r)
            | Expr::Xor(l, r)
            | Expr::Xnor(l, r)
            | Expr::Nand(l, r)
            | Expr::Nor(l, r) => 1 + l.node_count() + r.node_count(),
        }
    }
}

// Standard notation, fully parenthesized. No precedence-dependent paren
// omission: the output must re-parse to an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(false) => write!(f, "0"),
            Expr::Const(true) => write!(f, "1"),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(inner) => write!(f, "!({})", inner),
            Expr::And(l, r) => write!(f, "({} * {})", l, r),
            Expr::Or(l, r) => write!(f, "({} + {})", l, r),
            Expr::Xor(l, r) => write!(f, "({} ^ {})", l, r),
            Expr::Xnor(l, r) => write!(f, "({} <-> {})", l, r),
            Expr::Nand(l, r) => write!(f, "({} @ {})", l, r),
            Expr::Nor(l, r) => write!(f, "({} # {})", l, r),
        }
    }
}
