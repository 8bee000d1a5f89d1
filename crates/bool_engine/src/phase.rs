//! Simplification phases for the phase-based pipeline.
//!
//! The simplifier executes rules in a fixed phase order:
//! 1. NegationNormalize - operator expansion + negation-chain collapse, once up front
//! 2. ConstantFold - constant identities to fixed point
//! 3. ContradictionCheck - deep contradiction/tautology, short-circuits on a constant
//! 4. Algebraic - idempotence, absorption, factoring, consensus to fixed point
//! 5. DeMorgan - at most one application per run, then negation cleanup
//! 6. FinalCleanup - whole library again, for residual negated groups
//!    and whatever resolving them exposes
//!
//! Key invariant: DeMorgan never loops. The law is self-inverse, so a
//! single application plus the seen-set is what keeps the run cycle-free.

/// Phase of the simplification pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimplifyPhase {
    NegationNormalize,
    ConstantFold,
    ContradictionCheck,
    Algebraic,
    DeMorgan,
    FinalCleanup,
}

impl SimplifyPhase {
    /// Returns all phases in pipeline order.
    pub fn all() -> &'static [SimplifyPhase] {
        &[
            SimplifyPhase::NegationNormalize,
            SimplifyPhase::ConstantFold,
            SimplifyPhase::ContradictionCheck,
            SimplifyPhase::Algebraic,
            SimplifyPhase::DeMorgan,
            SimplifyPhase::FinalCleanup,
        ]
    }
}

impl std::fmt::Display for SimplifyPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegationNormalize => write!(f, "NegationNormalize"),
            Self::ConstantFold => write!(f, "ConstantFold"),
            Self::ContradictionCheck => write!(f, "ContradictionCheck"),
            Self::Algebraic => write!(f, "Algebraic"),
            Self::DeMorgan => write!(f, "DeMorgan"),
            Self::FinalCleanup => write!(f, "FinalCleanup"),
        }
    }
}

/// Iteration limits for one simplify call. These bound the step trace at
/// (number of rules) x (max applications per rule); they are configuration,
/// not a wall-clock guarantee.
#[derive(Debug, Clone, Copy)]
pub struct SimplifyOptions {
    /// Restarts allowed inside a single phase loop.
    pub max_iterations_per_phase: usize,
    /// Cap on successful applications of any one rule per run.
    pub max_applications_per_rule: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            max_iterations_per_phase: 64,
            max_applications_per_rule: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let all = SimplifyPhase::all();
        assert_eq!(all.first(), Some(&SimplifyPhase::NegationNormalize));
        assert_eq!(all.last(), Some(&SimplifyPhase::FinalCleanup));
        assert_eq!(all.len(), 6);
    }
}
