//! The phased rewrite engine.
//!
//! `simplify` never fails on a well-formed tree: if no rule applies it
//! returns the input unchanged with zero steps. Termination is enforced
//! three ways: a seen-set of structural fingerprints (a candidate result
//! already seen is discarded without recording a step), a per-rule
//! application cap, and a per-phase iteration bound. De Morgan gets one
//! dedicated application per run; negated groups it leaves behind are
//! resolved in the final cleanup phase under the same caps.

use crate::fingerprint::expr_fingerprint;
use crate::phase::{SimplifyOptions, SimplifyPhase};
use crate::rule::Rule;
use crate::rules::*;
use crate::step::{SimplificationResult, Step};
use crate::transform;
use bool_ast::Expr;
use rustc_hash::{FxHashMap, FxHashSet};
use std::rc::Rc;
use tracing::{debug, trace};

pub struct Simplifier {
    negation_rules: Vec<Rc<dyn Rule>>,
    constant_rules: Vec<Rc<dyn Rule>>,
    contradiction_rules: Vec<Rc<dyn Rule>>,
    algebraic_rules: Vec<Rc<dyn Rule>>,
    demorgan_rules: Vec<Rc<dyn Rule>>,
    cleanup_rules: Vec<Rc<dyn Rule>>,
    pub options: SimplifyOptions,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

/// Per-run bookkeeping: the seen-set, per-rule counters, and the trace.
struct RunState {
    seen: FxHashSet<u64>,
    rule_apps: FxHashMap<&'static str, usize>,
    steps: Vec<Step>,
}

impl Simplifier {
    pub fn with_default_rules() -> Self {
        Self {
            negation_rules: vec![Rc::new(negation::DoubleNegationRule)],
            constant_rules: vec![
                Rc::new(constants::NotConstantRule),
                Rc::new(constants::AndIdentityRule),
                Rc::new(constants::AndDominationRule),
                Rc::new(constants::OrIdentityRule),
                Rc::new(constants::OrDominationRule),
            ],
            contradiction_rules: vec![
                Rc::new(contradiction::ContradictionRule),
                Rc::new(contradiction::TautologyRule),
            ],
            algebraic_rules: vec![
                Rc::new(idempotence::AndIdempotenceRule),
                Rc::new(idempotence::OrIdempotenceRule),
                Rc::new(absorption::AndAbsorptionRule),
                Rc::new(absorption::OrAbsorptionRule),
                Rc::new(distributive::FactorAndFromOrRule),
                Rc::new(distributive::FactorOrFromAndRule),
                Rc::new(consensus::ConsensusRule),
            ],
            demorgan_rules: vec![
                Rc::new(demorgan::DeMorganAndRule),
                Rc::new(demorgan::DeMorganOrRule),
            ],
            // Residual cleanup sees the whole library: the one-shot De
            // Morgan phase can leave negated groups behind, and resolving
            // them here can re-expose constant and algebraic redexes. The
            // seen-set and per-rule caps still bound this loop.
            cleanup_rules: vec![
                Rc::new(negation::DoubleNegationRule),
                Rc::new(constants::NotConstantRule),
                Rc::new(constants::AndIdentityRule),
                Rc::new(constants::AndDominationRule),
                Rc::new(constants::OrIdentityRule),
                Rc::new(constants::OrDominationRule),
                Rc::new(contradiction::ContradictionRule),
                Rc::new(contradiction::TautologyRule),
                Rc::new(idempotence::AndIdempotenceRule),
                Rc::new(idempotence::OrIdempotenceRule),
                Rc::new(absorption::AndAbsorptionRule),
                Rc::new(absorption::OrAbsorptionRule),
                Rc::new(distributive::FactorAndFromOrRule),
                Rc::new(distributive::FactorOrFromAndRule),
                Rc::new(consensus::ConsensusRule),
                Rc::new(demorgan::DeMorganAndRule),
                Rc::new(demorgan::DeMorganOrRule),
            ],
            options: SimplifyOptions::default(),
        }
    }

    pub fn simplify(&self, expr: &Rc<Expr>) -> SimplificationResult {
        let mut state = RunState {
            seen: FxHashSet::default(),
            rule_apps: FxHashMap::default(),
            steps: Vec::new(),
        };
        let mut current = expr.clone();
        state.seen.insert(expr_fingerprint(&current));

        // Phase 1: operator expansion, then negation-chain collapse.
        current = self.expand_operators(current, &mut state);
        current = self.run_phase(
            SimplifyPhase::NegationNormalize,
            &self.negation_rules,
            current,
            &mut state,
        );

        // Phase 2: constant folding to fixed point.
        current = self.run_phase(
            SimplifyPhase::ConstantFold,
            &self.constant_rules,
            current,
            &mut state,
        );

        // Phase 3: deep contradiction/tautology. A constant result ends
        // the run: nothing further can simplify a fixed constant.
        current = self.run_phase(
            SimplifyPhase::ContradictionCheck,
            &self.contradiction_rules,
            current,
            &mut state,
        );
        if current.is_const() {
            debug!(result = %current, "short-circuit on constant");
            return SimplificationResult {
                steps: state.steps,
                final_expression: current,
            };
        }

        // Phase 4: general algebraic laws to fixed point.
        current = self.run_phase(
            SimplifyPhase::Algebraic,
            &self.algebraic_rules,
            current,
            &mut state,
        );

        // Phase 5: De Morgan once, then clean up the negations it
        // introduced.
        current = self.apply_demorgan_once(current, &mut state);
        current = self.run_phase(
            SimplifyPhase::NegationNormalize,
            &self.negation_rules,
            current,
            &mut state,
        );

        // Phase 6: residual cleanup.
        current = self.run_phase(
            SimplifyPhase::FinalCleanup,
            &self.cleanup_rules,
            current,
            &mut state,
        );

        SimplificationResult {
            steps: state.steps,
            final_expression: current,
        }
    }

    /// Expand XNOR/XOR/NAND/NOR down to AND/OR/NOT, recording one step per
    /// operator family that was actually present.
    fn expand_operators(&self, mut current: Rc<Expr>, state: &mut RunState) -> Rc<Expr> {
        type Expander = fn(&Rc<Expr>) -> Rc<Expr>;
        const EXPANSIONS: [(&str, &str, Expander); 4] = [
            (
                "XNOR Expansion",
                "A <-> B = (A * B) + (!A * !B)",
                transform::expand_xnor,
            ),
            (
                "XOR Expansion",
                "A ^ B = (A * !B) + (!A * B)",
                transform::expand_xor,
            ),
            ("NAND Expansion", "A @ B = !(A * B)", transform::expand_nand),
            ("NOR Expansion", "A # B = !(A + B)", transform::expand_nor),
        ];

        for (name, formula, expand) in EXPANSIONS {
            let next = expand(&current);
            if *next != *current {
                debug!(rule = name, after = %next, "expanded");
                state.seen.insert(expr_fingerprint(&next));
                state.steps.push(Step::new(
                    name,
                    formula,
                    format!("{} = {}", current, next),
                    current.clone(),
                    next.clone(),
                ));
                current = next;
            }
        }
        current
    }

    /// Bounded phase loop: try each rule in order, restart from the first
    /// rule on success, stop when no rule applies or the iteration bound
    /// is hit.
    fn run_phase(
        &self,
        phase: SimplifyPhase,
        rules: &[Rc<dyn Rule>],
        mut current: Rc<Expr>,
        state: &mut RunState,
    ) -> Rc<Expr> {
        let mut iterations = 0usize;
        'restart: loop {
            if iterations >= self.options.max_iterations_per_phase {
                debug!(%phase, iterations, "iteration bound hit");
                break;
            }
            iterations += 1;
            for rule in rules {
                if let Some(next) = self.try_rule(rule.as_ref(), &current, state) {
                    current = next;
                    continue 'restart;
                }
            }
            break;
        }
        current
    }

    /// One De Morgan application per run. Unrestricted De Morgan is
    /// self-inverse and would oscillate; the one-shot restriction is the
    /// cycle-breaker.
    fn apply_demorgan_once(&self, current: Rc<Expr>, state: &mut RunState) -> Rc<Expr> {
        for rule in &self.demorgan_rules {
            if let Some(next) = self.try_rule(rule.as_ref(), &current, state) {
                return next;
            }
        }
        current
    }

    /// Apply one rule at the shallowest matching node. Returns None when
    /// the rule does not match anywhere, is over its application cap, or
    /// the candidate result was already seen in this run.
    fn try_rule(
        &self,
        rule: &dyn Rule,
        current: &Rc<Expr>,
        state: &mut RunState,
    ) -> Option<Rc<Expr>> {
        let applied = state.rule_apps.get(rule.name()).copied().unwrap_or(0);
        if applied >= self.options.max_applications_per_rule {
            trace!(rule = rule.name(), "application cap reached, skipped");
            return None;
        }

        let (candidate, description) = apply_rule_anywhere(rule, current)?;
        let fp = expr_fingerprint(&candidate);
        if state.seen.contains(&fp) {
            trace!(rule = rule.name(), "candidate already seen, discarded");
            return None;
        }

        debug!(rule = rule.name(), after = %candidate, "applied");
        state.seen.insert(fp);
        state.rule_apps.insert(rule.name(), applied + 1);
        state.steps.push(Step::new(
            rule.name(),
            rule.formula(),
            description,
            current.clone(),
            candidate.clone(),
        ));
        Some(candidate)
    }
}

/// Walk the tree root-first and apply the rule at the first node where it
/// matches and actually changes something. The path above the rewritten
/// node is rebuilt; siblings are shared.
fn apply_rule_anywhere(rule: &dyn Rule, expr: &Rc<Expr>) -> Option<(Rc<Expr>, String)> {
    if let Some(rewrite) = rule.apply(expr) {
        if *rewrite.new_expr != **expr {
            return Some((rewrite.new_expr, rewrite.description));
        }
    }
    match &**expr {
        Expr::Const(_) | Expr::Var(_) => None,
        Expr::Not(inner) => {
            apply_rule_anywhere(rule, inner).map(|(n, d)| (Expr::not(n), d))
        }
        Expr::And(l, r) => descend(rule, l, r, Expr::and),
        Expr::Or(l, r) => descend(rule, l, r, Expr::or),
        Expr::Xor(l, r) => descend(rule, l, r, Expr::xor),
        Expr::Xnor(l, r) => descend(rule, l, r, Expr::xnor),
        Expr::Nand(l, r) => descend(rule, l, r, Expr::nand),
        Expr::Nor(l, r) => descend(rule, l, r, Expr::nor),
    }
}

fn descend(
    rule: &dyn Rule,
    l: &Rc<Expr>,
    r: &Rc<Expr>,
    ctor: fn(Rc<Expr>, Rc<Expr>) -> Rc<Expr>,
) -> Option<(Rc<Expr>, String)> {
    if let Some((n, d)) = apply_rule_anywhere(rule, l) {
        return Some((ctor(n, r.clone()), d));
    }
    if let Some((n, d)) = apply_rule_anywhere(rule, r) {
        return Some((ctor(l.clone(), n), d));
    }
    None
}
