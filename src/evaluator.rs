//! The compositional update function: `evaluate(expr, state, model) →
//! Result<state, error>`.
//!
//! A direct recursive `match` over the expression tag, each arm
//! producing a new state and threading `state`/`model`/`printer`
//! through every recursive call, rather than a visitor dispatching on
//! a variant argument — the direct match reads closer to the
//! connective-by-connective update rules it implements.

use tracing::trace;

use crate::error::{GsvError, GsvResult};
use crate::expr::{BinaryOp, Expression, FormulaPrinter, Quantifier, Term, UnaryOp};
use crate::ids::Individual;
use crate::model::Model;
use crate::possibility::Possibility;
use crate::state::InformationState;

/// `⟦expr⟧(σ, M)`: update `state` with `expr` relative to `model`.
///
/// `printer` renders a formula to a string purely for error traces —
/// it has no effect on the returned state.
pub fn evaluate(
    expr: &Expression,
    state: &InformationState,
    model: &dyn Model,
    printer: &dyn FormulaPrinter,
) -> GsvResult<InformationState> {
    evaluate_node(expr, state, model, printer).map_err(|e| e.wrap(printer.print(expr)))
}

fn evaluate_node(
    expr: &Expression,
    state: &InformationState,
    model: &dyn Model,
    printer: &dyn FormulaPrinter,
) -> GsvResult<InformationState> {
    match expr {
        Expression::Predication(predicate, args) => eval_predication(predicate, args, state, model),
        Expression::Identity(left, right) => eval_identity(left, right, state, model),
        Expression::Unary(op, scope) => eval_unary(*op, scope, state, model, printer),
        Expression::Binary(op, left, right) => eval_binary(*op, left, right, state, model, printer),
        Expression::Quantification(q, variable, scope) => {
            eval_quantification(*q, variable, scope, state, model, printer)
        }
    }
}

fn resolve_term(term: &Term, possibility: &Possibility, model: &dyn Model) -> GsvResult<Individual> {
    match term {
        Term::Variable(v) => possibility
            .variable_denotation(v)
            .map_err(|_| GsvError::UnboundVariable(v.clone())),
        Term::Constant(c) => model
            .term_interpretation(c, possibility.world())
            .map_err(|_| GsvError::UninterpretedTerm(c.clone())),
    }
}

fn eval_predication(
    predicate: &str,
    args: &[Term],
    state: &InformationState,
    model: &dyn Model,
) -> GsvResult<InformationState> {
    trace!(predicate, arity = args.len(), "predication");
    let mut kept = Vec::new();
    for p in state.iter() {
        let denotations = args
            .iter()
            .map(|t| resolve_term(t, p, model))
            .collect::<GsvResult<Vec<_>>>()?;
        let extension = model
            .predicate_interpretation(predicate, p.world())
            .map_err(|_| GsvError::UninterpretedPredicate(predicate.to_string()))?;
        if extension.contains(&denotations) {
            kept.push(p.clone());
        }
    }
    Ok(InformationState::from_possibilities(kept))
}

fn eval_identity(
    left: &Term,
    right: &Term,
    state: &InformationState,
    model: &dyn Model,
) -> GsvResult<InformationState> {
    trace!("identity");
    let mut kept = Vec::new();
    for p in state.iter() {
        let l = resolve_term(left, p, model)?;
        let r = resolve_term(right, p, model)?;
        if l == r {
            kept.push(p.clone());
        }
    }
    Ok(InformationState::from_possibilities(kept))
}

fn eval_unary(
    op: UnaryOp,
    scope: &Expression,
    state: &InformationState,
    model: &dyn Model,
    printer: &dyn FormulaPrinter,
) -> GsvResult<InformationState> {
    match op {
        UnaryOp::Neg => {
            trace!("negation");
            let prejacent = evaluate(scope, state, model, printer)?;
            Ok(state
                .iter()
                .filter(|p| !prejacent.possibility_subsists_in(p))
                .cloned()
                .collect())
        }
        UnaryOp::EpistemicPossibility => {
            trace!("epistemic possibility");
            let prejacent = evaluate(scope, state, model, printer)?;
            if prejacent.is_empty() {
                Ok(InformationState::empty())
            } else {
                Ok(state.clone())
            }
        }
        UnaryOp::EpistemicNecessity => {
            trace!("epistemic necessity");
            let prejacent = evaluate(scope, state, model, printer)?;
            if !state.subsists_in(&prejacent) {
                Ok(InformationState::empty())
            } else {
                Ok(state.clone())
            }
        }
    }
}

fn eval_binary(
    op: BinaryOp,
    left: &Expression,
    right: &Expression,
    state: &InformationState,
    model: &dyn Model,
    printer: &dyn FormulaPrinter,
) -> GsvResult<InformationState> {
    match op {
        BinaryOp::Conjunction => {
            trace!("conjunction");
            let after_left = evaluate(left, state, model, printer)?;
            evaluate(right, &after_left, model, printer)
        }
        BinaryOp::Disjunction => {
            trace!("disjunction");
            let sigma_l = evaluate(left, state, model, printer)?;
            let negated_left = Expression::neg(left.clone());
            let sigma_not_l = evaluate(&negated_left, state, model, printer)?;
            let sigma_r = evaluate(right, &sigma_not_l, model, printer)?;
            Ok(state
                .iter()
                .filter(|p| sigma_l.contains(p) || sigma_r.contains(p))
                .cloned()
                .collect())
        }
        BinaryOp::Conditional => {
            trace!("conditional");
            let sigma_ant = evaluate(left, state, model, printer)?;
            let sigma_cons = evaluate(right, &sigma_ant, model, printer)?;
            Ok(state
                .iter()
                .filter(|p| {
                    if !sigma_ant.possibility_subsists_in(p) {
                        return true;
                    }
                    sigma_ant
                        .iter()
                        .filter(|q| q.extends(p))
                        .all(|q| sigma_cons.possibility_subsists_in(q))
                })
                .cloned()
                .collect())
        }
    }
}

fn eval_quantification(
    quantifier: Quantifier,
    variable: &str,
    scope: &Expression,
    state: &InformationState,
    model: &dyn Model,
    printer: &dyn FormulaPrinter,
) -> GsvResult<InformationState> {
    match quantifier {
        Quantifier::Existential => {
            trace!(variable, "existential");
            let mut result = InformationState::empty();
            for d in 0..model.domain_cardinality() {
                let branch_input = state.update(variable, Individual(d));
                let branch_output = evaluate(scope, &branch_input, model, printer)?;
                result = result.into_iter().chain(branch_output).collect();
            }
            Ok(result)
        }
        Quantifier::Universal => {
            trace!(variable, "universal");
            let mut branch_outputs = Vec::with_capacity(model.domain_cardinality());
            for d in 0..model.domain_cardinality() {
                let branch_input = state.update(variable, Individual(d));
                branch_outputs.push(evaluate(scope, &branch_input, model, printer)?);
            }
            Ok(state
                .iter()
                .filter(|p| {
                    branch_outputs
                        .iter()
                        .all(|branch| branch.possibility_subsists_in(p))
                })
                .cloned()
                .collect())
        }
    }
}
