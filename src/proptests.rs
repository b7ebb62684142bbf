//! Property tests over small generated models, checking invariants
//! that should hold for any model shape rather than just the fixed
//! two-world fixture the unit tests use.

#![cfg(test)]

use proptest::prelude::*;

use crate::expr::{DefaultPrinter, Expression, Term};
use crate::ids::Individual;
use crate::relations::equivalent;
use crate::state::InformationState;
use crate::testmodel::ConfigurableModel;

fn arb_model() -> impl Strategy<Value = ConfigurableModel> {
    (1..4usize, 1..4usize).prop_flat_map(|(worlds, individuals)| {
        prop::collection::vec(
            prop::collection::vec(0..individuals, 0..=individuals),
            worlds,
        )
        .prop_map(move |extensions| ConfigurableModel {
            individuals,
            extensions,
        })
    })
}

proptest! {
    #[test]
    fn create_state_extends_itself(model in arb_model()) {
        let sigma = InformationState::create(&model);
        prop_assert!(sigma.extends(&sigma));
    }

    #[test]
    fn update_produces_a_descendant_state(model in arb_model(), individual in 0..3usize) {
        let sigma = InformationState::create(&model);
        let updated = sigma.update("x", Individual(individual));
        prop_assert!(sigma.subsists_in(&updated));
    }

    #[test]
    fn subsistence_is_transitive_across_two_updates(
        model in arb_model(),
        a in 0..3usize,
        b in 0..3usize,
    ) {
        let sigma0 = InformationState::create(&model);
        let sigma1 = sigma0.update("x", Individual(a));
        let sigma2 = sigma1.update("y", Individual(b));
        prop_assert!(sigma0.subsists_in(&sigma1));
        prop_assert!(sigma1.subsists_in(&sigma2));
        prop_assert!(sigma0.subsists_in(&sigma2));
    }

    #[test]
    fn a_formula_is_equivalent_to_itself(model in arb_model()) {
        let expr = Expression::exists("x", Expression::predication("P", vec![Term::var("x")]));
        prop_assert!(equivalent(&expr, &expr, &model, &DefaultPrinter).unwrap());
    }
}
