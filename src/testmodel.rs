//! Test-only `Model` fixture shared across this crate's unit and
//! property tests.
//!
//! Not part of the public API — a concrete model is an external
//! collaborator, so this is the engine's test stand-in only.

#![cfg(test)]

use crate::ids::{Individual, World};
use crate::model::{Model, Tuple};

/// 2 worlds, 2 individuals, one predicate `P` with extension `{e0}` at
/// w0 and `{e0, e1}` at w1, no constants.
#[derive(Debug, Default)]
pub(crate) struct TwoWorldTwoIndividualModel;

impl Model for TwoWorldTwoIndividualModel {
    fn world_cardinality(&self) -> usize {
        2
    }

    fn domain_cardinality(&self) -> usize {
        2
    }

    fn term_interpretation(&self, literal: &str, _world: World) -> Result<Individual, String> {
        Err(format!("no constants in this model: {literal}"))
    }

    fn predicate_interpretation(&self, literal: &str, world: World) -> Result<Vec<Tuple>, String> {
        match (literal, world.0) {
            ("P", 0) => Ok(vec![vec![Individual(0)]]),
            ("P", 1) => Ok(vec![vec![Individual(0)], vec![Individual(1)]]),
            ("P", _) => Err(format!("world out of range: {world}")),
            _ => Err(format!("uninterpreted predicate: {literal}")),
        }
    }
}

/// A configurable model for property tests: `worlds` predicate
/// extensions indexed by world, arity-1 predicate `P` only.
#[derive(Debug, Clone)]
pub(crate) struct ConfigurableModel {
    pub individuals: usize,
    /// `extensions[w]` is the set of individuals satisfying `P` at
    /// world `w`.
    pub extensions: Vec<Vec<usize>>,
}

impl Model for ConfigurableModel {
    fn world_cardinality(&self) -> usize {
        self.extensions.len()
    }

    fn domain_cardinality(&self) -> usize {
        self.individuals
    }

    fn term_interpretation(&self, literal: &str, _world: World) -> Result<Individual, String> {
        Err(format!("no constants in this model: {literal}"))
    }

    fn predicate_interpretation(&self, literal: &str, world: World) -> Result<Vec<Tuple>, String> {
        if literal != "P" {
            return Err(format!("uninterpreted predicate: {literal}"));
        }
        self.extensions
            .get(world.0)
            .map(|individuals| individuals.iter().map(|&i| vec![Individual(i)]).collect())
            .ok_or_else(|| format!("world out of range: {world}"))
    }
}
