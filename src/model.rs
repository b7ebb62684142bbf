//! The `Model` interface consumed by the evaluator.
//!
//! A concrete model — worlds, a domain of individuals, and term/
//! predicate denotations per world — is an external collaborator:
//! this crate only ever calls through the trait, never owns a
//! concrete implementation.

use crate::ids::{Individual, World};

/// A tuple of individuals — one row of a predicate's extension at a
/// world.
pub type Tuple = Vec<Individual>;

/// External collaborator supplying world/individual cardinalities and
/// term/predicate denotations.
///
/// `term_interpretation` and `predicate_interpretation` return
/// `Result<_, String>` rather than an `Option`: an uninterpreted term
/// or predicate is an explicit failure, not an absence to be silently
/// defaulted.
pub trait Model {
    /// Number of worlds in the model; worlds are `0..world_cardinality()`.
    fn world_cardinality(&self) -> usize;

    /// Number of individuals in the model's domain; individuals are
    /// `0..domain_cardinality()`.
    fn domain_cardinality(&self) -> usize;

    /// The individual a constant denotes at `world`.
    fn term_interpretation(&self, literal: &str, world: World) -> Result<Individual, String>;

    /// The extension of a predicate at `world`, as a set of argument
    /// tuples.
    fn predicate_interpretation(
        &self,
        literal: &str,
        world: World,
    ) -> Result<Vec<Tuple>, String>;
}
