//! Opaque index types for the model's worlds/individuals and for pegs.
//! Wrapping `usize` rather than passing bare integers around keeps the
//! three index spaces from being mixed up at call sites.

use std::fmt;

/// An opaque identifier for a possible world, bounded by
/// [`crate::model::Model::world_cardinality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct World(pub usize);

/// An opaque identifier for an individual in the model's domain,
/// bounded by [`crate::model::Model::domain_cardinality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Individual(pub usize);

/// A discourse-referent slot index. Pegs of a referent system are
/// dense: they are exactly the integers in `[0, peg_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Peg(pub usize);

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}
