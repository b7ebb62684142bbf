//! An update-semantics evaluator for quantified modal logic.
//!
//! A formula is evaluated against an [`InformationState`] and a
//! [`Model`], producing a new, usually smaller, state: predications and
//! identities filter possibilities, negation and the modals test
//! without committing to new discourse referents, conjunction and the
//! quantifiers thread state through their subformulas, and anaphora
//! across formulas is carried by the referent system's pegs rather
//! than by variable names.
//!
//! This crate owns the evaluator, the state and referent-system
//! machinery underneath it, and the derived semantic relations
//! (consistency, support, entailment, equivalence). It does not parse
//! formulas from text, does not interpret predicates against any
//! concrete world, and does not format a formula back to a string for
//! anything but error traces — those are supplied by the caller
//! through [`Model`] and [`FormulaPrinter`].

pub mod error;
pub mod evaluator;
pub mod expr;
pub mod ids;
pub mod model;
pub mod possibility;
pub mod referent;
pub mod relations;
pub mod state;
pub mod substates;

#[cfg(test)]
mod testmodel;

#[cfg(test)]
mod proptests;

pub use error::{GsvError, GsvResult};
pub use evaluator::evaluate;
pub use expr::{BinaryOp, DefaultPrinter, Expression, FormulaPrinter, Quantifier, Term, UnaryOp};
pub use ids::{Individual, Peg, World};
pub use model::{Model, Tuple};
pub use possibility::Possibility;
pub use referent::{NotBound, ReferentSystem};
pub use relations::{
    allows, coherent, consistent, consistent_over_model, entails, entails_0, entails_c, entails_g,
    equivalent, is_supported_by, supports,
};
pub use state::InformationState;
pub use substates::generate_sub_states;
