//! `InformationState`: a set of possibilities, with creation from a
//! model, update by introducing a discourse referent, and the
//! descendant/subsistence relations the evaluator and the semantic
//! relations are built from.

use std::collections::HashSet;

use crate::ids::{Individual, World};
use crate::model::Model;
use crate::possibility::Possibility;
use crate::referent::ReferentSystem;

/// A set of possibilities. Deduplicated by [`Possibility`]'s structural
/// equality, not by insertion order — two structurally identical
/// possibilities collapse into one.
#[derive(Debug, Clone, Default)]
pub struct InformationState {
    possibilities: HashSet<Possibility>,
}

impl InformationState {
    pub fn empty() -> InformationState {
        InformationState {
            possibilities: HashSet::new(),
        }
    }

    pub fn from_possibilities(possibilities: impl IntoIterator<Item = Possibility>) -> InformationState {
        InformationState {
            possibilities: possibilities.into_iter().collect(),
        }
    }

    /// `create(model)`: the ignorant state — one possibility per world,
    /// all sharing one empty referent system, no discourse referents
    /// introduced.
    pub fn create(model: &dyn Model) -> InformationState {
        let referent_system = ReferentSystem::empty();
        let possibilities = (0..model.world_cardinality())
            .map(|w| Possibility::new(referent_system.clone(), Default::default(), World(w)))
            .collect();
        InformationState { possibilities }
    }

    pub fn is_empty(&self) -> bool {
        self.possibilities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.possibilities.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Possibility> {
        self.possibilities.iter()
    }

    pub fn contains(&self, possibility: &Possibility) -> bool {
        self.possibilities.contains(possibility)
    }

    /// `update(state, variable, individual)`: one fresh referent system
    /// extending the state's common one by introducing `variable`,
    /// shared by every output possibility; each output possibility
    /// copies its input's world and assignment, then maps the new peg
    /// to `individual`.
    pub fn update(&self, variable: &str, individual: Individual) -> InformationState {
        // All possibilities in one state share a common referent
        // system by construction, so one `introduce` call fixes the
        // fresh peg and the new shared system for everyone.
        let common = self
            .possibilities
            .iter()
            .next()
            .map(|p| p.referent_system().clone())
            .unwrap_or_else(ReferentSystem::empty);
        let (fresh_referent_system, fresh_peg) = common.introduce(variable);

        let possibilities = self
            .possibilities
            .iter()
            .map(|possibility| {
                let mut assignment = possibility.assignment().clone();
                assignment.insert(fresh_peg, individual);
                Possibility::new(fresh_referent_system.clone(), assignment, possibility.world())
            })
            .collect();

        InformationState { possibilities }
    }

    /// `extends(s2, s1) → bool`: every possibility in `self` (s2)
    /// extends some possibility in `other` (s1).
    pub fn extends(&self, other: &InformationState) -> bool {
        self.possibilities
            .iter()
            .all(|p2| other.possibilities.iter().any(|p1| p2.extends(p1)))
    }

    /// `isDescendantOf(p2, p1, s) → bool`: `p2 ∈ s` and `p2` extends
    /// `p1`.
    pub fn is_descendant_of(&self, p2: &Possibility, p1: &Possibility) -> bool {
        self.possibilities.contains(p2) && p2.extends(p1)
    }

    /// `subsistsIn(p, s) → bool`: some possibility of `s` (`self`) is a
    /// descendant of `p`.
    pub fn possibility_subsists_in(&self, p: &Possibility) -> bool {
        self.possibilities.iter().any(|descendant| descendant.extends(p))
    }

    /// `subsistsIn(s1, s2) → bool`: every possibility of `s1` (`self`)
    /// subsists in `s2` (`other`).
    pub fn subsists_in(&self, other: &InformationState) -> bool {
        self.possibilities
            .iter()
            .all(|p| other.possibility_subsists_in(p))
    }
}

impl IntoIterator for InformationState {
    type Item = Possibility;
    type IntoIter = std::collections::hash_set::IntoIter<Possibility>;

    fn into_iter(self) -> Self::IntoIter {
        self.possibilities.into_iter()
    }
}

impl FromIterator<Possibility> for InformationState {
    fn from_iter<T: IntoIterator<Item = Possibility>>(iter: T) -> Self {
        InformationState {
            possibilities: iter.into_iter().collect(),
        }
    }
}
