//! `Possibility`: a referent system, a peg→individual assignment, and
//! a world.

use std::collections::HashMap;

use crate::ids::{Individual, Peg, World};
use crate::referent::{NotBound, ReferentSystem};

/// One concrete way the described situation could be: a world plus a
/// (partial) assignment from pegs to individuals.
///
/// `PartialEq`/`Hash`/`Eq` compare world and assignment content only —
/// not the referent system's identity. Two possibilities that happen
/// to hold distinct referent-system instances but agree on world and
/// assignment are equal, since the assignment map already reflects
/// every peg actually reachable.
#[derive(Debug, Clone)]
pub struct Possibility {
    referent_system: ReferentSystem,
    assignment: HashMap<Peg, Individual>,
    world: World,
}

impl Possibility {
    /// Construct a possibility directly. Callers are responsible for
    /// the invariant that every peg reachable through the referent
    /// system's bindings is mapped in `assignment`.
    pub fn new(referent_system: ReferentSystem, assignment: HashMap<Peg, Individual>, world: World) -> Possibility {
        Possibility {
            referent_system,
            assignment,
            world,
        }
    }

    pub fn world(&self) -> World {
        self.world
    }

    pub fn referent_system(&self) -> &ReferentSystem {
        &self.referent_system
    }

    pub fn assignment(&self) -> &HashMap<Peg, Individual> {
        &self.assignment
    }

    /// `variableDenotation(variable) → individual | NotBound`.
    pub fn variable_denotation(&self, variable: &str) -> Result<Individual, NotBound> {
        let peg = self.referent_system.value(variable)?;
        self.assignment.get(&peg).copied().ok_or(NotBound)
    }

    /// `update(variable, individual)`: introduces `variable` in this
    /// possibility's referent system and maps the newly created peg to
    /// `individual`.
    ///
    /// Consumes `self` and returns a new possibility rather than
    /// mutating in place, so there is no way to observe a half-updated
    /// possibility from elsewhere.
    pub fn update(self, variable: &str, individual: Individual) -> Possibility {
        let (new_referent_system, new_peg) = self.referent_system.introduce(variable);
        let mut assignment = self.assignment;
        assignment.insert(new_peg, individual);
        Possibility {
            referent_system: new_referent_system,
            assignment,
            world: self.world,
        }
    }

    /// `extends(p2, p1) → bool`: `self` (p2) extends `other` (p1) iff
    /// they agree on world and `self` maps every peg `other` maps to
    /// the same individual. Pegs present only in `self` are new
    /// discourse referents and are unrestricted.
    pub fn extends(&self, other: &Possibility) -> bool {
        if self.world != other.world {
            return false;
        }
        other
            .assignment
            .iter()
            .all(|(peg, individual)| self.assignment.get(peg) == Some(individual))
    }
}

impl PartialEq for Possibility {
    fn eq(&self, other: &Self) -> bool {
        self.world == other.world && self.assignment == other.assignment
    }
}

impl Eq for Possibility {}

impl std::hash::Hash for Possibility {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.world.hash(state);
        let mut entries: Vec<_> = self.assignment.iter().collect();
        entries.sort_by_key(|(peg, _)| peg.0);
        for (peg, individual) in entries {
            peg.hash(state);
            individual.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignorant(world: usize) -> Possibility {
        Possibility::new(ReferentSystem::empty(), HashMap::new(), World(world))
    }

    #[test]
    fn extends_is_reflexive() {
        let p = ignorant(0).update("x", Individual(3));
        assert!(p.extends(&p));
    }

    #[test]
    fn extends_allows_new_unrestricted_pegs() {
        let p0 = ignorant(0);
        let p1 = p0.clone().update("x", Individual(1));
        assert!(p1.extends(&p0));
        assert!(!p0.extends(&p1));
    }

    #[test]
    fn extends_requires_same_world() {
        let p0 = ignorant(0);
        let p1 = ignorant(1);
        assert!(!p1.extends(&p0));
    }

    #[test]
    fn structural_equality_ignores_referent_system_identity() {
        // Two independently constructed referent systems, same content.
        let r1 = ReferentSystem::empty();
        let (r1, _) = r1.introduce("x");
        let r2 = ReferentSystem::empty();
        let (r2, _) = r2.introduce("x");

        let mut a1 = HashMap::new();
        a1.insert(Peg(0), Individual(5));
        let mut a2 = HashMap::new();
        a2.insert(Peg(0), Individual(5));

        let p1 = Possibility::new(r1, a1, World(0));
        let p2 = Possibility::new(r2, a2, World(0));
        assert_eq!(p1, p2);
    }

    #[test]
    fn variable_denotation_fails_when_unbound() {
        let p = ignorant(0);
        assert_eq!(p.variable_denotation("x"), Err(NotBound));
    }
}
