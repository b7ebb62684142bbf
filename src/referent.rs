//! `ReferentSystem`: the mapping from discourse variable names to
//! pegs, and the fresh-peg counter.
//!
//! One `lasso::Rodeo` interner stays alive for an entire discourse
//! lineage, shared (`Rc<RefCell<Rodeo>>`) across every `ReferentSystem`
//! descended from one `InformationState::create` call, so `Spur` keys
//! stay comparable across the whole lineage without ever re-cloning
//! the string table itself.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use lasso::{Rodeo, Spur};

use crate::ids::Peg;

/// Failure returned by [`ReferentSystem::value`] when a variable has no
/// peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotBound;

/// Maps discourse variable names to peg indices and tracks how many
/// pegs have been introduced so far.
///
/// Cloning a `ReferentSystem` is cheap (an `Rc` clone plus a small
/// `HashMap` clone) and never aliases another system's peg count — see
/// [`ReferentSystem::introduce`].
#[derive(Debug, Clone)]
pub struct ReferentSystem {
    interner: Rc<RefCell<Rodeo>>,
    bindings: HashMap<Spur, Peg>,
    peg_count: usize,
}

impl ReferentSystem {
    /// The empty referent system: no pegs, no bindings, a fresh
    /// interner. Used once per [`crate::state::InformationState::create`]
    /// call and shared (via `Rc`) by every possibility of that state.
    pub fn empty() -> ReferentSystem {
        ReferentSystem {
            interner: Rc::new(RefCell::new(Rodeo::new())),
            bindings: HashMap::new(),
            peg_count: 0,
        }
    }

    pub fn peg_count(&self) -> usize {
        self.peg_count
    }

    /// `value(variable) → peg | NotBound`.
    pub fn value(&self, variable: &str) -> Result<Peg, NotBound> {
        let spur = self.interner.borrow().get(variable).ok_or(NotBound)?;
        self.bindings.get(&spur).copied().ok_or(NotBound)
    }

    /// `domain() → set of variable names`.
    pub fn domain(&self) -> Vec<String> {
        let interner = self.interner.borrow();
        self.bindings
            .keys()
            .map(|spur| interner.resolve(spur).to_owned())
            .collect()
    }

    /// `introduce(variable) → new peg`: always allocates a fresh peg,
    /// even if `variable` was already bound — rebinding shadows the old
    /// peg rather than reusing it. Returns the new system by value so
    /// the peg-counter increment reads as a pure function, not a
    /// mutation visible to anyone still holding `self`.
    pub fn introduce(&self, variable: &str) -> (ReferentSystem, Peg) {
        let spur = self.interner.borrow_mut().get_or_intern(variable);
        let new_peg = Peg(self.peg_count);
        let mut bindings = self.bindings.clone();
        bindings.insert(spur, new_peg);
        (
            ReferentSystem {
                interner: Rc::clone(&self.interner),
                bindings,
                peg_count: self.peg_count + 1,
            },
            new_peg,
        )
    }

    /// `extends(r2, r1) → bool`: `self` (r2) extends `other` (r1) iff
    /// `other`'s peg count doesn't exceed `self`'s, every variable
    /// bound in `other` keeps the same peg in `self` or moves to a peg
    /// that didn't exist in `other`, and every variable new in `self`
    /// also gets a peg that didn't exist in `other`.
    pub fn extends(&self, other: &ReferentSystem) -> bool {
        if other.peg_count > self.peg_count {
            return false;
        }
        let other_interner = other.interner.borrow();
        let self_interner = self.interner.borrow();
        for (&other_spur, &other_peg) in &other.bindings {
            let name = other_interner.resolve(&other_spur);
            let Some(self_spur) = self_interner.get(name) else {
                return false;
            };
            let Some(&self_peg) = self.bindings.get(&self_spur) else {
                return false;
            };
            if self_peg != other_peg && self_peg.0 < other.peg_count {
                return false;
            }
        }
        for (&self_spur, &self_peg) in &self.bindings {
            let name = self_interner.resolve(&self_spur);
            // A name merely being interned in `other`'s (shared) string
            // pool doesn't mean `other` binds it — sibling branches
            // descended from the same common ancestor intern their own
            // variables into that same pool. What matters is whether
            // `other.bindings` itself holds an entry for this name.
            let bound_in_other = other_interner
                .get(name)
                .is_some_and(|other_spur| other.bindings.contains_key(&other_spur));
            if !bound_in_other && self_peg.0 < other.peg_count {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for ReferentSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = self.interner.borrow();
        write!(f, "{{")?;
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(spur, peg)| (interner.resolve(spur).to_owned(), *peg))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (i, (name, peg)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {peg}")?;
        }
        write!(f, "}}")
    }
}
