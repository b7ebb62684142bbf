//! Sub-state enumeration: every `k`-element subset of the "ignorant
//! possibilities over worlds `0..n`", used by the semantic relations
//! to quantify over all information states of a given cardinality
//! definable over the model's worlds.
//!
//! Every possibility generated here shares one fresh referent system
//! per *sub-state*, not one per possibility — consistent with the
//! invariant [`crate::state::InformationState::create`] establishes,
//! and with what would otherwise be an immediate violation the moment
//! such a state were fed into `update`.

use crate::ids::World;
use crate::possibility::Possibility;
use crate::referent::ReferentSystem;
use crate::state::InformationState;

/// Every `k`-element subset of `{ignorant possibility over world w :
/// w in 0..n}`.
///
/// - `k == 0` yields the single empty state.
/// - `k > n` yields no states (there aren't `k` distinct worlds to pick
///   from).
pub fn generate_sub_states(n: usize, k: usize) -> Vec<InformationState> {
    if k == 0 {
        return vec![InformationState::empty()];
    }
    if k > n {
        return Vec::new();
    }

    combinations(0..n, k)
        .into_iter()
        .map(|worlds| {
            let referent_system = ReferentSystem::empty();
            InformationState::from_possibilities(worlds.into_iter().map(|w| {
                Possibility::new(referent_system.clone(), Default::default(), World(w))
            }))
        })
        .collect()
}

/// All `k`-element subsets of `range`, in ascending order.
fn combinations(range: std::ops::Range<usize>, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let items: Vec<usize> = range.collect();
    if k > items.len() {
        return Vec::new();
    }

    let mut result = Vec::new();
    combinations_helper(&items, k, 0, &mut Vec::with_capacity(k), &mut result);
    result
}

fn combinations_helper(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    result: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }
    for i in start..items.len() {
        current.push(items[i]);
        combinations_helper(items, k, i + 1, current, result);
        current.pop();
    }
}
