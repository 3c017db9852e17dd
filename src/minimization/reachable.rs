use bit_set::BitSet;
use tracing::debug;

use crate::{Dfa, Map, StateId};

impl Dfa {
    /// Returns the set of all states reachable from the initial state by following zero or
    /// more transitions, computed with an explicit worklist over the state indices.
    pub fn reachable_states(&self) -> BitSet {
        let mut reachable = BitSet::with_capacity(self.state_count());
        let mut worklist = vec![Self::INITIAL];
        reachable.insert(Self::INITIAL);
        while let Some(state) = worklist.pop() {
            for symbol in 0..self.alphabet().size() {
                let successor = self.successor(state, symbol);
                if reachable.insert(successor) {
                    worklist.push(successor);
                }
            }
        }
        reachable
    }

    /// Removes all states that are not reachable from the initial state, renumbering the
    /// remaining states contiguously while preserving their relative order. Trimming an
    /// automaton without unreachable states returns an identical copy, so the operation is
    /// idempotent.
    pub fn trim(&self) -> Dfa {
        let reachable = self.reachable_states();
        if reachable.len() == self.state_count() {
            return self.clone();
        }
        debug!(
            "dropping {} unreachable states",
            self.state_count() - reachable.len()
        );
        // ascending iteration keeps the relative order of the retained states
        let renumbering: Map<StateId, StateId> = reachable
            .iter()
            .enumerate()
            .map(|(new, old)| (old, new))
            .collect();
        let transitions = reachable
            .iter()
            .map(|state| {
                (0..self.alphabet().size())
                    .map(|symbol| renumbering[&self.successor(state, symbol)])
                    .collect()
            })
            .collect();
        let accepting = self
            .accepting_states()
            .filter_map(|state| renumbering.get(&state).copied());
        Dfa::from_parts(self.alphabet().clone(), transitions, accepting)
            .expect("trimming cannot break the structural invariants")
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn with_unreachable() -> Dfa {
        Dfa::from_parts(
            Alphabet::of_size(2),
            vec![vec![1, 2], vec![1, 2], vec![2, 2], vec![0, 3]],
            [1, 3],
        )
        .unwrap()
    }

    #[test_log::test]
    fn unreachable_states_are_dropped() {
        let trimmed = with_unreachable().trim();
        assert_eq!(trimmed.state_count(), 3);
        assert_eq!(trimmed.accepting_states().collect::<Vec<_>>(), vec![1]);
        assert_eq!(trimmed.successor(0, 0), 1);
        assert_eq!(trimmed.successor(0, 1), 2);
    }

    #[test_log::test]
    fn every_trimmed_state_is_reachable() {
        let trimmed = with_unreachable().trim();
        let reachable = trimmed.reachable_states();
        assert!(trimmed.states().all(|state| reachable.contains(state)));
    }

    #[test_log::test]
    fn trimming_is_idempotent() {
        let trimmed = with_unreachable().trim();
        assert_eq!(trimmed.trim(), trimmed);
    }

    #[test_log::test]
    fn renumbering_preserves_relative_order() {
        // state 1 is unreachable, states 0, 2, 3 survive as 0, 1, 2
        let dfa = Dfa::from_parts(
            Alphabet::of_size(1),
            vec![vec![2], vec![0], vec![3], vec![0]],
            [2],
        )
        .unwrap();
        let trimmed = dfa.trim();
        assert_eq!(trimmed.state_count(), 3);
        assert_eq!(trimmed.successor(0, 0), 1);
        assert_eq!(trimmed.successor(1, 0), 2);
        assert_eq!(trimmed.successor(2, 0), 0);
        assert_eq!(trimmed.accepting_states().collect::<Vec<_>>(), vec![1]);
    }
}
