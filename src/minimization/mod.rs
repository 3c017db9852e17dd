//! Table-filling minimization of a [`Dfa`].
//!
//! The pipeline has four stages: [`Dfa::trim`] removes states unreachable from the initial
//! state, [`DistinguishabilityTable::build`] computes the distinguishability relation over
//! state pairs as a fixed point, [`Partition::from_table`] groups the mutually
//! non-distinguishable states into blocks, and the quotient construction synthesizes the
//! reduced transition table from the blocks. [`Dfa::minimize`] chains all four.

mod partition;
mod reachable;
mod table;

pub use partition::Partition;
pub use table::DistinguishabilityTable;

use tracing::debug;

use crate::Dfa;

impl Dfa {
    /// Returns the unique minimal [`Dfa`] that accepts the same language as `self`. The
    /// result contains no unreachable states and no two distinct states of it are
    /// equivalent, so minimization is idempotent.
    pub fn minimize(&self) -> Dfa {
        let trimmed = self.trim();
        let table = DistinguishabilityTable::build(&trimmed);
        let partition = Partition::from_table(&trimmed, &table);
        debug!(
            "minimized from {} to {} states",
            self.state_count(),
            partition.size()
        );
        trimmed.quotient(&partition)
    }

    /// Merges the states of `self` according to `partition`, which must be a congruence:
    /// all states of a block must agree, for every symbol, on the block their successor
    /// lies in. The transition row of a block is derived from its smallest member and a
    /// block is accepting iff any of its members is.
    pub(crate) fn quotient(&self, partition: &Partition) -> Dfa {
        let mut transitions = Vec::with_capacity(partition.size());
        let mut accepting = Vec::new();
        for (id, block) in partition.iter().enumerate() {
            let representative = *block.iter().next().expect("blocks are never empty");
            let row = (0..self.alphabet().size())
                .map(|symbol| {
                    partition
                        .class_of(self.successor(representative, symbol))
                        .expect("partition must cover all states")
                })
                .collect();
            transitions.push(row);
            if block.iter().any(|&state| self.is_accepting(state)) {
                accepting.push(id);
            }
        }
        Dfa::from_parts(self.alphabet().clone(), transitions, accepting)
            .expect("the quotient of a valid automaton is valid")
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn already_minimal() -> Dfa {
        Dfa::from_parts(
            Alphabet::of_size(2),
            vec![vec![1, 2], vec![1, 2], vec![2, 2]],
            [1],
        )
        .unwrap()
    }

    fn alternating() -> Dfa {
        // single-symbol cycle 0 -> 1 -> 2 -> 3 -> 0, accepting on odd positions
        Dfa::from_parts(
            Alphabet::of_size(1),
            vec![vec![1], vec![2], vec![3], vec![0]],
            [1, 3],
        )
        .unwrap()
    }

    fn with_unreachable() -> Dfa {
        // state 3 is declared but never entered from the reachable part
        Dfa::from_parts(
            Alphabet::of_size(2),
            vec![vec![1, 2], vec![1, 2], vec![2, 2], vec![0, 3]],
            [1, 3],
        )
        .unwrap()
    }

    #[test_log::test]
    fn minimal_automata_are_left_alone() {
        let dfa = already_minimal();
        let min = dfa.minimize();
        assert_eq!(min.state_count(), 3);
        assert_eq!(min, dfa);
    }

    #[test_log::test]
    fn equivalent_states_collapse() {
        let min = alternating().minimize();
        assert_eq!(min.state_count(), 2);
        assert!(!min.is_accepting(0));
        assert!(min.is_accepting(1));
        // every step flips between the two blocks
        assert!(min.accepts("a"));
        assert!(!min.accepts("aa"));
        assert!(min.accepts("aaa"));
        assert!(!min.accepts("aaaa"));
    }

    #[test_log::test]
    fn unreachable_states_never_surface() {
        let min = with_unreachable().minimize();
        assert_eq!(min.state_count(), 3);
        for state in min.states() {
            for symbol in 0..min.alphabet().size() {
                assert!(min.successor(state, symbol) < 3);
            }
        }
    }

    #[test_log::test]
    fn minimization_is_deterministic() {
        let dfa = with_unreachable();
        assert_eq!(dfa.minimize(), dfa.minimize());
    }

    #[test_log::test]
    fn minimization_is_idempotent() {
        let min = alternating().minimize();
        assert_eq!(min.minimize(), min);
        let min = crate::tests::wiki_dfa().minimize();
        assert_eq!(min.minimize().state_count(), min.state_count());
    }

    #[test_log::test]
    fn minimized_states_are_pairwise_distinguishable() {
        let min = crate::tests::wiki_dfa().minimize();
        let table = DistinguishabilityTable::build(&min);
        for p in min.states() {
            for q in p + 1..min.state_count() {
                assert!(table.distinguishable(p, q), "{p} and {q} are equivalent");
            }
        }
    }

    #[test_log::test]
    fn initial_state_stays_at_index_zero() {
        let dfa = crate::tests::wiki_dfa();
        let trimmed = dfa.trim();
        let table = DistinguishabilityTable::build(&trimmed);
        let partition = Partition::from_table(&trimmed, &table);
        // state 0 is discovered first, so its block becomes the new initial state
        assert!(partition[0].contains(&Dfa::INITIAL));
        assert_eq!(dfa.minimize().accepts(""), dfa.accepts(""));
    }

    #[cfg(feature = "random")]
    #[test_log::test]
    fn random_automata_stay_language_equivalent() {
        fastrand::seed(0xDFA);
        for _ in 0..20 {
            let dfa = crate::random::generate_random_dfa(2, 8);
            let min = dfa.minimize();
            assert!(min.state_count() <= dfa.state_count());
            for word in crate::random::random_words(dfa.alphabet(), 50, 12) {
                assert_eq!(dfa.accepts(&word), min.accepts(&word), "disagreement on {word:?}");
            }
        }
    }
}
