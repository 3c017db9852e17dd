use std::collections::BTreeSet;

use bit_set::BitSet;

use super::DistinguishabilityTable;
use crate::{Dfa, StateId};

/// A partition of the state set of a [`Dfa`] into blocks of pairwise non-distinguishable
/// states. Every state belongs to exactly one block and no block is empty.
///
/// Blocks are stored in discovery order: states are scanned ascending and each
/// not-yet-assigned state opens the next block, so the block containing state `0` is always
/// block `0`. The block index is the state index of the corresponding state in the
/// minimized automaton, which makes this ordering observable and part of the contract.
#[derive(Debug, Clone)]
pub struct Partition(Vec<BTreeSet<StateId>>);

impl std::ops::Deref for Partition {
    type Target = Vec<BTreeSet<StateId>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a BTreeSet<StateId>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<StateId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|block| other.contains(block))
    }
}
impl Eq for Partition {}

impl Partition {
    /// Returns the size of the partition, i.e. the number of blocks.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Groups the states of `dfa` into blocks of mutually non-distinguishable states.
    ///
    /// Growing a block only ever compares its opening state `i` against later states; this
    /// is sound because the table is closed under transitions, so two states that are both
    /// non-distinguishable from `i` cannot be distinguishable from each other.
    pub fn from_table(dfa: &Dfa, table: &DistinguishabilityTable) -> Self {
        let mut assigned = BitSet::with_capacity(dfa.state_count());
        let mut blocks = Vec::new();
        for state in dfa.states() {
            if assigned.contains(state) {
                continue;
            }
            assigned.insert(state);
            let mut block = BTreeSet::from([state]);
            for candidate in state + 1..dfa.state_count() {
                if !assigned.contains(candidate) && !table.distinguishable(state, candidate) {
                    assigned.insert(candidate);
                    block.insert(candidate);
                }
            }
            blocks.push(block);
        }
        Self(blocks)
    }

    /// Returns the index of the block containing `state`, or `None` if the state is not
    /// covered by the partition.
    pub fn class_of(&self, state: StateId) -> Option<usize> {
        self.0.iter().position(|block| block.contains(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::Partition;
    use crate::minimization::DistinguishabilityTable;
    use crate::prelude::*;

    fn alternating() -> Dfa {
        // single-symbol cycle accepting on odd positions
        Dfa::from_parts(
            Alphabet::of_size(1),
            vec![vec![1], vec![2], vec![3], vec![0]],
            [1, 3],
        )
        .unwrap()
    }

    #[test_log::test]
    fn blocks_follow_discovery_order() {
        let dfa = alternating();
        let partition = Partition::from_table(&dfa, &DistinguishabilityTable::build(&dfa));
        assert_eq!(partition.size(), 2);
        assert_eq!(partition[0].iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(partition[1].iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test_log::test]
    fn every_state_lies_in_exactly_one_block() {
        let dfa = crate::tests::wiki_dfa();
        let partition = Partition::from_table(&dfa, &DistinguishabilityTable::build(&dfa));
        for state in dfa.states() {
            let containing = partition
                .iter()
                .filter(|block| block.contains(&state))
                .count();
            assert_eq!(containing, 1, "state {state} is in {containing} blocks");
        }
        let covered: usize = partition.iter().map(|block| block.len()).sum();
        assert_eq!(covered, dfa.state_count());
    }

    #[test_log::test]
    fn singleton_blocks_for_an_already_minimal_automaton() {
        let dfa = Dfa::from_parts(
            Alphabet::of_size(2),
            vec![vec![1, 2], vec![1, 2], vec![2, 2]],
            [1],
        )
        .unwrap();
        let partition = Partition::from_table(&dfa, &DistinguishabilityTable::build(&dfa));
        assert_eq!(partition.size(), 3);
        assert!(partition.iter().all(|block| block.len() == 1));
        assert_eq!(partition.class_of(2), Some(2));
        assert_eq!(partition.class_of(7), None);
    }
}
