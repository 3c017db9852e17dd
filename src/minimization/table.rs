use bit_set::BitSet;
use tracing::trace;

use crate::{Dfa, StateId};

/// The distinguishability relation over unordered pairs of states of a [`Dfa`].
///
/// Two states are distinguishable if some finite word is accepted from exactly one of them.
/// The relation is computed by table filling: pairs disagreeing on acceptance are marked
/// immediately and a pair is marked whenever some symbol leads it into an already marked
/// pair, until a full pass over the table adds no new mark. Marks only ever go from unset
/// to set, so the fixed point is reached after at most one pass per pair.
#[derive(Debug, Clone)]
pub struct DistinguishabilityTable {
    states: usize,
    marked: BitSet,
}

impl DistinguishabilityTable {
    /// Computes the distinguishability relation for `dfa`, which is expected to be trimmed
    /// (unreachable states are simply carried along otherwise).
    pub fn build(dfa: &Dfa) -> Self {
        let states = dfa.state_count();
        let mut table = Self {
            states,
            marked: BitSet::with_capacity(states * states),
        };
        for p in 0..states {
            for q in p + 1..states {
                if dfa.is_accepting(p) != dfa.is_accepting(q) {
                    table.mark(p, q);
                }
            }
        }
        let mut pass = 0;
        loop {
            pass += 1;
            let mut changed = 0usize;
            for p in 0..states {
                for q in p + 1..states {
                    if table.distinguishable(p, q) {
                        continue;
                    }
                    let separated = (0..dfa.alphabet().size()).any(|symbol| {
                        table.distinguishable(dfa.successor(p, symbol), dfa.successor(q, symbol))
                    });
                    if separated {
                        table.mark(p, q);
                        changed += 1;
                    }
                }
            }
            trace!("table filling pass {pass} marked {changed} new pairs");
            if changed == 0 {
                return table;
            }
        }
    }

    /// Returns true if the two states are distinguishable. The relation is irreflexive and
    /// symmetric, so the order of the arguments does not matter and `p == q` gives false.
    pub fn distinguishable(&self, p: StateId, q: StateId) -> bool {
        p != q && self.marked.contains(self.pair(p, q))
    }

    /// Number of states the relation ranges over.
    pub fn states(&self) -> usize {
        self.states
    }

    fn pair(&self, p: StateId, q: StateId) -> usize {
        let (low, high) = if p < q { (p, q) } else { (q, p) };
        low * self.states + high
    }

    fn mark(&mut self, p: StateId, q: StateId) -> bool {
        let pair = self.pair(p, q);
        self.marked.insert(pair)
    }
}
