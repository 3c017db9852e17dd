use bit_set::BitSet;

use crate::Alphabet;

/// States are identified by their position in the transition table, so a [`Dfa`] with `n`
/// states has the state indices `0..n`.
pub type StateId = usize;

/// A deterministic finite automaton over an [`Alphabet`] of `char` symbols.
///
/// The transition function is stored as a dense table with one row per state and one column
/// per alphabet symbol, so every state has exactly one successor for every symbol. State
/// [`Dfa::INITIAL`] is always the initial state. A `Dfa` is immutable after construction;
/// all operations ([`Dfa::trim`], [`Dfa::minimize`], ...) return a fresh automaton.
#[derive(Clone, PartialEq, Eq)]
pub struct Dfa {
    alphabet: Alphabet,
    transitions: Vec<Vec<StateId>>,
    accepting: BitSet,
}

/// The ways in which an automaton description can violate the structural invariants of a
/// [`Dfa`]. Any violation is fatal, no minimization or simulation can proceed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// The automaton has no states at all, so the initial state `0` cannot exist.
    #[error("automaton has no states, the initial state 0 cannot exist")]
    Empty,
    /// A transition row does not have exactly one entry per alphabet symbol.
    #[error("state {state} has {found} transitions, expected one per symbol ({expected})")]
    MissingTransitions {
        /// The state whose row has the wrong arity.
        state: StateId,
        /// Number of entries actually present in the row.
        found: usize,
        /// Size of the alphabet.
        expected: usize,
    },
    /// A transition points at a state index outside of the automaton.
    #[error("transition from state {state} on symbol {symbol} targets {target}, but only {states} states exist")]
    TransitionOutOfRange {
        /// Source state of the offending transition.
        state: StateId,
        /// Column index of the symbol on which the transition is taken.
        symbol: usize,
        /// The out-of-range target.
        target: StateId,
        /// Number of states in the automaton.
        states: usize,
    },
    /// The accepting set references a state that does not exist.
    #[error("accepting set references state {state}, but only {states} states exist")]
    AcceptingOutOfRange {
        /// The nonexistent state.
        state: StateId,
        /// Number of states in the automaton.
        states: usize,
    },
}

impl Dfa {
    /// The index of the initial state.
    pub const INITIAL: StateId = 0;

    /// Creates a [`Dfa`] from an alphabet, a dense transition table and a set of accepting
    /// states, verifying the structural invariants: at least one state, one transition
    /// target per symbol in every row, and all referenced states in range.
    pub fn from_parts(
        alphabet: Alphabet,
        transitions: Vec<Vec<StateId>>,
        accepting: impl IntoIterator<Item = StateId>,
    ) -> Result<Self, StructuralError> {
        let states = transitions.len();
        if states == 0 {
            return Err(StructuralError::Empty);
        }
        for (state, row) in transitions.iter().enumerate() {
            if row.len() != alphabet.size() {
                return Err(StructuralError::MissingTransitions {
                    state,
                    found: row.len(),
                    expected: alphabet.size(),
                });
            }
            for (symbol, &target) in row.iter().enumerate() {
                if target >= states {
                    return Err(StructuralError::TransitionOutOfRange {
                        state,
                        symbol,
                        target,
                        states,
                    });
                }
            }
        }
        let mut accepting_states = BitSet::with_capacity(states);
        for state in accepting {
            if state >= states {
                return Err(StructuralError::AcceptingOutOfRange { state, states });
            }
            accepting_states.insert(state);
        }
        Ok(Self {
            alphabet,
            transitions,
            accepting: accepting_states,
        })
    }

    /// Returns the number of states.
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Returns an iterator over all state indices in ascending order.
    pub fn states(&self) -> std::ops::Range<StateId> {
        0..self.state_count()
    }

    /// Gives a reference to the alphabet of the automaton.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the state reached from `state` on the symbol with column index `symbol`.
    ///
    /// # Panics
    /// Panics if `state` or `symbol` are out of range.
    pub fn successor(&self, state: StateId, symbol: usize) -> StateId {
        self.transitions[state][symbol]
    }

    /// Returns true if `state` is an accepting state.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    /// Returns an iterator over the indices of all accepting states, ascending.
    pub fn accepting_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting.iter()
    }
}
