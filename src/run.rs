use tracing::trace;

use crate::{Dfa, StateId};

impl Dfa {
    /// Runs `word` through the automaton starting in the initial state and returns the
    /// state in which the run ends. If a character of `word` is not a symbol of the
    /// alphabet, the run fails immediately and `None` is returned.
    pub fn reached(&self, word: &str) -> Option<StateId> {
        let mut current = Self::INITIAL;
        for sym in word.chars() {
            let Some(position) = self.alphabet().position(sym) else {
                trace!("symbol {sym:?} is not in the alphabet, run on {word:?} fails");
                return None;
            };
            current = self.successor(current, position);
        }
        Some(current)
    }

    /// Returns true if the automaton accepts `word`, i.e. if the run on `word` is
    /// successful and ends in an accepting state. A word containing a symbol outside the
    /// alphabet is rejected, which is a definitive classification rather than an error.
    pub fn accepts(&self, word: &str) -> bool {
        self.reached(word)
            .is_some_and(|state| self.is_accepting(state))
    }
}
