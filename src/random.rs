//! Random generation of words and automata, used by the language-equivalence self-check.
//!
//! Randomness comes from the global [`fastrand`] generator, seed it with [`fastrand::seed`]
//! to make draws reproducible.

use crate::{Alphabet, Dfa};

/// Draws `count` random words over `alphabet`, each of a uniformly drawn length of at most
/// `max_len` symbols.
pub fn random_words(alphabet: &Alphabet, count: usize, max_len: usize) -> Vec<String> {
    assert!(!alphabet.is_empty(), "cannot draw words over an empty alphabet");
    (0..count)
        .map(|_| {
            let length = fastrand::usize(..=max_len);
            (0..length)
                .map(|_| alphabet[fastrand::usize(..alphabet.size())])
                .collect()
        })
        .collect()
}

/// Generates a random complete DFA with `symbols` alphabet symbols and `size` states by
/// drawing every transition target uniformly. Every state is accepting with probability
/// one half. Note that depending on which targets are drawn, the result may contain
/// unreachable states.
pub fn generate_random_dfa(symbols: usize, size: usize) -> Dfa {
    assert!(size > 0, "a DFA needs at least the initial state");
    let alphabet = Alphabet::of_size(symbols);
    let transitions = (0..size)
        .map(|_| (0..symbols).map(|_| fastrand::usize(..size)).collect())
        .collect();
    let accepting: Vec<_> = (0..size).filter(|_| fastrand::bool()).collect();
    Dfa::from_parts(alphabet, transitions, accepting)
        .expect("a drawn table is total and in range")
}
