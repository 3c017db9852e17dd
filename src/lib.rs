//! Minimization of deterministic finite automata (DFAs).
//!
//! A [`Dfa`] is a dense transition table over an ordered [`Alphabet`] of `char` symbols,
//! with state `0` as the designated initial state. The crate computes the unique minimal
//! DFA accepting the same language via the classic table-filling construction: first all
//! states unreachable from the initial state are removed ([`Dfa::trim`]), then the
//! distinguishability relation over state pairs is computed as a fixed point
//! ([`minimization::DistinguishabilityTable`]), the non-distinguishable states are grouped
//! into blocks ([`minimization::Partition`]) and finally the quotient automaton is built
//! by mapping a representative of each block through the block indices.
//!
//! Every stage consumes an immutable view of its predecessor's output and returns a fresh
//! structure, so intermediate results can be inspected and tested in isolation. The whole
//! pipeline is exposed as [`Dfa::minimize`].
//!
//! Besides minimization, a [`Dfa`] can run finite words through its transition table
//! ([`Dfa::accepts`]). A word containing a symbol that is not part of the alphabet is
//! rejected outright; this is a classification, not an error. The [`crate::format`] module parses
//! the line-oriented `.dfa` interchange format (state count, alphabet header, transition
//! rows, accepting states, test words), which is what the `minidfa` binary consumes.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use minidfa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::Alphabet,
        dfa::{Dfa, StateId, StructuralError},
        format::{DfaFile, ParseError},
        minimization::{DistinguishabilityTable, Partition},
        Map, Set,
    };
}

/// Module that contains the definition of alphabets over `char` symbols.
pub mod alphabet;
pub use alphabet::Alphabet;

/// Defines the automaton representation itself, a dense transition table with a set of
/// accepting states, together with the structural validation performed at construction.
pub mod dfa;
pub use dfa::{Dfa, StateId, StructuralError};

mod run;

/// Contains the implementation of the table-filling minimization algorithm.
pub mod minimization;

/// Parsing of the line-oriented `.dfa` interchange format.
pub mod format;

mod display;

/// Implements the generation of random words and automata.
#[cfg(feature = "random")]
pub mod random;

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;
