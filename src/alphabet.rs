use itertools::Itertools;

/// An ordered collection of distinct `char` symbols.
///
/// The position of a symbol in the alphabet is the canonical column index used by the
/// transition table of a [`crate::Dfa`], so the order in which symbols are given at
/// construction is preserved and observable.
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Creates a new [`Alphabet`] from the given symbols, keeping their order. The symbols
    /// must be pairwise distinct.
    pub fn new(symbols: Vec<char>) -> Self {
        debug_assert!(symbols.iter().all_unique());
        Self(symbols)
    }

    /// Creates a new [`Alphabet`] of the given size. The symbols are just the first `size`
    /// letters of the alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size < 26, "Alphabet is too large");
        Self((0..size).map(|i| (b'a' + i as u8) as char).collect())
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the column index of `symbol`, or `None` if it is not part of the alphabet.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.0.iter().position(|&sym| sym == symbol)
    }

    /// Returns an iterator over the symbols in column order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for Alphabet {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<char>> for Alphabet {
    fn from(value: Vec<char>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Alphabet;

    #[test_log::test]
    fn alphabet_positions_follow_construction_order() {
        let alphabet = Alphabet::new(vec!['1', '0']);
        assert_eq!(alphabet.position('1'), Some(0));
        assert_eq!(alphabet.position('0'), Some(1));
        assert_eq!(alphabet.position('2'), None);
        assert_eq!(alphabet.size(), 2);
    }

    #[test_log::test]
    fn alphabet_of_size_starts_at_a() {
        let alphabet = Alphabet::of_size(3);
        assert_eq!(alphabet.symbols().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
        assert_eq!(alphabet[1], 'b');
    }
}
