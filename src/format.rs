use crate::{Alphabet, Dfa, Set, StateId, StructuralError};

/// The contents of a `.dfa` description file: the automaton together with the test words
/// attached to it.
///
/// The format is line oriented: the first line gives the state count, the second a label
/// token followed by the alphabet symbols, then a separator line, one row per state (a
/// label token followed by one transition target per symbol), two separator lines, a line
/// of comma/colon-separated accepting states and finally one test word per line until the
/// end of the input.
#[derive(Debug, Clone)]
pub struct DfaFile {
    /// The parsed automaton.
    pub dfa: Dfa,
    /// The test words listed after the automaton description, in file order.
    pub words: Vec<String>,
}

/// Errors that can occur while parsing a `.dfa` description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input ended although more content was expected.
    #[error("input ended while looking for {0}")]
    UnexpectedEnd(&'static str),
    /// The first line does not hold a state count.
    #[error("invalid state count {0:?}")]
    InvalidStateCount(String),
    /// An alphabet token spans more than one character.
    #[error("alphabet symbol {0:?} is not a single character")]
    SymbolNotAChar(String),
    /// The same symbol occurs twice in the alphabet header.
    #[error("alphabet symbol {0:?} occurs twice")]
    DuplicateSymbol(char),
    /// A transition row does not list one target per alphabet symbol.
    #[error("the row of state {state} has {found} transition targets, expected {expected}")]
    WrongTransitionCount {
        /// State whose row is malformed.
        state: StateId,
        /// Number of targets found in the row.
        found: usize,
        /// Size of the alphabet.
        expected: usize,
    },
    /// A transition target is not a number.
    #[error("invalid transition target {token:?} in the row of state {state}")]
    InvalidTransitionTarget {
        /// State whose row holds the offending token.
        state: StateId,
        /// The token that failed to parse.
        token: String,
    },
    /// An entry of the accepting-state list is not a number.
    #[error("invalid accepting state {0:?}")]
    InvalidAcceptingState(String),
    /// The description parsed but violates a structural invariant of [`Dfa`].
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

impl DfaFile {
    /// Parses a `.dfa` description from `input`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines = input.lines();

        let count_line = lines
            .next()
            .ok_or(ParseError::UnexpectedEnd("the state count"))?
            .trim();
        let states: usize = count_line
            .parse()
            .map_err(|_| ParseError::InvalidStateCount(count_line.to_string()))?;

        let header = lines
            .next()
            .ok_or(ParseError::UnexpectedEnd("the alphabet header"))?;
        let mut symbols = Vec::new();
        // the first token of the header is the label column
        for token in header.split_whitespace().skip(1) {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => {
                    if symbols.contains(&symbol) {
                        return Err(ParseError::DuplicateSymbol(symbol));
                    }
                    symbols.push(symbol);
                }
                _ => return Err(ParseError::SymbolNotAChar(token.to_string())),
            }
        }
        let alphabet = Alphabet::new(symbols);

        // separator between the header and the transition rows
        lines.next();

        let mut transitions = Vec::with_capacity(states);
        for state in 0..states {
            let row_line = lines
                .next()
                .ok_or(ParseError::UnexpectedEnd("a transition row"))?;
            let mut row = Vec::with_capacity(alphabet.size());
            for token in row_line.split_whitespace().skip(1) {
                let target = token.parse().map_err(|_| ParseError::InvalidTransitionTarget {
                    state,
                    token: token.to_string(),
                })?;
                row.push(target);
            }
            if row.len() != alphabet.size() {
                return Err(ParseError::WrongTransitionCount {
                    state,
                    found: row.len(),
                    expected: alphabet.size(),
                });
            }
            transitions.push(row);
        }

        // separators between the transition rows and the accepting-state line
        lines.next();
        lines.next();

        let accepting_line = lines
            .next()
            .ok_or(ParseError::UnexpectedEnd("the accepting states"))?;
        let list = accepting_line
            .split_whitespace()
            .next()
            .ok_or(ParseError::UnexpectedEnd("the accepting states"))?;
        let mut accepting = Set::default();
        for entry in list.split([',', ':']).filter(|entry| !entry.is_empty()) {
            let state: StateId = entry
                .parse()
                .map_err(|_| ParseError::InvalidAcceptingState(entry.to_string()))?;
            accepting.insert(state);
        }

        let words = lines.map(str::to_string).collect();
        let dfa = Dfa::from_parts(alphabet, transitions, accepting)?;
        Ok(Self { dfa, words })
    }
}
