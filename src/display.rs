use crate::Dfa;

impl Dfa {
    /// Returns a string representation of the transition table of the automaton. Each row
    /// starts with the state index, accepting states are marked with a `*`.
    pub fn build_transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("state".to_string())
                .chain(self.alphabet().symbols().map(|symbol| symbol.to_string())),
        );
        for state in self.states() {
            let mut row = vec![if self.is_accepting(state) {
                format!("{state}*")
            } else {
                state.to_string()
            }];
            row.extend(
                (0..self.alphabet().size()).map(|symbol| self.successor(state, symbol).to_string()),
            );
            builder.push_record(row);
        }
        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl std::fmt::Debug for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "DFA over \"{}\" accepting in {:?}",
            self.alphabet().symbols().collect::<String>(),
            self.accepting_states().collect::<Vec<_>>()
        )?;
        write!(f, "{}", self.build_transition_table())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test_log::test]
    fn table_marks_accepting_states() {
        let dfa = Dfa::from_parts(
            Alphabet::of_size(2),
            vec![vec![1, 0], vec![1, 1]],
            [1],
        )
        .unwrap();
        let table = dfa.build_transition_table();
        assert!(table.contains("state"));
        assert!(table.contains("1*"));
        assert!(!table.contains("0*"));
    }
}
