use minidfa::prelude::*;

use itertools::Itertools;
use owo_colors::OwoColorize;
use tracing::{debug, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("minidfa")
        .about("Minimizes a DFA and validates the attached test strings against both machines")
        .arg(
            Arg::new("file")
                .required(true)
                .help("path to a .dfa description file"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

/// Classifies every word against `dfa`, printing a colored verdict per word (fifteen to a
/// line) followed by the tallies.
fn classify(dfa: &Dfa, words: &[String]) {
    let mut yes = 0;
    let mut no = 0;
    for (position, word) in words.iter().enumerate() {
        if dfa.accepts(word) {
            print!("{} ", "Yes".green());
            yes += 1;
        } else {
            print!("{}  ", "No".red());
            no += 1;
        }
        if (position + 1) % 15 == 0 {
            println!();
        }
    }
    if words.len() % 15 != 0 {
        println!();
    }
    println!("Yes: {yes} No: {no}");
}

pub fn main() {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let path = matches
        .get_one::<String>("file")
        .expect("file argument is required");

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("unable to open {path}: {err}");
            std::process::exit(1);
        }
    };
    let DfaFile { dfa, words } = match DfaFile::parse(&text) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("malformed description in {path}: {err}");
            std::process::exit(1);
        }
    };
    debug!(
        "read a {}-state DFA and {} test strings from {path}",
        dfa.state_count(),
        words.len()
    );

    println!("Parsing results of {path} on the attached strings:");
    classify(&dfa.trim(), &words);

    let minimized = dfa.minimize();
    println!();
    println!("Minimized DFA from {path}:");
    println!("{}", minimized.build_transition_table());
    println!("0: initial state");
    println!(
        "{}: accepting state(s)",
        minimized.accepting_states().map(|q| q.to_string()).join(", ")
    );
    println!();
    println!("Parsing results of the minimized {path} on the same strings:");
    classify(&minimized, &words);
}
