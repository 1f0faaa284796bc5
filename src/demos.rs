//! Ready-made automata taken from textbook and Wikipedia examples.

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::{dot, table};

use automata::{Automaton, StateSet, Symbol, Target, DFA, NFA};
use tracing::debug;

/// A demo automaton, with `String` states and `char` symbols.
#[derive(Clone, Debug)]
pub enum Demo {
    Dfa(DFA<String, char>),
    Nfa(NFA<String, char>),
}

pub struct Entry {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> automata::Result<Demo>,
}

pub const CATALOGUE: &[Entry] = &[
    Entry {
        name: "even-zeros",
        description: "DFA accepting binary strings with an even number of 0s",
        build: even_zeros,
    },
    Entry {
        name: "mod-three",
        description: "DFA accepting binary numbers that are multiples of 3",
        build: mod_three,
    },
    Entry {
        name: "p-q",
        description: "NFA accepting binary strings that end with a 1",
        build: p_q,
    },
    Entry {
        name: "aaa",
        description: "NFA accepting strings over {a, b} that contain \"aaa\"",
        build: aaa,
    },
    Entry {
        name: "epsilon-wiki",
        description: "NFA with epsilon-moves from the powerset construction article",
        build: epsilon_wiki,
    },
    Entry {
        name: "epsilon-s",
        description: "NFA with epsilon-moves accepting an even number of 0s or of 1s",
        build: epsilon_s,
    },
    Entry {
        name: "powerset",
        description: "NFA whose equivalent DFA has 16 states: the 4th symbol from the end is a 1",
        build: powerset,
    },
];

/// Build the demo with the given name.
pub fn load(name: &str) -> Result<Demo> {
    let entry = CATALOGUE
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| Error::unknown_demo(name))?;
    debug!("building demo {}", entry.name);
    Ok((entry.build)()?)
}

impl Demo {
    pub fn accept(&self, input: &str) -> automata::Result<bool> {
        match self {
            Demo::Dfa(dfa) => dfa.accept(input.chars()),
            Demo::Nfa(nfa) => nfa.accept(input.chars()),
        }
    }

    /// Render the state-transition table. With `determinize`, an NFA is first converted with the
    /// powerset construction; a DFA is rendered as is.
    pub fn table(&self, config: &RenderConfig, determinize: bool) -> String {
        match self {
            Demo::Dfa(dfa) => table::render(dfa, config),
            Demo::Nfa(nfa) if determinize => table::render(&nfa.to_dfa(), config),
            Demo::Nfa(nfa) => table::render(nfa, config),
        }
    }

    /// Export the automaton to dot. `determinize` works as for [`Demo::table`].
    pub fn dot(&self, config: &RenderConfig, determinize: bool) -> String {
        match self {
            Demo::Dfa(dfa) => dot::to_dot(dfa, config),
            Demo::Nfa(nfa) if determinize => dot::to_dot(&nfa.to_dfa(), config),
            Demo::Nfa(nfa) => dot::to_dot(nfa, config),
        }
    }
}

/// Build a DFA from a table with one row per state and one column per symbol.
fn dfa_from_rows(
    states: &[&str],
    symbols: &[char],
    rows: &[&[&str]],
    initial: &str,
    finals: &[&str],
) -> automata::Result<DFA<String, char>> {
    let transitions = states.iter().zip(rows).flat_map(|(state, row)| {
        symbols
            .iter()
            .zip(row.iter())
            .map(move |(&symbol, &end)| (state.to_string(), symbol, end.to_owned()))
    });

    DFA::new(
        states.iter().map(|s| s.to_string()),
        symbols.iter().copied(),
        transitions,
        initial.to_owned(),
        finals.iter().map(|s| s.to_string()),
    )
}

/// Build an NFA from a table with one row per state and one column per symbol. Empty cells are
/// left undefined.
fn nfa_from_rows(
    states: &[&str],
    symbols: &[Symbol<char>],
    rows: &[&[&[&str]]],
    initial: &str,
    finals: &[&str],
) -> automata::Result<NFA<String, char>> {
    let transitions = states.iter().zip(rows).flat_map(|(state, row)| {
        symbols
            .iter()
            .zip(row.iter())
            .filter(|(_, ends)| !ends.is_empty())
            .map(move |(&symbol, ends)| {
                let ends: StateSet<String> = ends.iter().map(|s| s.to_string()).collect();
                (state.to_string(), symbol, Target::Multiple(ends))
            })
    });

    NFA::new(
        states.iter().map(|s| s.to_string()),
        symbols.iter().copied(),
        transitions,
        initial.to_owned(),
        finals.iter().map(|s| s.to_string()),
    )
}

fn even_zeros() -> automata::Result<Demo> {
    dfa_from_rows(
        &["S1", "S2"],
        &['0', '1'],
        &[&["S2", "S1"], &["S1", "S2"]],
        "S1",
        &["S1"],
    )
    .map(Demo::Dfa)
}

fn mod_three() -> automata::Result<Demo> {
    dfa_from_rows(
        &["S0", "S1", "S2"],
        &['0', '1'],
        &[&["S0", "S1"], &["S2", "S0"], &["S1", "S2"]],
        "S0",
        &["S0"],
    )
    .map(Demo::Dfa)
}

fn p_q() -> automata::Result<Demo> {
    nfa_from_rows(
        &["p", "q"],
        &['0'.into(), '1'.into()],
        &[&[&["p"], &["p", "q"]], &[&[], &[]]],
        "p",
        &["q"],
    )
    .map(Demo::Nfa)
}

fn aaa() -> automata::Result<Demo> {
    nfa_from_rows(
        &["0", "1", "2", "3"],
        &['a'.into(), 'b'.into()],
        &[
            &[&["0", "1"], &["0"]],
            &[&["2"], &[]],
            &[&["3"], &[]],
            &[&["3"], &["3"]],
        ],
        "0",
        &["3"],
    )
    .map(Demo::Nfa)
}

fn epsilon_wiki() -> automata::Result<Demo> {
    nfa_from_rows(
        &["1", "2", "3", "4"],
        &[Symbol::Epsilon, '0'.into(), '1'.into()],
        &[
            &[&["3"], &["2"], &[]],
            &[&[], &[], &["2", "4"]],
            &[&["2"], &["4"], &[]],
            &[&[], &["3"], &[]],
        ],
        "1",
        &["3", "4"],
    )
    .map(Demo::Nfa)
}

fn epsilon_s() -> automata::Result<Demo> {
    nfa_from_rows(
        &["S0", "S1", "S2", "S3", "S4"],
        &['0'.into(), '1'.into(), Symbol::Epsilon],
        &[
            &[&[], &[], &["S1", "S3"]],
            &[&["S2"], &["S1"], &[]],
            &[&["S1"], &["S2"], &[]],
            &[&["S3"], &["S4"], &[]],
            &[&["S4"], &["S3"], &[]],
        ],
        "S0",
        &["S1", "S3"],
    )
    .map(Demo::Nfa)
}

fn powerset() -> automata::Result<Demo> {
    nfa_from_rows(
        &["X", "0", "1", "2", "3"],
        &['0'.into(), '1'.into()],
        &[
            &[&["X"], &["X", "0"]],
            &[&["1"], &["1"]],
            &[&["2"], &["2"]],
            &[&["3"], &["3"]],
            &[&[], &[]],
        ],
        "X",
        &["3"],
    )
    .map(Demo::Nfa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_builds() {
        for entry in CATALOGUE {
            assert!(load(entry.name).is_ok(), "{} failed to build", entry.name);
        }
    }

    #[test]
    fn test_unknown_demo() {
        assert!(matches!(load("nope"), Err(Error::UnknownDemo { .. })));
    }

    #[test]
    fn test_accept() {
        let cases: &[(&str, &[&str], &[&str])] = &[
            ("even-zeros", &["110110110101", "", "00"], &["11110", "0"]),
            ("mod-three", &["1001", "0", "11", "110"], &["1", "10", "111"]),
            ("p-q", &["110110110101", "1"], &["11110", ""]),
            ("aaa", &["ababaaabaaaaabababa"], &["abababaa"]),
            ("epsilon-wiki", &["011101100", "0", "1", "", "10001"], &["0001", "00011"]),
            ("epsilon-s", &["1001", "10101"], &["10", "01"]),
            ("powerset", &["1000", "1001011100"], &["0111", "100"]),
        ];

        for &(name, valids, invalids) in cases {
            let demo = load(name).unwrap();
            for input in valids {
                assert!(demo.accept(input).unwrap(), "{} rejected {:?}", name, input);
            }
            for input in invalids {
                assert!(!demo.accept(input).unwrap(), "{} accepted {:?}", name, input);
            }
        }
    }

    #[test]
    fn test_determinize() {
        let demo = load("powerset").unwrap();
        let config = RenderConfig::default();
        assert!(demo.table(&config, true).contains("-> {X}"));
        assert!(demo.table(&config, false).contains("-> X"));
        assert!(demo.dot(&config, true).contains("__start -> \"{X}\";"));

        // A DFA is left alone.
        let demo = load("even-zeros").unwrap();
        assert_eq!(demo.table(&config, false), demo.table(&config, true));
    }
}
