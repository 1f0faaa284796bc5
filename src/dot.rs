use crate::config::RenderConfig;

use std::collections::BTreeMap;
use std::fmt::Display;

use automata::Automaton;

/// Name of the invisible node the initial arrow starts from.
const START: &str = "__start";

/// Converts an automaton to the graphviz [dot](https://graphviz.org/docs/layouts/dot/) language.
/// Transitions sharing a source and destination are merged into one edge whose label lists every
/// symbol, in order.
pub fn to_dot<A>(automaton: &A, config: &RenderConfig) -> String
where
    A: Automaton,
    A::State: Display,
    A::Symbol: Display,
{
    let (finals, others): (Vec<_>, Vec<_>) = automaton
        .states()
        .iter()
        .partition(|state| automaton.final_states().contains(*state));

    let mut lines = vec![
        format!("rankdir = {};", config.rankdir.as_dot()),
        format!("node [shape = point, style = invis]; {};", START),
    ];
    if !finals.is_empty() {
        lines.push(format!("node [shape = doublecircle]; {};", node_list(&finals)));
    }
    if !others.is_empty() {
        lines.push(format!("node [shape = circle]; {};", node_list(&others)));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} -> {};",
        START,
        id(&automaton.initial_state().to_string())
    ));
    lines.extend(edges(automaton).into_iter().map(|(start, dest, label)| {
        format!(
            "{} -> {} [label = {}];",
            id(&start.to_string()),
            id(&dest.to_string()),
            quote(&label)
        )
    }));

    let body = lines
        .iter()
        .map(|l| if l.is_empty() { String::new() } else { format!("\t{}", l) })
        .collect::<Vec<_>>()
        .join("\n");
    format!("digraph {} {{\n{}\n}}\n", id(&config.graph_name), body)
}

/// `(source, destination, label)` for every pair of states joined by at least one transition.
fn edges<'a, A>(automaton: &'a A) -> Vec<(&'a A::State, &'a A::State, String)>
where
    A: Automaton,
    A::Symbol: Display,
{
    let mut grouped: BTreeMap<(&'a A::State, &'a A::State), Vec<String>> = BTreeMap::new();
    for state in automaton.states().iter() {
        for symbol in automaton.symbols().iter() {
            let target = match automaton.transitions().get(state, symbol) {
                Some(target) => target,
                None => continue,
            };
            for dest in target.iter() {
                grouped
                    .entry((state, dest))
                    .or_default()
                    .push(symbol.to_string());
            }
        }
    }

    grouped
        .into_iter()
        .map(|((start, dest), labels)| (start, dest, labels.join(", ")))
        .collect()
}

fn node_list<S: Display>(states: &[&S]) -> String {
    states
        .iter()
        .map(|s| id(&s.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A dot identifier: bare when it is a plain name or numeral, quoted otherwise.
fn id(name: &str) -> String {
    let mut chars = name.chars();
    let bare = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        Some(c) if c.is_ascii_digit() => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    };

    if bare {
        name.to_owned()
    } else {
        quote(name)
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RankDir;
    use automata::{state_set, Symbol, DFA, NFA};

    #[test]
    fn test_dfa_dot() {
        let dfa: DFA<&str, char> = DFA::new(
            ["S1", "S2"],
            ['0', '1'],
            [("S1", '0', "S2"), ("S1", '1', "S1"), ("S2", '0', "S1"), ("S2", '1', "S2")],
            "S1",
            ["S1"],
        )
        .unwrap();

        let expected = "digraph fsm {
\trankdir = LR;
\tnode [shape = point, style = invis]; __start;
\tnode [shape = doublecircle]; S1;
\tnode [shape = circle]; S2;

\t__start -> S1;
\tS1 -> S1 [label = \"1\"];
\tS1 -> S2 [label = \"0\"];
\tS2 -> S1 [label = \"0\"];
\tS2 -> S2 [label = \"1\"];
}
";
        assert_eq!(expected, to_dot(&dfa, &RenderConfig::default()));
    }

    #[test]
    fn test_nfa_edges_are_merged() {
        let nfa: NFA<u32, char> = NFA::new(
            [0, 1],
            [Symbol::Input('a'), Symbol::Input('b'), Symbol::Epsilon],
            [
                (0, Symbol::Input('a'), state_set![0, 1]),
                (0, Symbol::Input('b'), state_set![1]),
                (0, Symbol::Epsilon, state_set![1]),
            ],
            0,
            Vec::new(),
        )
        .unwrap();

        let dot = to_dot(&nfa, &RenderConfig::new().with_rankdir(RankDir::TopBottom));
        assert!(dot.contains("\trankdir = TB;\n"));
        assert!(dot.contains("\t0 -> 0 [label = \"a\"];\n"));
        assert!(dot.contains("\t0 -> 1 [label = \"a, b, ε\"];\n"));
        assert!(!dot.contains("doublecircle"));
    }

    #[test]
    fn test_composite_ids_are_quoted() {
        let nfa: NFA<u32, char> =
            NFA::new([1, 2], ['x'], [(1, 'x', state_set![1, 2])], 1, [2]).unwrap();
        let dot = to_dot(&nfa.to_dfa(), &RenderConfig::new().with_graph_name("my dfa"));

        assert!(dot.starts_with("digraph \"my dfa\" {\n"));
        assert!(dot.contains("\t__start -> \"{1}\";\n"));
        assert!(dot.contains("\t\"{1}\" -> \"{1, 2}\" [label = \"x\"];\n"));
        assert!(dot.contains("node [shape = doublecircle]; \"{1, 2}\";"));
    }

    #[test]
    fn test_id() {
        assert_eq!("S0", id("S0"));
        assert_eq!("42", id("42"));
        assert_eq!("\"4a\"", id("4a"));
        assert_eq!("\"\"", id(""));
        assert_eq!("\"say \\\"hi\\\"\"", id("say \"hi\""));
    }
}
