use crate::config::{RenderConfig, TableStyle};

use std::fmt::Display;

use automata::Automaton;

/// Render the state-transition table of an automaton. Rows are states and columns are alphabet
/// symbols, both in order.
pub fn render<A>(automaton: &A, config: &RenderConfig) -> String
where
    A: Automaton,
    A::State: Display,
    A::Symbol: Display,
{
    let rows = cells(automaton, config);
    let widths = column_widths(&rows);

    match config.table_style {
        TableStyle::Grid => grid(&rows, &widths),
        TableStyle::Plain => plain(&rows, &widths),
    }
}

/// The header row followed by one row per state.
fn cells<A>(automaton: &A, config: &RenderConfig) -> Vec<Vec<String>>
where
    A: Automaton,
    A::State: Display,
    A::Symbol: Display,
{
    let symbols = automaton.symbols();
    let empty = if automaton.is_deterministic() { "" } else { "{}" };

    let header = std::iter::once(String::new())
        .chain(symbols.iter().map(|symbol| symbol.to_string()))
        .collect();

    let body = automaton.states().iter().map(|state| {
        let label = row_label(automaton, state, config);
        std::iter::once(label)
            .chain(symbols.iter().map(|symbol| {
                automaton
                    .transitions()
                    .get(state, symbol)
                    .map_or_else(|| empty.to_owned(), |target| target.to_string())
            }))
            .collect()
    });

    std::iter::once(header).chain(body).collect()
}

fn row_label<A>(automaton: &A, state: &A::State, config: &RenderConfig) -> String
where
    A: Automaton,
    A::State: Display,
{
    let mut label = String::new();
    if automaton.initial_state() == state {
        label.push_str(&config.initial_marker);
        label.push(' ');
    }
    if automaton.final_states().contains(state) {
        label.push_str(&config.final_marker);
        label.push(' ');
    }
    label.push_str(&state.to_string());
    label
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.first().map_or(0, Vec::len);
    (0..columns)
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn grid(rows: &[Vec<String>], widths: &[usize]) -> String {
    let rule = |fill: char| {
        let mut line = String::from("+");
        for &width in widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut out = rule('-');
    for (i, row) in rows.iter().enumerate() {
        out.push('|');
        for (cell, &width) in row.iter().zip(widths) {
            out.push_str(&format!(" {:<width$} |", cell, width = width));
        }
        out.push('\n');
        out.push_str(&rule(if i == 0 { '=' } else { '-' }));
    }
    out
}

fn plain(rows: &[Vec<String>], widths: &[usize]) -> String {
    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}\n", line.trim_end())
        })
        .collect()
}
