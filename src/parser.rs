//! Parser for the delimited tabular machine description format, built on
//! the `pest` grammar in `grammar.pest`.
//!
//! The format is one record per line: machine name; states; input
//! alphabet; tape alphabet; start state; accept state; reject state; input
//! string; then any number of 5-field transition rows
//! `state,read,nextState,write,direction`.

use crate::{
    analyzer::analyze,
    types::{Direction, Machine, NtmError, Transition},
};
use pest::Parser as PestParser;
use pest_derive::Parser as PestParser;
use std::collections::HashMap;

/// Derives a `PestParser` for the description grammar in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct MachineParser;

/// Number of fixed header rows before the transition section.
const HEADER_ROWS: usize = 8;

/// Parses a machine description into a `Machine`.
///
/// The parsed description is validated with [`analyze`] before being
/// returned, so exploration never starts from a broken description.
///
/// # Errors
///
/// * `NtmError::ParseError` if the source does not match the grammar.
/// * `NtmError::ValidationError` if header rows are missing or a pre-run
///   check fails.
pub fn parse(input: &str) -> Result<Machine, NtmError> {
    let root = MachineParser::parse(Rule::file, input.trim())
        .map_err(|e| NtmError::ParseError(e.into()))?
        .next()
        .unwrap();

    let rows: Vec<Vec<&str>> = root
        .into_inner()
        .filter(|p| p.as_rule() == Rule::row)
        .map(|row| row.into_inner().map(|field| field.as_str()).collect())
        .collect();

    if rows.len() < HEADER_ROWS {
        return Err(NtmError::ValidationError(format!(
            "Description has {} header rows, expected {}",
            rows.len(),
            HEADER_ROWS
        )));
    }

    let machine = Machine {
        name: scalar(&rows[0]),
        states: names(&rows[1]),
        input_alphabet: symbols(&rows[2]),
        tape_alphabet: symbols(&rows[3]),
        start_state: scalar(&rows[4]),
        accept_state: scalar(&rows[5]),
        reject_state: scalar(&rows[6]),
        input: scalar(&rows[7]),
        rules: parse_transitions(&rows[HEADER_ROWS..]),
    };

    analyze(&machine)?;

    Ok(machine)
}

/// First field of a row; an absent or empty field becomes the empty
/// string and is caught by the analyzer where the value is required.
fn scalar(row: &[&str]) -> String {
    row.first().copied().unwrap_or("").to_string()
}

/// A row interpreted as a comma-joined list of names.
fn names(row: &[&str]) -> Vec<String> {
    row.iter()
        .filter(|field| !field.is_empty())
        .map(|field| field.to_string())
        .collect()
}

/// A row interpreted as a comma-joined list of single-character symbols.
fn symbols(row: &[&str]) -> Vec<char> {
    row.iter().filter_map(|field| field.chars().next()).collect()
}

/// Builds the transition table from the rows after the header.
///
/// Malformed rows (wrong field count, empty symbol, unknown direction)
/// are dropped silently; the table is simply missing those entries and
/// the affected configurations have no successors.
fn parse_transitions(rows: &[Vec<&str>]) -> HashMap<String, Vec<Transition>> {
    let mut rules: HashMap<String, Vec<Transition>> = HashMap::new();

    for row in rows {
        if let Some((state, transition)) = parse_transition(row) {
            rules.entry(state).or_default().push(transition);
        }
    }

    rules
}

fn parse_transition(row: &[&str]) -> Option<(String, Transition)> {
    // Anything but the 5-field shape is malformed.
    let [state, read, next_state, write, direction] = row else {
        return None;
    };
    if state.is_empty() {
        return None;
    }

    let read = one_char(read)?;
    let write = one_char(write)?;
    let direction = parse_direction(direction)?;

    Some((
        state.to_string(),
        Transition {
            read,
            write,
            direction,
            next_state: next_state.to_string(),
        },
    ))
}

fn parse_direction(field: &str) -> Option<Direction> {
    match field {
        "L" => Some(Direction::Left),
        "R" => Some(Direction::Right),
        _ => None,
    }
}

fn one_char(field: &str) -> Option<char> {
    field.chars().next()
}
