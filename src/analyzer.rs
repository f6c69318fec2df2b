//! Pre-run checks for machine descriptions. A description that fails here
//! is rejected before any exploration begins.

use crate::types::{Machine, NtmError, BLANK_SYMBOL};

/// Problems a description can have before it is ever explored.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// A required scalar header field is empty.
    MissingField(&'static str),
    /// The tape alphabet does not contain the blank symbol.
    MissingBlank,
    /// Input-alphabet symbols absent from the tape alphabet.
    UncoveredInputSymbols(Vec<char>),
}

impl From<AnalysisError> for NtmError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::MissingField(name) => {
                NtmError::ValidationError(format!("Missing required field: {}", name))
            }
            AnalysisError::MissingBlank => NtmError::ValidationError(format!(
                "Tape alphabet does not contain the blank symbol '{}'",
                BLANK_SYMBOL
            )),
            AnalysisError::UncoveredInputSymbols(symbols) => NtmError::ValidationError(format!(
                "Input alphabet symbols missing from the tape alphabet: {:?}",
                symbols
            )),
        }
    }
}

/// Validates a description before it is handed to the explorer.
///
/// Runs each check in order; the first failure wins. Deliberately shallow:
/// transitions referencing unknown states or symbols are not an error,
/// they are dead branches at exploration time.
pub fn analyze(machine: &Machine) -> Result<(), NtmError> {
    let checks = [check_required_fields, check_alphabets];

    if let Some(error) = checks.iter().filter_map(|f| f(machine).err()).next() {
        return Err(error.into());
    }

    Ok(())
}

/// The scalar header fields the engine cannot run without.
fn check_required_fields(machine: &Machine) -> Result<(), AnalysisError> {
    let required = [
        ("name", &machine.name),
        ("start state", &machine.start_state),
        ("accept state", &machine.accept_state),
        ("reject state", &machine.reject_state),
    ];

    required
        .iter()
        .find(|(_, value)| value.is_empty())
        .map_or(Ok(()), |&(name, _)| Err(AnalysisError::MissingField(name)))
}

/// The tape alphabet must hold the blank and every input symbol.
fn check_alphabets(machine: &Machine) -> Result<(), AnalysisError> {
    if !machine.tape_alphabet.contains(&BLANK_SYMBOL) {
        return Err(AnalysisError::MissingBlank);
    }

    let mut uncovered: Vec<char> = machine
        .input_alphabet
        .iter()
        .filter(|c| !machine.tape_alphabet.contains(c))
        .copied()
        .collect();

    if !uncovered.is_empty() {
        uncovered.sort_unstable();
        uncovered.dedup();
        return Err(AnalysisError::UncoveredInputSymbols(uncovered));
    }

    Ok(())
}
