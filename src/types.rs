//! Core data structures for the nondeterministic Turing machine simulator:
//! machine descriptions, tape configurations, run outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::Rule;

/// The blank tape symbol. Tape cells grown past either end hold it.
pub const BLANK_SYMBOL: char = '_';
/// Default bound on the number of configurations examined in one run.
pub const DEFAULT_MAX_STEPS: usize = 500;
/// Default bound on the depth of the configuration tree.
pub const DEFAULT_MAX_DEPTH: usize = 50;
/// Default bound on the number of transitions simulated in one run.
pub const DEFAULT_MAX_TRANSITIONS: usize = 500;

/// A nondeterministic Turing machine description.
///
/// Built once by the parser and read-only afterwards; a single description
/// is shared by an entire run. The accept and reject states are terminal by
/// convention: no rules are defined for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Machine {
    /// The name of the machine.
    pub name: String,
    /// The machine's control states.
    pub states: Vec<String>,
    /// Symbols the input string may use.
    pub input_alphabet: Vec<char>,
    /// Symbols the tape may hold; a superset of the input alphabet plus
    /// the blank.
    pub tape_alphabet: Vec<char>,
    /// The state the machine starts in.
    pub start_state: String,
    /// The accepting state. Reaching it on any branch ends the run.
    pub accept_state: String,
    /// The rejecting state.
    pub reject_state: String,
    /// The input string carried by the description.
    pub input: String,
    /// The transition table, keyed by source state. A (state, symbol) pair
    /// may match several entries; their order is the description order.
    pub rules: HashMap<String, Vec<Transition>>,
}

impl Machine {
    /// All rules applicable to `(state, symbol)`, in description order.
    ///
    /// An empty result is not an error: the branch simply has no
    /// successors and dies without reaching the accept state.
    pub fn transitions<'m>(
        &'m self,
        state: &str,
        symbol: char,
    ) -> impl Iterator<Item = &'m Transition> + 'm {
        self.rules
            .get(state)
            .into_iter()
            .flatten()
            .filter(move |t| t.read == symbol)
    }

    /// The configuration the exploration starts from: the input string on
    /// the tape, the start state, head at cell zero.
    pub fn initial_configuration(&self) -> Config {
        Config::new(&self.input, self.start_state.clone())
    }
}

/// A single transition rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The symbol that must be under the head for this rule to apply.
    pub read: char,
    /// The symbol written over the cell under the head.
    pub write: char,
    /// Where the head moves after writing.
    pub direction: Direction,
    /// The state the machine transitions to.
    pub next_state: String,
}

/// The directions the head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
}

/// One snapshot of the machine: tape contents, control state, and head
/// position. Immutable once created; the expander copies, never mutates.
///
/// Invariant: `head < tape.len()` at all times. The boundary-growth rule
/// in the expander maintains it, and `new` seeds an empty input with one
/// blank cell so it holds from the start.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Config {
    /// The tape, a finite buffer grown on demand.
    pub tape: Vec<char>,
    /// The control state.
    pub state: String,
    /// Index of the cell under the head.
    pub head: usize,
}

impl Config {
    /// Builds the configuration holding `input` in state `state`.
    pub fn new(input: &str, state: String) -> Self {
        let mut tape: Vec<char> = input.chars().collect();
        if tape.is_empty() {
            tape.push(BLANK_SYMBOL);
        }

        Self {
            tape,
            state,
            head: 0,
        }
    }

    /// The symbol under the head.
    pub fn head_symbol(&self) -> char {
        self.tape[self.head]
    }

    /// Tape contents strictly left of the head.
    pub fn left(&self) -> String {
        self.tape[..self.head].iter().collect()
    }

    /// Tape contents strictly right of the head.
    pub fn right(&self) -> String {
        self.tape[self.head + 1..].iter().collect()
    }
}

/// Terminal classification of a run. Exactly one is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// An accepting configuration was found at the given depth. First
    /// found in visitation order wins.
    Accepted { depth: usize },
    /// The frontier emptied, or the depth bound ran out, without
    /// acceptance.
    Rejected,
    /// The step budget was exhausted before the run resolved.
    StepLimitReached,
    /// The transition budget was exhausted before the run resolved.
    TransitionLimitReached,
}

/// What a run reports when it halts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub outcome: Outcome,
    /// Successor configurations produced over the whole run.
    pub total_transitions: usize,
    /// The last tree level the explorer iterated.
    pub tree_depth: usize,
}

/// Errors that can occur while preparing a machine for exploration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NtmError {
    /// The description source does not match the tabular grammar.
    #[error("Description parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// The description parsed but fails a pre-run check.
    #[error("Description validation error: {0}")]
    ValidationError(String),
    /// A file system operation failed.
    #[error("File error: {0}")]
    FileError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rule_machine() -> Machine {
        let mut rules = HashMap::new();
        rules.insert(
            "q0".to_string(),
            vec![
                Transition {
                    read: 'a',
                    write: 'b',
                    direction: Direction::Right,
                    next_state: "q1".to_string(),
                },
                Transition {
                    read: 'a',
                    write: 'a',
                    direction: Direction::Left,
                    next_state: "q2".to_string(),
                },
                Transition {
                    read: 'b',
                    write: 'b',
                    direction: Direction::Right,
                    next_state: "q1".to_string(),
                },
            ],
        );

        Machine {
            name: "Two Rules".to_string(),
            states: vec!["q0".into(), "q1".into(), "q2".into()],
            input_alphabet: vec!['a', 'b'],
            tape_alphabet: vec!['a', 'b', BLANK_SYMBOL],
            start_state: "q0".to_string(),
            accept_state: "q1".to_string(),
            reject_state: "q2".to_string(),
            input: "ab".to_string(),
            rules,
        }
    }

    #[test]
    fn test_transitions_returns_all_matches_in_order() {
        let machine = two_rule_machine();

        let matches: Vec<_> = machine.transitions("q0", 'a').collect();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].next_state, "q1");
        assert_eq!(matches[1].next_state, "q2");
    }

    #[test]
    fn test_transitions_empty_for_undefined_pair() {
        let machine = two_rule_machine();

        assert_eq!(machine.transitions("q0", 'z').count(), 0);
        assert_eq!(machine.transitions("nowhere", 'a').count(), 0);
    }

    #[test]
    fn test_initial_configuration() {
        let machine = two_rule_machine();
        let config = machine.initial_configuration();

        assert_eq!(config.tape, vec!['a', 'b']);
        assert_eq!(config.state, "q0");
        assert_eq!(config.head, 0);
    }

    #[test]
    fn test_empty_input_seeds_one_blank_cell() {
        let config = Config::new("", "q0".to_string());

        assert_eq!(config.tape, vec![BLANK_SYMBOL]);
        assert_eq!(config.head_symbol(), BLANK_SYMBOL);
    }

    #[test]
    fn test_config_splits_around_head() {
        let config = Config {
            tape: vec!['a', 'b', 'c', 'd'],
            state: "q0".to_string(),
            head: 2,
        };

        assert_eq!(config.left(), "ab");
        assert_eq!(config.head_symbol(), 'c');
        assert_eq!(config.right(), "d");
    }

    #[test]
    fn test_direction_serialization() {
        let left = Direction::Left;
        let right = Direction::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Direction = serde_json::from_str(&left_json).unwrap();
        let right_deserialized: Direction = serde_json::from_str(&right_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(right, right_deserialized);
    }

    #[test]
    fn test_summary_serialization_round_trip() {
        let summary = RunSummary {
            outcome: Outcome::Accepted { depth: 3 },
            total_transitions: 17,
            tree_depth: 3,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: RunSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(summary, deserialized);
    }

    #[test]
    fn test_error_display() {
        let error = NtmError::ValidationError("Missing required field: name".to_string());

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("validation"));
        assert!(error_msg.contains("name"));
    }
}
