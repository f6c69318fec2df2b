//! The bounded level-order exploration engine. From the starting
//! configuration it expands every applicable transition depth by depth,
//! prunes revisited configurations, detects acceptance, and enforces the
//! step, depth, and transition budgets so that exploration of an
//! in-general-infinite branching process always terminates.

use crate::reporter::{Event, Reporter};
use crate::types::{
    Config, Direction, Machine, Outcome, RunSummary, BLANK_SYMBOL, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_STEPS, DEFAULT_MAX_TRANSITIONS,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Resource budgets for one run. Each bound is enforced independently;
/// any single one being reached halts the exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Configurations examined, duplicates included. Checked before each
    /// level.
    pub max_steps: usize,
    /// Levels of the configuration tree.
    pub max_depth: usize,
    /// Successor configurations produced. Checked at level boundaries, so
    /// a single level may overshoot before the stop is detected.
    pub max_transitions: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_depth: DEFAULT_MAX_DEPTH,
            max_transitions: DEFAULT_MAX_TRANSITIONS,
        }
    }
}

/// All configurations reachable from `config` in one step, one per
/// applicable rule, in rule order.
///
/// Each successor gets its own tape copy; configurations never share
/// mutable storage. Moving off either end of the tape grows it by one
/// blank cell, which keeps the head index in bounds: moving left from
/// cell zero prepends a blank and leaves the head at zero, moving right
/// past the last cell appends one.
pub fn successors(machine: &Machine, config: &Config) -> Vec<Config> {
    machine
        .transitions(&config.state, config.head_symbol())
        .map(|rule| {
            let mut tape = config.tape.clone();
            tape[config.head] = rule.write;

            let head = match rule.direction {
                Direction::Left => {
                    if config.head == 0 {
                        tape.insert(0, BLANK_SYMBOL);
                        0
                    } else {
                        config.head - 1
                    }
                }
                Direction::Right => {
                    let head = config.head + 1;
                    if head >= tape.len() {
                        tape.push(BLANK_SYMBOL);
                    }
                    head
                }
            };

            Config {
                tape,
                state: rule.next_state.clone(),
                head,
            }
        })
        .collect()
}

/// Drives one bounded breadth-first run over a machine's configuration
/// tree.
///
/// The explorer owns the visited set and the step/transition counters for
/// exactly one run; [`Explorer::run`] consumes it, so run state can never
/// leak into a second run.
pub struct Explorer<'a> {
    machine: &'a Machine,
    limits: Limits,
    visited: HashSet<Config>,
    steps: usize,
    total_transitions: usize,
}

impl<'a> Explorer<'a> {
    pub fn new(machine: &'a Machine, limits: Limits) -> Self {
        Self {
            machine,
            limits,
            visited: HashSet::new(),
            steps: 0,
            total_transitions: 0,
        }
    }

    /// Runs the exploration to one of the four terminal outcomes, emitting
    /// events to `reporter` along the way.
    ///
    /// Within a level, configurations are visited in the order the
    /// previous level's expansion produced them; the first accepting
    /// configuration in that order wins.
    pub fn run<R: Reporter>(mut self, reporter: &mut R) -> RunSummary {
        reporter.emit(Event::Started {
            machine: self.machine.name.clone(),
            input: self.machine.input.clone(),
        });

        let mut frontier = vec![self.machine.initial_configuration()];
        let mut accepting_depth = None;
        let mut tree_depth = 0;
        let mut outcome = Outcome::Rejected;

        for depth in 0..self.limits.max_depth {
            tree_depth = depth;

            if self.steps >= self.limits.max_steps {
                outcome = Outcome::StepLimitReached;
                break;
            }
            if frontier.is_empty() {
                // The previous level produced nothing: every branch died.
                break;
            }

            let mut next_level = Vec::new();

            for config in &frontier {
                self.steps += 1;

                // A configuration reached again via a different history
                // behaves identically; skip it entirely, accept check
                // included.
                if self.visited.contains(config) {
                    continue;
                }
                self.visited.insert(config.clone());

                reporter.emit(Event::Visited {
                    depth,
                    left: config.left(),
                    state: config.state.clone(),
                    head: config.head_symbol(),
                    right: config.right(),
                });

                if config.state == self.machine.accept_state {
                    accepting_depth = Some(depth);
                    break;
                }

                let expanded = successors(self.machine, config);
                self.total_transitions += expanded.len();
                next_level.extend(expanded);
            }

            // Checked after the whole level, ahead of the acceptance
            // check: the transition bound is soft and a budget stop takes
            // precedence over an acceptance found in the same level.
            if self.total_transitions > self.limits.max_transitions {
                outcome = Outcome::TransitionLimitReached;
                break;
            }
            if let Some(depth) = accepting_depth {
                outcome = Outcome::Accepted { depth };
                break;
            }

            frontier = next_level;
        }

        let summary = RunSummary {
            outcome,
            total_transitions: self.total_transitions,
            tree_depth,
        };

        reporter.emit(Event::Finished {
            summary: summary.clone(),
        });

        summary
    }
}
