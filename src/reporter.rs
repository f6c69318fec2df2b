//! Structured run events and the sinks that consume them. The explorer
//! only emits events; rendering them is kept out of the core.

use crate::types::{Outcome, RunSummary};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One structured event from a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The run is starting.
    Started { machine: String, input: String },
    /// A configuration was visited: the tape split around the head, the
    /// control state, and the level it was reached at.
    Visited {
        depth: usize,
        left: String,
        state: String,
        head: char,
        right: String,
    },
    /// The run halted.
    Finished { summary: RunSummary },
}

/// A sink for run events.
pub trait Reporter {
    fn emit(&mut self, event: Event);
}

/// Renders events as text, one line per configuration, in the simulator's
/// traditional output shape.
pub struct TextReporter<W: Write> {
    writer: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the reporter and hands the writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: Event) -> std::io::Result<()> {
        match event {
            Event::Started { machine, input } => {
                writeln!(self.writer, "Machine: {}", machine)?;
                writeln!(self.writer, "Initial string: {}", input)
            }
            Event::Visited {
                depth,
                left,
                state,
                head,
                right,
            } => {
                writeln!(self.writer, "Depth {}: {}{}|{}|{}", depth, left, state, head, right)
            }
            Event::Finished { summary } => {
                match summary.outcome {
                    Outcome::Accepted { depth } => {
                        writeln!(self.writer, "String accepted in {} transitions.", depth)?;
                    }
                    Outcome::Rejected => {
                        writeln!(self.writer, "String rejected.")?;
                    }
                    Outcome::StepLimitReached => {
                        writeln!(self.writer, "Execution stopped after exceeding the step limit.")?;
                    }
                    Outcome::TransitionLimitReached => {
                        writeln!(
                            self.writer,
                            "Execution stopped after exceeding the transition limit."
                        )?;
                    }
                }
                writeln!(
                    self.writer,
                    "Total transitions simulated: {}",
                    summary.total_transitions
                )?;
                writeln!(self.writer, "Tree depth: {}", summary.tree_depth)
            }
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn emit(&mut self, event: Event) {
        // A failing sink must not abort the run.
        let _ = self.write_event(event);
    }
}

/// Collects events in memory, for tests and programmatic callers.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub events: Vec<Event>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The summary carried by the `Finished` event, once the run is over.
    pub fn summary(&self) -> Option<&RunSummary> {
        self.events.iter().rev().find_map(|event| match event {
            Event::Finished { summary } => Some(summary),
            _ => None,
        })
    }
}

impl Reporter for MemoryReporter {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}
