//! This crate simulates nondeterministic Turing machines. It parses
//! delimited tabular machine descriptions, explores the configuration
//! tree breadth-first within step/depth/transition budgets, and emits
//! structured events for every visited configuration and the final
//! classification of the run.

pub mod analyzer;
pub mod explorer;
pub mod loader;
pub mod parser;
pub mod programs;
pub mod reporter;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the exploration engine from the explorer module.
pub use explorer::{successors, Explorer, Limits};
/// Re-exports the `MachineLoader` struct from the loader module.
pub use loader::MachineLoader;
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports `MachineInfo`, `MachineManager`, and `MACHINES` from the programs module.
pub use programs::{MachineInfo, MachineManager, MACHINES};
/// Re-exports the event types and sinks from the reporter module.
pub use reporter::{Event, MemoryReporter, Reporter, TextReporter};
/// Re-exports the machine description and run result types from the types module.
pub use types::{
    Config, Direction, Machine, NtmError, Outcome, RunSummary, Transition, BLANK_SYMBOL,
};
