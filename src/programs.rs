use crate::types::{Machine, NtmError};

use std::sync::RwLock;

// Embedded demo machine descriptions
const MACHINE_TEXTS: [&str; 3] = [
    include_str!("../demos/starts-with-zero.csv"),
    include_str!("../demos/contains-11.csv"),
    include_str!("../demos/even-zeros.csv"),
];

lazy_static::lazy_static! {
    pub static ref MACHINES: RwLock<Vec<Machine>> = RwLock::new(Vec::new());
}

pub struct MachineManager;

impl MachineManager {
    /// Parse the embedded demo descriptions and cache the results.
    pub fn load() -> Result<(), NtmError> {
        let mut machines = Vec::new();

        for text in MACHINE_TEXTS {
            if let Ok(machine) = crate::parser::parse(text) {
                machines.push(machine);
            } else {
                eprintln!("Failed to parse embedded machine");
            }
        }

        if let Ok(mut write_guard) = MACHINES.write() {
            *write_guard = machines;
        } else {
            return Err(NtmError::FileError(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of available demo machines
    pub fn count() -> usize {
        let _ = Self::load();

        MACHINES.read().map(|machines| machines.len()).unwrap_or(0)
    }

    /// Get a demo machine by its index
    pub fn by_index(index: usize) -> Result<Machine, NtmError> {
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| NtmError::FileError("Failed to acquire read lock".to_string()))?
            .get(index)
            .cloned()
            .ok_or_else(|| {
                NtmError::ValidationError(format!("Machine index {} out of range", index))
            })
    }

    /// Get a demo machine by its name
    pub fn by_name(name: &str) -> Result<Machine, NtmError> {
        let _ = Self::load();

        MACHINES
            .read()
            .map_err(|_| NtmError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|machine| machine.name == name)
            .cloned()
            .ok_or_else(|| NtmError::ValidationError(format!("Machine '{}' not found", name)))
    }

    /// List all demo machine names
    pub fn names() -> Vec<String> {
        let _ = Self::load();

        MACHINES
            .read()
            .map(|machines| {
                machines
                    .iter()
                    .map(|machine| machine.name.clone())
                    .collect()
            })
            .unwrap_or_else(|_| Vec::new())
    }

    /// Summarize a demo machine by its index
    pub fn info(index: usize) -> Result<MachineInfo, NtmError> {
        let machine = Self::by_index(index)?;

        Ok(MachineInfo {
            index,
            name: machine.name.clone(),
            input: machine.input.clone(),
            state_count: machine.states.len(),
            transition_count: machine
                .rules
                .values()
                .map(|transitions| transitions.len())
                .sum(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MachineInfo {
    pub index: usize,
    pub name: String,
    pub input: String,
    pub state_count: usize,
    pub transition_count: usize,
}
