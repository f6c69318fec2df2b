//! Loading machine descriptions from files, strings, and directories.

use crate::parser::parse;
use crate::types::{Machine, NtmError};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of machine description files.
const DESCRIPTION_EXTENSION: &str = "csv";

/// `MachineLoader` loads machine descriptions from the file system or
/// from in-memory strings.
pub struct MachineLoader;

impl MachineLoader {
    /// Loads one machine description from `path`.
    ///
    /// # Errors
    ///
    /// * `NtmError::FileError` if the file cannot be read.
    /// * `NtmError::ParseError` / `NtmError::ValidationError` if the
    ///   content is not a valid description.
    pub fn load_machine(path: &Path) -> Result<Machine, NtmError> {
        let content = fs::read_to_string(path).map_err(|e| {
            NtmError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads one machine description from string content, e.g. user input
    /// or an embedded demo.
    pub fn load_machine_from_string(content: &str) -> Result<Machine, NtmError> {
        parse(content)
    }

    /// Loads every `.csv` description in `directory`, one `Result` per
    /// candidate file. Subdirectories and other extensions are skipped.
    pub fn load_machines(directory: &Path) -> Vec<Result<(PathBuf, Machine), NtmError>> {
        if !directory.exists() {
            return vec![Err(NtmError::FileError(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(NtmError::FileError(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        return Some(Err(NtmError::FileError(format!(
                            "Failed to read directory entry: {}",
                            e
                        ))))
                    }
                };

                let path = entry.path();

                if path.is_dir()
                    || path
                        .extension()
                        .is_none_or(|ext| ext != DESCRIPTION_EXTENSION)
                {
                    return None;
                }

                match Self::load_machine(&path) {
                    Ok(machine) => Some(Ok((path, machine))),
                    Err(e) => Some(Err(NtmError::FileError(format!(
                        "Failed to load machine from {}: {}",
                        path.display(),
                        e
                    )))),
                }
            })
            .collect()
    }
}
