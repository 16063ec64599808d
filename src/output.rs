//! Allocation of a fresh output directory next to the input package.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Base name of the output directory
pub const OUTPUT_DIR_NAME: &str = "output_preview";

/// Number of names tried before giving up
pub const MAX_ATTEMPTS: u32 = 1000;

/// Errors that can occur while allocating the output directory
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Every candidate name already exists
    #[error("Could not create an output directory under {root}: {attempts} names already taken")]
    Exhausted {
        /// Directory the candidates were tried in
        root: PathBuf,
        /// Number of names tried
        attempts: u32,
    },

    /// Directory creation failed
    #[error("Failed to create output directory {path}: {source}")]
    IoError {
        /// Directory being created
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

/// Candidate output directory for attempt `i`: `output_preview`, then
/// `output_preview_0001`, `output_preview_0002`, ...
pub fn candidate(root: &Path, i: u32) -> PathBuf {
    if i == 0 {
        root.join(OUTPUT_DIR_NAME)
    } else {
        root.join(format!("{OUTPUT_DIR_NAME}_{i:04}"))
    }
}

/// Create the first candidate directory under `root` that does not exist yet
pub fn create_output_dir(root: &Path) -> Result<PathBuf, OutputError> {
    for i in 0..MAX_ATTEMPTS {
        let path = candidate(root, i);
        if path.exists() {
            continue;
        }
        fs::create_dir_all(&path).map_err(|source| OutputError::IoError {
            path: path.clone(),
            source,
        })?;
        log::debug!("Allocated output directory {}", path.display());
        return Ok(path);
    }

    Err(OutputError::Exhausted {
        root: root.to_path_buf(),
        attempts: MAX_ATTEMPTS,
    })
}
