//! Error types for the log writer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a log file.
#[derive(Error, Debug)]
pub enum WriterError {
    /// The output file could not be created.
    #[error("Unable to create log file '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every candidate name was already taken.
    #[error("No free file name for '{base}' after {attempts} attempts")]
    NameExhausted { base: String, attempts: u32 },

    /// IO error while writing or reading back.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
