//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors that can occur while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// IO error writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The statement file could not be read.
    #[error("Failed to read '{path}': {source}")]
    ReadInput {
        /// Path that was given on the command line.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A statement was rejected; its diagnostic has already been printed.
    #[error("Statement {index} was rejected")]
    Rejected {
        /// One-based statement number (line number for `check`).
        index: usize,
    },
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
