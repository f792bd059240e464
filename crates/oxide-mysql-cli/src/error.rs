//! Error types for the command-line front end.

use std::path::PathBuf;

use oxide_mysql_core::ParseError;

/// Errors that can occur while processing SQL sources.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A source could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// Path of the source.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A statement failed to parse.
    #[error("{origin}:{line}:{column}: {source}")]
    Parse {
        /// Name of the source the statement came from.
        origin: String,
        /// 1-based line of the error in the source.
        line: usize,
        /// 1-based byte column of the error in the source.
        column: usize,
        /// The statement text, trimmed.
        statement: String,
        /// Underlying parse error; its offset is relative to the statement.
        source: ParseError,
    },

    /// A statement could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
