//! Error types for graph loading and run configuration.
//!
//! The search core (builder, controller, annealing wrapper) never fails;
//! errors only arise at the edges: reading an input file, parsing it, or
//! assembling a run configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for `u-indset` operations.
#[derive(Error, Debug)]
pub enum IndSetError {
    /// Invalid run configuration (algorithm selection, annealing parameters).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input file could not be opened or read.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed header or edge line in an edge-list file.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl IndSetError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        IndSetError::Config(message.into())
    }

    /// Creates a parse error for a 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IndSetError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Wraps an I/O failure together with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndSetError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndSetError>;
