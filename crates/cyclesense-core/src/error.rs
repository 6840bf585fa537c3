//! Error types for cyclesense-core.

use std::path::{Path, PathBuf};

/// Result type alias for Cyclesense operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared across the Cyclesense crates.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be resolved, parsed, or validated.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file.
    #[error("I/O error on {path}: {source}")]
    IoWithPath {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A node id was expected in the fact graph but is absent.
    #[error("Node not found in fact graph: {id}")]
    NodeNotFound {
        /// The missing node id
        id: String,
    },

    /// The analysis pipeline could not produce a result.
    #[error("Analysis error: {message}")]
    Analysis {
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a missing-node error.
    pub fn node_not_found<S: Into<String>>(id: S) -> Self {
        Error::NodeNotFound { id: id.into() }
    }

    /// Creates a new analysis error.
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        Error::Analysis {
            message: message.into(),
        }
    }
}
