//! Error types for format lookup and stream operations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the archiver library.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The given name does not denote a known archive format or compression type.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// An extraction target failed its precondition check.
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    /// The node passed to `relative_path` does not live below the root.
    #[error("{} is not located under {}", node.display(), root.display())]
    NotUnderRoot {
        /// Canonical path of the root
        root: PathBuf,
        /// Canonical path of the node
        node: PathBuf,
    },

    /// An I/O error occurred while reading, writing or resolving a path.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArchiveError>;
