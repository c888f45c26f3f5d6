//! Loader errors.

use std::io;
use std::path::PathBuf;

use arcgraph_core::GraphError;
use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Error type for graph loading. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Can't read file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount { line: usize, expected: usize, found: usize },

    #[error("Line {line}: bad number '{text}'")]
    BadNumber { line: usize, text: String },

    #[error("Line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: GraphError,
    },

    #[error("{nodes} nodes do not fit into graph capacity {capacity}")]
    CapacityExceeded { nodes: usize, capacity: usize },
}

impl LoadError {
    /// Line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match *self {
            LoadError::FieldCount { line, .. } | LoadError::BadNumber { line, .. } | LoadError::Rejected { line, .. } => Some(line),
            LoadError::Io { .. } | LoadError::CapacityExceeded { .. } => None,
        }
    }
}
