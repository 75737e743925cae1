//! Error types for fnlist.
//!
//! The list controller itself never fails: collisions, vetoes and stale
//! references degrade to outcomes and warnings. Errors only arise at the
//! edges, when a project document is read from or written to disk.

use std::path::PathBuf;
use thiserror::Error;

/// Failures loading, saving or addressing a project document.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project file could not be read.
    #[error("Failed to read project at {path}: {source}")]
    Read {
        /// Project file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The project file is not valid project JSON.
    #[error("Invalid project JSON in {path}: {source}")]
    Parse {
        /// Project file path.
        path: PathBuf,
        /// JSON error with its position.
        #[source]
        source: serde_json::Error,
    },

    /// The project could not be written back.
    #[error("Failed to write project to {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Serializing the in-memory project failed.
    #[error("Failed to serialize project: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No extension with the requested name exists in the project.
    #[error("No extension named {0:?} in project")]
    UnknownExtension(String),

    /// The project has no extension at all, so there is no list to show.
    #[error("Project has no extensions")]
    NoExtensions,
}
