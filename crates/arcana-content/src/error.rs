//! Error types for content loading and lookup.

use std::path::PathBuf;

use thiserror::Error;

use crate::library::ContentKind;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while loading or resolving content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A library file is not valid JSON or has the wrong shape.
    #[error("failed to parse {kind} library: {source}")]
    Parse {
        /// The library being parsed.
        kind: ContentKind,
        /// The JSON error.
        source: serde_json::Error,
    },

    /// A library file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The library was never loaded into the facade.
    #[error("{0} library is not loaded")]
    NotLoaded(ContentKind),

    /// No library has the given name.
    #[error("unknown content library: \"{0}\"")]
    UnknownLibrary(String),

    /// The string is not one of the sixteen personality types.
    #[error("unknown personality type: \"{0}\"")]
    UnknownPersonalityType(String),
}
