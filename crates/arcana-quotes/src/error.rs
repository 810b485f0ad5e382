//! Error types for loading quote data.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors that can occur while loading quote data.
///
/// Selection itself never fails; these only come out of store construction.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The quote data is not valid JSON or does not have the expected shape.
    #[error("failed to parse quote data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A quote file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A card key in the data is not a non-negative integer.
    #[error("invalid card key \"{0}\" in quote data")]
    InvalidCardKey(String),
}
