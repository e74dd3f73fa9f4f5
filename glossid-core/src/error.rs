//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by profile construction and partitioning
#[derive(Error, Debug)]
pub enum CoreError {
    /// Text source missing or unreadable
    #[error("corpus unavailable: {path}: {source}")]
    CorpusUnavailable {
        /// Path of the source that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A bigram candidate that is not exactly two characters
    #[error("bigram must be exactly two characters, got {0:?}")]
    InvalidBigram(String),

    /// Fold partitioning with no folds
    #[error("fold count must be at least 1")]
    InvalidFoldCount,

    /// A randomized sampling policy used without a random generator
    #[error("randomized sampling requires a random generator; use build_with_rng")]
    RngRequired,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
