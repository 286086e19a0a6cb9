//! Error types for the splitter.
//!
//! Splitting itself never fails. Errors come from constructing a splitter
//! with an invalid configuration, or from the I/O done by the binary.

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Chunk size must be positive.
    #[error("Invalid chunk size: 0. Chunk size must be at least 1")]
    InvalidChunkSize,

    /// Overlap larger than the chunk it overlaps into.
    #[error("Invalid chunk overlap: {chunk_overlap} is larger than chunk size {chunk_size}")]
    InvalidOverlap {
        chunk_overlap: usize,
        chunk_size: usize,
    },

    /// No separator set registered under this name.
    #[error("Unknown separator set: '{0}'")]
    UnknownSeparatorSet(String),

    /// Invalid configuration value (e.g. from the environment).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
