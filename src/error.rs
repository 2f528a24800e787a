//! Error types for rollcheck.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from fetching or parsing the result dataset.
///
/// A fetch failure never reaches command handlers through the store's load
/// path; it is logged there and degrades to an empty store. The variants
/// exist so the explicit `fetch` command can report what went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid dataset URL '{0}'")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("dataset request returned HTTP {0}")]
    HttpStatus(u16),

    #[error("failed to read dataset from {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("malformed dataset body: {0}")]
    InvalidBody(String),
}

/// Result type alias for dataset fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Roll(#[from] crate::types::RollError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
