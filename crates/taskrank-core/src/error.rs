//! Core error types for taskrank-core.
//!
//! Ranking itself never fails; these errors cover the configuration and
//! task store that sit around it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskrank-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task store errors
    #[error("Task store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home/data directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("Failed to parse configuration at {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Task store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The file parsed as JSON but is not an array of records
    #[error("Task file {path} is not a JSON array")]
    NotAnArray { path: PathBuf },

    /// Failed to read or parse the task file
    #[error("Failed to read task file {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Failed to write the task file
    #[error("Failed to write task file {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// No task with this id
    #[error("Task not found: {0}")]
    NotFound(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
