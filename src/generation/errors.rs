//! Error types for the generation domain

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing data or producing artifacts
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid data context: {0}")]
    InvalidContext(String),

    #[error("Unsupported data file format: {0}")]
    UnsupportedFormat(String),

    #[error("Template {0} is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("Destination escapes the output directory: {0}")]
    UnsafePath(String),

    #[error("Could not start `{command}` in {}: {source}", .working_dir.display())]
    CommandSpawn {
        command: String,
        working_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Errors raised by content generators
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Content service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid content response: {0}")]
    InvalidResponse(String),

    #[error("Content source error: {0}")]
    Source(#[from] GenerationError),
}
