//! Application layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Content generation error: {0}")]
    ContentError(#[from] crate::generation::ContentError),

    #[error("Template error: {0}")]
    TemplateError(#[from] crate::infrastructure::TemplateError),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Validation errors for scaffold requests
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid project name: {0} (use lowercase letters, digits, '-' and '_')")]
    InvalidProjectName(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid event name: {0:?}")]
    InvalidEventName(String),

    #[error("Invalid trait name: {0:?}")]
    InvalidTraitName(String),

    #[error("Duplicate event name: {0}")]
    DuplicateEventName(String),

    #[error("Template directory not found: {}", .0.display())]
    TemplateDirNotFound(PathBuf),

    #[error("Output directory is not empty: {}", .0.display())]
    OutputDirNotEmpty(PathBuf),
}
