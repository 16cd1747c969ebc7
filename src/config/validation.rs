//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that file output has a usable path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::{LoggerConfig, OutputKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("output.path is required when output.kind = \"file\"")]
    MissingPath,

    #[error("output.path must not be empty")]
    EmptyPath,

    #[error("output.path {0:?} is a directory")]
    PathIsDirectory(PathBuf),

    #[error("output.path is only used when output.kind = \"file\" (kind is {0:?})")]
    UnusedPath(OutputKind),
}

/// Check `config` for semantic problems.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let output = &config.output;

    match (&output.kind, &output.path) {
        (OutputKind::File, None) => errors.push(ValidationError::MissingPath),
        (OutputKind::File, Some(path)) => {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::EmptyPath);
            } else if path.is_dir() {
                errors.push(ValidationError::PathIsDirectory(path.clone()));
            }
        }
        (kind, Some(path)) => {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::EmptyPath);
            }
            errors.push(ValidationError::UnusedPath(*kind));
        }
        (_, None) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
