//! CLI error types
//!
//! Everything surfaced here is recoverable inside the menu loop; only
//! `main` turns an error into a non-zero exit.

use std::io;

use thiserror::Error;

use crate::model::ModelError;
use crate::textfile::TextError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
