//! Text format error types

use std::io;

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::ModelError;

/// Result type for text format operations
pub type TextResult<T> = Result<T, TextError>;

/// Load/save errors for the fixed text format
#[derive(Debug, Error)]
pub enum TextError {
    /// No record could be read from the input at all.
    #[error("input is empty or does not match the record format")]
    EmptyOrMalformedInput,

    /// Save was asked for an empty store.
    #[error("nothing to save: store is empty")]
    NothingToSave,

    /// The data file could not be read or written.
    #[error("file unavailable '{path}': {source}")]
    FileUnavailable { path: String, source: io::Error },

    /// A shape-matching record failed validation. `index` is 1-based.
    #[error("record {index}: {source}")]
    InvalidRecord { index: usize, source: ModelError },

    #[error(transparent)]
    Store(#[from] CatalogError),
}
