//! Domain validation errors
//!
//! Every way a record can be rejected on its way into the store. All
//! variants are recoverable: callers report them and keep running.

use thiserror::Error;

/// Result type for domain validation
pub type ModelResult<T> = Result<T, ModelError>;

/// Validation errors for record fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    #[error("unknown compatibility '{0}'")]
    UnknownCompatibility(String),

    #[error("invalid date {day:02}.{month:02}.{year:04}")]
    InvalidDate { day: i32, month: i32, year: i32 },

    #[error("size must be > 0, got {0}")]
    InvalidSize(i64),

    #[error("dependency count must be >= 0, got {0}")]
    InvalidDependencyCount(i64),

    #[error("{field} is {len} bytes, limit is {limit}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        limit: usize,
    },

    #[error("{field} must not contain a newline")]
    EmbeddedNewline { field: &'static str },
}
