//! Store error types
//!
//! Growth failure is the only failure mode the store itself can produce,
//! and it must leave the store in its prior valid state.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type for store operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("allocation failure while growing the store: {0}")]
    AllocationFailure(#[from] TryReserveError),
}
