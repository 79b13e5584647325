//! The in-memory record store
//!
//! A growable sequence of validated records. Insertion order is the
//! canonical order until a sort reorders it; capacity is not observable.

mod errors;
mod store;

pub use errors::{CatalogError, CatalogResult};
pub use store::RecordStore;
