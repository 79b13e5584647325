//! Search and sort over the record store
//!
//! Both operate on the store's current snapshot: search returns ordered
//! positions, sort reorders the whole sequence in place.

mod search;
mod sort;

pub use search::{RecordSearch, SearchMatches};
pub use sort::RecordSorter;
