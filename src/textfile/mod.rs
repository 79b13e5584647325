//! Text format load and save
//!
//! The fixed 7-line record format is documented in FORMAT.md. The reader
//! stops at the first shape mismatch and aborts (leaving the store empty)
//! on the first validation failure; the writer reproduces records in
//! current store order so that load(save(store)) round-trips.

mod errors;
pub mod reader;
pub mod writer;

pub use errors::{TextError, TextResult};
