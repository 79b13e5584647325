//! repodb - A strict, validated, in-memory repository metadata store
//!
//! Records pass full validation before admission; the store never holds a
//! partially populated record. See FORMAT.md for the on-disk text format.

pub mod catalog;
pub mod cli;
pub mod model;
pub mod observability;
pub mod query;
pub mod textfile;
