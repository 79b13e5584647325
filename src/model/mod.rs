//! Domain model for repository metadata
//!
//! Provides the closed enumeration tables (Direction, Compatibility), the
//! calendar-checked release date, and the validated Record type. Every
//! value that reaches the store has passed through this module first.

mod date;
mod errors;
mod record;
mod types;

pub use date::ReleaseDate;
pub use errors::{ModelError, ModelResult};
pub use record::{Record, MAX_FIELD_BYTES};
pub use types::{Compatibility, Direction};
