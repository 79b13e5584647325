//! Validated repository records
//!
//! A `Record` can only be built through `Record::new`, which enforces
//! every admission rule. Fields are private and immutable afterwards;
//! a record is replaced, never edited in place.

use serde::Serialize;

use super::date::ReleaseDate;
use super::errors::{ModelError, ModelResult};
use super::types::{Compatibility, Direction};

/// Byte limit for the site and name fields.
///
/// Over-long values are rejected, not truncated (FORMAT.md).
pub const MAX_FIELD_BYTES: usize = 99;

/// A single repository metadata record, valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    direction: Direction,
    site: String,
    name: String,
    size: i64,
    release_date: ReleaseDate,
    dependencies: i64,
    compatibility: Compatibility,
}

impl Record {
    /// Builds a record, enforcing every admission rule:
    /// size > 0, dependencies >= 0, a real calendar date, and bounded
    /// newline-free site and name strings.
    pub fn new(
        direction: Direction,
        site: impl Into<String>,
        name: impl Into<String>,
        size: i64,
        release_date: ReleaseDate,
        dependencies: i64,
        compatibility: Compatibility,
    ) -> ModelResult<Self> {
        let site = site.into();
        let name = name.into();

        check_text_field("site", &site)?;
        check_text_field("name", &name)?;

        if size <= 0 {
            return Err(ModelError::InvalidSize(size));
        }
        if dependencies < 0 {
            return Err(ModelError::InvalidDependencyCount(dependencies));
        }
        if !release_date.is_valid() {
            return Err(ModelError::InvalidDate {
                day: release_date.day,
                month: release_date.month,
                year: release_date.year,
            });
        }

        Ok(Self {
            direction,
            site,
            name,
            size,
            release_date,
            dependencies,
            compatibility,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in kilobytes, always > 0
    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn release_date(&self) -> ReleaseDate {
        self.release_date
    }

    /// Dependency count, always >= 0
    pub fn dependencies(&self) -> i64 {
        self.dependencies
    }

    pub fn compatibility(&self) -> Compatibility {
        self.compatibility
    }
}

fn check_text_field(field: &'static str, value: &str) -> ModelResult<()> {
    if value.len() > MAX_FIELD_BYTES {
        return Err(ModelError::FieldTooLong {
            field,
            len: value.len(),
            limit: MAX_FIELD_BYTES,
        });
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(ModelError::EmbeddedNewline { field });
    }
    Ok(())
}
