//! Text format reader
//!
//! Per FORMAT.md, a record is 7 lines: direction, site, name, size,
//! "day month year", dependency count, compatibility. A group of lines
//! that does not match this shape STOPS parsing without error; a record
//! that matches the shape but fails validation ABORTS the load.
//!
//! Loads are destructive on error: the store is cleared before parsing
//! and ends empty on any failure. A partial batch is never retained.

use std::fs;
use std::path::Path;
use std::str::Lines;

use crate::catalog::RecordStore;
use crate::model::{Compatibility, Direction, Record, ReleaseDate};

use super::errors::{TextError, TextResult};

/// Replaces the store's content with the records parsed from `text`.
///
/// Returns the number of records loaded. On any error the store is left
/// empty. Reading zero records is `EmptyOrMalformedInput`.
pub fn load_from_str(store: &mut RecordStore, text: &str) -> TextResult<usize> {
    store.clear();

    let mut lines = text.lines();
    loop {
        match read_record(&mut lines, store.len() + 1) {
            Ok(Some(record)) => {
                if let Err(e) = store.add(record) {
                    store.clear();
                    return Err(TextError::Store(e));
                }
            }
            Ok(None) => break,
            Err(e) => {
                store.clear();
                return Err(e);
            }
        }
    }

    if store.is_empty() {
        return Err(TextError::EmptyOrMalformedInput);
    }
    Ok(store.len())
}

/// File wrapper around `load_from_str`.
pub fn load_from_path(store: &mut RecordStore, path: &Path) -> TextResult<usize> {
    let text = fs::read_to_string(path).map_err(|source| TextError::FileUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(store, &text)
}

/// Reads one 7-line record.
///
/// `Ok(None)` means the remaining input does not match the record shape
/// (end of input, an empty text line, or a non-numeric number line) and
/// parsing should stop. `Err` means the record matched the shape but
/// failed validation; `index` is the 1-based record number for context.
fn read_record(lines: &mut Lines<'_>, index: usize) -> TextResult<Option<Record>> {
    let direction_line = match next_nonempty(lines) {
        Some(l) => l,
        None => return Ok(None),
    };
    let site = match next_nonempty(lines) {
        Some(l) => l,
        None => return Ok(None),
    };
    let name = match next_nonempty(lines) {
        Some(l) => l,
        None => return Ok(None),
    };
    let size: i64 = match lines.next().and_then(|l| l.trim().parse().ok()) {
        Some(v) => v,
        None => return Ok(None),
    };
    let (day, month, year) = match lines.next().and_then(parse_date_line) {
        Some(t) => t,
        None => return Ok(None),
    };
    let dependencies: i64 = match lines.next().and_then(|l| l.trim().parse().ok()) {
        Some(v) => v,
        None => return Ok(None),
    };
    let compatibility_line = match next_nonempty(lines) {
        Some(l) => l,
        None => return Ok(None),
    };

    let invalid = |source| TextError::InvalidRecord { index, source };

    let direction = Direction::parse(direction_line).map_err(invalid)?;
    let compatibility = Compatibility::parse(compatibility_line).map_err(invalid)?;
    let record = Record::new(
        direction,
        site,
        name,
        size,
        ReleaseDate::new(day, month, year),
        dependencies,
        compatibility,
    )
    .map_err(invalid)?;

    Ok(Some(record))
}

/// Text lines must be non-empty to match the shape.
fn next_nonempty<'a>(lines: &mut Lines<'a>) -> Option<&'a str> {
    lines.next().filter(|l| !l.is_empty())
}

/// The date line is exactly three space-separated integers.
fn parse_date_line(line: &str) -> Option<(i32, i32, i32)> {
    let mut parts = line.split_whitespace();
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelError;

    const ONE_RECORD: &str = "Backend\n\
                              github.com/acme/api\n\
                              acme-api\n\
                              500\n\
                              10 1 2024\n\
                              3\n\
                              Linux\n";

    #[test]
    fn test_loads_single_record() {
        let mut store = RecordStore::new();
        let count = load_from_str(&mut store, ONE_RECORD).unwrap();
        assert_eq!(count, 1);

        let record = store.get(0).unwrap();
        assert_eq!(record.direction(), Direction::Backend);
        assert_eq!(record.site(), "github.com/acme/api");
        assert_eq!(record.name(), "acme-api");
        assert_eq!(record.size(), 500);
        assert_eq!(record.release_date(), ReleaseDate::new(10, 1, 2024));
        assert_eq!(record.dependencies(), 3);
        assert_eq!(record.compatibility(), Compatibility::Linux);
    }

    #[test]
    fn test_empty_input_is_error() {
        let mut store = RecordStore::new();
        let err = load_from_str(&mut store, "").unwrap_err();
        assert!(matches!(err, TextError::EmptyOrMalformedInput));
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_tail_stops_without_error() {
        let text = format!("{ONE_RECORD}this line is not a record\n");
        let mut store = RecordStore::new();
        assert_eq!(load_from_str(&mut store, &text).unwrap(), 1);
    }

    #[test]
    fn test_non_numeric_size_is_shape_mismatch() {
        let text = ONE_RECORD.replace("500", "big");
        let mut store = RecordStore::new();
        // The size line breaks the shape, so zero records are read.
        let err = load_from_str(&mut store, &text).unwrap_err();
        assert!(matches!(err, TextError::EmptyOrMalformedInput));
    }

    #[test]
    fn test_unknown_direction_aborts_load() {
        let text = ONE_RECORD.replace("Backend", "Sideways");
        let mut store = RecordStore::new();
        let err = load_from_str(&mut store, &text).unwrap_err();
        assert!(matches!(
            err,
            TextError::InvalidRecord {
                index: 1,
                source: ModelError::UnknownDirection(_)
            }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_date_line_with_extra_token_is_shape_mismatch() {
        let text = ONE_RECORD.replace("10 1 2024", "10 1 2024 extra");
        let mut store = RecordStore::new();
        assert!(matches!(
            load_from_str(&mut store, &text).unwrap_err(),
            TextError::EmptyOrMalformedInput
        ));
    }
}
