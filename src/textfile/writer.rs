//! Text format writer
//!
//! Serializes records in current store order, one FORMAT.md field line
//! per field, date as "day month year" on a single line. The output is
//! information-preserving: loading it back reproduces the same records
//! in the same order.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::catalog::RecordStore;
use crate::model::Record;

use super::errors::{TextError, TextResult};

/// Serializes the whole store. An empty store is `NothingToSave`.
pub fn save_to_string(store: &RecordStore) -> TextResult<String> {
    if store.is_empty() {
        return Err(TextError::NothingToSave);
    }

    let mut out = String::new();
    for record in store.records() {
        write_record(&mut out, record);
    }
    Ok(out)
}

/// File wrapper around `save_to_string`.
pub fn save_to_path(store: &RecordStore, path: &Path) -> TextResult<()> {
    let text = save_to_string(store)?;
    fs::write(path, text).map_err(|source| TextError::FileUnavailable {
        path: path.display().to_string(),
        source,
    })
}

fn write_record(out: &mut String, record: &Record) {
    let date = record.release_date();
    // Formatting into a String cannot fail.
    let _ = write!(
        out,
        "{}\n{}\n{}\n{}\n{} {} {}\n{}\n{}\n",
        record.direction(),
        record.site(),
        record.name(),
        record.size(),
        date.day,
        date.month,
        date.year,
        record.dependencies(),
        record.compatibility(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Compatibility, Direction, ReleaseDate};

    fn sample() -> Record {
        Record::new(
            Direction::DevOps,
            "gitlab.com/ops/deploy",
            "deploy-kit",
            1200,
            ReleaseDate::new(5, 11, 2023),
            7,
            Compatibility::CrossPlatform,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_store_is_nothing_to_save() {
        let store = RecordStore::new();
        assert!(matches!(
            save_to_string(&store).unwrap_err(),
            TextError::NothingToSave
        ));
    }

    #[test]
    fn test_exact_output_shape() {
        let mut store = RecordStore::new();
        store.add(sample()).unwrap();

        let text = save_to_string(&store).unwrap();
        assert_eq!(
            text,
            "DevOps\ngitlab.com/ops/deploy\ndeploy-kit\n1200\n5 11 2023\n7\nCrossPlatform\n"
        );
    }

    #[test]
    fn test_records_written_in_store_order() {
        let mut store = RecordStore::new();
        store.add(sample()).unwrap();
        store
            .add(
                Record::new(
                    Direction::Backend,
                    "s",
                    "n",
                    1,
                    ReleaseDate::new(1, 1, 2020),
                    0,
                    Compatibility::Windows,
                )
                .unwrap(),
            )
            .unwrap();

        let text = save_to_string(&store).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "DevOps");
        assert_eq!(lines[7], "Backend");
    }
}
