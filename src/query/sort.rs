//! Multi-key record ordering
//!
//! Composite key: name ascending (byte lexicographic), then direction
//! ascending (enum ordinal), then release date DESCENDING (most recent
//! first). Ties beyond the three keys keep no specified relative order.

use std::cmp::Ordering;

use crate::catalog::RecordStore;
use crate::model::Record;

/// Sorts the record store
pub struct RecordSorter;

impl RecordSorter {
    /// Reorders the whole store in place with the 3-key comparator.
    pub fn sort(store: &mut RecordStore) {
        store.sort_by(Self::compare);
    }

    /// The 3-key comparator: name asc, direction asc, date desc.
    pub fn compare(a: &Record, b: &Record) -> Ordering {
        a.name()
            .cmp(b.name())
            .then_with(|| a.direction().cmp(&b.direction()))
            .then_with(|| b.release_date().cmp(&a.release_date()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Compatibility, Direction, ReleaseDate};

    fn record(name: &str, direction: Direction, date: ReleaseDate) -> Record {
        Record::new(
            direction,
            "example.org",
            name,
            100,
            date,
            0,
            Compatibility::Linux,
        )
        .unwrap()
    }

    #[test]
    fn test_name_is_primary_key() {
        let a = record("alpha", Direction::DataScience, ReleaseDate::new(1, 1, 2020));
        let b = record("beta", Direction::Backend, ReleaseDate::new(1, 1, 2024));
        assert_eq!(RecordSorter::compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_direction_breaks_name_ties() {
        let a = record("lib", Direction::Backend, ReleaseDate::new(1, 1, 2020));
        let b = record("lib", Direction::Mobile, ReleaseDate::new(1, 1, 2024));
        assert_eq!(RecordSorter::compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_date_tie_break_is_descending() {
        let newer = record("lib", Direction::Backend, ReleaseDate::new(5, 5, 2024));
        let older = record("lib", Direction::Backend, ReleaseDate::new(1, 1, 2022));
        // Most recent first
        assert_eq!(RecordSorter::compare(&newer, &older), Ordering::Less);
        assert_eq!(RecordSorter::compare(&older, &newer), Ordering::Greater);
    }

    #[test]
    fn test_full_key_equality() {
        let a = record("lib", Direction::Backend, ReleaseDate::new(1, 1, 2022));
        let b = record("lib", Direction::Backend, ReleaseDate::new(1, 1, 2022));
        assert_eq!(RecordSorter::compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sort_whole_store() {
        let mut store = RecordStore::new();
        store
            .add(record("B", Direction::Backend, ReleaseDate::new(1, 1, 2023)))
            .unwrap();
        store
            .add(record("A", Direction::Frontend, ReleaseDate::new(1, 1, 2022)))
            .unwrap();
        store
            .add(record("A", Direction::Frontend, ReleaseDate::new(5, 5, 2024)))
            .unwrap();

        RecordSorter::sort(&mut store);

        let order: Vec<(&str, ReleaseDate)> = store
            .iter()
            .map(|r| (r.name(), r.release_date()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("A", ReleaseDate::new(5, 5, 2024)),
                ("A", ReleaseDate::new(1, 1, 2022)),
                ("B", ReleaseDate::new(1, 1, 2023)),
            ]
        );
    }

    #[test]
    fn test_sort_terminates_on_sorted_and_reversed_input() {
        let mut store = RecordStore::new();
        for name in ["a", "b", "c", "d"] {
            store
                .add(record(name, Direction::Backend, ReleaseDate::new(1, 1, 2020)))
                .unwrap();
        }
        RecordSorter::sort(&mut store);

        let mut reversed = RecordStore::new();
        for name in ["d", "c", "b", "a"] {
            reversed
                .add(record(name, Direction::Backend, ReleaseDate::new(1, 1, 2020)))
                .unwrap();
        }
        RecordSorter::sort(&mut reversed);

        let names: Vec<&str> = reversed.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }
}
