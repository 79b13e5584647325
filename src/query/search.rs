//! Predicate search over the store
//!
//! Linear scans producing 0-based positions in ascending store order.
//! An empty result is a value, never an error, and there is no result cap.

use crate::catalog::RecordStore;
use crate::model::{Direction, Record, ReleaseDate};

/// Ordered positions of matching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatches {
    positions: Vec<usize>,
}

impl SearchMatches {
    /// Positions in ascending scan order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }
}

/// Evaluates search predicates against the store
pub struct RecordSearch;

impl RecordSearch {
    /// All records with the given direction.
    pub fn by_direction(store: &RecordStore, direction: Direction) -> SearchMatches {
        Self::scan(store, |r| r.direction() == direction)
    }

    /// Combined search: exact release date AND exact size.
    ///
    /// Both legs must hold. A record matching the date but not the size
    /// (or the other way round) is excluded.
    pub fn by_date_and_size(store: &RecordStore, date: ReleaseDate, size: i64) -> SearchMatches {
        Self::scan(store, |r| r.release_date() == date && r.size() == size)
    }

    fn scan<P>(store: &RecordStore, predicate: P) -> SearchMatches
    where
        P: Fn(&Record) -> bool,
    {
        let positions = store
            .iter()
            .enumerate()
            .filter(|(_, record)| predicate(record))
            .map(|(position, _)| position)
            .collect();
        SearchMatches { positions }
    }
}
