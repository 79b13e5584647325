//! Growable collection of validated records

use std::cmp::Ordering;

use crate::model::Record;

use super::errors::CatalogResult;

/// The in-memory record store.
///
/// Only the count and the record contents are contract; growth mechanics
/// are not. Existing entries are never mutated in place: a failed append
/// leaves the store exactly as it was.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at the given 0-based position.
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Slice view of all records in current order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterator over records in current order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Appends a record.
    ///
    /// Growth is reserved up front so that an allocation failure is
    /// reported as a recoverable error with the store untouched.
    pub fn add(&mut self, record: Record) -> CatalogResult<()> {
        self.records.try_reserve(1)?;
        self.records.push(record);
        Ok(())
    }

    /// Replaces the entire content in one step.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Drops all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Reorders the whole sequence with the given comparator.
    ///
    /// The relative order of equal-key records is unspecified.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Record, &Record) -> Ordering,
    {
        self.records.sort_unstable_by(compare);
    }
}
