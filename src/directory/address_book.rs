//! The address book: records keyed by contact name.

use super::batches::Batches;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Record;
use crate::search::RecordQuery;
use std::collections::BTreeMap;

/// Batch size used by [`AddressBook::batches`].
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// An in-memory collection of contacts, one [`Record`] per name.
///
/// Iteration, search results and batches follow name order. Adding a record
/// whose name is already present replaces the previous record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create a new empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name.
    ///
    /// Returns the record previously stored under that name, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().as_str().to_string(), record)
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup for in-place edits of a record's phones or birthday.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Alias of [`AddressBook::get`].
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Records whose name contains `query` (ignoring case) or which have a
    /// phone containing `query`. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = RecordQuery::new(query);
        self.records
            .values()
            .filter(|record| query.matches(record))
            .collect()
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Split a snapshot of all records into batches of `batch_size`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidArgument` if `batch_size` is 0.
    pub fn paginate(&self, batch_size: usize) -> DirectoryResult<Batches> {
        if batch_size == 0 {
            return Err(DirectoryError::InvalidArgument(
                "batch size must be at least 1".to_string(),
            ));
        }

        Ok(Batches::new(self.records.values().cloned().collect(), batch_size))
    }

    /// [`AddressBook::paginate`] with [`DEFAULT_BATCH_SIZE`].
    pub fn batches(&self) -> Batches {
        Batches::new(self.records.values().cloned().collect(), DEFAULT_BATCH_SIZE)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}
