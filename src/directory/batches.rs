//! Paginated iteration over a snapshot of address book records.

use crate::models::Record;
use std::iter::FusedIterator;
use std::vec;

/// A single-pass iterator of record batches.
///
/// The records are copied out of the address book when the iterator is
/// created, so later changes to the book are not observed. Every batch holds
/// `batch_size` records except possibly the last.
#[derive(Debug)]
pub struct Batches {
    remaining: vec::IntoIter<Record>,
    batch_size: usize,
}

impl Batches {
    /// `batch_size` must be non-zero; [`AddressBook::paginate`](crate::AddressBook::paginate)
    /// checks this before construction.
    pub(crate) fn new(records: Vec<Record>, batch_size: usize) -> Self {
        debug_assert!(batch_size > 0);
        Self {
            remaining: records.into_iter(),
            batch_size,
        }
    }
}

impl Iterator for Batches {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<Record> = self.remaining.by_ref().take(self.batch_size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let batches = self.remaining.len().div_ceil(self.batch_size);
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for Batches {}

impl FusedIterator for Batches {}
