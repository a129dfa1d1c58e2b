//! Saving and loading a whole address book through a [`BlobStore`].

use super::traits::BlobStore;
use crate::directory::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// On-disk document: `{"records": [{"name", "phones", "birthday"}, ...]}`.
#[derive(Serialize)]
struct StoredBookRef<'a> {
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct StoredBook {
    records: Vec<Record>,
}

/// Persists an [`AddressBook`] as a JSON document in a [`BlobStore`].
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, BookRepository, MemoryStore, Record};
///
/// let repository = BookRepository::new(MemoryStore::new());
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John", Some("1990-05-20")).unwrap());
/// repository.save(&book).unwrap();
///
/// let mut restored = AddressBook::new();
/// assert!(repository.load(&mut restored).unwrap());
/// assert_eq!(restored, book);
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> BookRepository<S> {
    /// Create a new repository bound to `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write every record in `book` to the store, replacing its previous content.
    ///
    /// # Errors
    ///
    /// - `StorageError::Serialization` if the book cannot be encoded
    /// - `StorageError::Io` if the store write fails
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let document = StoredBookRef {
            records: book.records().collect(),
        };
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        debug!(bytes = bytes.len(), "Writing address book");
        self.store.write_all(&bytes)?;

        info!(records = book.len(), "Saved address book");
        Ok(())
    }

    /// Replace the contents of `book` with the stored records.
    ///
    /// Returns `false` and leaves `book` untouched when the store is empty
    /// (first run). `book` is also untouched on any error.
    ///
    /// # Errors
    ///
    /// - `StorageError::Io` if the store cannot be read
    /// - `StorageError::Deserialization` if the content is corrupt or holds
    ///   an invalid name, phone or birthday
    pub fn load(&self, book: &mut AddressBook) -> StorageResult<bool> {
        let Some(bytes) = self.store.read_all()? else {
            warn!("Backing store not found, keeping current address book");
            return Ok(false);
        };

        let document: StoredBook = serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;

        *book = document.records.into_iter().collect();

        info!(records = book.len(), "Loaded address book");
        Ok(true)
    }
}
