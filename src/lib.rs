//! Address Book - an in-memory contact directory with file persistence.
//!
//! Contacts carry a name, validated ten-digit phone numbers and an optional
//! birthday. The directory supports exact lookup, substring search, paginated
//! iteration and a save/load round-trip through a pluggable byte store.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone number, birthday)
//! - **models**: The contact record
//! - **directory**: The address book and its batch iterator
//! - **search**: Query matching over names and phones
//! - **repositories**: Byte stores and JSON persistence of the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;

// Re-export commonly used types
pub use config::Config;
pub use directory::{AddressBook, Batches, DEFAULT_BATCH_SIZE};
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError, RecordError, StorageError};
pub use models::Record;
pub use repositories::{BlobStore, BookRepository, FileStore, MemoryStore};
pub use search::{MatchedField, RecordQuery};
