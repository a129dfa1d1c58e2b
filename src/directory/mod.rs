//! The in-memory contact directory and its paginated iteration.

mod address_book;
mod batches;

pub use address_book::{AddressBook, DEFAULT_BATCH_SIZE};
pub use batches::Batches;
