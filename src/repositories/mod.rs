mod book_repository;
mod file_store;
mod memory_store;
mod traits;

pub use book_repository::BookRepository;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use traits::BlobStore;
