mod mock_blob_store;

pub use mock_blob_store::MockBlobStore;
