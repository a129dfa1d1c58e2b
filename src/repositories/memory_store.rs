use super::traits::BlobStore;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory blob store.
///
/// Clones share the same underlying buffer, so a clone handed to one
/// repository can be inspected or reused by another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `bytes`.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(bytes.into()))),
        }
    }

    /// Copy of the current content, if any.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().ok().and_then(|contents| contents.clone())
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Option<Vec<u8>>>> {
        self.contents
            .lock()
            .map_err(|_| io::Error::other("memory store lock poisoned"))
    }
}

impl BlobStore for MemoryStore {
    fn read_all(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.lock()?.clone())
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        *self.lock()? = Some(bytes.to_vec());
        Ok(())
    }
}
