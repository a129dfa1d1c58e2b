use address_book::BlobStore;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock blob store for testing.
///
/// Provides an in-memory BlobStore that tracks method calls for verification
/// and can be told to fail reads or writes.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBlobStore {
    contents: Arc<Mutex<Option<Vec<u8>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_reads: Arc<Mutex<bool>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBlobStore {
    /// Create a new empty MockBlobStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored bytes directly.
    pub fn set_contents(&self, bytes: &[u8]) {
        *self.contents.lock().unwrap() = Some(bytes.to_vec());
    }

    /// Get the stored bytes.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.lock().unwrap().clone()
    }

    /// Make every subsequent read fail.
    pub fn fail_reads(&self) {
        *self.fail_reads.lock().unwrap() = true;
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BlobStore for MockBlobStore {
    fn read_all(&self) -> io::Result<Option<Vec<u8>>> {
        self.track_call("read_all");

        if *self.fail_reads.lock().unwrap() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read refused",
            ));
        }
        Ok(self.contents())
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.track_call("write_all");

        if *self.fail_writes.lock().unwrap() {
            return Err(io::Error::other("disk full"));
        }
        self.set_contents(bytes);
        Ok(())
    }
}
