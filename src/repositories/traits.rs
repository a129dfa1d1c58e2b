use std::io;

/// Opaque byte storage backing an address book.
///
/// Provides abstraction over the storage medium, enabling different
/// implementations (file on disk, in-memory, test doubles).
pub trait BlobStore {
    /// Read the complete stored content.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    fn read_all(&self) -> io::Result<Option<Vec<u8>>>;

    /// Replace the stored content with `bytes`.
    fn write_all(&self, bytes: &[u8]) -> io::Result<()>;
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn read_all(&self) -> io::Result<Option<Vec<u8>>> {
        (**self).read_all()
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }
}
