//! File-backed blob store with atomic replace and advisory locking.

use super::traits::BlobStore;
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A blob store backed by a single file.
///
/// Every read and write holds an exclusive lock on a sibling `<file>.lock`
/// for its duration. Writes go to a sibling `<file>.tmp` that is synced and
/// then renamed over the target, so the file is never left half-written.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<dir>/<file><suffix>` next to the store file.
    fn sibling(&self, suffix: &str) -> io::Result<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("store path has no file name: {}", self.path.display()),
            )
        })?;

        let mut name = OsString::from(file_name);
        name.push(suffix);
        Ok(self.path.with_file_name(name))
    }

    /// Acquire the store lock. It is released when the returned file is dropped.
    fn lock(&self) -> io::Result<File> {
        let lock_path = self.sibling(".lock")?;
        let lock_file = File::options()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        lock_file.lock_exclusive()?;
        debug!(lock = %lock_path.display(), "Acquired store lock");
        Ok(lock_file)
    }

    fn write_replacing(&self, tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut tmp = File::create(tmp_path)?;
        tmp.write_all(bytes)?;
        tmp.sync_all()?;
        drop(tmp);
        fs::rename(tmp_path, &self.path)
    }
}

impl BlobStore for FileStore {
    fn read_all(&self) -> io::Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let _lock = self.lock()?;
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let _lock = self.lock()?;
        let tmp_path = self.sibling(".tmp")?;

        let result = self.write_replacing(&tmp_path, bytes);
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }
}
