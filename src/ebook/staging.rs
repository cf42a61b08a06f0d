//! Filesystem backends for the staging tree of an export.
//!
//! While writing, every archive entry is first staged as a file under a
//! uniquely named directory (`epubgen-<uuid>`), then the tree is zipped
//! into the destination. The backend is chosen per export through
//! [`EpubWriteOptions::staging`](crate::ebook::epub::write::EpubWriteOptions::staging).
//!
//! All paths given to a backend are relative;
//! how they are rooted is up to the backend.

mod disk;
mod memory;

pub use disk::DiskFs;
pub use memory::MemoryFs;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Filesystem operations needed to stage a publication.
pub trait StagingFs: Send + Sync {
    /// Creates `path` and all of its missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Creates or truncates the file at `path`, filling it from `reader`.
    ///
    /// The parent directory of `path` must exist.
    /// Returns the number of bytes written.
    fn write_from(&self, path: &Path, reader: &mut dyn Read) -> io::Result<u64>;

    /// Opens the file at `path` for reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Lists every file beneath `dir`, recursively.
    ///
    /// Returned paths are relative to `dir` and sorted.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Removes `path` and everything beneath it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Convenience over [`Self::write_from`] for in-memory content.
    fn write_bytes(&self, path: &Path, mut bytes: &[u8]) -> io::Result<()> {
        self.write_from(path, &mut bytes).map(drop)
    }
}
