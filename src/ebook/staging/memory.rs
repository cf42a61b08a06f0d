use crate::ebook::staging::StagingFs;
use crate::util::sync::Lock;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Staging entirely in memory.
///
/// Useful where the disk is unavailable or undesirable (e.g., tests).
/// Only the final archive touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryFs {
    inner: Lock<MemoryTree>,
}

#[derive(Debug, Default)]
struct MemoryTree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no files or directories are held.
    pub fn is_empty(&self) -> bool {
        let tree = self.inner.lock();
        tree.dirs.is_empty() && tree.files.is_empty()
    }

    /// Returns the number of held files.
    pub fn file_count(&self) -> usize {
        self.inner.lock().files.len()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("`{}` does not exist", path.display()),
    )
}

impl StagingFs for MemoryFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut tree = self.inner.lock();

        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            tree.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_from(&self, path: &Path, reader: &mut dyn Read) -> io::Result<u64> {
        // Read outside the lock; `reader` may be slow
        let mut content = Vec::new();
        let written = reader.read_to_end(&mut content)? as u64;

        let mut tree = self.inner.lock();
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !tree.dirs.contains(parent) => {
                Err(not_found(parent))
            }
            _ => {
                tree.files.insert(path.to_path_buf(), content);
                Ok(written)
            }
        }
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let tree = self.inner.lock();
        let content = tree.files.get(path).ok_or_else(|| not_found(path))?;

        Ok(Box::new(io::Cursor::new(content.clone())))
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let tree = self.inner.lock();

        if !tree.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        // `BTreeMap` keeps the listing sorted
        Ok(tree
            .files
            .keys()
            .filter_map(|path| path.strip_prefix(dir).ok())
            .map(Path::to_path_buf)
            .collect())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut tree = self.inner.lock();

        if !tree.dirs.contains(path) {
            return Err(not_found(path));
        }
        tree.dirs.retain(|dir| !dir.starts_with(path));
        tree.files.retain(|file, _| !file.starts_with(path));
        Ok(())
    }
}
