use crate::ebook::staging::StagingFs;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Staging on the local disk, beneath a root directory.
///
/// The [default](Default) root is [`std::env::temp_dir`].
#[derive(Clone, Debug)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for DiskFs {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

impl StagingFs for DiskFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(self.resolve(path))
    }

    fn write_from(&self, path: &Path, reader: &mut dyn Read) -> io::Result<u64> {
        let mut writer = BufWriter::new(File::create(self.resolve(path))?);
        let written = io::copy(reader, &mut writer)?;
        writer.flush()?;
        Ok(written)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(self.resolve(path))?))
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        fn walk(base: &Path, current: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
            for entry in fs::read_dir(current)? {
                let entry = entry?;
                let path = entry.path();

                if entry.file_type()?.is_dir() {
                    walk(base, &path, files)?;
                } else if let Ok(relative) = path.strip_prefix(base) {
                    files.push(relative.to_path_buf());
                }
            }
            Ok(())
        }

        let base = self.resolve(dir);
        let mut files = Vec::new();
        walk(&base, &base, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(self.resolve(path))
    }
}
