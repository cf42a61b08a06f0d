pub(crate) mod writer;

use crate::ebook::datetime::DateTime;
use crate::ebook::epub::Epub;
use crate::ebook::epub::write::writer::{EpubWriteConfig, EpubWriter};
use crate::ebook::errors::EpubResult;
use crate::ebook::staging::{DiskFs, MemoryFs, StagingFs};
use std::path::Path;
use std::sync::Arc;

impl Epub {
    /// Returns [`EpubWriteOptions`] to configure and run an export.
    ///
    /// # Examples
    /// - Writing without compression, staged in memory:
    /// ```no_run
    /// # use epubgen::Epub;
    /// # fn main() -> epubgen::ebook::errors::EpubResult<()> {
    /// let epub = Epub::new("My Book");
    /// epub.add_section("<h1>Chapter 1</h1>", Some("Chapter 1"), None, None)?;
    ///
    /// epub.write_options()
    ///     .compression(0)
    ///     .in_memory()
    ///     .save("my_book.epub")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_options(&self) -> EpubWriteOptions<'_> {
        EpubWriteOptions {
            epub: self,
            config: EpubWriteConfig::default(),
        }
    }

    /// Writes the publication to `path` with default [`EpubWriteOptions`].
    ///
    /// The package `dcterms:modified` timestamp is set to the current time.
    ///
    /// # Errors
    /// - [`FileRetrieval`](crate::ebook::errors::EpubError::FileRetrieval):
    ///   A resource source is no longer retrievable.
    /// - [`UnableToCreateEpub`](crate::ebook::errors::EpubError::UnableToCreateEpub):
    ///   The staging tree or the file at `path` could not be written.
    ///
    /// A failure while zipping may leave a truncated file at `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> EpubResult<()> {
        self.write_options().save(path)
    }
}

/// Configurable export of an [`Epub`], created via [`Epub::write_options`].
///
/// # Options
/// - [`compression`](Self::compression) (Default: `6`)
/// - [`staging`](Self::staging) (Default: [`DiskFs`] within the OS temporary directory)
#[derive(Clone, Debug)]
pub struct EpubWriteOptions<'ebook> {
    epub: &'ebook Epub,
    config: EpubWriteConfig,
}

impl EpubWriteOptions<'_> {
    /// Sets the deflate level (`0-9`) of every entry except `mimetype`,
    /// which is always stored.
    ///
    /// A level of `0` stores entries without compression.
    /// Levels above `9` are treated as `9`.
    ///
    /// Default: `6`
    pub fn compression(&mut self, level: u8) -> &mut Self {
        self.config.compression = level.min(9);
        self
    }

    /// Sets the filesystem backend holding the staging tree.
    ///
    /// Default: [`DiskFs::default`]
    pub fn staging(&mut self, fs: Arc<dyn StagingFs>) -> &mut Self {
        self.config.staging = Some(fs);
        self
    }

    /// Stages in a fresh [`MemoryFs`], so that only the output file touches the disk.
    pub fn in_memory(&mut self) -> &mut Self {
        self.staging(Arc::new(MemoryFs::new()))
    }

    /// Writes the publication to `path`.
    ///
    /// See [`Epub::write`] for details.
    pub fn save(&self, path: impl AsRef<Path>) -> EpubResult<()> {
        let default_fs;
        let fs: &dyn StagingFs = match &self.config.staging {
            Some(fs) => fs.as_ref(),
            None => {
                default_fs = DiskFs::default();
                &default_fs
            }
        };

        // Held for the entire export
        let mut data = self.epub.inner.lock();
        let modified = DateTime::now();
        data.package.set_modified(modified);

        EpubWriter::new(&data, self.epub.fetcher.as_ref(), fs, &self.config, modified)
            .write(path.as_ref())
    }
}
