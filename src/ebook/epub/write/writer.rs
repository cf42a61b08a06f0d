mod container;
pub(crate) mod package;
mod toc;
pub(crate) mod xhtml;

use crate::ebook::datetime::DateTime;
use crate::ebook::epub::EpubData;
use crate::ebook::epub::consts::{ncx, ocf, opf, xhtml as xhtml_file};
use crate::ebook::epub::package::Package;
use crate::ebook::epub::write::writer::container::ContainerWriter;
use crate::ebook::epub::write::writer::xhtml::XhtmlWriter;
use crate::ebook::errors::{EpubError, EpubResult};
use crate::ebook::fetch::Fetch;
use crate::ebook::resource::consts::mime;
use crate::ebook::resource::{ResourceKind, media};
use crate::ebook::staging::StagingFs;
use crate::util::uri;
use crate::writer::WriterResult;
use crate::writer::zip::{ZipFileOptionsExt, ZipWriter};
use log::{debug, info, warn};
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zip::write::SimpleFileOptions;

const STAGING_DIR_PREFIX: &str = "epubgen-";

#[derive(Clone)]
pub(super) struct EpubWriteConfig {
    /// See [`super::EpubWriteOptions::compression`]
    pub(super) compression: u8,
    /// See [`super::EpubWriteOptions::staging`]
    pub(super) staging: Option<Arc<dyn StagingFs>>,
}

impl Default for EpubWriteConfig {
    fn default() -> Self {
        Self {
            compression: 6,
            staging: None,
        }
    }
}

impl Debug for EpubWriteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpubWriteConfig")
            .field("compression", &self.compression)
            .field("staging", &self.staging.is_some())
            .finish()
    }
}

/// Stages every entry of a publication, then zips the staging tree.
///
/// The package is cloned so that generated manifest and spine entries
/// never leak into the [`Epub`](crate::Epub) itself.
pub(super) struct EpubWriter<'ebook> {
    data: &'ebook EpubData,
    package: Package,
    fetcher: &'ebook dyn Fetch,
    fs: &'ebook dyn StagingFs,
    config: &'ebook EpubWriteConfig,
    modified: DateTime,
    staging_dir: PathBuf,
}

impl<'ebook> EpubWriter<'ebook> {
    pub(super) fn new(
        data: &'ebook EpubData,
        fetcher: &'ebook dyn Fetch,
        fs: &'ebook dyn StagingFs,
        config: &'ebook EpubWriteConfig,
        modified: DateTime,
    ) -> Self {
        Self {
            data,
            package: data.package.clone(),
            fetcher,
            fs,
            config,
            modified,
            staging_dir: PathBuf::from(format!("{STAGING_DIR_PREFIX}{}", uuid::Uuid::new_v4())),
        }
    }

    pub(super) fn write(mut self, output: &Path) -> EpubResult<()> {
        info!("Writing EPUB to `{}`", output.display());

        self.fs
            .create_dir_all(&self.staging_dir)
            .map_err(|error| EpubError::creation(&self.staging_dir, error))?;

        let result = self.stage().and_then(|()| self.archive(output));

        // Best-effort; the staging tree is only left behind for diagnostics
        if let Err(error) = self.fs.remove_dir_all(&self.staging_dir) {
            warn!(
                "Unable to remove staging directory `{}`: {error}",
                self.staging_dir.display(),
            );
        }

        let entries = result?;
        info!("Wrote EPUB to `{}` ({entries} entries)", output.display());
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Staging
    ////////////////////////////////////////////////////////////////////////////////

    fn stage(&mut self) -> EpubResult<()> {
        self.create_layout()?;
        self.stage_mimetype()?;
        self.stage_container()?;

        self.package.add_to_manifest(
            opf::NAV_PROPERTY,
            xhtml_file::NAV_FILE,
            mime::XHTML,
            Some(opf::NAV_PROPERTY),
        );
        self.package
            .add_to_manifest(ncx::ID, ncx::FILE, mime::NCX, None);

        self.stage_resources()?;
        self.stage_sections()?;
        self.stage_toc()?;
        self.stage_package()
    }

    fn create_layout(&self) -> EpubResult<()> {
        let folders = ResourceKind::ALL
            .iter()
            .map(|kind| kind.folder())
            .chain([xhtml_file::SECTION_DIR]);
        let meta_inf = Path::new(ocf::CONTAINER_PATH)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        for dir in folders
            .map(|folder| Path::new(ocf::CONTENT_DIR).join(folder))
            .chain([meta_inf])
        {
            let dir = self.staging_dir.join(dir);
            self.fs
                .create_dir_all(&dir)
                .map_err(|error| EpubError::creation(dir, error))?;
        }
        Ok(())
    }

    fn stage_mimetype(&self) -> EpubResult<()> {
        self.stage_bytes(ocf::MIMETYPE_FILE, mime::EPUB_ZIP.as_bytes())
    }

    fn stage_container(&self) -> EpubResult<()> {
        let container = ContainerWriter::new(Vec::new()).write();
        self.stage_bytes(ocf::CONTAINER_PATH, &in_memory(container))
    }

    fn stage_resources(&mut self) -> EpubResult<()> {
        let data = self.data;
        let cover_image = data.cover.as_ref().map(|cover| cover.image_filename.as_str());

        for kind in ResourceKind::ALL {
            for (filename, source) in data.registry.iter(kind) {
                let bytes = self.fetch(source)?;
                let media_type = media::detect(kind, filename, &bytes);
                let href = format!("{}/{filename}", kind.folder());

                self.stage_bytes(&format!("{}/{href}", ocf::CONTENT_DIR), &bytes)?;

                let is_cover = kind == ResourceKind::Image && cover_image == Some(filename);
                let id = self.package.unused_manifest_id(filename);
                self.package.add_to_manifest(
                    id,
                    &href,
                    media_type,
                    is_cover.then_some(opf::COVER_IMAGE),
                );
            }
        }
        Ok(())
    }

    fn stage_sections(&mut self) -> EpubResult<()> {
        let data = self.data;
        let cover_xhtml = data.cover.as_ref().map(|cover| cover.xhtml_filename.as_str());

        for section in &data.sections {
            let mut writer = XhtmlWriter::new(section.document(), Vec::new());

            // The cover is untitled to stay out of the table of contents
            if cover_xhtml == Some(section.filename()) {
                writer = writer.fallback_title(data.package.title());
            }

            let href = format!("{}/{}", xhtml_file::SECTION_DIR, section.filename());
            self.stage_bytes(
                &format!("{}/{href}", ocf::CONTENT_DIR),
                &in_memory(writer.write()),
            )?;

            let id = self.package.unused_manifest_id(section.filename());
            self.package
                .add_to_manifest(id.as_str(), &href, mime::XHTML, None);
            self.package.add_to_spine(id);
        }
        Ok(())
    }

    fn stage_package(&self) -> EpubResult<()> {
        self.stage_bytes(ocf::PACKAGE_PATH, &self.package.serialize())
    }

    /// Retrieves the full content behind `source`.
    fn fetch(&self, source: &str) -> EpubResult<Vec<u8>> {
        let mut bytes = Vec::new();

        self.fetcher
            .fetch(source)
            .map_err(|error| EpubError::retrieval(source, error))?
            .read_to_end(&mut bytes)
            .map_err(|error| EpubError::retrieval(source, error))?;

        Ok(bytes)
    }

    /// Writes `bytes` to `path`, relative to the staging directory.
    fn stage_bytes(&self, path: &str, bytes: &[u8]) -> EpubResult<()> {
        let path = self.staging_dir.join(path);

        debug!("Staging `{path}` ({} bytes)", bytes.len(), path = path.display());
        self.fs
            .write_bytes(&path, bytes)
            .map_err(|error| EpubError::creation(path, error))
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Archive
    ////////////////////////////////////////////////////////////////////////////////

    /// Zips the staging tree into `output`, returning the number of entries.
    fn archive(&self, output: &Path) -> EpubResult<usize> {
        self.try_archive(output)
            .map_err(|error| EpubError::creation(output, error))
    }

    fn try_archive(&self, output: &Path) -> io::Result<usize> {
        let options = SimpleFileOptions::default()
            .zip_last_modified_date(self.modified)
            .zip_compression_level(self.config.compression);
        let mut zip = ZipWriter::new(BufWriter::new(File::create(output)?), options);

        // Must be the first entry, stored as-is
        zip.start_uncompressed_file(ocf::MIMETYPE_FILE)?;
        zip.write_all(mime::EPUB_ZIP.as_bytes())?;
        let mut entries = 1;

        let files = self.fs.list_files(&self.staging_dir)?;

        for file in files.iter().filter(|file| *file != Path::new(ocf::MIMETYPE_FILE)) {
            let name = uri::to_slash(file);

            debug!("Archiving `{name}`");
            zip.start_file(&name)?;
            io::copy(&mut self.fs.open(&self.staging_dir.join(file))?, &mut zip)?;
            entries += 1;
        }

        zip.finish()?.flush()?;
        Ok(entries)
    }
}

/// Unwraps serialization into an in-memory buffer, which cannot fail.
fn in_memory(result: WriterResult<Vec<u8>>) -> Vec<u8> {
    result.expect("writing to an in-memory buffer cannot fail")
}
