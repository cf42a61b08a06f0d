use epubgen::Epub;
use epubgen::errors::FetchError;
use epubgen::Fetch;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// The 8-byte PNG signature.
pub const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";
pub const CSS: &str = "data:text/css,body%20%7B%20margin%3A%200%3B%20%7D";
/// `wOF2` signature, followed by padding.
pub const WOFF2: &str = "data:font/woff2;base64,d09GMgAAAAA=";
/// `ftypisom` at offset 4.
pub const MP4: &str = "data:video/mp4;base64,AAAAGGZ0eXBpc29t";

/// Accepts every reference, serving empty content.
pub struct AcceptAll;

impl Fetch for AcceptAll {
    fn fetch(&self, _reference: &str) -> Result<Box<dyn Read + Send>, FetchError> {
        Ok(Box::new(std::io::empty()))
    }
}

/// A written publication, removed along with its temporary directory.
pub struct Written {
    _dir: TempDir,
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl Written {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_names(&mut self) -> Vec<String> {
        (0..self.archive.len())
            .map(|i| self.archive.by_index(i).unwrap().name().to_owned())
            .collect()
    }

    pub fn read(&mut self, name: &str) -> String {
        let mut content = String::new();
        self.archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    pub fn read_bytes(&mut self, name: &str) -> Vec<u8> {
        let mut content = Vec::new();
        self.archive
            .by_name(name)
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        content
    }

    pub fn archive(&mut self) -> &mut ZipArchive<File> {
        &mut self.archive
    }
}

pub fn write(epub: &Epub) -> Written {
    write_with(epub, |_| {})
}

pub fn write_with(epub: &Epub, configure: impl FnOnce(&mut epubgen::EpubWriteOptions<'_>)) -> Written {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.epub");

    let mut options = epub.write_options();
    configure(&mut options);
    options.save(&path).unwrap();

    let archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    Written {
        _dir: dir,
        path,
        archive,
    }
}
