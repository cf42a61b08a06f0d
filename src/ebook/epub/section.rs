//! Content sections, in reading order.

use crate::ebook::epub::xhtml::XhtmlDocument;
use crate::ebook::errors::{EpubError, EpubResult};
use crate::util::uri;

/// A content file of the publication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    filename: String,
    document: XhtmlDocument,
}

impl Section {
    pub(crate) fn new(filename: String, document: XhtmlDocument) -> Self {
        Self { filename, document }
    }

    /// The internal filename, stored under `EPUB/xhtml/`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn document(&self) -> &XhtmlDocument {
        &self.document
    }
}

/// Sections in insertion order, which is the reading order.
///
/// Filenames are unique across every section, including the cover.
#[derive(Clone, Debug, Default)]
pub struct Sections(Vec<Section>);

impl Sections {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.0.iter()
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.0.iter().any(|section| section.filename == filename)
    }

    pub fn by_filename(&self, filename: &str) -> Option<&Section> {
        self.0.iter().find(|section| section.filename == filename)
    }

    /// Returns the requested filename if valid and free,
    /// or a [generated](Self::generate_filename) one if none is requested.
    pub(crate) fn resolve_filename(&self, requested: Option<&str>) -> EpubResult<String> {
        match requested.filter(|filename| !filename.is_empty()) {
            Some(filename) if !uri::is_valid_file_name(filename) => {
                Err(EpubError::InvalidFilename {
                    filename: filename.to_owned(),
                })
            }
            Some(filename) if self.contains(filename) => Err(EpubError::FilenameAlreadyUsed {
                filename: filename.to_owned(),
            }),
            Some(filename) => Ok(filename.to_owned()),
            None => Ok(self.generate_filename()),
        }
    }

    /// Generates the first free `sectionNNNN.xhtml`, starting at `section0001.xhtml`.
    pub(crate) fn generate_filename(&self) -> String {
        (1..)
            .map(|index: usize| format!("section{index:04}.xhtml"))
            .find(|filename| !self.contains(filename))
            .expect("an unbounded range always yields a free filename")
    }

    pub(crate) fn push(&mut self, section: Section) {
        self.0.push(section);
    }

    pub(crate) fn remove(&mut self, filename: &str) -> Option<Section> {
        let index = self.0.iter().position(|section| section.filename == filename)?;
        Some(self.0.remove(index))
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
