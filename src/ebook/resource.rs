//! Registry of the non-section files of a publication.

pub(crate) mod consts;
pub(crate) mod media;

use crate::ebook::errors::{EpubError, EpubResult};
use crate::ebook::fetch::DataUrl;
use crate::util::uri;
use std::collections::BTreeMap;

/// The kind of a registered resource.
///
/// Each kind is stored in its own folder within the container,
/// so filenames only need to be unique per kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Stylesheets, stored under `EPUB/css/`.
    Css,
    /// Fonts, stored under `EPUB/fonts/`.
    Font,
    /// Images, stored under `EPUB/images/`.
    Image,
    /// Videos, stored under `EPUB/videos/`.
    Video,
}

impl ResourceKind {
    /// Every kind, in the order written to the manifest.
    pub const ALL: [ResourceKind; 4] = [Self::Css, Self::Font, Self::Image, Self::Video];

    /// The folder, relative to `EPUB/`, holding resources of this kind.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Font => "fonts",
            Self::Image => "images",
            Self::Video => "videos",
        }
    }

    fn filename_prefix(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Font => "font",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Returns the path of `filename` relative to a section,
    /// such as `../images/cover.png`.
    pub fn relative_path(self, filename: &str) -> String {
        format!("../{}/{filename}", self.folder())
    }
}

/// Registered resources, keyed by internal filename per [`ResourceKind`].
///
/// Each internal filename maps to the source reference it is read from on export.
#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    entries: [BTreeMap<String, String>; 4],
}

impl ResourceRegistry {
    /// Returns the source reference registered under `filename`.
    pub fn get(&self, kind: ResourceKind, filename: &str) -> Option<&str> {
        self.entries[kind.index()].get(filename).map(String::as_str)
    }

    pub fn contains(&self, kind: ResourceKind, filename: &str) -> bool {
        self.entries[kind.index()].contains_key(filename)
    }

    pub fn len(&self, kind: ResourceKind) -> usize {
        self.entries[kind.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(BTreeMap::is_empty)
    }

    /// Iterates over `(filename, source)` pairs of a kind, ordered by filename.
    pub fn iter(&self, kind: ResourceKind) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries[kind.index()]
            .iter()
            .map(|(filename, source)| (filename.as_str(), source.as_str()))
    }

    /// Determines the internal filename for `source`.
    ///
    /// A requested filename must be a single path element that is not in use.
    /// Otherwise, the base name of `source` is used when valid and free,
    /// falling back to a [generated](Self::generate_filename) name.
    pub(crate) fn resolve_filename(
        &self,
        kind: ResourceKind,
        source: &str,
        requested: Option<&str>,
    ) -> EpubResult<String> {
        if let Some(filename) = requested.filter(|filename| !filename.is_empty()) {
            return if !uri::is_valid_file_name(filename) {
                Err(EpubError::InvalidFilename {
                    filename: filename.to_owned(),
                })
            } else if self.contains(kind, filename) {
                Err(EpubError::FilenameAlreadyUsed {
                    filename: filename.to_owned(),
                })
            } else {
                Ok(filename.to_owned())
            };
        }

        // Data URLs carry no name of their own
        if let Some(data_url) = DataUrl::parse(source) {
            let extension = media::extension_for_media_type(data_url.media_type());
            return Ok(self.generate_filename(kind, extension));
        }

        let candidate = uri::file_name(source);
        if uri::is_valid_file_name(&candidate) && !self.contains(kind, &candidate) {
            return Ok(candidate.into_owned());
        }
        Ok(self.generate_filename(kind, &uri::file_extension(&candidate)))
    }

    /// Generates `<prefix><NNNN><extension>` (e.g., `image0003.png`).
    ///
    /// Numbering starts after the count of registered resources of the kind,
    /// skipping names that are already taken.
    pub(crate) fn generate_filename(&self, kind: ResourceKind, extension: &str) -> String {
        (self.len(kind) + 1..)
            .map(|index| format!("{}{index:04}{extension}", kind.filename_prefix()))
            .find(|filename| !self.contains(kind, filename))
            .expect("an unbounded range always yields a free filename")
    }

    /// Registers `filename`, returning its [relative path](ResourceKind::relative_path).
    pub(crate) fn insert(&mut self, kind: ResourceKind, filename: String, source: String) -> String {
        let path = kind.relative_path(&filename);
        self.entries[kind.index()].insert(filename, source);
        path
    }

    pub(crate) fn remove(&mut self, kind: ResourceKind, filename: &str) -> Option<String> {
        self.entries[kind.index()].remove(filename)
    }
}
