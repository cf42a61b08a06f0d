//! Table of contents, written as both the EPUB 3 navigation document
//! and the EPUB 2 NCX.

/// A navigable entry of the [`Toc`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    label: String,
    href: String,
}

impl TocEntry {
    /// The human-readable label (the section title).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The target, relative to `EPUB/` (e.g., `xhtml/section0001.xhtml`).
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// A flat, ordered table of contents.
///
/// The [title](Self::title) mirrors the publication title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toc {
    title: String,
    entries: Vec<TocEntry>,
}

impl Toc {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn push(&mut self, label: impl Into<String>, href: impl Into<String>) {
        self.entries.push(TocEntry {
            label: label.into(),
            href: href.into(),
        });
    }
}
