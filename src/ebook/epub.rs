//! The Electronic Publication ([`Epub`]) module.
//!
//! Produces EPUB `3` publications that remain readable by EPUB `2`
//! reading systems through the NCX and legacy metadata.
//!
//! For more information regarding the EPUB spec, see:
//! <https://www.w3.org/TR/epub>

pub(crate) mod consts;
pub mod package;
pub mod section;
pub mod toc;
pub mod vocabulary;
pub mod write;
pub mod xhtml;

use crate::ebook::epub::consts::{UUID_URN_PREFIX, cover, xhtml as xhtml_file};
use crate::ebook::epub::package::Package;
use crate::ebook::epub::section::{Section, Sections};
use crate::ebook::epub::toc::Toc;
use crate::ebook::epub::vocabulary::{identifier_type, scheme};
use crate::ebook::epub::xhtml::XhtmlDocument;
use crate::ebook::errors::{EpubError, EpubResult};
use crate::ebook::fetch::{self, DefaultFetcher, Fetch};
use crate::ebook::resource::consts::mime;
use crate::ebook::resource::{ResourceKind, ResourceRegistry};
use crate::util::sync::Lock;
use crate::util::uri;
use crate::writer::xml;
use log::debug;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// An EPUB publication under construction.
///
/// Content is added through `&self`; every call locks the whole publication,
/// so an [`Epub`] can be shared across threads.
/// Calls are serialized individually, so sequences of calls are not atomic.
///
/// # Layout
/// Written archives always follow the same layout:
/// ```text
/// mimetype
/// META-INF/container.xml
/// EPUB/package.opf
/// EPUB/toc.ncx
/// EPUB/nav.xhtml
/// EPUB/xhtml/<sections>
/// EPUB/css/<stylesheets>
/// EPUB/fonts/<fonts>
/// EPUB/images/<images>
/// EPUB/videos/<videos>
/// ```
///
/// # Examples
/// - Assembling and writing a publication:
/// ```no_run
/// # use epubgen::Epub;
/// # use epubgen::ebook::epub::vocabulary::role;
/// # fn main() -> epubgen::ebook::errors::EpubResult<()> {
/// let epub = Epub::new("My Book");
/// epub.add_author("Jane Doe", role::AUTHOR);
///
/// let css = epub.add_css("assets/style.css", None)?;
/// let image = epub.add_image("https://example.com/cover.png", Some("cover.png"))?;
/// epub.set_cover(&image, None);
///
/// epub.add_section("<h1>Chapter 1</h1>", Some("Chapter 1"), None, Some(&css))?;
/// epub.write("my_book.epub")?;
/// # Ok(())
/// # }
/// ```
pub struct Epub {
    inner: Lock<EpubData>,
    fetcher: Arc<dyn Fetch>,
}

/// Everything guarded by the lock of an [`Epub`].
#[derive(Debug)]
pub(crate) struct EpubData {
    pub(crate) registry: ResourceRegistry,
    pub(crate) sections: Sections,
    pub(crate) toc: Toc,
    pub(crate) package: Package,
    pub(crate) cover: Option<CoverState>,
}

/// The entries installed by [`Epub::set_cover`].
#[derive(Clone, Debug)]
pub(crate) struct CoverState {
    pub(crate) image_filename: String,
    pub(crate) css_filename: String,
    /// The stylesheet was generated rather than supplied by the caller.
    pub(crate) css_is_temporary: bool,
    pub(crate) xhtml_filename: String,
}

impl Epub {
    /// Creates an empty publication titled `title`,
    /// retrieving resources with the [`DefaultFetcher`].
    ///
    /// The package starts with:
    /// - The language `en`.
    /// - A random `urn:uuid:` identifier, which becomes the unique identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_fetcher(title, DefaultFetcher::new())
    }

    /// Creates an empty publication that retrieves resources with `fetcher`.
    ///
    /// See [`Self::new`] for the initial state.
    pub fn with_fetcher(title: impl Into<String>, fetcher: impl Fetch + 'static) -> Self {
        let title = title.into();
        let mut package = Package::new(title.as_str(), consts::DEFAULT_LANGUAGE);

        package.add_identifier(
            format!("{UUID_URN_PREFIX}{}", uuid::Uuid::new_v4()),
            scheme::XSD_STRING,
            identifier_type::UUID,
        );

        Self {
            inner: Lock::new(EpubData {
                registry: ResourceRegistry::default(),
                sections: Sections::default(),
                toc: Toc::new(title),
                package,
                cover: None,
            }),
            fetcher: Arc::new(fetcher),
        }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Resources
    ////////////////////////////////////////////////////////////////////////////////

    /// Registers a stylesheet, returning its path relative to a section
    /// (e.g., `../css/style.css`).
    ///
    /// See [`Self::add_resource`] for details.
    pub fn add_css(&self, source: &str, filename: Option<&str>) -> EpubResult<String> {
        self.add_resource(ResourceKind::Css, source, filename)
    }

    /// Registers a font, returning its path relative to a section
    /// (e.g., `../fonts/font.otf`).
    ///
    /// See [`Self::add_resource`] for details.
    pub fn add_font(&self, source: &str, filename: Option<&str>) -> EpubResult<String> {
        self.add_resource(ResourceKind::Font, source, filename)
    }

    /// Registers an image, returning its path relative to a section
    /// (e.g., `../images/cover.png`).
    ///
    /// See [`Self::add_resource`] for details.
    pub fn add_image(&self, source: &str, filename: Option<&str>) -> EpubResult<String> {
        self.add_resource(ResourceKind::Image, source, filename)
    }

    /// Registers a video, returning its path relative to a section
    /// (e.g., `../videos/intro.mp4`).
    ///
    /// See [`Self::add_resource`] for details.
    pub fn add_video(&self, source: &str, filename: Option<&str>) -> EpubResult<String> {
        self.add_resource(ResourceKind::Video, source, filename)
    }

    /// Registers a resource of the given `kind`.
    ///
    /// The `source` is a local path, an HTTP(S) URL, or a data URL.
    /// Its content is only read when the publication is [written](Self::write).
    ///
    /// When `filename` is `None` or empty, the base name of `source` is used
    /// if valid and unused, otherwise a name such as `image0001.png` is generated.
    ///
    /// # Errors
    /// - [`FilenameAlreadyUsed`](EpubError::FilenameAlreadyUsed):
    ///   `filename` is already used by another resource of the same kind.
    /// - [`InvalidFilename`](EpubError::InvalidFilename):
    ///   `filename` is not a single path element (e.g., contains `/` or is `..`).
    /// - [`FileRetrieval`](EpubError::FileRetrieval):
    ///   `source` could not be validated by the [`Fetch`] implementation.
    ///
    /// Nothing is registered when an error is returned.
    pub fn add_resource(
        &self,
        kind: ResourceKind,
        source: &str,
        filename: Option<&str>,
    ) -> EpubResult<String> {
        let mut data = self.inner.lock();
        let filename = data.registry.resolve_filename(kind, source, filename)?;

        self.fetcher
            .check(source)
            .map_err(|error| EpubError::retrieval(source, error))?;

        debug!("Registered {kind:?} `{filename}` from `{source}`");
        Ok(data.registry.insert(kind, filename, source.to_owned()))
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Sections
    ////////////////////////////////////////////////////////////////////////////////

    /// Appends a section to the reading order, returning its filename
    /// (e.g., `section0001.xhtml`).
    ///
    /// - `body` is written verbatim into `<body>`.
    /// - A non-empty `title` sets the document `<title>`
    ///   and adds the section to the table of contents.
    /// - When `filename` is `None` or empty, the first free `sectionNNNN.xhtml` is used.
    /// - `css` links a stylesheet, typically a path returned by [`Self::add_css`].
    ///
    /// # Errors
    /// - [`FilenameAlreadyUsed`](EpubError::FilenameAlreadyUsed):
    ///   `filename` is used by another section, including the cover.
    /// - [`InvalidFilename`](EpubError::InvalidFilename):
    ///   `filename` is not a single path element.
    pub fn add_section(
        &self,
        body: &str,
        title: Option<&str>,
        filename: Option<&str>,
        css: Option<&str>,
    ) -> EpubResult<String> {
        let mut data = self.inner.lock();
        data.add_section(body, title, filename, css)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Cover
    ////////////////////////////////////////////////////////////////////////////////

    /// Installs the cover page, replacing any previous cover.
    ///
    /// `image` is the path of an image returned by [`Self::add_image`].
    /// `css` is the path of a stylesheet returned by [`Self::add_css`];
    /// when `None`, a default stylesheet centering the image is generated.
    ///
    /// The cover page is the first entry of the reading order if set
    /// before any section is added, and is never part of the table of contents.
    ///
    /// Replacing a cover removes the previous cover page,
    /// along with its image and stylesheet resources.
    pub fn set_cover(&self, image: &str, css: Option<&str>) {
        let mut data = self.inner.lock();
        data.set_cover(image, css.filter(|css| !css.is_empty()));
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Metadata
    ////////////////////////////////////////////////////////////////////////////////

    /// Sets the title of both the package and the table of contents.
    pub fn set_title(&self, title: &str) {
        let mut data = self.inner.lock();
        data.package.set_title(title);
        data.toc.set_title(title);
    }

    /// Sets the `dc:language` (e.g., `en`, `ja`).
    pub fn set_language(&self, language: &str) {
        self.inner.lock().package.set_language(language);
    }

    pub fn set_description(&self, description: &str) {
        self.inner.lock().package.set_description(description);
    }

    pub fn set_publisher(&self, publisher: &str) {
        self.inner.lock().package.set_publisher(publisher);
    }

    pub fn set_source(&self, source: &str) {
        self.inner.lock().package.set_source(source);
    }

    /// Sets the `dc:date`; the value is not validated.
    pub fn set_date(&self, date: &str) {
        self.inner.lock().package.set_date(date);
    }

    /// Replaces every `dc:subject`.
    pub fn set_subjects<I>(&self, subjects: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.inner.lock().package.set_subjects(subjects);
    }

    /// Appends a `dc:subject`.
    pub fn add_subject(&self, subject: &str) {
        self.inner.lock().package.add_subject(subject);
    }

    /// Appends a `dc:identifier`, returning its `id`.
    ///
    /// See [`Package::add_identifier`].
    pub fn add_identifier(&self, value: &str, scheme: &str, type_code: &str) -> String {
        self.inner
            .lock()
            .package
            .add_identifier(value, scheme, type_code)
    }

    /// Appends a `dc:creator` with a MARC relator `role`
    /// (see [`vocabulary::role`]), returning its `id`.
    pub fn add_author(&self, name: &str, role: &str) -> String {
        self.inner.lock().package.add_author(name, role)
    }

    /// Appends a `dc:contributor` with a MARC relator `role`
    /// (see [`vocabulary::role`]), returning its `id`.
    pub fn add_contributor(&self, name: &str, role: &str) -> String {
        self.inner.lock().package.add_contributor(name, role)
    }

    /// Upserts a legacy `<meta name="..." content="..."/>`.
    pub fn add_custom_meta(&self, name: &str, content: &str) {
        self.inner.lock().package.add_custom_meta(name, content);
    }

    /// Sets the spine `page-progression-direction`
    /// (see [`vocabulary::direction`]).
    pub fn set_page_progression_direction(&self, direction: &str) {
        self.inner
            .lock()
            .package
            .set_page_progression_direction(direction);
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Inspection
    ////////////////////////////////////////////////////////////////////////////////

    /// Calls `f` with the package document as it currently stands.
    ///
    /// Manifest and spine entries are only generated while writing,
    /// so they are absent here unless added directly.
    pub fn with_package<T>(&self, f: impl FnOnce(&Package) -> T) -> T {
        f(&self.inner.lock().package)
    }

    /// Calls `f` with the registered resources.
    pub fn with_resources<T>(&self, f: impl FnOnce(&ResourceRegistry) -> T) -> T {
        f(&self.inner.lock().registry)
    }

    /// Calls `f` with the sections, in reading order.
    pub fn with_sections<T>(&self, f: impl FnOnce(&Sections) -> T) -> T {
        f(&self.inner.lock().sections)
    }

    /// Calls `f` with the table of contents.
    pub fn with_toc<T>(&self, f: impl FnOnce(&Toc) -> T) -> T {
        f(&self.inner.lock().toc)
    }

    pub fn title(&self) -> String {
        self.inner.lock().package.title().to_owned()
    }

    /// The filename of the cover page, if a cover is set.
    pub fn cover_filename(&self) -> Option<String> {
        let data = self.inner.lock();
        data.cover.as_ref().map(|cover| cover.xhtml_filename.clone())
    }
}

impl Debug for Epub {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("Epub")
            .field("data", &*self.inner.lock())
            .finish_non_exhaustive()
    }
}

impl EpubData {
    fn add_section(
        &mut self,
        body: &str,
        title: Option<&str>,
        filename: Option<&str>,
        css: Option<&str>,
    ) -> EpubResult<String> {
        let filename = self.sections.resolve_filename(filename)?;
        let mut document = XhtmlDocument::new(body);

        if let Some(title) = title.filter(|title| !title.is_empty()) {
            document.set_title(title);
            self.toc.push(
                title,
                format!("{}/{filename}", xhtml_file::SECTION_DIR),
            );
        }
        if let Some(css) = css {
            document.set_stylesheet(css);
        }

        debug!("Added section `{filename}`");
        self.sections.push(Section::new(filename.clone(), document));
        Ok(filename)
    }

    fn set_cover(&mut self, image: &str, css: Option<&str>) {
        if let Some(previous) = self.cover.take() {
            self.remove_cover(previous);
        }

        let image_filename = uri::file_name(image).into_owned();
        self.package.set_cover(image_filename.as_str());

        let (css_path, css_is_temporary) = match css {
            Some(css) => (css.to_owned(), false),
            None => (self.add_default_cover_css(), true),
        };
        let body = format!(
            r#"<img src="{}" alt="{}" />"#,
            xml::escape(image),
            cover::IMAGE_ALT,
        );

        let xhtml_filename = self
            .add_section(&body, None, Some(cover::XHTML_FILE), Some(&css_path))
            .or_else(|_| self.add_section(&body, None, None, Some(&css_path)))
            .expect("an unnamed section always receives a free filename");

        debug!("Installed cover `{xhtml_filename}` for image `{image_filename}`");
        self.cover = Some(CoverState {
            image_filename,
            css_filename: uri::file_name(&css_path).into_owned(),
            css_is_temporary,
            xhtml_filename,
        });
    }

    fn remove_cover(&mut self, previous: CoverState) {
        debug!(
            "Replacing cover `{}` (generated stylesheet: {})",
            previous.xhtml_filename, previous.css_is_temporary,
        );
        self.sections.remove(&previous.xhtml_filename);
        self.registry
            .remove(ResourceKind::Image, &previous.image_filename);
        self.registry
            .remove(ResourceKind::Css, &previous.css_filename);
    }

    /// Registers the default cover stylesheet as a data URL,
    /// returning its path relative to a section.
    fn add_default_cover_css(&mut self) -> String {
        let source = fetch::to_data_url(mime::CSS, cover::DEFAULT_CSS.as_bytes());
        // Generated names skip every taken name, so a single retry suffices
        let filename = if self.registry.contains(ResourceKind::Css, cover::CSS_FILE) {
            self.registry.generate_filename(ResourceKind::Css, ".css")
        } else {
            cover::CSS_FILE.to_owned()
        };

        self.registry.insert(ResourceKind::Css, filename, source)
    }
}
