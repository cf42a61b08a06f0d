//! Content documents wrapping caller-supplied body markup.

use crate::ebook::epub::write::writer::xhtml::XhtmlWriter;

/// An XHTML content document.
///
/// The [body](Self::body) is markup written verbatim into `<body>`;
/// it is not validated.
///
/// # Examples
/// ```
/// # use epubgen::ebook::epub::xhtml::XhtmlDocument;
/// let mut document = XhtmlDocument::new("<h1>Chapter 1</h1>");
/// document.set_title("Chapter 1");
/// document.set_stylesheet("../css/style.css");
///
/// let xhtml = document.to_xhtml();
/// assert!(xhtml.contains("<title>Chapter 1</title>"));
/// assert!(xhtml.contains(r#"<link rel="stylesheet" type="text/css" href="../css/style.css"></link>"#));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XhtmlDocument {
    title: Option<String>,
    stylesheet: Option<String>,
    body: String,
}

impl XhtmlDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            stylesheet: None,
            body: body.into(),
        }
    }

    /// Empty titles are stored as absent.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into()).filter(|title| !title.is_empty());
        self
    }

    /// Sets the stylesheet `<link>`, relative to the document
    /// (e.g., `../css/style.css`).
    pub fn set_stylesheet(&mut self, path: impl Into<String>) -> &mut Self {
        self.stylesheet = Some(path.into()).filter(|path| !path.is_empty());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Serializes the document as it is written to the archive.
    pub fn to_xhtml(&self) -> String {
        let bytes = XhtmlWriter::new(self, Vec::new())
            .write()
            .expect("writing to an in-memory buffer cannot fail");

        String::from_utf8(bytes).expect("serialized XHTML is UTF-8")
    }
}
