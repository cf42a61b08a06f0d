use crate::ebook::epub::consts::xhtml;
use crate::ebook::epub::xhtml::XhtmlDocument;
use crate::ebook::resource::consts::mime;
use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

/// Writes a content document: the caller's body markup within the XHTML shell.
pub(crate) struct XhtmlWriter<'ebook, W> {
    document: &'ebook XhtmlDocument,
    fallback_title: Option<&'ebook str>,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> XhtmlWriter<'ebook, W> {
    pub(crate) fn new(document: &'ebook XhtmlDocument, writer: W) -> Self {
        Self {
            document,
            fallback_title: None,
            writer: XmlWriter::new(writer),
        }
    }

    /// The `<title>` to write when the document has none.
    pub(crate) fn fallback_title(mut self, title: &'ebook str) -> Self {
        self.fallback_title = Some(title);
        self
    }

    pub(crate) fn write(mut self) -> WriterResult<W> {
        self.writer.write_utf8_declaration()?.write_doctype(xhtml::DOCTYPE)?;

        write_element! {
            writer: self.writer,
            tag: xhtml::HTML,
            attributes: {
                xhtml::XMLNS => xhtml::XHTML_NS,
            }
            inner_content: {
                self.write_head()?;
                write_element! {
                    writer: self.writer,
                    tag: xhtml::BODY,
                    inner_content: {
                        self.writer.write_raw_block(self.document.body())?;
                    }
                }?;
            }
        }?;

        self.writer.finish()
    }

    fn write_head(&mut self) -> WriterResult<()> {
        let title = self
            .document
            .title()
            .or(self.fallback_title)
            .unwrap_or_default();

        write_element! {
            writer: self.writer,
            tag: xhtml::HEAD,
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::TITLE,
                    text: title,
                }?;

                if let Some(stylesheet) = self.document.stylesheet() {
                    // Written as `<link ...></link>`, which older reading systems expect
                    write_element! {
                        writer: self.writer,
                        tag: xhtml::LINK,
                        text: "",
                        attributes: {
                            xhtml::REL  => xhtml::STYLESHEET,
                            xhtml::TYPE => mime::CSS,
                            xhtml::HREF => stylesheet,
                        }
                    }?;
                }
            }
        }
    }
}
