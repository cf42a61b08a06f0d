use crate::ebook::epub::consts::xhtml;
use crate::ebook::epub::toc::Toc;
use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

/// Writes the EPUB 3 navigation document (`EPUB/nav.xhtml`).
pub(crate) struct NavWriter<'ebook, W> {
    toc: &'ebook Toc,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> NavWriter<'ebook, W> {
    pub(crate) fn new(toc: &'ebook Toc, writer: W) -> Self {
        Self {
            toc,
            writer: XmlWriter::new(writer),
        }
    }

    pub(crate) fn write(mut self) -> WriterResult<W> {
        self.writer.write_utf8_declaration()?.write_doctype(xhtml::DOCTYPE)?;

        write_element! {
            writer: self.writer,
            tag: xhtml::HTML,
            attributes: {
                xhtml::XMLNS      => xhtml::XHTML_NS,
                xhtml::XMLNS_EPUB => xhtml::EPUB_NS,
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::HEAD,
                    inner_content: {
                        write_element! {
                            writer: self.writer,
                            tag: xhtml::TITLE,
                            text: self.toc.title(),
                        }?;
                    }
                }?;
                write_element! {
                    writer: self.writer,
                    tag: xhtml::BODY,
                    inner_content: {
                        self.write_nav()?;
                    }
                }?;
            }
        }?;

        self.writer.finish()
    }

    fn write_nav(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: xhtml::NAV,
            attributes: {
                xhtml::EPUB_TYPE => xhtml::TOC,
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: xhtml::H1,
                    text: xhtml::TOC_HEADING,
                }?;
                self.write_list()?;
            }
        }
    }

    fn write_list(&mut self) -> WriterResult<()> {
        let toc = self.toc;

        // An empty list is still required within the nav element
        if toc.is_empty() {
            return write_element! {
                writer: self.writer,
                tag: xhtml::OL,
                text: "",
            };
        }

        write_element! {
            writer: self.writer,
            tag: xhtml::OL,
            inner_content: {
                for entry in toc.entries() {
                    write_element! {
                        writer: self.writer,
                        tag: xhtml::LI,
                        inner_content: {
                            write_element! {
                                writer: self.writer,
                                tag: xhtml::A,
                                text: entry.label(),
                                attributes: {
                                    xhtml::HREF => entry.href(),
                                }
                            }?;
                        }
                    }?;
                }
            }
        }
    }
}
