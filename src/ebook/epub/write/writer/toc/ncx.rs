use crate::ebook::epub::consts::ncx;
use crate::ebook::epub::toc::{Toc, TocEntry};
use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

/// Writes the EPUB 2 NCX (`EPUB/toc.ncx`).
pub(crate) struct NcxWriter<'ebook, W> {
    toc: &'ebook Toc,
    uid: &'ebook str,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> NcxWriter<'ebook, W> {
    /// `uid` must match the unique identifier of the package.
    pub(crate) fn new(toc: &'ebook Toc, uid: &'ebook str, writer: W) -> Self {
        Self {
            toc,
            uid,
            writer: XmlWriter::new(writer),
        }
    }

    pub(crate) fn write(mut self) -> WriterResult<W> {
        // DOCTYPE for NCX is omitted as EPUB 2 does not require it
        self.writer.write_utf8_declaration()?;

        write_element! {
            writer: self.writer,
            tag: ncx::NCX,
            attributes: {
                ncx::XMLNS   => ncx::NCX_NS,
                ncx::VERSION => ncx::NCX_VERSION,
            }
            inner_content: {
                self.write_head()?;
                self.write_doc_title()?;
                self.write_nav_map()?;
            }
        }?;

        self.writer.finish()
    }

    fn write_head(&mut self) -> WriterResult<()> {
        // Entries are never nested
        const DEPTH: &str = "1";
        const ZERO: &str = "0";

        write_element! {
            writer: self.writer,
            tag: ncx::HEAD,
            inner_content: {
                self.write_meta(ncx::DTB_UID, self.uid)?;
                self.write_meta(ncx::DTB_DEPTH, DEPTH)?;
                self.write_meta(ncx::DTB_TOTAL_PAGE_COUNT, ZERO)?;
                self.write_meta(ncx::DTB_MAX_PAGE_NUMBER, ZERO)?;
            }
        }
    }

    fn write_meta(&mut self, name: &str, content: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ncx::META,
            attributes: {
                ncx::NAME         => name,
                ncx::CONTENT_ATTR => content,
            }
        }
    }

    fn write_doc_title(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: ncx::DOC_TITLE,
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: ncx::TEXT,
                    text: self.toc.title(),
                }?;
            }
        }
    }

    fn write_nav_map(&mut self) -> WriterResult<()> {
        let toc = self.toc;

        write_element! {
            writer: self.writer,
            tag: ncx::NAV_MAP,
            inner_content: {
                for (index, entry) in toc.entries().iter().enumerate() {
                    self.write_nav_point(index + 1, entry)?;
                }
            }
        }
    }

    /// `play_order` starts at `1`.
    fn write_nav_point(&mut self, play_order: usize, entry: &TocEntry) -> WriterResult<()> {
        let id = format!("{}{play_order}", ncx::NAV_POINT_ID_PREFIX);
        let play_order = play_order.to_string();

        write_element! {
            writer: self.writer,
            tag: ncx::NAV_POINT,
            attributes: {
                ncx::ID_ATTR    => id.as_str(),
                ncx::PLAY_ORDER => play_order.as_str(),
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: ncx::NAV_LABEL,
                    inner_content: {
                        write_element! {
                            writer: self.writer,
                            tag: ncx::TEXT,
                            text: entry.label(),
                        }?;
                    }
                }?;
                write_element! {
                    writer: self.writer,
                    tag: ncx::CONTENT,
                    attributes: {
                        ncx::SRC => entry.href(),
                    }
                }?;
            }
        }
    }
}
