use crate::ebook::epub::consts::ocf;
use crate::ebook::resource::consts::mime;
use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

/// Writes `META-INF/container.xml`, pointing to `EPUB/package.opf`.
pub(super) struct ContainerWriter<W> {
    writer: XmlWriter<'static, W>,
}

impl<W: Write> ContainerWriter<W> {
    pub(super) fn new(writer: W) -> Self {
        Self {
            writer: XmlWriter::new(writer),
        }
    }

    pub(super) fn write(mut self) -> WriterResult<W> {
        self.writer.write_utf8_declaration()?;

        write_element! {
            writer: self.writer,
            tag: ocf::CONTAINER,
            attributes: {
                ocf::VERSION => ocf::CONTAINER_VERSION,
                ocf::XMLNS   => ocf::CONTAINER_NS,
            }
            inner_content: {
                write_element! {
                    writer: self.writer,
                    tag: ocf::ROOTFILES,
                    inner_content: {
                        write_element! {
                            writer: self.writer,
                            tag: ocf::ROOTFILE,
                            attributes: {
                                ocf::FULL_PATH  => ocf::PACKAGE_PATH,
                                ocf::MEDIA_TYPE => mime::OEBPS_PACKAGE,
                            }
                        }?;
                    }
                }?;
            }
        }?;

        self.writer.finish()
    }
}
