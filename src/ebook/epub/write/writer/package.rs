mod manifest;
mod metadata;
mod spine;

use crate::ebook::epub::consts::opf;
use crate::ebook::epub::package::Package;
use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};
use std::io::Write;

/// Writes the package document (`EPUB/package.opf`).
pub(crate) struct PackageWriter<'ebook, W> {
    package: &'ebook Package,
    writer: XmlWriter<'ebook, W>,
}

impl<'ebook, W: Write> PackageWriter<'ebook, W> {
    pub(crate) fn new(package: &'ebook Package, writer: W) -> Self {
        Self {
            package,
            writer: XmlWriter::new(writer),
        }
    }

    pub(crate) fn write(mut self) -> WriterResult<W> {
        let package = self.package;

        self.writer.write_utf8_declaration()?;

        write_element! {
            writer: self.writer,
            tag: opf::PACKAGE,
            attributes: {
                opf::XMLNS             => opf::OPF_NS,
                opf::VERSION           => opf::EPUB3_VERSION,
                opf::UNIQUE_IDENTIFIER => package.unique_identifier(),
            }
            inner_content: {
                self.write_metadata()?;
                self.write_manifest()?;
                self.write_spine()?;
            }
        }?;

        self.writer.finish()
    }
}
