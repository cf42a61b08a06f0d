use crate::ebook::epub::consts::{ncx, opf};
use crate::ebook::epub::write::writer::package::PackageWriter;
use crate::writer::WriterResult;
use crate::writer::xml::write_element;
use std::io::Write;

impl<W: Write> PackageWriter<'_, W> {
    pub(super) fn write_spine(&mut self) -> WriterResult<()> {
        let package = self.package;

        write_element! {
            writer: self.writer,
            tag: opf::SPINE,
            attributes: {
                // The NCX is always generated
                opf::TOC                        => ncx::ID,
                opf::PAGE_PROGRESSION_DIRECTION => package.page_progression_direction(),
            }
            inner_content: {
                for idref in package.spine() {
                    write_element! {
                        writer: self.writer,
                        tag: opf::ITEMREF,
                        attributes: {
                            opf::IDREF => idref.as_str(),
                        }
                    }?;
                }
            }
        }
    }
}
