use crate::ebook::epub::consts::{dc, opf};
use crate::ebook::epub::package::Meta;
use crate::ebook::epub::write::writer::package::PackageWriter;
use crate::writer::WriterResult;
use crate::writer::xml::write_element;
use std::io::Write;

impl<W: Write> PackageWriter<'_, W> {
    pub(super) fn write_metadata(&mut self) -> WriterResult<()> {
        let package = self.package;
        let optional = [
            (dc::DESCRIPTION, package.description()),
            (dc::PUBLISHER, package.publisher()),
            (dc::SOURCE, package.source()),
            (dc::DATE, package.date()),
        ];

        write_element! {
            writer: self.writer,
            tag: opf::METADATA,
            attributes: {
                dc::XMLNS_DC => dc::NS,
            }
            inner_content: {
                for identifier in package.identifiers() {
                    self.write_dc_element(dc::IDENTIFIER, identifier.value(), Some(identifier.id()))?;
                }
                // Required
                self.write_dc_element(dc::TITLE, package.title(), None)?;
                self.write_dc_element(dc::LANGUAGE, package.language(), None)?;

                for (tag, value) in optional {
                    if let Some(value) = value {
                        self.write_dc_element(tag, value, None)?;
                    }
                }
                for subject in package.subjects() {
                    self.write_dc_element(dc::SUBJECT, subject, None)?;
                }
                for creator in package.creators() {
                    self.write_dc_element(dc::CREATOR, creator.name(), Some(creator.id()))?;
                }
                for contributor in package.contributors() {
                    self.write_dc_element(dc::CONTRIBUTOR, contributor.name(), Some(contributor.id()))?;
                }
                for meta in package.metas() {
                    self.write_meta(meta)?;
                }
            }
        }
    }

    fn write_dc_element(&mut self, tag: &'static str, text: &str, id: Option<&str>) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: tag,
            text: text,
            attributes: {
                opf::ID => id,
            }
        }
    }

    fn write_meta(&mut self, meta: &Meta) -> WriterResult<()> {
        self.writer
            .start_element(opf::META)?
            .add_attribute(opf::REFINES, meta.refines.as_deref())
            .add_attribute(opf::PROPERTY, meta.property.as_deref())
            .add_attribute(opf::SCHEME, meta.scheme.as_deref())
            .add_attribute(opf::ID, meta.id.as_deref())
            .add_attribute(opf::NAME, meta.name.as_deref())
            .add_attribute(opf::CONTENT, meta.content.as_deref());

        match meta.value.as_deref() {
            Some(value) => self.writer.finish_text_element(value),
            // Legacy `<meta name content/>`
            None => self.writer.finish_empty_element(),
        }
    }
}
