use crate::ebook::epub::consts::opf;
use crate::ebook::epub::package::ManifestItem;
use crate::ebook::epub::write::writer::package::PackageWriter;
use crate::writer::WriterResult;
use crate::writer::xml::write_element;
use std::io::Write;

impl<W: Write> PackageWriter<'_, W> {
    pub(super) fn write_manifest(&mut self) -> WriterResult<()> {
        let manifest = self.package.manifest();

        write_element! {
            writer: self.writer,
            tag: opf::MANIFEST,
            inner_content: {
                for item in manifest {
                    self.write_item(item)?;
                }
            }
        }
    }

    fn write_item(&mut self, item: &ManifestItem) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: opf::ITEM,
            attributes: {
                opf::ID         => item.id(),
                opf::HREF       => item.href(),
                opf::MEDIA_TYPE => item.media_type(),
                opf::PROPERTIES => item.properties(),
            }
        }
    }
}
