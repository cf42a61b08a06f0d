mod nav;
mod ncx;

use crate::ebook::epub::consts::{ncx as ncx_file, ocf, xhtml};
use crate::ebook::epub::package::Identifier;
use crate::ebook::epub::toc::Toc;
use crate::ebook::epub::write::writer::EpubWriter;
use crate::ebook::epub::write::writer::toc::nav::NavWriter;
use crate::ebook::epub::write::writer::toc::ncx::NcxWriter;
use crate::ebook::errors::EpubResult;

/// Referenced by the NCX when the package carries no identifier.
const UNKNOWN_UID: &str = "urn:unknown";

impl EpubWriter<'_> {
    /// Stages `EPUB/nav.xhtml` and `EPUB/toc.ncx`.
    pub(super) fn stage_toc(&self) -> EpubResult<()> {
        let fallback;
        let toc = if self.data.toc.is_empty() {
            fallback = self.fallback_toc();
            &fallback
        } else {
            &self.data.toc
        };
        let uid = self
            .package
            .identifiers()
            .iter()
            .find(|identifier| identifier.id() == self.package.unique_identifier())
            .map(Identifier::value)
            .unwrap_or(UNKNOWN_UID);

        let nav = NavWriter::new(toc, Vec::new()).write();
        self.stage_bytes(
            &format!("{}/{}", ocf::CONTENT_DIR, xhtml::NAV_FILE),
            &super::in_memory(nav),
        )?;

        let ncx = NcxWriter::new(toc, uid, Vec::new()).write();
        self.stage_bytes(
            &format!("{}/{}", ocf::CONTENT_DIR, ncx_file::FILE),
            &super::in_memory(ncx),
        )
    }

    /// A navigation document and NCX must reference at least one target.
    ///
    /// Without titled sections, the first section (or the navigation document
    /// itself) is listed under the publication title.
    fn fallback_toc(&self) -> Toc {
        let mut toc = self.data.toc.clone();
        let href = self.data.sections.iter().next().map_or_else(
            || xhtml::NAV_FILE.to_owned(),
            |section| format!("{}/{}", xhtml::SECTION_DIR, section.filename()),
        );
        let label = match toc.title() {
            "" => href.clone(),
            title => title.to_owned(),
        };

        toc.push(label, href);
        toc
    }
}
