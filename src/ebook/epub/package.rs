//! The package document (`EPUB/package.opf`): metadata, manifest, and spine.

use crate::ebook::datetime::DateTime;
use crate::ebook::epub::consts::opf;
use crate::ebook::epub::vocabulary::{property, scheme};
use crate::ebook::epub::write::writer::package::PackageWriter;
use crate::util;

/// A `<meta>` element of the package metadata.
///
/// EPUB 3 metas use [`property`](Self::property) with a text [`value`](Self::value),
/// optionally [refining](Self::refines) another element.
/// Legacy EPUB 2 metas use [`name`](Self::name) and [`content`](Self::content).
///
/// At most one meta exists per identity: `(refines, property)` for EPUB 3 metas,
/// and `name` for legacy metas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Meta {
    pub refines: Option<String>,
    pub property: Option<String>,
    pub scheme: Option<String>,
    pub id: Option<String>,
    pub value: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
}

#[derive(PartialEq, Eq)]
enum MetaIdentity<'a> {
    Property {
        refines: Option<&'a str>,
        property: &'a str,
    },
    Name(Option<&'a str>),
}

impl Meta {
    /// Creates an EPUB 3 meta: `<meta property="..">value</meta>`.
    pub fn property(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Creates a legacy meta: `<meta name=".." content=".."/>`.
    pub fn legacy(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Refines the element with the given `id` (without `#`).
    pub fn refining(mut self, id: &str) -> Self {
        self.refines = Some(util::str::prefix("#", id));
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    fn identity(&self) -> MetaIdentity<'_> {
        match self.property.as_deref().filter(|property| !property.is_empty()) {
            Some(property) => MetaIdentity::Property {
                refines: self.refines.as_deref(),
                property,
            },
            None => MetaIdentity::Name(self.name.as_deref()),
        }
    }
}

/// A `<dc:identifier>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    id: String,
    value: String,
}

impl Identifier {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A `<dc:creator>` or `<dc:contributor>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creator {
    id: String,
    name: String,
}

impl Creator {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A manifest `<item>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestItem {
    id: String,
    href: String,
    media_type: String,
    properties: Option<String>,
}

impl ManifestItem {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The location relative to the package document, with `/` separators.
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn properties(&self) -> Option<&str> {
        self.properties.as_deref()
    }
}

/// The package document model.
///
/// Every setter accepts any string; no validation is performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    unique_identifier: String,
    title: String,
    language: String,
    description: Option<String>,
    publisher: Option<String>,
    source: Option<String>,
    date: Option<String>,
    subjects: Vec<String>,
    identifiers: Vec<Identifier>,
    creators: Vec<Creator>,
    contributors: Vec<Creator>,
    metas: Vec<Meta>,
    manifest: Vec<ManifestItem>,
    spine: Vec<String>,
    page_progression_direction: Option<String>,
}

impl Package {
    /// Creates an empty package with the given title and language.
    ///
    /// No identifier is added; the first [added](Self::add_identifier)
    /// becomes the unique identifier.
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            unique_identifier: opf::UNIQUE_IDENTIFIER_ID.to_owned(),
            title: title.into(),
            language: language.into(),
            description: None,
            publisher: None,
            source: None,
            date: None,
            subjects: Vec::new(),
            identifiers: Vec::new(),
            creators: Vec::new(),
            contributors: Vec::new(),
            metas: Vec::new(),
            manifest: Vec::new(),
            spine: Vec::new(),
            page_progression_direction: None,
        }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Accessors
    ////////////////////////////////////////////////////////////////////////////////

    /// The `id` of the identifier that uniquely identifies the publication (`pub-id`).
    pub fn unique_identifier(&self) -> &str {
        &self.unique_identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    pub fn contributors(&self) -> &[Creator] {
        &self.contributors
    }

    pub fn metas(&self) -> &[Meta] {
        &self.metas
    }

    pub fn manifest(&self) -> &[ManifestItem] {
        &self.manifest
    }

    /// Manifest ids in reading order.
    pub fn spine(&self) -> &[String] {
        &self.spine
    }

    pub fn page_progression_direction(&self) -> Option<&str> {
        self.page_progression_direction.as_deref()
    }

    /// Returns the `dcterms:modified` timestamp, if set.
    pub fn modified(&self) -> Option<&str> {
        self.metas
            .iter()
            .find(|meta| meta.refines.is_none() && meta.property.as_deref() == Some(property::MODIFIED))
            .and_then(|meta| meta.value.as_deref())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Metadata
    ////////////////////////////////////////////////////////////////////////////////

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.publisher = Some(publisher.into());
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = Some(date.into());
    }

    /// Replaces every subject.
    pub fn set_subjects<I>(&mut self, subjects: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
    }

    pub fn add_subject(&mut self, subject: impl Into<String>) {
        self.subjects.push(subject.into());
    }

    /// Appends an identifier with a linked `identifier-type` meta.
    ///
    /// The first identifier receives the id `pub-id`
    /// and becomes the unique identifier of the publication.
    /// Returns the id of the created identifier.
    pub fn add_identifier(
        &mut self,
        value: impl Into<String>,
        scheme: impl Into<String>,
        type_code: impl Into<String>,
    ) -> String {
        let id = if self.identifiers.is_empty() {
            self.unique_identifier.clone()
        } else {
            format!("{}{}", opf::IDENTIFIER_ID_PREFIX, self.identifiers.len())
        };

        self.upsert_meta(
            Meta::property(property::IDENTIFIER_TYPE, type_code)
                .refining(&id)
                .with_scheme(scheme),
        );
        self.identifiers.push(Identifier {
            id: id.clone(),
            value: value.into(),
        });
        id
    }

    /// Appends a `<dc:creator>` with a linked MARC relator `role` meta.
    ///
    /// Returns the id of the created creator.
    pub fn add_author(&mut self, name: impl Into<String>, role: impl Into<String>) -> String {
        let id = format!("{}{}", opf::CREATOR_ID_PREFIX, self.creators.len());
        self.upsert_meta(role_meta(&id, role.into()));
        self.creators.push(Creator {
            id: id.clone(),
            name: name.into(),
        });
        id
    }

    /// Appends a `<dc:contributor>` with a linked MARC relator `role` meta.
    ///
    /// Returns the id of the created contributor.
    pub fn add_contributor(&mut self, name: impl Into<String>, role: impl Into<String>) -> String {
        let id = format!("{}{}", opf::CONTRIBUTOR_ID_PREFIX, self.contributors.len());
        self.upsert_meta(role_meta(&id, role.into()));
        self.contributors.push(Creator {
            id: id.clone(),
            name: name.into(),
        });
        id
    }

    /// Inserts `meta`, or replaces the existing meta of the same identity in place.
    pub fn upsert_meta(&mut self, meta: Meta) {
        let existing = self
            .metas
            .iter_mut()
            .find(|existing| existing.identity() == meta.identity());

        match existing {
            Some(existing) => *existing = meta,
            None => self.metas.push(meta),
        }
    }

    /// Upserts a legacy `<meta name content/>`.
    pub fn add_custom_meta(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.upsert_meta(Meta::legacy(name, content));
    }

    /// Upserts the legacy `<meta name="cover" content="<image filename>"/>`,
    /// read by EPUB 2 reading systems.
    pub fn set_cover(&mut self, image_filename: impl Into<String>) {
        self.add_custom_meta(opf::COVER, image_filename);
    }

    /// Upserts the `dcterms:modified` meta.
    pub fn set_modified(&mut self, modified: DateTime) {
        self.upsert_meta(Meta::property(property::MODIFIED, modified.to_string()));
    }

    /// Sets the spine `page-progression-direction` (`ltr`, `rtl`, or `default`).
    pub fn set_page_progression_direction(&mut self, direction: impl Into<String>) {
        self.page_progression_direction = Some(direction.into());
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Manifest & Spine
    ////////////////////////////////////////////////////////////////////////////////

    /// Appends a manifest item.
    ///
    /// `href` is normalized to `/` separators.
    pub fn add_to_manifest(
        &mut self,
        id: impl Into<String>,
        href: &str,
        media_type: impl Into<String>,
        properties: Option<&str>,
    ) {
        self.manifest.push(ManifestItem {
            id: id.into(),
            href: href.replace('\\', "/"),
            media_type: media_type.into(),
            properties: properties.map(str::to_owned),
        });
    }

    /// Appends a manifest id to the reading order.
    pub fn add_to_spine(&mut self, idref: impl Into<String>) {
        self.spine.push(idref.into());
    }

    /// Derives a manifest id from `filename` that is not yet used
    /// by any element of the package document.
    pub(crate) fn unused_manifest_id(&self, filename: &str) -> String {
        const FALLBACK_ID: &str = "item";

        let base = match util::str::xml_id(filename) {
            id if id.is_empty() => FALLBACK_ID.to_owned(),
            id => id,
        };
        if !self.is_id_used(&base) {
            return base;
        }
        (2..)
            .map(|suffix: usize| format!("{base}-{suffix}"))
            .find(|id| !self.is_id_used(id))
            .expect("an unbounded range always yields a free id")
    }

    /// Whether `id` is already carried by a metadata element or manifest item.
    fn is_id_used(&self, id: &str) -> bool {
        id == self.unique_identifier
            || self.identifiers.iter().any(|identifier| identifier.id == id)
            || self.creators.iter().any(|creator| creator.id == id)
            || self.contributors.iter().any(|contributor| contributor.id == id)
            || self.metas.iter().any(|meta| meta.id.as_deref() == Some(id))
            || self.manifest.iter().any(|item| item.id == id)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Serialization
    ////////////////////////////////////////////////////////////////////////////////

    /// Stamps `dcterms:modified` with the current time, then serializes the package.
    ///
    /// # Panics
    /// Panics if the system clock is unsupported on the target platform.
    pub fn to_xml(&mut self) -> String {
        self.set_modified(DateTime::now());
        String::from_utf8(self.serialize()).expect("serialized package is UTF-8")
    }

    /// Serializes the package as-is.
    pub(crate) fn serialize(&self) -> Vec<u8> {
        PackageWriter::new(self, Vec::new())
            .write()
            .expect("writing to an in-memory buffer cannot fail")
    }
}

fn role_meta(id: &str, role: String) -> Meta {
    Meta::property(property::ROLE, role)
        .refining(id)
        .with_scheme(scheme::MARC_RELATORS)
}
