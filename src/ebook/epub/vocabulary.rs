//! Controlled vocabularies for package metadata.
//!
//! These values are accepted anywhere a scheme, property, role,
//! or identifier type is expected, although any string is permitted.

/// Values of the `scheme` attribute of a `<meta>` refinement.
pub mod scheme {
    /// MARC relator codes, used for creator and contributor roles.
    pub const MARC_RELATORS: &str = "marc:relators";
    /// ONIX code list 5, used for identifier types.
    pub const ONIX_CODELIST5: &str = "onix:codelist5";
    pub const XSD_STRING: &str = "xsd:string";
}

/// Values of the `property` attribute of a `<meta>` element.
pub mod property {
    pub const ROLE: &str = "role";
    pub const TITLE_TYPE: &str = "title-type";
    pub const DISPLAY_SEQ: &str = "display-seq";
    pub const META_AUTH: &str = "meta-auth";
    pub const IDENTIFIER_TYPE: &str = "identifier-type";
    pub const MODIFIED: &str = "dcterms:modified";
}

/// Common [MARC relator](https://www.loc.gov/marc/relators/relaterm.html) codes.
pub mod role {
    pub const ADAPTER: &str = "adp";
    pub const ANNOTATOR: &str = "ann";
    pub const ARTIST: &str = "art";
    pub const AUTHOR: &str = "aut";
    pub const AUTHOR_OF_AFTERWORD: &str = "aft";
    pub const AUTHOR_OF_INTRODUCTION: &str = "aui";
    pub const BOOK_PRODUCER: &str = "bkp";
    pub const COLLABORATOR: &str = "clb";
    pub const COMMENTATOR: &str = "cmm";
    pub const COMPILER: &str = "com";
    pub const CONTRIBUTOR: &str = "ctb";
    pub const COPYRIGHT_HOLDER: &str = "cph";
    pub const COVER_DESIGNER: &str = "cov";
    pub const DESIGNER: &str = "dsr";
    pub const EDITOR: &str = "edt";
    pub const ILLUSTRATOR: &str = "ill";
    pub const NARRATOR: &str = "nrt";
    pub const PHOTOGRAPHER: &str = "pht";
    pub const PUBLISHER: &str = "pbl";
    pub const REDAKTOR: &str = "red";
    pub const REVIEWER: &str = "rev";
    pub const TRANSLATOR: &str = "trl";
    pub const WRITER_OF_PREFACE: &str = "wpr";
}

/// Identifier type codes from ONIX code list 5.
///
/// Used with [`ONIX_CODELIST5`](super::scheme::ONIX_CODELIST5).
pub mod identifier_type {
    pub const PROPRIETARY: &str = "01";
    pub const ISBN_10: &str = "02";
    pub const GTIN_13: &str = "03";
    pub const UPC: &str = "04";
    pub const ISMN_10: &str = "05";
    pub const DOI: &str = "06";
    pub const LCCN: &str = "13";
    pub const GTIN_14: &str = "14";
    pub const ISBN_13: &str = "15";
    pub const LEGAL_DEPOSIT_NUMBER: &str = "17";
    pub const URN: &str = "22";
    pub const OCLC_NUMBER: &str = "23";
    pub const CO_PUBLISHER_ISBN_13: &str = "24";
    pub const ISMN_13: &str = "25";
    pub const ISBN_A: &str = "26";
    pub const JP_E_CODE: &str = "27";
    pub const OLCC_NUMBER: &str = "28";
    pub const JP_MAGAZINE_ID: &str = "29";
    pub const UPC12_5: &str = "30";
    pub const BNF_CONTROL_NUMBER: &str = "31";
    pub const ARK: &str = "35";
    /// Not part of the code list;
    /// used with [`XSD_STRING`](super::scheme::XSD_STRING) for the generated `urn:uuid` identifier.
    pub const UUID: &str = "uuid";
}

/// Values of the spine `page-progression-direction` attribute.
pub mod direction {
    pub const LTR: &str = "ltr";
    pub const RTL: &str = "rtl";
    pub const DEFAULT: &str = "default";
}
