// Open Container Format
pub(crate) mod ocf {
    pub(crate) const MIMETYPE_FILE: &str = "mimetype";
    pub(crate) const CONTAINER_PATH: &str = "META-INF/container.xml";
    pub(crate) const CONTENT_DIR: &str = "EPUB";
    pub(crate) const PACKAGE_PATH: &str = "EPUB/package.opf";

    pub(crate) const CONTAINER: &str = "container";
    pub(crate) const ROOTFILES: &str = "rootfiles";
    pub(crate) const ROOTFILE: &str = "rootfile";
    pub(crate) const FULL_PATH: &str = "full-path";
    pub(crate) const MEDIA_TYPE: &str = "media-type";
    pub(crate) const VERSION: &str = "version";
    pub(crate) const XMLNS: &str = "xmlns";
    pub(crate) const CONTAINER_VERSION: &str = "1.0";
    pub(crate) const CONTAINER_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:container";
}

// Open Packaging Format
pub(crate) mod opf {
    pub(crate) const PACKAGE: &str = "package";
    pub(crate) const METADATA: &str = "metadata";
    pub(crate) const MANIFEST: &str = "manifest";
    pub(crate) const SPINE: &str = "spine";
    pub(crate) const ITEM: &str = "item";
    pub(crate) const ITEMREF: &str = "itemref";
    pub(crate) const META: &str = "meta";

    pub(crate) const XMLNS: &str = "xmlns";
    pub(crate) const VERSION: &str = "version";
    pub(crate) const UNIQUE_IDENTIFIER: &str = "unique-identifier";
    pub(crate) const ID: &str = "id";
    pub(crate) const IDREF: &str = "idref";
    pub(crate) const HREF: &str = "href";
    pub(crate) const MEDIA_TYPE: &str = "media-type";
    pub(crate) const PROPERTIES: &str = "properties";
    pub(crate) const REFINES: &str = "refines";
    pub(crate) const PROPERTY: &str = "property";
    pub(crate) const SCHEME: &str = "scheme";
    pub(crate) const NAME: &str = "name";
    pub(crate) const CONTENT: &str = "content";
    pub(crate) const TOC: &str = "toc";
    pub(crate) const PAGE_PROGRESSION_DIRECTION: &str = "page-progression-direction";

    pub(crate) const OPF_NS: &str = "http://www.idpf.org/2007/opf";
    pub(crate) const EPUB3_VERSION: &str = "3.0";
    pub(crate) const UNIQUE_IDENTIFIER_ID: &str = "pub-id";

    // Legacy cover meta & properties
    pub(crate) const COVER: &str = "cover";
    pub(crate) const COVER_IMAGE: &str = "cover-image";
    pub(crate) const NAV_PROPERTY: &str = "nav";

    pub(crate) const CREATOR_ID_PREFIX: &str = "creator";
    pub(crate) const CONTRIBUTOR_ID_PREFIX: &str = "contributor";
    pub(crate) const IDENTIFIER_ID_PREFIX: &str = "identifier";
}

// Dublin Core
pub(crate) mod dc {
    pub(crate) const XMLNS_DC: &str = "xmlns:dc";
    pub(crate) const NS: &str = "http://purl.org/dc/elements/1.1/";

    pub(crate) const IDENTIFIER: &str = "dc:identifier";
    pub(crate) const TITLE: &str = "dc:title";
    pub(crate) const LANGUAGE: &str = "dc:language";
    pub(crate) const DESCRIPTION: &str = "dc:description";
    pub(crate) const PUBLISHER: &str = "dc:publisher";
    pub(crate) const SOURCE: &str = "dc:source";
    pub(crate) const DATE: &str = "dc:date";
    pub(crate) const SUBJECT: &str = "dc:subject";
    pub(crate) const CREATOR: &str = "dc:creator";
    pub(crate) const CONTRIBUTOR: &str = "dc:contributor";
}

// Navigation Control file for XML (EPUB 2)
pub(crate) mod ncx {
    pub(crate) const FILE: &str = "toc.ncx";
    pub(crate) const ID: &str = "ncx";

    pub(crate) const NCX: &str = "ncx";
    pub(crate) const HEAD: &str = "head";
    pub(crate) const META: &str = "meta";
    pub(crate) const DOC_TITLE: &str = "docTitle";
    pub(crate) const TEXT: &str = "text";
    pub(crate) const NAV_MAP: &str = "navMap";
    pub(crate) const NAV_POINT: &str = "navPoint";
    pub(crate) const NAV_LABEL: &str = "navLabel";
    pub(crate) const CONTENT: &str = "content";

    pub(crate) const XMLNS: &str = "xmlns";
    pub(crate) const VERSION: &str = "version";
    pub(crate) const ID_ATTR: &str = "id";
    pub(crate) const NAME: &str = "name";
    pub(crate) const CONTENT_ATTR: &str = "content";
    pub(crate) const SRC: &str = "src";
    pub(crate) const PLAY_ORDER: &str = "playOrder";

    pub(crate) const NCX_NS: &str = "http://www.daisy.org/z3986/2005/ncx/";
    pub(crate) const NCX_VERSION: &str = "2005-1";
    pub(crate) const DTB_UID: &str = "dtb:uid";
    pub(crate) const DTB_DEPTH: &str = "dtb:depth";
    pub(crate) const DTB_TOTAL_PAGE_COUNT: &str = "dtb:totalPageCount";
    pub(crate) const DTB_MAX_PAGE_NUMBER: &str = "dtb:maxPageNumber";
    pub(crate) const NAV_POINT_ID_PREFIX: &str = "navPoint-";
}

pub(crate) mod xhtml {
    pub(crate) const NAV_FILE: &str = "nav.xhtml";
    pub(crate) const SECTION_DIR: &str = "xhtml";
    pub(crate) const DOCTYPE: &str = "html";

    pub(crate) const HTML: &str = "html";
    pub(crate) const HEAD: &str = "head";
    pub(crate) const TITLE: &str = "title";
    pub(crate) const LINK: &str = "link";
    pub(crate) const BODY: &str = "body";
    pub(crate) const NAV: &str = "nav";
    pub(crate) const H1: &str = "h1";
    pub(crate) const OL: &str = "ol";
    pub(crate) const LI: &str = "li";
    pub(crate) const A: &str = "a";

    pub(crate) const XMLNS: &str = "xmlns";
    pub(crate) const XMLNS_EPUB: &str = "xmlns:epub";
    pub(crate) const EPUB_TYPE: &str = "epub:type";
    pub(crate) const HREF: &str = "href";
    pub(crate) const REL: &str = "rel";
    pub(crate) const TYPE: &str = "type";

    pub(crate) const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
    pub(crate) const EPUB_NS: &str = "http://www.idpf.org/2007/ops";
    pub(crate) const STYLESHEET: &str = "stylesheet";
    pub(crate) const TOC: &str = "toc";
    pub(crate) const TOC_HEADING: &str = "Table of Contents";
}

// Cover defaults
pub(crate) mod cover {
    pub(crate) const CSS_FILE: &str = "cover.css";
    pub(crate) const XHTML_FILE: &str = "cover.xhtml";
    pub(crate) const IMAGE_ALT: &str = "Cover Image";
    pub(crate) const DEFAULT_CSS: &str = "\
body {
  background-color: #FFFFFF;
  margin-bottom: 0px;
  margin-left: 0px;
  margin-right: 0px;
  margin-top: 0px;
  text-align: center;
}
img {
  max-height: 100%;
  max-width: 100%;
}
";
}

pub(crate) const DEFAULT_LANGUAGE: &str = "en";
pub(crate) const UUID_URN_PREFIX: &str = "urn:uuid:";
