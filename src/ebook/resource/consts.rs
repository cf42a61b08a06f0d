pub(crate) mod mime {
    pub(crate) const EPUB_ZIP: &str = "application/epub+zip";
    pub(crate) const XHTML: &str = "application/xhtml+xml";
    pub(crate) const OEBPS_PACKAGE: &str = "application/oebps-package+xml";
    pub(crate) const NCX: &str = "application/x-dtbncx+xml";
    pub(crate) const CSS: &str = "text/css";
    pub(crate) const OCTET_STREAM: &str = "application/octet-stream";
    pub(crate) const TEXT_PLAIN: &str = "text/plain";
}
