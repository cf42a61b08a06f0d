//! # epubgen
//! A library that assembles EPUB 3 publications from sections, media, and metadata.
//!
//! Written publications remain readable by EPUB 2 reading systems
//! through the NCX and legacy metadata.
//!
//! ## Examples
//! Creating and writing an epub file:
//! ```no_run
//! use epubgen::Epub;
//! use epubgen::ebook::epub::vocabulary::role;
//!
//! # fn main() -> epubgen::ebook::errors::EpubResult<()> {
//! // Creating an epub instance
//! let epub = Epub::new("Example EPUB");
//! epub.add_author("Jane Doe", role::AUTHOR);
//!
//! // Registering resources from a file, a URL, and a data URL
//! let css = epub.add_css("assets/style.css", None)?;
//! let font = epub.add_font("https://example.com/font.woff2", None)?;
//! let image = epub.add_image("data:image/png;base64,iVBORw0KGgo=", Some("cover.png"))?;
//! epub.set_cover(&image, None);
//!
//! // Adding sections in reading order
//! epub.add_section("<h1>Chapter 1</h1>", Some("Chapter 1"), None, Some(&css))?;
//! epub.add_section("<h1>Chapter 2</h1>", Some("Chapter 2"), None, Some(&css))?;
//!
//! // Writing the publication
//! epub.write("example.epub")?;
//! # Ok(())
//! # }
//! ```
//! Writing with options:
//! ```no_run
//! # fn main() -> epubgen::ebook::errors::EpubResult<()> {
//! # let epub = epubgen::Epub::new("Example EPUB");
//! epub.write_options()
//!     .compression(9)
//!     .in_memory()
//!     .save("example.epub")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//! - `http` (default): HTTP(S) resource sources through a blocking `reqwest` client.

pub mod ebook;
mod util;
mod writer;

pub use self::ebook::{
    epub::{Epub, write::EpubWriteOptions},
    fetch::{DefaultFetcher, Fetch},
    resource::ResourceKind,
    staging::{DiskFs, MemoryFs, StagingFs},
};

pub mod errors {
    pub use super::ebook::errors::{EpubError, EpubResult, FetchError};
}
