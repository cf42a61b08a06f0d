//! Retrieval of resource bytes from source references.
//!
//! A source reference is one of:
//! - A `data:` URL (`data:[<media type>][;base64],<data>`)
//! - An `http://` or `https://` URL (requires the `http` feature)
//! - A local filesystem path, optionally given as a `file://` URL
//!
//! Any other `<scheme>://` reference is unsupported.

use crate::ebook::errors::FetchError;
use crate::ebook::resource::consts::mime;
use crate::util::str::StrExt;
use crate::util::uri;
use base64::Engine;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Validates and retrieves the bytes behind a source reference.
///
/// [`Epub`](crate::Epub) calls [`Fetch::check`] when a resource is added,
/// and [`Fetch::fetch`] when the publication is written.
/// A source may therefore disappear between both calls,
/// in which case writing fails with
/// [`EpubError::FileRetrieval`](crate::ebook::errors::EpubError::FileRetrieval).
///
/// # Examples
/// - Serving every reference from memory:
/// ```
/// # use epubgen::ebook::errors::FetchError;
/// # use epubgen::ebook::fetch::Fetch;
/// # use std::io::Read;
/// struct Static;
///
/// impl Fetch for Static {
///     fn fetch(&self, _reference: &str) -> Result<Box<dyn Read + Send>, FetchError> {
///         Ok(Box::new(&b"body { margin: 0; }"[..]))
///     }
/// }
///
/// let epub = epubgen::Epub::with_fetcher("Title", Static);
/// assert_eq!("../css/style.css", epub.add_css("anything/style.css", None).unwrap());
/// ```
pub trait Fetch: Send + Sync {
    /// Checks that `reference` is retrievable.
    ///
    /// The default implementation opens the reference with [`Self::fetch`]
    /// and discards the stream.
    fn check(&self, reference: &str) -> Result<(), FetchError> {
        self.fetch(reference).map(drop)
    }

    /// Opens a byte stream for `reference`.
    fn fetch(&self, reference: &str) -> Result<Box<dyn Read + Send>, FetchError>;
}

/// The default [`Fetch`] implementation,
/// supporting data URLs, HTTP(S) URLs, and local files.
///
/// The HTTP client is created on first use.
#[derive(Default)]
pub struct DefaultFetcher {
    #[cfg(feature = "http")]
    client: std::sync::OnceLock<reqwest::blocking::Client>,
}

impl DefaultFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `client` for HTTP(S) sources (e.g., to configure timeouts or proxies).
    #[cfg(feature = "http")]
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self {
            client: std::sync::OnceLock::from(client),
        }
    }

    #[cfg(feature = "http")]
    fn client(&self) -> &reqwest::blocking::Client {
        self.client.get_or_init(reqwest::blocking::Client::new)
    }

    #[cfg(feature = "http")]
    fn fetch_http(&self, url: &str) -> Result<Box<dyn Read + Send>, FetchError> {
        let response = success(self.client().get(url).send()?, url)?;

        debug!("fetched `{url}` ({})", response.status());
        Ok(Box::new(response))
    }

    /// Validates an HTTP(S) source without downloading its body.
    ///
    /// Servers that do not allow `HEAD` are checked with `GET`,
    /// dropping the response before the body is read.
    #[cfg(feature = "http")]
    fn check_http(&self, url: &str) -> Result<(), FetchError> {
        let response = self.client().head(url).send()?;

        if response.status() == reqwest::StatusCode::METHOD_NOT_ALLOWED {
            return self.fetch_http(url).map(drop);
        }
        success(response, url).map(drop)
    }

    #[cfg(not(feature = "http"))]
    fn fetch_http(&self, url: &str) -> Result<Box<dyn Read + Send>, FetchError> {
        let scheme = uri::scheme(url).unwrap_or_default();
        Err(FetchError::UnsupportedScheme(scheme.to_owned()))
    }

    #[cfg(not(feature = "http"))]
    fn check_http(&self, url: &str) -> Result<(), FetchError> {
        self.fetch_http(url).map(drop)
    }
}

#[cfg(feature = "http")]
fn success(
    response: reqwest::blocking::Response,
    url: &str,
) -> Result<reqwest::blocking::Response, FetchError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_owned(),
        })
    }
}

impl Fetch for DefaultFetcher {
    fn check(&self, reference: &str) -> Result<(), FetchError> {
        match SourceKind::of(reference)? {
            SourceKind::Data(data_url) => data_url.decode().map(drop),
            SourceKind::File(path) => check_regular_file(&path),
            SourceKind::Http(url) => self.check_http(url),
        }
    }

    fn fetch(&self, reference: &str) -> Result<Box<dyn Read + Send>, FetchError> {
        match SourceKind::of(reference)? {
            SourceKind::Data(data_url) => Ok(Box::new(io::Cursor::new(data_url.decode()?))),
            SourceKind::File(path) => {
                check_regular_file(&path)?;
                Ok(Box::new(File::open(path)?))
            }
            SourceKind::Http(url) => self.fetch_http(url),
        }
    }
}

impl std::fmt::Debug for DefaultFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultFetcher").finish_non_exhaustive()
    }
}

enum SourceKind<'a> {
    Data(DataUrl<'a>),
    Http(&'a str),
    File(PathBuf),
}

impl<'a> SourceKind<'a> {
    fn of(reference: &'a str) -> Result<Self, FetchError> {
        const FILE_URL_PREFIX: &str = "file://";

        match uri::scheme(reference) {
            Some(scheme) if scheme.eq_ignore_ascii_case("data") => DataUrl::parse(reference)
                .map(Self::Data)
                .ok_or_else(|| FetchError::DataUrl("missing `,` separator".to_owned())),
            Some(scheme)
                if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
            {
                Ok(Self::Http(reference))
            }
            Some(scheme) if scheme.eq_ignore_ascii_case("file") => {
                let path = if reference.starts_with_ignore_case(FILE_URL_PREFIX) {
                    &reference[FILE_URL_PREFIX.len()..]
                } else {
                    // `file:relative/path`
                    &reference[scheme.len() + 1..]
                };
                Ok(Self::File(PathBuf::from(uri::decode(path).as_ref())))
            }
            Some(scheme) if reference[scheme.len() + 1..].starts_with("//") => {
                Err(FetchError::UnsupportedScheme(scheme.to_owned()))
            }
            // A relative path containing a colon (e.g., `cover:v2.png`)
            Some(_) | None => Ok(Self::File(PathBuf::from(reference))),
        }
    }
}

fn check_regular_file(path: &Path) -> Result<(), FetchError> {
    let metadata = std::fs::metadata(path)?;

    if metadata.is_file() {
        Ok(())
    } else {
        Err(FetchError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{}` is not a regular file", path.display()),
        )))
    }
}

/// A parsed `data:` URL.
pub(crate) struct DataUrl<'a> {
    media_type: &'a str,
    base64: bool,
    data: &'a str,
}

impl<'a> DataUrl<'a> {
    const PREFIX: &'static str = "data:";
    const BASE64_SUFFIX: &'static str = ";base64";

    /// Returns `None` if `reference` is not a well-formed data URL.
    pub(crate) fn parse(reference: &'a str) -> Option<Self> {
        if !reference.starts_with_ignore_case(Self::PREFIX) {
            return None;
        }
        let (header, data) = reference[Self::PREFIX.len()..].split_once(',')?;
        let base64 = header.ends_with_ignore_case(Self::BASE64_SUFFIX);
        let header = if base64 {
            &header[..header.len() - Self::BASE64_SUFFIX.len()]
        } else {
            header
        };
        // Parameters such as `;charset=` are not part of the media type
        let media_type = header.split(';').next().unwrap_or_default().trim();

        Some(Self {
            media_type: if media_type.is_empty() {
                mime::TEXT_PLAIN
            } else {
                media_type
            },
            base64,
            data,
        })
    }

    pub(crate) fn media_type(&self) -> &'a str {
        self.media_type
    }

    pub(crate) fn decode(&self) -> Result<Vec<u8>, FetchError> {
        if self.base64 {
            // Whitespace may appear in hand-written or wrapped payloads
            let compact: String = uri::decode(self.data)
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();

            base64::engine::general_purpose::STANDARD
                .decode(compact)
                .map_err(|error| FetchError::DataUrl(error.to_string()))
        } else {
            Ok(percent_encoding::percent_decode_str(self.data).collect())
        }
    }
}

/// Encodes `bytes` as a base64 `data:` URL.
pub(crate) fn to_data_url(media_type: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("{}{media_type}{},{encoded}", DataUrl::PREFIX, DataUrl::BASE64_SUFFIX)
}
