//! Error-related types for assembling an [`Epub`](crate::Epub).

use std::error::Error;
use std::path::PathBuf;

/// Alias for `Result<T, EpubError>`.
pub type EpubResult<T> = Result<T, EpubError>;

/// Possible errors when assembling or writing an [`Epub`](crate::Epub).
///
/// # Variants
/// ## Registration
/// Returned by `add_*` methods:
/// - [`FilenameAlreadyUsed`](EpubError::FilenameAlreadyUsed)
/// - [`InvalidFilename`](EpubError::InvalidFilename)
/// - [`FileRetrieval`](EpubError::FileRetrieval)
/// ## Export
/// Returned by [`Epub::write`](crate::Epub::write):
/// - [`FileRetrieval`](EpubError::FileRetrieval)
/// - [`UnableToCreateEpub`](EpubError::UnableToCreateEpub)
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum EpubError {
    /// A requested filename is already taken by another item of the same kind.
    ///
    /// Resources of different kinds (e.g., an image and a font)
    /// may share a filename, as they are stored in separate folders.
    #[error("[FilenameAlreadyUsed - `{filename}`]: Filename is already in use")]
    FilenameAlreadyUsed {
        /// The rejected filename.
        filename: String,
    },

    /// A requested filename is not a single path element within the container
    /// (e.g., `..`, longer than 255 bytes, or containing `/` or `\`).
    #[error("[InvalidFilename - `{filename}`]: Filename must be a single path element")]
    InvalidFilename {
        /// The rejected filename.
        filename: String,
    },

    /// A source reference could not be validated or read.
    #[error("[FileRetrieval - `{reference}`]: {source}")]
    FileRetrieval {
        /// The underlying retrieval failure.
        source: FetchError,
        /// The source reference that failed, as given by the caller.
        reference: String,
    },

    /// Staging the publication or writing the output archive failed.
    #[error("[UnableToCreateEpub - `{}`]: {source}", .path.display())]
    UnableToCreateEpub {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The output path, or the staging location, that could not be written.
        path: PathBuf,
    },
}

impl EpubError {
    pub(crate) fn retrieval(reference: &str, source: impl Into<FetchError>) -> Self {
        Self::FileRetrieval {
            source: source.into(),
            reference: reference.to_owned(),
        }
    }

    pub(crate) fn creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnableToCreateEpub {
            source,
            path: path.into(),
        }
    }
}

/// Possible errors when a [`Fetch`](crate::ebook::fetch::Fetch) implementation
/// validates or retrieves a source reference.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// A local file could not be accessed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be performed.
    #[cfg(feature = "http")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The HTTP server responded with a non-success status.
    #[error("Unexpected HTTP status {status} for `{url}`")]
    Status {
        /// The received HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// A `data:` URL is malformed or its payload cannot be decoded.
    #[error("Malformed data URL: {0}")]
    DataUrl(String),

    /// The reference uses a scheme that the fetcher cannot retrieve.
    #[error("Unsupported scheme `{0}`")]
    UnsupportedScheme(String),

    /// Failure originating from a custom fetcher.
    #[error(transparent)]
    Other(Box<dyn Error + Send + Sync + 'static>),
}
