//! Error types for html-grader.
//!
//! Every fallible operation in the library returns [`Result`]. Only the
//! `grader` binary turns an [`Error`] into a diagnostic and an exit code.

use std::path::PathBuf;

/// Error type for loading, fetching and reporting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A checks file or HTML file does not exist.
    #[error("{} does not exist. Exiting.", .path.display())]
    FileMissing { path: PathBuf },

    /// Reading an existing file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The checks file is not a JSON array of strings.
    #[error("malformed checks file: {0}")]
    MalformedChecks(#[source] serde_json::Error),

    /// The URL could not be parsed or is not an http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP GET failed at the transport layer or returned a non-success status.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The report could not be serialized to JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// Maps an I/O error on `path` to [`Error::FileMissing`] when the file is
    /// absent, and to [`Error::Io`] otherwise.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileMissing { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// Result type alias for html-grader operations.
pub type Result<T> = std::result::Result<T, Error>;
