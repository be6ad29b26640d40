//! HTML source loading.
//!
//! A document comes either from a local file or from a single HTTP GET.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

/// Default HTML file, relative to the working directory.
pub const HTMLFILE_DEFAULT: &str = "index.html";

/// Where the HTML to check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A local HTML file.
    File(PathBuf),
    /// A page fetched with one HTTP GET.
    Url(Url),
}

impl Source {
    /// Pick the source from CLI-style arguments.
    ///
    /// A URL, when present, takes precedence over the file.
    pub fn from_args(file: impl Into<PathBuf>, url: Option<&str>) -> Result<Self> {
        match url {
            Some(url) => parse_url(url).map(Self::Url),
            None => Ok(Self::File(file.into())),
        }
    }

    /// Read the whole document as text.
    pub async fn load(&self) -> Result<String> {
        match self {
            Self::File(path) => load_file(path),
            Self::Url(url) => fetch_url(&reqwest::Client::new(), url).await,
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::File(PathBuf::from(HTMLFILE_DEFAULT))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Parse an absolute http(s) URL with a host.
pub fn parse_url(s: &str) -> Result<Url> {
    let s = s.trim();
    let url = Url::parse(s).map_err(|e| Error::InvalidUrl(format!("{s}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidUrl(format!(
            "{s}: unsupported scheme {}",
            url.scheme()
        )));
    }
    if url.host().is_none() {
        return Err(Error::InvalidUrl(format!("{s}: missing host")));
    }

    Ok(url)
}

/// Read a local HTML file into memory.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn load_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::from_io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read html file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Fetch `url` with a single GET and return the full response body.
///
/// Transport failures and non-success statuses are both [`Error::Fetch`].
/// There is no retry.
pub async fn fetch_url(client: &reqwest::Client, url: &Url) -> Result<String> {
    tracing::debug!(%url, "fetching");
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    tracing::debug!(%url, status = %response.status(), "response received");
    Ok(response.text().await?)
}
