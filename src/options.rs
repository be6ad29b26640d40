//! Configuration for a grading run.
//!
//! The `Options` struct names the checks file and the HTML source. The
//! `grader` binary builds it from command-line flags.

use std::path::PathBuf;

use crate::checks::CHECKSFILE_DEFAULT;
use crate::source::Source;

/// Configuration options for a grading run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the conventional file names.
///
/// # Example
///
/// ```rust
/// use html_grader::{Options, Source};
///
/// // checks.json against index.html
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     source: Source::from_args("page.html", None)?,
///     ..Options::default()
/// };
/// # Ok::<(), html_grader::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Path to the JSON checks list.
    ///
    /// Default: `checks.json`
    pub checks: PathBuf,

    /// Where the HTML comes from.
    ///
    /// Default: `Source::File("index.html")`
    pub source: Source,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            checks: PathBuf::from(CHECKSFILE_DEFAULT),
            source: Source::default(),
        }
    }
}
