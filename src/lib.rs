//! # html-grader
//!
//! Checks an HTML document for the presence of CSS selectors.
//!
//! A run reads a checks list (a JSON array of selectors), loads the HTML from
//! a local file or a URL, and reports for each selector whether at least one
//! element matches.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_grader::check_html;
//!
//! let html = r#"<html><body><div id="x"></div></body></html>"#;
//! let checks = vec!["span".to_string(), "div#x".to_string()];
//!
//! let report = check_html(html, &checks);
//! assert_eq!(
//!     report.to_pretty_json()?,
//!     "{\n    \"div#x\": true,\n    \"span\": false\n}"
//! );
//! # Ok::<(), html_grader::Error>(())
//! ```

mod error;
mod options;

/// Selector presence checking and the report type.
pub mod checker;

/// Checks list loading.
pub mod checks;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Diagnostic logging setup.
pub mod logging;

/// HTML source loading from a file or URL.
pub mod source;

use std::path::Path;

// Public API - re-exports
pub use checker::{check_document, check_html, CheckReport};
pub use error::{Error, Result};
pub use options::Options;
pub use source::Source;

/// Checks a local HTML file against the checks file at `checks_path`.
///
/// # Example
///
/// ```rust,no_run
/// use html_grader::check_html_file;
/// use std::path::Path;
///
/// let report = check_html_file(Path::new("index.html"), Path::new("checks.json"))?;
/// println!("{}", report.to_pretty_json()?);
/// # Ok::<(), html_grader::Error>(())
/// ```
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<CheckReport> {
    let checks = checks::load_checks(checks_path)?;
    let html = source::load_file(html_path)?;
    Ok(check_html(&html, &checks))
}

/// Fetches `url` and checks the response body against the checks file at
/// `checks_path`.
pub async fn check_url(url: &str, checks_path: &Path) -> Result<CheckReport> {
    let url = source::parse_url(url)?;
    let checks = checks::load_checks(checks_path)?;
    let html = source::fetch_url(&reqwest::Client::new(), &url).await?;
    Ok(check_html(&html, &checks))
}

/// Runs the full pipeline described by `options`.
///
/// The checks file must exist, and so must the HTML file in file mode. Both
/// are verified before anything is read.
pub async fn run(options: &Options) -> Result<CheckReport> {
    checks::assert_file_exists(&options.checks)?;
    if let Source::File(path) = &options.source {
        checks::assert_file_exists(path)?;
    }

    let checks = checks::load_checks(&options.checks)?;
    tracing::info!(source = %options.source, checks = checks.len(), "grading");

    let html = options.source.load().await?;
    let report = check_html(&html, &checks);
    tracing::info!(
        passed = report.passed().len(),
        failed = report.failed().len(),
        "checks complete"
    );
    Ok(report)
}
