//! Selector presence checking.
//!
//! The checker is a pure function of a document and a checks list: each
//! selector maps to `true` when it matches at least one element.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dom::{self, Document};
use crate::error::{Error, Result};

/// Outcome of running a checks list against one document.
///
/// Keys are the selectors in sorted order, each present once. Serializes as a
/// flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    results: BTreeMap<String, bool>,
}

impl CheckReport {
    /// Presence flag for `selector`, or `None` if it was not checked.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    /// Number of distinct selectors checked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Selectors and their presence flags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Selectors that matched at least one element.
    #[must_use]
    pub fn passed(&self) -> Vec<&str> {
        self.iter().filter(|(_, ok)| *ok).map(|(s, _)| s).collect()
    }

    /// Selectors that matched nothing.
    #[must_use]
    pub fn failed(&self) -> Vec<&str> {
        self.iter().filter(|(_, ok)| !*ok).map(|(s, _)| s).collect()
    }

    /// Render as pretty JSON with 4-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(Error::Serialize)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Run every selector in `checks` against an already parsed document.
#[must_use]
pub fn check_document(doc: &Document, checks: &[String]) -> CheckReport {
    let mut sorted: Vec<&str> = checks.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut results = BTreeMap::new();
    for selector in sorted {
        let present = match dom::compile(selector) {
            Some(matcher) => !dom::query_selector_all(doc, &matcher).is_empty(),
            None => {
                tracing::warn!(selector, "invalid selector, reporting as absent");
                false
            }
        };
        tracing::trace!(selector, present, "checked");
        results.insert(selector.to_string(), present);
    }

    CheckReport { results }
}

/// Parse `html` and run every selector in `checks` against it.
///
/// # Example
///
/// ```rust
/// use html_grader::check_html;
///
/// let html = r#"<html><body><div id="x"></div></body></html>"#;
/// let checks = vec!["span".to_string(), "div#x".to_string()];
/// let report = check_html(html, &checks);
///
/// assert_eq!(report.get("div#x"), Some(true));
/// assert_eq!(report.get("span"), Some(false));
/// ```
#[must_use]
pub fn check_html(html: &str, checks: &[String]) -> CheckReport {
    let doc = dom::parse(html);
    check_document(&doc, checks)
}
