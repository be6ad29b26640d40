//! Checks list loading.
//!
//! A checks file is a JSON array of selector strings, for example
//! `["h1", "div#main", "link[rel=\"stylesheet\"]"]`.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Default checks file, relative to the working directory.
pub const CHECKSFILE_DEFAULT: &str = "checks.json";

/// Fail with [`Error::FileMissing`] unless `path` exists.
pub fn assert_file_exists(path: &Path) -> Result<&Path> {
    if path.exists() {
        Ok(path)
    } else {
        Err(Error::FileMissing {
            path: path.to_path_buf(),
        })
    }
}

/// Parse a checks list from JSON text.
///
/// # Example
///
/// ```rust
/// use html_grader::checks::parse_checks;
///
/// let checks = parse_checks(r#"["h1", "div#x"]"#)?;
/// assert_eq!(checks, vec!["h1".to_string(), "div#x".to_string()]);
/// # Ok::<(), html_grader::Error>(())
/// ```
pub fn parse_checks(json: &str) -> Result<Vec<String>> {
    serde_json::from_str(json).map_err(Error::MalformedChecks)
}

/// Read and parse the checks file at `path`.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    let json = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
    let checks = parse_checks(&json)?;
    tracing::debug!(path = %path.display(), count = checks.len(), "loaded checks");
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_array_of_strings() {
        let checks = parse_checks(r#"["span", "div#x", "h1"]"#).expect("valid checks");
        assert_eq!(checks, vec!["span", "div#x", "h1"]);
    }

    #[test]
    fn parse_keeps_file_order() {
        // Sorting happens in the checker, not here.
        let checks = parse_checks(r#"["z", "a"]"#).expect("valid checks");
        assert_eq!(checks, vec!["z", "a"]);
    }

    #[test]
    fn parse_empty_array() {
        let checks = parse_checks("[]").expect("valid checks");
        assert!(checks.is_empty());
    }

    #[test]
    fn parse_rejects_object() {
        let err = parse_checks(r#"{"h1": true}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedChecks(_)));
    }

    #[test]
    fn parse_rejects_non_string_entries() {
        let err = parse_checks(r#"["h1", 3]"#).unwrap_err();
        assert!(matches!(err, Error::MalformedChecks(_)));
    }

    #[test]
    fn parse_rejects_truncated_json() {
        let err = parse_checks(r#"["h1", "#).unwrap_err();
        assert!(matches!(err, Error::MalformedChecks(_)));
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"["title", "body"]"#).expect("write checks");

        let checks = load_checks(file.path()).expect("load checks");
        assert_eq!(checks, vec!["title", "body"]);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("checks.json");
        let err = load_checks(&path).unwrap_err();
        assert!(matches!(err, Error::FileMissing { .. }));
    }

    #[test]
    fn assert_file_exists_accepts_existing_and_rejects_missing() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        assert!(assert_file_exists(file.path()).is_ok());

        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.json");
        match assert_file_exists(&missing) {
            Err(Error::FileMissing { path }) => assert_eq!(path, missing),
            other => panic!("expected FileMissing, got {other:?}"),
        }
    }
}
