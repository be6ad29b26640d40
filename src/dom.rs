//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate: parsing HTML text into a
//! [`Document`] and evaluating CSS selectors against it.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

/// Parse HTML text into a document.
///
/// Never fails. Malformed markup is recovered by the html5ever tree builder
/// the same way a browser would, so unclosed or misnested tags still produce
/// a usable tree.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Compile a CSS selector.
///
/// Returns `None` for empty or syntactically invalid selectors.
#[must_use]
pub fn compile(selector: &str) -> Option<Matcher> {
    if selector.trim().is_empty() {
        return None;
    }
    Matcher::new(selector).ok()
}

/// Select every element in the document matching a compiled selector.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(doc: &'a Document, matcher: &Matcher) -> Selection<'a> {
    doc.select_matcher(matcher)
}

/// Count the elements in the document matching `selector`.
///
/// An invalid selector matches nothing and counts as zero.
#[must_use]
pub fn count_matches(doc: &Document, selector: &str) -> usize {
    compile(selector).map_or(0, |matcher| query_selector_all(doc, &matcher).length())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        assert_eq!(count_matches(&doc, "div#main"), 1);
        assert_eq!(count_matches(&doc, "div.container"), 1);
        assert_eq!(count_matches(&doc, "span"), 0);
    }

    #[test]
    fn test_count_multiple_matches() {
        let doc = parse(r#"<ul><li class="item">1</li><li class="item">2</li><li>3</li></ul>"#);
        assert_eq!(count_matches(&doc, "li"), 3);
        assert_eq!(count_matches(&doc, "li.item"), 2);
        assert_eq!(count_matches(&doc, "ul > li"), 3);
    }

    #[test]
    fn test_attribute_selectors() {
        let doc = parse(
            r#"<head><meta charset="utf-8"><link rel="stylesheet" href="style.css"></head>"#,
        );
        assert_eq!(count_matches(&doc, "meta[charset]"), 1);
        assert_eq!(count_matches(&doc, r#"link[rel="stylesheet"]"#), 1);
        assert_eq!(count_matches(&doc, r#"link[rel="icon"]"#), 0);
    }

    #[test]
    fn test_invalid_selector_counts_zero() {
        let doc = parse("<div></div>");
        assert!(compile("div[").is_none());
        assert_eq!(count_matches(&doc, "div["), 0);
        assert_eq!(count_matches(&doc, ">>>"), 0);
    }

    #[test]
    fn test_empty_selector_counts_zero() {
        let doc = parse("<div></div>");
        assert!(compile("").is_none());
        assert!(compile("   ").is_none());
        assert_eq!(count_matches(&doc, ""), 0);
    }

    #[test]
    fn test_malformed_html_still_queryable() {
        let doc = parse("<p>text<div>more");
        assert_eq!(count_matches(&doc, "p"), 1);
        assert_eq!(count_matches(&doc, "div"), 1);
    }

    #[test]
    fn test_implied_document_structure() {
        // The tree builder always supplies html, head and body.
        let doc = parse("<p>fragment</p>");
        assert_eq!(count_matches(&doc, "html"), 1);
        assert_eq!(count_matches(&doc, "head"), 1);
        assert_eq!(count_matches(&doc, "body"), 1);
    }
}
