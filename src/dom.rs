//! DOM Operations Adapter
//!
//! Small helpers over the `dom_query` crate so the extractor reads in terms
//! of elements, text and attributes rather than selection plumbing.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML document.
///
/// Parsing follows the HTML5 tree construction rules, so it never fails:
/// unclosed tags, stray end tags and unknown elements are repaired the way
/// a browser would repair them.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get an attribute value, if the attribute is present.
///
/// An attribute written without a value (`<a href>`) is present and yields
/// an empty string.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content of node and descendants with surrounding whitespace trimmed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

/// Iterate over each matched element as its own single-node selection,
/// in document order.
pub fn each<'a>(sel: &Selection<'a>) -> impl Iterator<Item = Selection<'a>> + 'a {
    sel.nodes()
        .to_vec()
        .into_iter()
        .map(Selection::from)
}
