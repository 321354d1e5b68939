//! URL utility functions.
//!
//! Link and image references are resolved against the final URL of the page
//! using WHATWG URL joining, the same rules a browser applies.

use url::Url;

/// Parse a base URL for resolution.
///
/// # Returns
/// * `Some(Url)` if the string is an absolute URL, `None` otherwise
#[must_use]
pub fn parse_base_url(s: &str) -> Option<Url> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Url::parse(s).ok()
}

/// Resolve a possibly relative reference against a base URL.
///
/// Handles relative paths (`../a`), root-relative (`/a`), protocol-relative
/// (`//host/a`), query-only (`?q`), fragment-only (`#top`) and absolute
/// references. Schemes such as `mailto:` or `javascript:` pass through as
/// absolute URLs in their own right.
///
/// # Arguments
/// * `reference` - The `href`/`src` value as written in the document
/// * `base` - The base URL, or `None` if the page URL itself did not parse
///
/// # Returns
/// * The absolute URL string, or the reference unchanged if it cannot be resolved
#[must_use]
pub fn resolve_url(reference: &str, base: Option<&Url>) -> String {
    let joined = match base {
        Some(base) => base.join(reference),
        None => Url::parse(reference),
    };

    match joined {
        Ok(resolved) => resolved.into(),
        Err(_) => reference.to_string(),
    }
}
