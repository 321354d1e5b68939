//! Character encoding detection and decoding of response bodies.
//!
//! Pages are served in whatever charset their server chooses. The body is
//! decoded to UTF-8 before parsing, taking the charset from (in order) a byte
//! order mark, the `Content-Type` response header, a `<meta>` declaration in
//! the document head, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `charset=...` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Match `<meta charset="...">` and the `charset=` inside `<meta http-equiv ... content="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// Only the start of the document is searched for a `<meta>` declaration.
const META_SNIFF_LEN: usize = 1024;

/// Look up the encoding named by a `Content-Type` header value.
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Look up the encoding declared by a `<meta>` tag near the top of the document.
#[must_use]
pub fn encoding_from_meta(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Pick the encoding for a response body.
///
/// A byte order mark always wins; `encoding_rs` applies it during decoding.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(encoding_from_content_type)
        .or_else(|| encoding_from_meta(body))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// Decoding is lossy: malformed sequences become U+FFFD rather than errors,
/// so any body yields some text to parse.
///
/// # Examples
///
/// ```
/// use rs_page_extract::encoding::decode_body;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_body(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_is_used() {
        let encoding = detect_encoding(b"<html></html>", Some("text/html; charset=windows-1252"));
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn header_charset_quoted_and_case_insensitive() {
        let encoding = encoding_from_content_type(r#"text/html; CHARSET="Shift_JIS""#);
        assert_eq!(encoding.map(Encoding::name), Some("Shift_JIS"));
    }

    #[test]
    fn header_without_charset_falls_back_to_meta() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        let encoding = detect_encoding(html, Some("text/html"));
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn header_overrides_meta() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        let encoding = detect_encoding(html, Some("text/html; charset=utf-8"));
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn meta_http_equiv_charset() {
        let html = br#"<META HTTP-EQUIV="content-type" CONTENT="text/html; CHARSET=ISO-8859-1">"#;
        assert_eq!(encoding_from_meta(html).map(Encoding::name), Some("windows-1252"));
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        let encoding = detect_encoding(b"<meta charset=\"x-made-up\">", Some("text/html; charset=bogus"));
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn decode_windows1252_smart_quotes() {
        let body = b"<html><body>\x93Hello\x94</body></html>";
        let result = decode_body(body, Some("text/html; charset=windows-1252"));
        assert!(result.contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn decode_strips_utf8_bom() {
        let body = b"\xEF\xBB\xBF<title>T</title>";
        assert_eq!(decode_body(body, None), "<title>T</title>");
    }

    #[test]
    fn decode_invalid_utf8_gracefully() {
        let body = b"<html><body>Test \xFF\xFE Invalid</body></html>";
        let result = decode_body(body, None);
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
        assert!(result.contains('\u{FFFD}'));
    }
}
