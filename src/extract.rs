//! Core page extraction.
//!
//! Turns a parsed document into a [`PageSummary`]. Every step here is total:
//! a missing element yields an empty list or a sentinel, never an error.

use tracing::debug;
use url::Url;

use crate::dom::{self, Document};
use crate::options::Options;
use crate::result::{Link, PageSummary, NO_LINK_TEXT, NO_TITLE};
use crate::url_utils::{parse_base_url, resolve_url};

const HEADING_SELECTOR: &str = "h1, h2, h3";
const PARAGRAPH_SELECTOR: &str = "p";
const LINK_SELECTOR: &str = "a[href]";
const IMAGE_SELECTOR: &str = "img[src]";

/// Build a summary of `html` with references resolved against `final_url`.
///
/// The request URL and HTTP status are left empty; the caller fills them in
/// when the document came over the network.
pub(crate) fn extract_summary(html: &str, final_url: &str, options: &Options) -> PageSummary {
    let doc = dom::parse(html);
    let base = parse_base_url(final_url);
    if base.is_none() {
        debug!(final_url, "base URL did not parse, references left unresolved");
    }

    PageSummary {
        url: final_url.to_string(),
        final_url: final_url.to_string(),
        http_status: None,
        title: extract_title(&doc),
        headings: extract_headings(&doc),
        paragraphs: extract_paragraphs(&doc, options.max_paragraphs),
        links: extract_links(&doc, base.as_ref(), options.max_links),
        images: extract_images(&doc, base.as_ref(), options.max_images),
    }
}

/// Text of the first `<title>`, or [`NO_TITLE`] if there is none or it is blank.
fn extract_title(doc: &Document) -> String {
    let title_elem = doc.select("title").first();
    if title_elem.is_empty() {
        return NO_TITLE.to_string();
    }

    let title = dom::trimmed_text(&title_elem);
    if title.is_empty() {
        NO_TITLE.to_string()
    } else {
        title
    }
}

fn extract_headings(doc: &Document) -> Vec<String> {
    dom::each(&doc.select(HEADING_SELECTOR))
        .map(|h| dom::trimmed_text(&h))
        .collect()
}

fn extract_paragraphs(doc: &Document, limit: usize) -> Vec<String> {
    dom::each(&doc.select(PARAGRAPH_SELECTOR))
        .take(limit)
        .map(|p| dom::trimmed_text(&p))
        .collect()
}

fn extract_links(doc: &Document, base: Option<&Url>, limit: usize) -> Vec<Link> {
    dom::each(&doc.select(LINK_SELECTOR))
        .filter_map(|a| {
            let href = dom::get_attribute(&a, "href")?;
            let text = dom::trimmed_text(&a);
            Some(Link {
                text: if text.is_empty() { NO_LINK_TEXT.to_string() } else { text },
                url: resolve_url(&href, base),
            })
        })
        .take(limit)
        .collect()
}

fn extract_images(doc: &Document, base: Option<&Url>, limit: usize) -> Vec<String> {
    dom::each(&doc.select(IMAGE_SELECTOR))
        .filter_map(|img| dom::get_attribute(&img, "src"))
        .take(limit)
        .map(|src| resolve_url(&src, base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/dir/page.html";

    fn summary(html: &str) -> PageSummary {
        extract_summary(html, BASE, &Options::default())
    }

    #[test]
    fn test_title_from_first_title_element() {
        let s = summary("<html><head><title>  First  </title><title>Second</title></head></html>");
        assert_eq!(s.title(), "First");
    }

    #[test]
    fn test_missing_title_uses_sentinel() {
        assert_eq!(summary("<html><body><h1>Hi</h1></body></html>").title(), NO_TITLE);
    }

    #[test]
    fn test_blank_title_uses_sentinel() {
        assert_eq!(summary("<title>   </title>").title(), NO_TITLE);
    }

    #[test]
    fn test_headings_in_document_order_untruncated() {
        let mut html = String::from("<h3>three</h3><h1>one</h1><h4>skipped</h4><h2> two </h2>");
        for i in 0..30 {
            html.push_str(&format!("<h2>extra {i}</h2>"));
        }
        let s = summary(&html);

        assert_eq!(s.headings().len(), 33);
        assert_eq!(&s.headings()[..3], ["three", "one", "two"]);
    }

    #[test]
    fn test_heading_text_includes_descendants() {
        let s = summary("<h1>Hello <span>nested <em>world</em></span></h1>");
        assert_eq!(s.headings(), ["Hello nested world"]);
    }

    #[test]
    fn test_paragraphs_capped() {
        let html: String = (0..25).map(|i| format!("<p>para {i}</p>")).collect();
        let s = summary(&html);

        assert_eq!(s.paragraphs().len(), 10);
        assert_eq!(s.paragraphs()[0], "para 0");
        assert_eq!(s.paragraphs()[9], "para 9");
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let s = summary("<p> </p><p>text</p>");
        assert_eq!(s.paragraphs(), ["", "text"]);
    }

    #[test]
    fn test_links_resolved_and_capped() {
        let html: String = (0..30).map(|i| format!(r#"<a href="/page/{i}">Page {i}</a>"#)).collect();
        let s = summary(&html);

        assert_eq!(s.links().len(), 20);
        assert_eq!(s.links()[0].url, "https://example.com/page/0");
        assert_eq!(s.links()[19].text, "Page 19");
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let s = summary(r#"<a name="top">Top</a><a href="b.html">B</a>"#);

        assert_eq!(s.links().len(), 1);
        assert_eq!(s.links()[0].url, "https://example.com/dir/b.html");
    }

    #[test]
    fn test_anchors_without_href_do_not_consume_cap() {
        let mut html: String = (0..25).map(|i| format!("<a>anchor {i}</a>")).collect();
        html.push_str(r#"<a href="/real">Real</a>"#);
        let s = summary(&html);

        assert_eq!(s.links().len(), 1);
        assert_eq!(s.links()[0].text, "Real");
    }

    #[test]
    fn test_empty_anchor_text_uses_sentinel() {
        let s = summary(r#"<a href="/a">   </a><a href="/b"><img src="b.png"></a>"#);
        assert_eq!(s.links()[0].text, NO_LINK_TEXT);
        assert_eq!(s.links()[1].text, NO_LINK_TEXT);
    }

    #[test]
    fn test_images_resolved_and_capped() {
        let mut html = String::from(r#"<img alt="no source">"#);
        for i in 0..15 {
            html.push_str(&format!(r#"<img src="img/{i}.png">"#));
        }
        let s = summary(&html);

        assert_eq!(s.images().len(), 10);
        assert_eq!(s.images()[0], "https://example.com/dir/img/0.png");
    }

    #[test]
    fn test_custom_limits() {
        let options = Options {
            max_paragraphs: 2,
            max_links: 1,
            max_images: 0,
            ..Options::default()
        };
        let html = r#"<p>a</p><p>b</p><p>c</p><a href="/1">1</a><a href="/2">2</a><img src="x.png">"#;
        let s = extract_summary(html, BASE, &options);

        assert_eq!(s.paragraphs(), ["a", "b"]);
        assert_eq!(s.links().len(), 1);
        assert!(s.images().is_empty());
    }

    #[test]
    fn test_unparseable_base_leaves_references() {
        let s = extract_summary(r#"<a href="/about">About</a><img src="logo.png">"#, "not a url", &Options::default());

        assert_eq!(s.links()[0].url, "/about");
        assert_eq!(s.images(), ["logo.png"]);
    }

    #[test]
    fn test_empty_document() {
        let s = summary("");

        assert_eq!(s.title(), NO_TITLE);
        assert!(s.headings().is_empty());
        assert!(s.paragraphs().is_empty());
        assert!(s.links().is_empty());
        assert!(s.images().is_empty());
        assert_eq!(s.final_url(), BASE);
        assert_eq!(s.http_status(), None);
    }
}
