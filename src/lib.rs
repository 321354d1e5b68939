//! # rs-page-extract
//!
//! Fetches a single web page and extracts a bounded, structured summary of
//! it: the title, `h1`-`h3` heading text, the leading paragraphs, outbound
//! links and image URLs, with every reference resolved against the URL the
//! page was actually served from.
//!
//! This is a single-page extractor, not a crawler. It makes exactly one GET
//! per call and keeps no state between calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rs_page_extract::{extract, ExtractionResult};
//!
//! # async fn run() {
//! match extract("https://example.com").await {
//!     ExtractionResult::Success(page) => {
//!         println!("Title: {}", page.title());
//!         for link in page.links() {
//!             println!("{} -> {}", link.text, link.url);
//!         }
//!     }
//!     ExtractionResult::Failure { error, .. } => eprintln!("{error}"),
//! }
//! # }
//! ```
//!
//! Documents already in memory can be summarized without the network:
//!
//! ```rust
//! use rs_page_extract::extract_html;
//!
//! let html = r#"<html><head><title>Docs</title></head>
//! <body><h1>Intro</h1><p>Hello.</p><a href="/next">Next</a></body></html>"#;
//!
//! let page = extract_html(html, "https://example.com/docs/index.html");
//! assert_eq!(page.title(), "Docs");
//! assert_eq!(page.links()[0].url, "https://example.com/next");
//! ```
//!
//! ## Limits
//!
//! By default at most 10 paragraphs, 20 links and 10 images are kept, in
//! document order. Headings are never truncated. See [`Options`].

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and decoding of response bodies.
pub mod encoding;

/// HTTP retrieval of a single page.
pub mod fetch;

/// Plain-text rendering of extraction results.
pub mod report;

/// URL utilities for resolving relative references.
pub mod url_utils;

use tracing::{info, warn};

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use result::{ExtractionResult, Link, PageSummary, NO_LINK_TEXT, NO_TITLE};

/// Fetches `url` and extracts its summary using default options.
///
/// Never returns an error directly: a failed fetch is reported as
/// [`ExtractionResult::Failure`] carrying `"Failed to fetch page: <cause>"`.
pub async fn extract(url: &str) -> ExtractionResult {
    extract_with_options(url, &Options::default()).await
}

/// Fetches `url` and extracts its summary with custom options.
///
/// Options that fail [`Options::validate`] produce a failure without any
/// network traffic.
///
/// # Example
///
/// ```rust,no_run
/// use rs_page_extract::{extract_with_options, Options};
/// use std::time::Duration;
///
/// # async fn run() {
/// let options = Options {
///     timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// let result = extract_with_options("https://example.com", &options).await;
/// println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
/// # }
/// ```
pub async fn extract_with_options(url: &str, options: &Options) -> ExtractionResult {
    match fetch_and_extract(url, options).await {
        Ok(summary) => {
            info!(
                url,
                final_url = summary.final_url(),
                headings = summary.headings().len(),
                paragraphs = summary.paragraphs().len(),
                links = summary.links().len(),
                images = summary.images().len(),
                "page extracted"
            );
            ExtractionResult::Success(summary)
        }
        Err(err) => {
            warn!(url, error = %err, "extraction failed");
            ExtractionResult::failure(url, &err)
        }
    }
}

async fn fetch_and_extract(url: &str, options: &Options) -> Result<PageSummary> {
    let page = fetch::Fetcher::new(options)?.fetch(url).await?;
    let summary = extract::extract_summary(&page.html, &page.final_url, options);
    Ok(summary.with_response(url, page.status))
}

/// Extracts a summary from an HTML document already in memory, using
/// default options.
///
/// `base_url` plays the role of the final URL: it is reported as both
/// [`PageSummary::url`] and [`PageSummary::final_url`] and is the base for
/// link and image resolution. If it does not parse, references are kept
/// as written.
#[must_use]
pub fn extract_html(html: &str, base_url: &str) -> PageSummary {
    extract_html_with_options(html, base_url, &Options::default())
}

/// Extracts a summary from an HTML document already in memory with custom
/// options. Only the list limits in `options` apply.
#[must_use]
pub fn extract_html_with_options(html: &str, base_url: &str, options: &Options) -> PageSummary {
    extract::extract_summary(html, base_url, options)
}
