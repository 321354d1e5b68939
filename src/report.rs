//! Plain-text rendering of extraction results.
//!
//! The report has one section per field group: overview, headings,
//! paragraphs, links and images. Empty groups get a "No ... found." line
//! instead of an empty list. Links are written as Markdown `[text](url)`
//! so they stay clickable when pasted into a Markdown viewer.

use std::fmt;

use crate::result::{ExtractionResult, PageSummary};

/// Displays a [`PageSummary`] as a sectioned text report.
///
/// # Example
///
/// ```rust
/// use rs_page_extract::{extract_html, report::Report};
///
/// let page = extract_html("<title>Hi</title><h1>Welcome</h1>", "https://example.com/");
/// let text = Report(&page).to_string();
/// assert!(text.contains("Title: Hi"));
/// assert!(text.contains("- Welcome"));
/// assert!(text.contains("No links found."));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a PageSummary);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;

        writeln!(f, "== Overview ==")?;
        writeln!(f, "Title: {}", page.title())?;
        writeln!(f, "Final URL: {}", page.final_url())?;
        if let Some(status) = page.http_status() {
            writeln!(f, "HTTP status: {status}")?;
        }

        section(f, "Headings", "No headings found.", page.headings(), |f, h| {
            writeln!(f, "- {h}")
        })?;
        section(f, "Paragraphs", "No paragraphs found.", page.paragraphs(), |f, p| {
            writeln!(f, "- {p}")
        })?;
        section(f, "Links", "No links found.", page.links(), |f, link| {
            writeln!(f, "- [{}]({})", link.text, link.url)
        })?;
        section(f, "Images", "No images found.", page.images(), |f, src| {
            writeln!(f, "- {src}")
        })
    }
}

fn section<T>(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    empty: &str,
    items: &[T],
    mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "== {heading} ==")?;
    if items.is_empty() {
        return writeln!(f, "{empty}");
    }
    for it in items {
        item(f, it)?;
    }
    Ok(())
}

/// Render a result as text: the report on success, the error message on failure.
#[must_use]
pub fn render_text(result: &ExtractionResult) -> String {
    match result {
        ExtractionResult::Success(page) => Report(page).to_string(),
        ExtractionResult::Failure { error, .. } => format!("{error}\n"),
    }
}

/// Render a result as pretty-printed JSON, the raw structured dump.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn render_json(result: &ExtractionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
