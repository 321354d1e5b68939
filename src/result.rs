//! Result types for extraction output.
//!
//! An extraction either produces a [`PageSummary`] or a failure message.
//! Summaries are built once by the extractor and are read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Title used when the document has no `<title>` or it is empty.
pub const NO_TITLE: &str = "No title found";

/// Link text used when an anchor has no visible text.
pub const NO_LINK_TEXT: &str = "(no text)";

/// An outbound link found in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Trimmed anchor text, or [`NO_LINK_TEXT`].
    pub text: String,

    /// `href` resolved against the final URL.
    pub url: String,
}

/// Structured summary of a single fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub(crate) url: String,
    pub(crate) final_url: String,
    pub(crate) http_status: Option<u16>,
    pub(crate) title: String,
    pub(crate) headings: Vec<String>,
    pub(crate) paragraphs: Vec<String>,
    pub(crate) links: Vec<Link>,
    pub(crate) images: Vec<String>,
}

impl PageSummary {
    /// URL as requested by the caller.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// URL of the document actually served, after redirects.
    #[must_use]
    pub fn final_url(&self) -> &str {
        &self.final_url
    }

    /// HTTP status of the final response. `None` when the summary was built
    /// from in-memory HTML.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// Document title, or [`NO_TITLE`].
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text of every `h1`, `h2` and `h3`, in document order.
    #[must_use]
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// Leading paragraph texts.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Leading links.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Leading absolute image URLs.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub(crate) fn with_response(mut self, url: &str, http_status: u16) -> Self {
        self.url = url.to_string();
        self.http_status = Some(http_status);
        self
    }
}

/// Outcome of [`extract`](crate::extract).
///
/// Serializes as an internally tagged object:
/// `{"status": "success", "final_url": ...}` or
/// `{"status": "failure", "url": ..., "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExtractionResult {
    /// The page was fetched and summarized.
    Success(PageSummary),

    /// The page could not be fetched.
    Failure {
        /// URL as requested by the caller.
        url: String,
        /// Human-readable description, `"Failed to fetch page: <cause>"`.
        error: String,
    },
}

impl ExtractionResult {
    pub(crate) fn failure(url: &str, err: &Error) -> Self {
        Self::Failure {
            url: url.to_string(),
            error: err.to_string(),
        }
    }

    /// Returns `true` for [`ExtractionResult::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The summary, if the extraction succeeded.
    #[must_use]
    pub fn summary(&self) -> Option<&PageSummary> {
        match self {
            Self::Success(summary) => Some(summary),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if the extraction failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error, .. } => Some(error),
        }
    }
}
