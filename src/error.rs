//! Error types for rs-page-extract.
//!
//! Only the fetch step can fail an extraction. Everything after the body is
//! in hand degrades to empty lists or sentinel strings instead.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be issued or completed.
    ///
    /// Covers connection refusal, DNS failure, TLS errors, timeouts, URLs the
    /// transport rejects, and body read failures. The payload is the
    /// transport's own description of the cause.
    #[error("Failed to fetch page: {0}")]
    Fetch(String),

    /// Options failed validation before any request was made.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// Builds a [`Error::Fetch`] from a transport error, folding in its source chain.
    ///
    /// `reqwest` keeps the interesting part ("connection refused", "dns error")
    /// in the source, not in the top-level message.
    pub(crate) fn fetch(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut cause = err.to_string();
        let mut source = err.source();
        while let Some(inner) = source {
            let text = inner.to_string();
            if !cause.contains(&text) {
                cause.push_str(": ");
                cause.push_str(&text);
            }
            source = inner.source();
        }
        Self::Fetch(cause)
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
