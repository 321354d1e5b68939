//! Configuration options for page extraction.
//!
//! The `Options` struct controls the HTTP request and the size limits applied
//! to the extracted lists.

use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

/// Desktop Chrome user agent. Some servers reject requests from bare
/// library user agents, so the default looks like a real browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_page_extract::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Duration::from_secs(10),
///     max_links: 50,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of paragraphs kept, in document order.
    ///
    /// Default: `10`
    pub max_paragraphs: usize,

    /// Maximum number of links kept, in document order.
    ///
    /// Default: `20`
    pub max_links: usize,

    /// Maximum number of image URLs kept, in document order.
    ///
    /// Default: `10`
    pub max_images: usize,

    /// `User-Agent` header sent with the request. Must not be empty.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Whole-request timeout. Expiry is reported as a fetch failure.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Maximum number of redirects followed before giving up.
    ///
    /// Default: `10`
    pub max_redirects: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_paragraphs: 10,
            max_links: 20,
            max_images: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
        }
    }
}

impl Options {
    /// Load request settings from `PAGE_EXTRACT_*` environment variables.
    ///
    /// Unset or unparseable variables fall back to the defaults. The list
    /// caps are not read from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            user_agent: env::var("PAGE_EXTRACT_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            timeout: env::var("PAGE_EXTRACT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map_or(defaults.timeout, Duration::from_secs),
            max_redirects: env::var("PAGE_EXTRACT_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_redirects),
            ..defaults
        }
    }

    /// Validate option values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] for an empty user agent or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(Error::InvalidOptions("user_agent must not be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidOptions("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}
