//! HTTP retrieval of a single page.
//!
//! One GET per call, redirects followed, no retries. Whatever status the
//! server answers with, the body is returned for parsing.

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::debug;

use crate::encoding::decode_body;
use crate::error::{Error, Result};
use crate::options::Options;

/// A fetched and decoded response body.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL of the response after redirects.
    pub final_url: String,

    /// HTTP status code of the final response.
    pub status: u16,

    /// Body decoded to UTF-8.
    pub html: String,
}

/// HTTP client configured from [`Options`].
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher with the user agent, timeout and redirect limit from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if the options do not validate, or
    /// [`Error::Fetch`] if the TLS backend cannot be initialised.
    pub fn new(options: &Options) -> Result<Self> {
        options.validate()?;

        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .redirect(Policy::limited(options.max_redirects))
            .build()
            .map_err(|e| Error::fetch(&e))?;

        Ok(Self { client })
    }

    /// GET `url` and return the decoded body.
    ///
    /// The URL is handed to the transport as-is; a malformed or scheme-less
    /// URL surfaces as the transport's own error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the request cannot be sent, times out, or
    /// the body cannot be read. Non-2xx statuses are not errors.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(&e))?;

        let final_url = response.url().to_string();
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if final_url != url {
            debug!(url, final_url = %final_url, "request was redirected");
        }

        let body = response.bytes().await.map_err(|e| Error::fetch(&e))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(FetchedPage {
            final_url,
            status,
            html: decode_body(&body, content_type.as_deref()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fetcher_rejects_invalid_options() {
        let options = Options {
            timeout: Duration::ZERO,
            ..Options::default()
        };
        assert!(matches!(Fetcher::new(&options), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn fetcher_builds_with_defaults() {
        assert!(Fetcher::new(&Options::default()).is_ok());
    }

    #[tokio::test]
    async fn malformed_url_is_a_fetch_error() {
        let fetcher = Fetcher::new(&Options::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();

        assert!(matches!(err, Error::Fetch(_)));
        assert!(err.to_string().starts_with("Failed to fetch page: "));
    }
}
