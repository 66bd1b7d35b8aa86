//! Page fetching: the [`PageFetcher`] seam and its reqwest implementation.

mod origin;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

pub use origin::{landing_url, resolve_against_base};

/// Fetches one page body.
///
/// Implementations must map a non-2xx status to
/// [`ScraperError::UnexpectedStatus`], a redirect onto the site landing page
/// to [`ScraperError::NotFound`], and connection or timeout failures to
/// [`ScraperError::Http`].
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// reqwest-backed [`PageFetcher`].
///
/// No retries: every failure is returned to the caller as-is.
pub struct HttpPageFetcher {
    pub(super) client: Client,
    /// Absolute URL of the landing page that signals a missing listing.
    pub(super) landing_url: String,
}

impl HttpPageFetcher {
    /// Creates a fetcher for the site at `base_url`.
    ///
    /// `timeout_secs` bounds each request; `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let landing_url = landing_url(base_url)?;
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            landing_url,
        })
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
                body,
            });
        }

        // Delisted or unknown listings redirect to the generic landing page
        // with a 200.
        if response.url().as_str() == self.landing_url {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
                landing: self.landing_url.clone(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
