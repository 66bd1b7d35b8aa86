//! Record aggregator: one scrape, one [`ListingRecord`].

use hdp_core::AppConfig;
use scraper::Html;

use crate::client::{HttpPageFetcher, PageFetcher};
use crate::description::extract_description;
use crate::error::ScraperError;
use crate::facts::extract_facts;
use crate::history::{resolve_price_history, resolve_tax_history};
use crate::input::resolve_input;
use crate::layout;
use crate::parse_helpers::{inline_script_text, selector};
use crate::sale_info::extract_sale_info;
use crate::summary::extract_summary;
use crate::types::{Facts, ListingRecord, PropertySummary, SaleInfo};

/// Sections read from the main page, before any fragment is fetched.
struct PageSections {
    summary: PropertySummary,
    facts: Facts,
    sale_info: SaleInfo,
    description: String,
    script_text: String,
}

/// Parses the main page. The DOM is dropped before returning so no parsed
/// document is held across the fragment fetches.
fn extract_page(body: &str) -> Result<PageSections, ScraperError> {
    let document = Html::parse_document(body);
    let summary = extract_summary(&document)?;
    let facts = extract_facts(&document);
    let sale_info = extract_sale_info(&document)?;
    let description = extract_description(&document)?;
    let script_text = inline_script_text(&document, &selector(layout::INLINE_SCRIPT));
    Ok(PageSections {
        summary,
        facts,
        sale_info,
        description,
        script_text,
    })
}

/// Scrapes home-details pages through a [`PageFetcher`].
pub struct ListingScraper<F> {
    fetcher: F,
    base_url: String,
}

impl ListingScraper<HttpPageFetcher> {
    /// Builds a scraper with the reqwest fetcher described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the HTTP fetcher cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpPageFetcher::new(
            &config.base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(fetcher, config.base_url.clone()))
    }
}

impl<F: PageFetcher + Sync> ListingScraper<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Scrapes one listing identified by exactly one of `url` or `zpid`.
    ///
    /// Fetches the detail page, extracts summary, facts, sale info and
    /// description, then fetches both history fragments concurrently.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidInput`] before any request if the input is invalid.
    /// - [`ScraperError::NotFound`], [`ScraperError::UnexpectedStatus`],
    ///   [`ScraperError::Http`] from any fetch.
    /// - [`ScraperError::Extraction`] when a load-bearing section is missing.
    ///
    /// No partial record is returned on failure.
    pub async fn scrape(
        &self,
        url: Option<&str>,
        zpid: Option<&str>,
    ) -> Result<ListingRecord, ScraperError> {
        let detail_url = resolve_input(url, zpid, &self.base_url)?;
        tracing::info!(url = %detail_url, "scraping listing");

        let body = self.fetcher.fetch(&detail_url).await?;
        let page = extract_page(&body)?;

        let (price_history, tax_history) = tokio::try_join!(
            resolve_price_history(&self.fetcher, &self.base_url, &page.script_text),
            resolve_tax_history(&self.fetcher, &self.base_url, &page.script_text),
        )?;

        tracing::info!(
            url = %detail_url,
            price_events = price_history.len(),
            tax_years = tax_history.len(),
            "listing scraped"
        );

        Ok(ListingRecord {
            summary: page.summary,
            sale_info: page.sale_info,
            facts: page.facts,
            description: page.description,
            price_history,
            tax_history,
        })
    }
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
