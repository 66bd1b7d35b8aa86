//! History resolver: finds, fetches and parses the price and tax history
//! fragments referenced from the page's inline scripts.
//!
//! Price history is load-bearing; every failure is fatal. Tax history is
//! optional: a missing fragment URL or a fragment without a table yields an
//! empty history.

mod fragment;
mod locate;

pub use fragment::{
    parse_price_history, parse_tax_history, unwrap_fragment, FragmentError,
};
pub use locate::locate_fragment_url;

use crate::client::{resolve_against_base, PageFetcher};
use crate::error::ScraperError;
use crate::layout::{PRICE_HISTORY_MODULE, TAX_HISTORY_MODULE};
use crate::types::{PriceHistoryEntry, TaxHistoryEntry};

async fn fetch_fragment<F: PageFetcher>(
    fetcher: &F,
    base_url: &str,
    relative_url: &str,
) -> Result<String, ScraperError> {
    let url = resolve_against_base(base_url, relative_url)?;
    tracing::debug!(url, "fetching history fragment");
    fetcher.fetch(&url).await
}

/// Resolves the price history.
///
/// # Errors
///
/// [`ScraperError::Extraction`] if the fragment URL, wrapper, table or a row
/// cell is missing; any fetch error is propagated.
pub(crate) async fn resolve_price_history<F: PageFetcher>(
    fetcher: &F,
    base_url: &str,
    script_text: &str,
) -> Result<Vec<PriceHistoryEntry>, ScraperError> {
    const SECTION: &str = "price history";

    let relative = locate_fragment_url(script_text, PRICE_HISTORY_MODULE)
        .ok_or(ScraperError::Extraction { section: SECTION })?;
    let body = fetch_fragment(fetcher, base_url, &relative).await?;
    let html = unwrap_fragment(&body).map_err(|_| ScraperError::Extraction { section: SECTION })?;

    parse_price_history(&html).map_err(|error| {
        tracing::debug!(%error, "price history fragment rejected");
        ScraperError::Extraction { section: SECTION }
    })
}

/// Resolves the tax history, degrading to an empty list when the listing
/// has none.
///
/// # Errors
///
/// [`ScraperError::Extraction`] if the fragment is not a wrapper or a row is
/// malformed; any fetch error is propagated.
pub(crate) async fn resolve_tax_history<F: PageFetcher>(
    fetcher: &F,
    base_url: &str,
    script_text: &str,
) -> Result<Vec<TaxHistoryEntry>, ScraperError> {
    const SECTION: &str = "tax history";

    let Some(relative) = locate_fragment_url(script_text, TAX_HISTORY_MODULE) else {
        tracing::warn!("no tax history fragment on page; treating as empty");
        return Ok(Vec::new());
    };
    let body = fetch_fragment(fetcher, base_url, &relative).await?;
    let html = unwrap_fragment(&body).map_err(|_| ScraperError::Extraction { section: SECTION })?;

    match parse_tax_history(&html) {
        Ok(rows) => Ok(rows),
        Err(FragmentError::NoTable) => {
            tracing::warn!("tax history fragment has no table; treating as empty");
            Ok(Vec::new())
        }
        Err(error) => {
            tracing::debug!(%error, "tax history fragment rejected");
            Err(ScraperError::Extraction { section: SECTION })
        }
    }
}
