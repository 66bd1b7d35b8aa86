//! Sale-info extractor: labelled prices, listing status and the list price.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::ScraperError;
use crate::layout::{self, ListingStatus, PricingLabel};
use crate::parse_helpers::{element_text, selector};
use crate::types::SaleInfo;

static VALUE_REGION: LazyLock<Selector> = LazyLock::new(|| selector(layout::VALUE_REGION));
static SUMMARY_ROW: LazyLock<Selector> = LazyLock::new(|| selector(layout::SUMMARY_ROW));

static PRICING_RE: LazyLock<Regex> = LazyLock::new(|| {
    let labels = PricingLabel::ALL
        .iter()
        .map(|label| regex::escape(label.label()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"({labels})(?:®)?:?[\n ]+-?\$?([\d,/\w]+)"))
        .expect("valid pricing regex")
});

static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    let labels = ListingStatus::ALL
        .iter()
        .map(|status| regex::escape(status.label()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("({labels})")).expect("valid status regex")
});

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d[\d,]*)").expect("valid price regex"));

/// What a single summary row contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleRow {
    Pricing(PricingLabel, String),
    Status(ListingStatus),
    Price(String),
}

/// Classifies one summary row, in priority order: labelled pricing, then
/// status keyword, then any number as the list price. `None` when the row
/// carries none of these.
pub fn classify_row(text: &str) -> Option<SaleRow> {
    if let Some(caps) = PRICING_RE.captures(text) {
        if let Some(label) = PricingLabel::from_label(&caps[1]) {
            return Some(SaleRow::Pricing(label, caps[2].to_owned()));
        }
    }
    if let Some(status) = STATUS_RE
        .captures(text)
        .and_then(|caps| ListingStatus::from_label(&caps[1]))
    {
        return Some(SaleRow::Status(status));
    }
    PRICE_RE
        .captures(text)
        .map(|caps| SaleRow::Price(caps[1].to_owned()))
}

impl SaleInfo {
    pub fn apply(&mut self, row: SaleRow) {
        match row {
            SaleRow::Pricing(label, value) => self.set_pricing(label, value),
            SaleRow::Status(status) => self.status = Some(status),
            SaleRow::Price(price) => self.price = Some(price),
        }
    }
}

/// Folds row texts into a [`SaleInfo`]. Later rows of the same kind win.
pub fn parse_sale_rows<I, S>(rows: I) -> SaleInfo
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sale_info = SaleInfo::default();
    for row in rows {
        if let Some(classified) = classify_row(row.as_ref()) {
            sale_info.apply(classified);
        }
    }
    sale_info
}

/// Extracts sale info from the summary rows of the value region.
///
/// # Errors
///
/// Returns [`ScraperError::Extraction`] if the value region is missing.
pub(crate) fn extract_sale_info(document: &Html) -> Result<SaleInfo, ScraperError> {
    let region = document
        .select(&VALUE_REGION)
        .next()
        .ok_or(ScraperError::Extraction {
            section: "home value region",
        })?;
    Ok(parse_sale_rows(region.select(&SUMMARY_ROW).map(element_text)))
}
