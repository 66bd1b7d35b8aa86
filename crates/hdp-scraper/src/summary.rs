//! Header-block parser: bedrooms, bathrooms, square footage and address.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::ScraperError;
use crate::layout;
use crate::parse_helpers::{first_text, selector};
use crate::types::PropertySummary;

static SUMMARY_HEADER: LazyLock<Selector> = LazyLock::new(|| selector(layout::SUMMARY_HEADER));

static BEDROOMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+) beds?").expect("valid bedrooms regex"));
static BATHROOMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+) baths?").expect("valid bathrooms regex"));
static SQFT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,.]+) sqft").expect("valid sqft regex"));
// The three address patterns run independently over the same text.
static CITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?:[A-Z]\w+ ?)+), [A-Z]{2}").expect("valid city regex"));
static STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[A-Z]\w+ ?)+, ([A-Z]{2})").expect("valid state regex"));
static ZIPCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2} (\d{5}-?(?:\d{4})?)").expect("valid zipcode regex"));

/// Extracts the property summary from the page header.
///
/// # Errors
///
/// Returns [`ScraperError::Extraction`] if the header block is missing.
pub(crate) fn extract_summary(document: &Html) -> Result<PropertySummary, ScraperError> {
    let text = first_text(document, &SUMMARY_HEADER).ok_or(ScraperError::Extraction {
        section: "property summary header",
    })?;
    Ok(parse_summary_text(&text))
}

/// Applies the summary patterns to the header text. Unmatched fields are
/// `None`.
pub fn parse_summary_text(text: &str) -> PropertySummary {
    PropertySummary {
        bedrooms: first_capture(&BEDROOMS_RE, text),
        bathrooms: first_capture(&BATHROOMS_RE, text),
        sqft: first_capture(&SQFT_RE, text),
        city: first_capture(&CITY_RE, text).map(|city| city.trim_end().to_owned()),
        state: first_capture(&STATE_RE, text),
        zipcode: first_capture(&ZIPCODE_RE, text),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}
