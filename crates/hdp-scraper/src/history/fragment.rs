//! Fragment decoding and history-table row extraction.
//!
//! Everything here is pure: the same fragment text always yields the same
//! rows in the same order. Cell text is kept as rendered, whitespace
//! included.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::parse_helpers::{element_text, first_child_text, selector};
use crate::types::{PriceHistoryEntry, TaxHistoryEntry};

static WRAPPER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\{\s*"html"\s*:\s*"(.*)"\s*\}"#).expect("valid wrapper regex")
});

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static TBODY: LazyLock<Selector> = LazyLock::new(|| selector("tbody"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FragmentError {
    #[error("fragment body is not an {{\"html\": ...}} wrapper")]
    MissingWrapper,
    /// The listing has no history of this kind.
    #[error("fragment has no table")]
    NoTable,
    #[error("history row {index} is missing cells")]
    MalformedRow { index: usize },
}

/// Pulls the markup out of a `{ "html": "..." }` wrapper and undoes the
/// escaped quotes and slashes.
///
/// # Errors
///
/// Returns [`FragmentError::MissingWrapper`] if the body is not a wrapper.
pub fn unwrap_fragment(body: &str) -> Result<String, FragmentError> {
    let caps = WRAPPER_RE
        .captures(body)
        .ok_or(FragmentError::MissingWrapper)?;
    Ok(caps[1].replace("\\\"", "\"").replace("\\/", "/"))
}

fn with_table_rows<T>(
    fragment_html: &str,
    mut parse_row: impl FnMut(usize, &[ElementRef<'_>]) -> Result<T, FragmentError>,
) -> Result<Vec<T>, FragmentError> {
    let document = Html::parse_fragment(fragment_html);
    let table = document
        .select(&TABLE)
        .next()
        .ok_or(FragmentError::NoTable)?;
    // html5ever inserts an implicit tbody, so a missing one means no rows.
    let Some(body) = table.select(&TBODY).next() else {
        return Ok(Vec::new());
    };

    body.select(&ROW)
        .enumerate()
        .map(|(index, row)| {
            let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
            parse_row(index, &cells)
        })
        .collect()
}

/// Parses price-history rows: date, event, and the price from the nested
/// span of the third cell.
///
/// # Errors
///
/// [`FragmentError::NoTable`] when the fragment holds no table,
/// [`FragmentError::MalformedRow`] when a row lacks a cell or the price span.
pub fn parse_price_history(fragment_html: &str) -> Result<Vec<PriceHistoryEntry>, FragmentError> {
    with_table_rows(fragment_html, |index, cells| {
        let [date, event, price_cell, ..] = cells else {
            return Err(FragmentError::MalformedRow { index });
        };
        let price = price_cell
            .select(&SPAN)
            .next()
            .ok_or(FragmentError::MalformedRow { index })?;
        Ok(PriceHistoryEntry {
            date: element_text(*date),
            event: element_text(*event),
            price: element_text(price),
        })
    })
}

/// Parses tax-history rows: date, the leading text of the tax cell, and the
/// assessment from the fourth cell.
///
/// # Errors
///
/// [`FragmentError::NoTable`] when the fragment holds no table,
/// [`FragmentError::MalformedRow`] when a row is short or its tax cell empty.
pub fn parse_tax_history(fragment_html: &str) -> Result<Vec<TaxHistoryEntry>, FragmentError> {
    with_table_rows(fragment_html, |index, cells| {
        let [date, tax_cell, _, assessment, ..] = cells else {
            return Err(FragmentError::MalformedRow { index });
        };
        let tax = first_child_text(*tax_cell).ok_or(FragmentError::MalformedRow { index })?;
        Ok(TaxHistoryEntry {
            date: element_text(*date),
            tax,
            assessment: element_text(*assessment),
        })
    })
}

#[cfg(test)]
#[path = "fragment_test.rs"]
mod tests;
