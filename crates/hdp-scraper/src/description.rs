//! Free-text listing description.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::ScraperError;
use crate::layout;
use crate::parse_helpers::{first_text, selector};

static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector(layout::DESCRIPTION));

/// Returns the listing description text verbatim.
///
/// # Errors
///
/// Returns [`ScraperError::Extraction`] if the description container is missing.
pub(crate) fn extract_description(document: &Html) -> Result<String, ScraperError> {
    first_text(document, &DESCRIPTION).ok_or(ScraperError::Extraction {
        section: "description",
    })
}
