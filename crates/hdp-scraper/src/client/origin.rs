//! URL resolution against the configured site base.

use crate::error::ScraperError;
use crate::layout::LANDING_PATH;

fn parse_base(base_url: &str) -> Result<reqwest::Url, ScraperError> {
    reqwest::Url::parse(base_url).map_err(|e| ScraperError::InvalidUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Resolves a root-relative path (such as an AJAX fragment path) against the
/// site base.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the base does not parse or the
/// path cannot be joined onto it.
pub fn resolve_against_base(base_url: &str, relative: &str) -> Result<String, ScraperError> {
    let base = parse_base(base_url)?;
    base.join(relative)
        .map(|url| url.to_string())
        .map_err(|e| ScraperError::InvalidUrl {
            url: relative.to_owned(),
            reason: e.to_string(),
        })
}

/// Absolute URL of the site's generic landing page.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the base does not parse.
pub fn landing_url(base_url: &str) -> Result<String, ScraperError> {
    resolve_against_base(base_url, LANDING_PATH)
}
