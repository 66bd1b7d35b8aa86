//! Input validation: turns a URL or a property identifier into the detail URL.

use crate::error::ScraperError;
use crate::layout::{detail_path, DETAIL_PATH_MARKER};

/// Resolves the detail-page URL to fetch.
///
/// Exactly one of `url` and `zpid` must be given; empty strings count as
/// absent. A URL is returned unchanged if it points at a home-details page.
/// An identifier is templated onto `base_url`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidInput`] when both or neither inputs are
/// given, or when the URL is not a home-details URL.
pub fn resolve_input(
    url: Option<&str>,
    zpid: Option<&str>,
    base_url: &str,
) -> Result<String, ScraperError> {
    let url = url.filter(|u| !u.trim().is_empty());
    let zpid = zpid.map(str::trim).filter(|z| !z.is_empty());

    match (url, zpid) {
        (Some(_), Some(_)) => Err(ScraperError::InvalidInput {
            reason: "specify either a url or a zpid, not both".to_owned(),
        }),
        (None, None) => Err(ScraperError::InvalidInput {
            reason: "a zpid or a home details url is required".to_owned(),
        }),
        (Some(url), None) if !url.contains(DETAIL_PATH_MARKER) => {
            Err(ScraperError::InvalidInput {
                reason: format!(
                    "only home details pages are supported; expected a url like \
                     {}{}, got {url}",
                    base_url.trim_end_matches('/'),
                    detail_path("<zpid>")
                ),
            })
        }
        (Some(url), None) => Ok(url.to_owned()),
        (None, Some(zpid)) => Ok(format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            detail_path(zpid)
        )),
    }
}
