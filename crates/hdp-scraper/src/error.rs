use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("listing not found: {url} redirected to {landing}")]
    NotFound { url: String, landing: String },

    /// Non-2xx response. `body` carries whatever the server sent back.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error(
        "unable to find the {section} on the page; the page layout has probably \
         changed and the extractor needs updating"
    )]
    Extraction { section: &'static str },
}
