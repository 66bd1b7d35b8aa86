//! Extraction engine for home-details listing pages.
//!
//! [`ListingScraper::scrape`] fetches one detail page, parses its summary
//! header, fact lists, value region and description, then resolves the price
//! and tax history fragments the page references from its inline scripts.

pub mod client;
mod description;
pub mod error;
pub mod facts;
pub mod history;
pub mod input;
pub mod layout;
mod parse_helpers;
pub mod sale_info;
mod scrape;
pub mod summary;
pub mod types;

pub use client::{HttpPageFetcher, PageFetcher};
pub use error::ScraperError;
pub use facts::{classify_fact, classify_facts, FactKind};
pub use history::locate_fragment_url;
pub use input::resolve_input;
pub use layout::{ListingStatus, PricingLabel};
pub use sale_info::{classify_row, parse_sale_rows, SaleRow};
pub use scrape::ListingScraper;
pub use summary::parse_summary_text;
pub use types::{
    Facts, ListingRecord, PriceHistoryEntry, PropertySummary, SaleInfo, TaxHistoryEntry,
};
