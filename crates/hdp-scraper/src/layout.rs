//! Markup constants for the home-details page family.
//!
//! Every selector, label and path the extractor depends on lives here, so a
//! change in the site's layout is fixed in one file.

use std::fmt;

use serde::Serialize;

/// Site root used when no base URL is configured.
pub use hdp_core::app_config::DEFAULT_BASE_URL as BASE_URL;

pub const DETAIL_PATH_MARKER: &str = "homedetails";

/// Generic landing page the site redirects to when a listing does not exist.
pub const LANDING_PATH: &str = "/homes/";

pub(crate) const SUMMARY_HEADER: &str = "header.zsg-content-header.addr";
pub(crate) const VALUE_REGION: &str = "div#home-value-wrapper";
pub(crate) const SUMMARY_ROW: &str = r#"[class*="home-summary-row"]"#;
pub(crate) const FACT_ITEM: &str = "ul.zsg-list_square li";
pub(crate) const DESCRIPTION: &str = "div.notranslate";
pub(crate) const INLINE_SCRIPT: &str = "script";

/// `jsModule` names attached to the two history fragments.
pub const PRICE_HISTORY_MODULE: &str = "z-hdp-price-history";
pub const TAX_HISTORY_MODULE: &str = "z-expando-table";

pub const HOME_TYPES: &[&str] = &[
    "Single Family",
    "Condo",
    "Townhouse",
    "Multi Family",
    "Apartment",
    "Mobile / Manufactured",
    "Coop Unit",
    "Vacant Land",
    "Lot/Land",
    "Miscellaneous",
];

/// Builds the detail-page path for a property identifier.
pub fn detail_path(zpid: &str) -> String {
    format!("/{DETAIL_PATH_MARKER}/{zpid}_zpid")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    Auction,
    #[serde(rename = "Make Me Move")]
    MakeMeMove,
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "Pre-Foreclosure")]
    PreForeclosure,
    #[serde(rename = "Off Market")]
    OffMarket,
}

impl ListingStatus {
    pub const ALL: [Self; 6] = [
        Self::ForSale,
        Self::Auction,
        Self::MakeMeMove,
        Self::ForRent,
        Self::PreForeclosure,
        Self::OffMarket,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::Auction => "Auction",
            Self::MakeMeMove => "Make Me Move",
            Self::ForRent => "For Rent",
            Self::PreForeclosure => "Pre-Foreclosure",
            Self::OffMarket => "Off Market",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labelled price rows in the value region.
///
/// [`PricingLabel::ALL`] is in match-priority order: longer labels that
/// contain a shorter one ("Rent Zestimate" vs "Zestimate", "Sold on" vs
/// "Sold") come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingLabel {
    ForeclosureEstimate,
    BelowZestimate,
    RentZestimate,
    Zestimate,
    SoldOn,
    Sold,
    PriceCut,
}

impl PricingLabel {
    pub const ALL: [Self; 7] = [
        Self::ForeclosureEstimate,
        Self::BelowZestimate,
        Self::RentZestimate,
        Self::Zestimate,
        Self::SoldOn,
        Self::Sold,
        Self::PriceCut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ForeclosureEstimate => "Foreclosure Estimate",
            Self::BelowZestimate => "Below Zestimate",
            Self::RentZestimate => "Rent Zestimate",
            Self::Zestimate => "Zestimate",
            Self::SoldOn => "Sold on",
            Self::Sold => "Sold",
            Self::PriceCut => "Price cut",
        }
    }

    /// Record key: the label lowercased with spaces as underscores.
    pub fn key(self) -> &'static str {
        match self {
            Self::ForeclosureEstimate => "foreclosure_estimate",
            Self::BelowZestimate => "below_zestimate",
            Self::RentZestimate => "rent_zestimate",
            Self::Zestimate => "zestimate",
            Self::SoldOn => "sold_on",
            Self::Sold => "sold",
            Self::PriceCut => "price_cut",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pricing| pricing.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_joins_onto_default_base() {
        assert_eq!(
            format!("{BASE_URL}{}", detail_path("2101920883")),
            "http://www.zillow.com/homedetails/2101920883_zpid"
        );
    }

    #[test]
    fn pricing_keys_match_normalized_labels() {
        for pricing in PricingLabel::ALL {
            assert_eq!(
                pricing.key(),
                pricing.label().replace(' ', "_").to_lowercase(),
                "key drifted from label for {pricing:?}"
            );
        }
    }

    #[test]
    fn status_round_trips_through_label() {
        for status in ListingStatus::ALL {
            assert_eq!(ListingStatus::from_label(status.label()), Some(status));
        }
        assert!(ListingStatus::from_label("Pending").is_none());
    }

    #[test]
    fn detail_path_templates_zpid() {
        assert_eq!(detail_path("2101920883"), "/homedetails/2101920883_zpid");
    }
}
