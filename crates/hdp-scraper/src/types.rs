//! Record types produced by a single listing scrape.
//!
//! All values stay strings exactly as they appear on the page (thousands
//! separators, currency symbols, `/mo` suffixes). Nothing is coerced to a
//! number; callers decide how to interpret them.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::layout::{ListingStatus, PricingLabel};

/// Header-block facts. Each field is absent when its pattern did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertySummary {
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub sqft: Option<String>,
    pub city: Option<String>,
    /// Two-letter state code.
    pub state: Option<String>,
    /// Five digits, optionally followed by the `+4` extension.
    pub zipcode: Option<String>,
}

/// Pricing and status read from the value region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaleInfo {
    /// Primary listing price, digits and commas only.
    pub price: Option<String>,
    pub status: Option<ListingStatus>,
    pub zestimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_zestimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub below_zestimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreclosure_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_cut: Option<String>,
}

impl SaleInfo {
    fn slot_mut(&mut self, label: PricingLabel) -> &mut Option<String> {
        match label {
            PricingLabel::ForeclosureEstimate => &mut self.foreclosure_estimate,
            PricingLabel::BelowZestimate => &mut self.below_zestimate,
            PricingLabel::RentZestimate => &mut self.rent_zestimate,
            PricingLabel::Zestimate => &mut self.zestimate,
            PricingLabel::SoldOn => &mut self.sold_on,
            PricingLabel::Sold => &mut self.sold,
            PricingLabel::PriceCut => &mut self.price_cut,
        }
    }

    pub fn set_pricing(&mut self, label: PricingLabel, value: String) {
        *self.slot_mut(label) = Some(value);
    }

    pub fn pricing(&self, label: PricingLabel) -> Option<&str> {
        let slot = match label {
            PricingLabel::ForeclosureEstimate => &self.foreclosure_estimate,
            PricingLabel::BelowZestimate => &self.below_zestimate,
            PricingLabel::RentZestimate => &self.rent_zestimate,
            PricingLabel::Zestimate => &self.zestimate,
            PricingLabel::SoldOn => &self.sold_on,
            PricingLabel::Sold => &self.sold,
            PricingLabel::PriceCut => &self.price_cut,
        };
        slot.as_deref()
    }
}

/// Classified "at a glance" facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facts {
    pub home_type: Option<String>,
    pub year: Option<String>,
    pub days_on_zillow: Option<String>,
    /// Facts without `key: value` structure, in page order, duplicates kept.
    pub extras: Vec<String>,
    /// `key: value` facts keyed by the normalized name. Later facts with the
    /// same key overwrite earlier ones.
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceHistoryEntry {
    pub date: String,
    pub event: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxHistoryEntry {
    pub date: String,
    pub tax: String,
    pub assessment: String,
}

/// Everything extracted from one home-details page and its two history
/// fragments. Built fresh per scrape and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub summary: PropertySummary,
    pub sale_info: SaleInfo,
    pub facts: Facts,
    pub description: String,
    /// Most recent first, as rendered in the fragment table.
    pub price_history: Vec<PriceHistoryEntry>,
    /// Empty when the listing exposes no tax table.
    pub tax_history: Vec<TaxHistoryEntry>,
}

fn opt(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_owned()))
}

impl ListingRecord {
    /// Renders the record as one flat JSON object.
    ///
    /// Keys are merged in this order, later ones overwriting earlier ones:
    /// summary, facts, sale info, description, histories. A fact named like a
    /// summary key replaces the summary value, and a fact named like a
    /// sale-info key (say a fact literally labelled "Price") is replaced by
    /// it. Neither case is reported.
    pub fn to_flat_map(&self) -> Map<String, Value> {
        let mut out = Map::new();

        let s = &self.summary;
        out.insert("bedrooms".into(), opt(s.bedrooms.as_deref()));
        out.insert("bathrooms".into(), opt(s.bathrooms.as_deref()));
        out.insert("sqft".into(), opt(s.sqft.as_deref()));
        out.insert("city".into(), opt(s.city.as_deref()));
        out.insert("state".into(), opt(s.state.as_deref()));
        out.insert("zipcode".into(), opt(s.zipcode.as_deref()));

        let f = &self.facts;
        if let Some(home_type) = &f.home_type {
            out.insert("home_type".into(), Value::String(home_type.clone()));
        }
        if let Some(year) = &f.year {
            out.insert("year".into(), Value::String(year.clone()));
        }
        if let Some(days) = &f.days_on_zillow {
            out.insert("days_on_zillow".into(), Value::String(days.clone()));
        }
        if !f.extras.is_empty() {
            let extras = f.extras.iter().cloned().map(Value::String).collect();
            out.insert("extras".into(), Value::Array(extras));
        }
        for (key, value) in &f.details {
            out.insert(key.clone(), Value::String(value.clone()));
        }

        let sale = &self.sale_info;
        out.insert("price".into(), opt(sale.price.as_deref()));
        out.insert("status".into(), opt(sale.status.map(ListingStatus::label)));
        out.insert("zestimate".into(), opt(sale.zestimate.as_deref()));
        for label in PricingLabel::ALL {
            if label == PricingLabel::Zestimate {
                continue;
            }
            if let Some(value) = sale.pricing(label) {
                out.insert(label.key().into(), Value::String(value.to_owned()));
            }
        }

        out.insert(
            "description".into(),
            Value::String(self.description.clone()),
        );

        let price_history = self
            .price_history
            .iter()
            .map(|row| serde_json::json!([row.date, row.event, row.price]))
            .collect();
        out.insert("price_history".into(), Value::Array(price_history));

        let tax_history = self
            .tax_history
            .iter()
            .map(|row| serde_json::json!([row.date, row.tax, row.assessment]))
            .collect();
        out.insert("tax_history".into(), Value::Array(tax_history));

        out
    }
}
