//! Fact classifier for the "at a glance" fact lists.
//!
//! Each fragment is run through [`RULES`] in order and the first rule that
//! accepts it decides its [`FactKind`]. Rule order is the precedence; keep it
//! that way rather than folding rules into one conditional.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::layout::{self, HOME_TYPES};
use crate::parse_helpers::{element_text, selector};
use crate::types::Facts;

static FACT_ITEM: LazyLock<Selector> = LazyLock::new(|| selector(layout::FACT_ITEM));

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Built in (\d+)").expect("valid year regex"));
static DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) days").expect("valid days regex"));
static BARE_HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"( #|# )").expect("valid hash regex"));

/// Where a single fact fragment lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactKind {
    HomeType(String),
    Year(String),
    DaysOnZillow(String),
    /// Free text with no `key: value` structure.
    Extra(String),
    Detail { key: String, value: String },
}

type Rule = fn(&str) -> Option<FactKind>;

const RULES: &[Rule] = &[
    home_type_rule,
    year_rule,
    days_on_zillow_rule,
    extra_rule,
    detail_rule,
];

fn home_type_rule(text: &str) -> Option<FactKind> {
    HOME_TYPES
        .iter()
        .any(|home_type| *home_type == text)
        .then(|| FactKind::HomeType(text.to_owned()))
}

fn year_rule(text: &str) -> Option<FactKind> {
    if !text.contains("Built in") {
        return None;
    }
    YEAR_RE
        .captures(text)
        .map(|caps| FactKind::Year(caps[1].to_owned()))
}

fn days_on_zillow_rule(text: &str) -> Option<FactKind> {
    if !text.contains("days on Zillow") {
        return None;
    }
    DAYS_RE
        .captures(text)
        .map(|caps| FactKind::DaysOnZillow(caps[1].to_owned()))
}

fn extra_rule(text: &str) -> Option<FactKind> {
    (!text.contains(':')).then(|| FactKind::Extra(text.to_owned()))
}

fn detail_rule(text: &str) -> Option<FactKind> {
    let cleaned = BARE_HASH_RE.replace_all(text, "");
    let (key, value) = cleaned.split_once(':')?;
    Some(FactKind::Detail {
        key: key.trim().replace(' ', "_").to_lowercase(),
        value: value.trim().to_owned(),
    })
}

/// Classifies one fact fragment.
pub fn classify_fact(text: &str) -> FactKind {
    RULES
        .iter()
        .find_map(|rule| rule(text))
        .unwrap_or_else(|| FactKind::Extra(text.to_owned()))
}

impl Facts {
    /// Files a classified fact. The last fact written under a key wins, and
    /// a detail named like a reserved field (`home_type`, `year`,
    /// `days_on_zillow`) writes that field.
    pub fn apply(&mut self, kind: FactKind) {
        match kind {
            FactKind::HomeType(home_type) => self.home_type = Some(home_type),
            FactKind::Year(year) => self.year = Some(year),
            FactKind::DaysOnZillow(days) => self.days_on_zillow = Some(days),
            FactKind::Extra(text) => self.extras.push(text),
            FactKind::Detail { key, value } => match key.as_str() {
                "home_type" => self.home_type = Some(value),
                "year" => self.year = Some(value),
                "days_on_zillow" => self.days_on_zillow = Some(value),
                _ => {
                    self.details.insert(key, value);
                }
            },
        }
    }
}

/// Classifies fragments in order into a [`Facts`] record.
pub fn classify_facts<I, S>(fragments: I) -> Facts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut facts = Facts::default();
    for fragment in fragments {
        facts.apply(classify_fact(fragment.as_ref()));
    }
    facts
}

/// Collects fact fragments from every fact group on the page.
///
/// A page without fact groups yields an empty [`Facts`]; facts are not
/// load-bearing.
pub(crate) fn extract_facts(document: &Html) -> Facts {
    classify_facts(document.select(&FACT_ITEM).map(element_text))
}

#[cfg(test)]
#[path = "facts_test.rs"]
mod tests;
