use std::collections::HashMap;
use std::sync::Mutex;

use super::*;
use crate::layout::ListingStatus;

const BASE: &str = "http://www.zillow.com";
const DETAIL_URL: &str = "http://www.zillow.com/homedetails/2101920883_zpid";
const PRICE_URL: &str = "http://www.zillow.com/AjaxRender.htm?encparams=9~4105928113~rD8xeQ_pvEjlw-abc=&rwebid=1234567&rhost=1";
const TAX_URL: &str =
    "http://www.zillow.com/AjaxRender.htm?encparams=8~2930013~Kd1oq2zz=&rwebid=1234567&rhost=1";

const PAGE: &str = include_str!("../tests/fixtures/home_details.html");
const PRICE_FRAGMENT: &str = include_str!("../tests/fixtures/price_history.json");
const TAX_FRAGMENT: &str = include_str!("../tests/fixtures/tax_history.json");

/// In-memory fetcher: serves registered bodies and answers 404 otherwise.
#[derive(Default)]
struct StubFetcher {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn with(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_owned(), body.to_owned());
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.requested
            .lock()
            .expect("lock poisoned")
            .push(url.to_owned());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::UnexpectedStatus {
                status: 404,
                url: url.to_owned(),
                body: String::new(),
            })
    }
}

fn full_site() -> StubFetcher {
    StubFetcher::default()
        .with(DETAIL_URL, PAGE)
        .with(PRICE_URL, PRICE_FRAGMENT)
        .with(TAX_URL, TAX_FRAGMENT)
}

#[tokio::test]
async fn scrape_fixture_page_end_to_end() {
    let scraper = ListingScraper::new(full_site(), BASE);
    let record = scraper.scrape(None, Some("2101920883")).await.unwrap();

    assert_eq!(
        record.summary,
        PropertySummary {
            bedrooms: Some("3".to_owned()),
            bathrooms: Some("2".to_owned()),
            sqft: Some("1,470".to_owned()),
            city: Some("Berkeley".to_owned()),
            state: Some("CA".to_owned()),
            zipcode: Some("94703".to_owned()),
        }
    );

    let price: u64 = record
        .sale_info
        .price
        .as_deref()
        .expect("price present")
        .replace(',', "")
        .parse()
        .expect("price is numeric");
    assert!(price > 0);
    assert_eq!(record.sale_info.status, Some(ListingStatus::ForSale));
    assert_eq!(record.sale_info.zestimate.as_deref(), Some("812,313"));
    assert_eq!(record.sale_info.rent_zestimate.as_deref(), Some("3,450/mo"));

    assert_eq!(record.facts.home_type.as_deref(), Some("Single Family"));
    assert_eq!(record.facts.year.as_deref(), Some("1925"));
    assert_eq!(record.facts.days_on_zillow.as_deref(), Some("3"));
    assert_eq!(record.facts.extras, vec!["Fireplace".to_owned()]);
    assert_eq!(record.facts.details["mls"], "40739231");
    assert_eq!(record.facts.details["lot"], "4,791 sqft");

    assert!(!record.description.is_empty());
    assert_eq!(record.price_history.len(), 2);
    assert_eq!(record.price_history[0].price, "$799,000");
    assert_eq!(record.tax_history.len(), 2);
    assert_eq!(record.tax_history[0].tax, "$9,871 ");
}

#[tokio::test]
async fn scrape_fetches_page_then_both_fragments() {
    let scraper = ListingScraper::new(full_site(), BASE);
    scraper.scrape(Some(DETAIL_URL), None).await.unwrap();

    let requested = scraper.fetcher.requested();
    assert_eq!(requested.len(), 3);
    assert_eq!(requested[0], DETAIL_URL);
    assert!(requested.contains(&PRICE_URL.to_owned()));
    assert!(requested.contains(&TAX_URL.to_owned()));
}

#[tokio::test]
async fn invalid_input_makes_no_request() {
    let scraper = ListingScraper::new(full_site(), BASE);
    let err = scraper
        .scrape(Some(DETAIL_URL), Some("2101920883"))
        .await
        .unwrap_err();
    assert!(matches!(err, ScraperError::InvalidInput { .. }));
    assert!(scraper.fetcher.requested().is_empty());
}

#[tokio::test]
async fn missing_value_region_aborts_scrape() {
    let page = PAGE.replace("home-value-wrapper", "renamed-wrapper");
    let fetcher = StubFetcher::default()
        .with(DETAIL_URL, &page)
        .with(PRICE_URL, PRICE_FRAGMENT)
        .with(TAX_URL, TAX_FRAGMENT);
    let scraper = ListingScraper::new(fetcher, BASE);
    let err = scraper.scrape(Some(DETAIL_URL), None).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::Extraction { section } if section == "home value region"),
        "unexpected error: {err:?}"
    );
    assert_eq!(scraper.fetcher.requested(), vec![DETAIL_URL.to_owned()]);
}

#[tokio::test]
async fn missing_tax_fragment_url_yields_empty_tax_history() {
    let page = PAGE.replace("z-expando-table", "z-hdp-schools");
    let fetcher = StubFetcher::default()
        .with(DETAIL_URL, &page)
        .with(PRICE_URL, PRICE_FRAGMENT);
    let scraper = ListingScraper::new(fetcher, BASE);
    let record = scraper.scrape(Some(DETAIL_URL), None).await.unwrap();
    assert!(record.tax_history.is_empty());
    assert_eq!(record.price_history.len(), 2);
}

#[tokio::test]
async fn tax_fragment_without_table_yields_empty_tax_history() {
    let fetcher = StubFetcher::default()
        .with(DETAIL_URL, PAGE)
        .with(PRICE_URL, PRICE_FRAGMENT)
        .with(TAX_URL, r#" { "html": "<div class=\"zsg-content-item\">No tax history<\/div>" }"#);
    let scraper = ListingScraper::new(fetcher, BASE);
    let record = scraper.scrape(Some(DETAIL_URL), None).await.unwrap();
    assert!(record.tax_history.is_empty());
}

#[tokio::test]
async fn missing_price_fragment_url_is_extraction_error() {
    let page = PAGE.replace("z-hdp-price-history", "z-hdp-something-else");
    let fetcher = StubFetcher::default()
        .with(DETAIL_URL, &page)
        .with(TAX_URL, TAX_FRAGMENT);
    let scraper = ListingScraper::new(fetcher, BASE);
    let err = scraper.scrape(Some(DETAIL_URL), None).await.unwrap_err();
    assert!(matches!(err, ScraperError::Extraction { section } if section == "price history"));
}

#[tokio::test]
async fn price_fragment_without_table_is_extraction_error() {
    let fetcher = StubFetcher::default()
        .with(DETAIL_URL, PAGE)
        .with(PRICE_URL, r#" { "html": "<p>nothing<\/p>" }"#)
        .with(TAX_URL, TAX_FRAGMENT);
    let scraper = ListingScraper::new(fetcher, BASE);
    let err = scraper.scrape(Some(DETAIL_URL), None).await.unwrap_err();
    assert!(matches!(err, ScraperError::Extraction { section } if section == "price history"));
}

#[tokio::test]
async fn fragment_transport_failure_propagates() {
    let fetcher = StubFetcher::default()
        .with(DETAIL_URL, PAGE)
        .with(TAX_URL, TAX_FRAGMENT);
    let scraper = ListingScraper::new(fetcher, BASE);
    let err = scraper.scrape(Some(DETAIL_URL), None).await.unwrap_err();
    assert!(matches!(err, ScraperError::UnexpectedStatus { status: 404, .. }));
}

#[test]
fn extract_page_requires_summary_header() {
    let page = PAGE.replace("zsg-content-header addr", "page-header");
    let result = extract_page(&page);
    assert!(matches!(
        result,
        Err(ScraperError::Extraction {
            section: "property summary header"
        })
    ));
}

#[test]
fn extract_page_requires_description() {
    let page = PAGE.replace(r#"<div class="notranslate">"#, "<div>");
    assert!(matches!(
        extract_page(&page),
        Err(ScraperError::Extraction {
            section: "description"
        })
    ));
}
