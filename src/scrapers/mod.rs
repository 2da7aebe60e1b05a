//! Marketplace search scrapers.
//!
//! Each marketplace gets its own module carrying the CSS selectors its
//! search-results markup uses. Page-structure drift is an accepted
//! operational risk: a scrape that fails or matches nothing contributes an
//! empty list, never an error, so the matching step simply sees no candidates
//! from that platform.

mod baemin;
mod coupang;
mod kurly;

pub use baemin::BaeminScraper;
pub use coupang::CoupangScraper;
pub use kurly::KurlyScraper;

use async_trait::async_trait;
use html_escape::decode_html_entities;
use log::{debug, warn};
use reqwest::Client;
use scraper::{ElementRef, Html};
use std::time::Duration;

use crate::config::ScrapeConfig;
use crate::error::MatchError;
use crate::model::{Platform, Product};

/// One online marketplace that can be searched for an ingredient name.
#[async_trait]
pub trait Marketplace: Send + Sync {
    fn platform(&self) -> Platform;

    /// Search-results URL for a query on this marketplace.
    fn search_url(&self, query: &str) -> String;

    /// Parse the product listings out of a search-results document.
    fn parse_listings(&self, document: &Html) -> Vec<Product>;

    /// Fetch one results page and parse its listings.
    async fn scrape(&self, client: &Client, url: &str) -> Result<Vec<Product>, MatchError> {
        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(MatchError::ScrapeError(format!(
                "{} answered with status {}",
                self.platform(),
                response.status()
            )));
        }
        let body = response.text().await?;
        let document = Html::parse_document(&body);
        Ok(self.parse_listings(&document))
    }

    /// Search this marketplace for an ingredient name.
    async fn search(&self, client: &Client, query: &str) -> Result<Vec<Product>, MatchError> {
        let url = self.search_url(query);
        debug!("Searching {} via {}", self.platform(), url);
        let products = self.scrape(client, &url).await?;
        debug!(
            "{} returned {} listings for '{}'",
            self.platform(),
            products.len(),
            query
        );
        Ok(products)
    }
}

/// Build the HTTP client used for scrape requests.
pub fn build_client(config: &ScrapeConfig) -> Result<Client, MatchError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Search every marketplace concurrently and pool the raw listings.
///
/// A platform that fails to respond or parse contributes nothing; the other
/// platforms' listings still go through. No ordering guarantee beyond
/// platform grouping.
pub async fn search_all_platforms(client: &Client, query: &str) -> Vec<Product> {
    let (baemin, coupang, kurly) = tokio::join!(
        BaeminScraper.search(client, query),
        CoupangScraper.search(client, query),
        KurlyScraper.search(client, query),
    );

    pool_results(vec![baemin, coupang, kurly])
}

fn pool_results(results: Vec<Result<Vec<Product>, MatchError>>) -> Vec<Product> {
    let mut products = Vec::new();
    for result in results {
        match result {
            Ok(mut listings) => products.append(&mut listings),
            Err(e) => warn!("Marketplace search failed: {e}"),
        }
    }
    products
}

/// Listing titles come HTML-escaped and with irregular whitespace.
pub(crate) fn element_text(element: ElementRef) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    let normalized = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    decode_html_entities(&normalized).into_owned()
}

/// "12,900원" → 12900. Prices are written with thousands separators and a
/// currency suffix; everything non-digit is noise.
pub(crate) fn parse_price(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok().filter(|price| *price > 0)
}
