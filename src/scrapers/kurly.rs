use reqwest::Url;
use scraper::{Html, Selector};

use super::{element_text, parse_price, Marketplace};
use crate::model::{Platform, Product};

/// Scraper for Kurly search results.
pub struct KurlyScraper;

const BASE_URL: &str = "https://www.kurly.com";

impl Marketplace for KurlyScraper {
    fn platform(&self) -> Platform {
        Platform::Kurly
    }

    fn search_url(&self, query: &str) -> String {
        let mut url = Url::parse(BASE_URL).unwrap();
        url.set_path("/search");
        url.query_pairs_mut().append_pair("sword", query);
        url.into()
    }

    fn parse_listings(&self, document: &Html) -> Vec<Product> {
        // Kurly renders each result as a goods-detail anchor
        let item_selector = Selector::parse(r#"a[href^="/goods/"]"#).unwrap();
        let name_selector = Selector::parse("span.name").unwrap();
        let price_selector = Selector::parse("span.price").unwrap();
        let image_selector = Selector::parse("img").unwrap();

        let mut products = Vec::new();
        for item in document.select(&item_selector) {
            let name = match item.select(&name_selector).next() {
                Some(element) => element_text(element),
                None => continue,
            };
            let price = match item
                .select(&price_selector)
                .next()
                .and_then(|element| parse_price(&element_text(element)))
            {
                Some(price) => price,
                None => continue,
            };
            let url = match item.value().attr("href") {
                Some(href) => format!("{BASE_URL}{href}"),
                None => continue,
            };
            let image_url = item
                .select(&image_selector)
                .next()
                .and_then(|element| element.value().attr("src"))
                .map(str::to_string);

            products.push(Product {
                name,
                price,
                url,
                platform: Platform::Kurly,
                calories: None,
                image_url,
            });
        }
        products
    }
}
