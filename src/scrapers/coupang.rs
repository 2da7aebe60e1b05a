use reqwest::Url;
use scraper::{Html, Selector};

use super::{element_text, parse_price, Marketplace};
use crate::model::{Platform, Product};

/// Scraper for Coupang search results.
pub struct CoupangScraper;

const BASE_URL: &str = "https://www.coupang.com";

impl Marketplace for CoupangScraper {
    fn platform(&self) -> Platform {
        Platform::Coupang
    }

    fn search_url(&self, query: &str) -> String {
        let mut url = Url::parse(BASE_URL).unwrap();
        url.set_path("/np/search");
        url.query_pairs_mut().append_pair("q", query);
        url.into()
    }

    fn parse_listings(&self, document: &Html) -> Vec<Product> {
        let item_selector = Selector::parse("li.search-product").unwrap();
        let name_selector = Selector::parse("div.name").unwrap();
        let price_selector = Selector::parse("strong.price-value").unwrap();
        let link_selector = Selector::parse("a.search-product-link").unwrap();
        let image_selector = Selector::parse("img.search-product-wrap-img").unwrap();

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
            let url = match item
                .select(&link_selector)
                .next()
                .and_then(|element| element.value().attr("href"))
            {
                Some(href) if href.starts_with("http") => href.to_string(),
                Some(href) => format!("{BASE_URL}{href}"),
                None => continue,
            };
            let image_url = item
                .select(&image_selector)
                .next()
                .and_then(|element| element.value().attr("src"))
                .map(|src| {
                    if src.starts_with("//") {
                        format!("https:{src}")
                    } else {
                        src.to_string()
                    }
                });

            products.push(Product {
                name,
                price,
                url,
                platform: Platform::Coupang,
                calories: None,
                image_url,
            });
        }
        products
    }
}
