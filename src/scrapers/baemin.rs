use reqwest::Url;
use scraper::{Html, Selector};

use super::{element_text, parse_price, Marketplace};
use crate::model::{Platform, Product};

/// Scraper for B-Mart (Baemin) search results.
pub struct BaeminScraper;

const BASE_URL: &str = "https://mart.baemin.com";

impl Marketplace for BaeminScraper {
    fn platform(&self) -> Platform {
        Platform::Baemin
    }

    fn search_url(&self, query: &str) -> String {
        let mut url = Url::parse(BASE_URL).unwrap();
        url.set_path("/search");
        url.query_pairs_mut().append_pair("keyword", query);
        url.into()
    }

    fn parse_listings(&self, document: &Html) -> Vec<Product> {
        let item_selector = Selector::parse("li.product-item").unwrap();
        let name_selector = Selector::parse("p.product-name").unwrap();
        let price_selector = Selector::parse("span.product-price").unwrap();
        let link_selector = Selector::parse("a").unwrap();
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
                .map(str::to_string);

            products.push(Product {
                name,
                price,
                url,
                platform: Platform::Baemin,
                calories: None,
                image_url,
            });
        }
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
        <ul class="product-list">
            <li class="product-item">
                <a href="/products/7001">
                    <img src="https://mart-cdn.baemin.com/7001.jpg">
                    <p class="product-name">한판 계란 30구 (대란)</p>
                    <span class="product-price">7,480원</span>
                </a>
            </li>
            <li class="product-item">
                <a href="/products/7002">
                    <p class="product-name">서울우유 1L</p>
                    <span class="product-price">2,980원</span>
                </a>
            </li>
            <li class="product-item">
                <a href="/products/7003">
                    <p class="product-name">가격 없는 상품</p>
                </a>
            </li>
        </ul>
        </body></html>
    "#;

    #[test]
    fn test_parse_listings() {
        let document = Html::parse_document(FIXTURE);
        let products = BaeminScraper.parse_listings(&document);

        // The entry without a price is skipped
        assert_eq!(products.len(), 2);

        assert_eq!(products[0].name, "한판 계란 30구 (대란)");
        assert_eq!(products[0].price, 7480);
        assert_eq!(products[0].url, "https://mart.baemin.com/products/7001");
        assert_eq!(products[0].platform, Platform::Baemin);

        assert_eq!(products[1].name, "서울우유 1L");
        assert_eq!(products[1].price, 2980);
    }

    #[test]
    fn test_search_url() {
        let url = BaeminScraper.search_url("우유");
        assert!(url.starts_with("https://mart.baemin.com/search?keyword="));
    }
}
