use std::time::Duration;

use reqwest::Url;
use scraper::{Html, Selector};

use crate::config::CONFIG;
use crate::error::ScrapeError;
use crate::price::parse_price;

/// eBay serves a stripped-down markup to obvious bots, so identify as a
/// desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

/// Fetches eBay sold-listing search results and pulls the price out of each
/// listing entry.
pub struct Extractor {
    client: reqwest::Client,
    base_url: String,
}

impl Extractor {
    pub fn new() -> anyhow::Result<Extractor> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(CONFIG.http_timeout_secs))
            .build()?;

        Ok(Extractor {
            client,
            base_url: CONFIG.ebay_base_url.clone(),
        })
    }

    /// Search URL restricted to completed listings that ended in a sale.
    pub fn search_url(&self, query: &str) -> Result<Url, ScrapeError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ScrapeError::Parse(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("_nkw", query)
            .append_pair("LH_Sold", "1")
            .append_pair("LH_Complete", "1");
        Ok(url)
    }

    pub async fn fetch(&self, query: &str) -> Result<String, ScrapeError> {
        let url = self.search_url(query)?;
        tracing::info!(%url, "fetching sold listings");
        let res = self.client.get(url).send().await?;
        let body = res.error_for_status()?.text().await?;
        Ok(body)
    }

    /// Fetch + extract. An empty result set is a distinct "no data"
    /// condition, not a transport failure.
    pub async fn scrape(&self, query: &str) -> Result<Vec<f64>, ScrapeError> {
        let html = self.fetch(query).await?;
        let prices = extract_prices(&html);
        if prices.is_empty() {
            return Err(ScrapeError::NoPrices);
        }
        Ok(prices)
    }
}

/// Pulls the first price text out of every `li.s-item` entry, in document
/// order. Entries whose price text does not parse are dropped, not counted
/// as zero. Pure function of the markup.
pub fn extract_prices(html: &str) -> Vec<f64> {
    let document = Html::parse_document(html);

    let listing_selector = Selector::parse("li.s-item").unwrap();
    let price_selector = Selector::parse(".s-item__price").unwrap();

    let mut prices = Vec::new();
    for listing in document.select(&listing_selector) {
        let Some(node) = listing.select(&price_selector).next() else {
            continue;
        };
        let text = node.text().collect::<String>();
        if let Some(price) = parse_price(&text) {
            prices.push(price);
        }
    }

    prices
}
