use serde::Serialize;

/// Summary statistics over a set of sold-listing prices.
///
/// `market_price` is 80% of the average and `resale_price` a further 20%
/// markup on that. Values are kept at full precision; rounding is left to
/// the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub average_price: f64,
    pub market_price: f64,
    pub resale_price: f64,
    pub item_count: usize,
    pub price_list: Vec<f64>,
}

impl PricingResult {
    /// Returns `None` for an empty list. An empty scrape is a "no data"
    /// condition, not a zero-valued result.
    pub fn from_prices(prices: Vec<f64>) -> Option<PricingResult> {
        if prices.is_empty() {
            return None;
        }

        let average_price = prices.iter().sum::<f64>() / prices.len() as f64;
        let market_price = average_price * 0.8;
        let resale_price = market_price * 1.2;

        Some(PricingResult {
            average_price,
            market_price,
            resale_price,
            item_count: prices.len(),
            price_list: prices,
        })
    }
}
