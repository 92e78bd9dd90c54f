use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;
use std::time::Instant;

use crate::error::ScrapeError;
use crate::extractor::Extractor;
use crate::pricing::PricingResult;

use super::models::ScrapeParams;

pub async fn scrape_handler(
    State(extractor): State<Arc<Extractor>>,
    Query(params): Query<ScrapeParams>,
) -> Result<Json<PricingResult>, ScrapeError> {
    let start = Instant::now();

    let query = params.q.as_deref().unwrap_or("").trim();
    if query.is_empty() {
        return Err(ScrapeError::MissingQuery);
    }

    let prices = extractor.scrape(query).await?;

    // scrape() guarantees a non-empty list, but keep the invariant in one place
    let result = PricingResult::from_prices(prices).ok_or(ScrapeError::NoPrices)?;

    tracing::info!(
        query,
        item_count = result.item_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scrape complete"
    );

    Ok(Json(result))
}
