use std::sync::Arc;

use tokio::net::TcpListener;

use watchpricer::api::create_router;
use watchpricer::config::CONFIG;
use watchpricer::extractor::Extractor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let extractor = Arc::new(Extractor::new()?);
    let app = create_router(extractor);

    let listener = TcpListener::bind(&CONFIG.bind_addr).await?;
    tracing::info!("listening on {}", CONFIG.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
