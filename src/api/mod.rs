use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::extractor::Extractor;

pub mod handlers;
pub mod models;

pub fn create_router(extractor: Arc<Extractor>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/scrape", get(handlers::scrape_handler))
        .with_state(extractor)
        // Static file serving for the UI
        .nest_service("/", ServeDir::new("static"))
        .layer(cors)
}
