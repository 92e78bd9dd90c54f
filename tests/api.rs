use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use tower::ServiceExt;

use watchpricer::api::create_router;
use watchpricer::error::ScrapeError;
use watchpricer::extractor::Extractor;

fn app() -> axum::Router {
    create_router(Arc::new(Extractor::new().unwrap()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    let response = app()
        .oneshot(Request::get("/api/scrape").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing query");
}

#[tokio::test]
async fn test_blank_query_is_bad_request() {
    let response = app()
        .oneshot(
            Request::get("/api/scrape?q=%20%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_no_prices_maps_to_not_found() {
    let response = ScrapeError::NoPrices.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No prices found");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_upstream_failure_maps_to_server_error_with_details() {
    let response = ScrapeError::Parse("unexpected markup".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to fetch eBay data");
    assert_eq!(body["details"], "unexpected markup");
    // no partial result alongside an error
    assert!(body.get("averagePrice").is_none());
}
