use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong on the scrape path. Each variant maps to
/// one HTTP status; errors are never retried.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Missing query")]
    MissingQuery,

    #[error("No prices found")]
    NoPrices,

    #[error("Failed to fetch eBay data")]
    Upstream(#[from] reqwest::Error),

    #[error("Failed to fetch eBay data")]
    Parse(String),
}

impl ScrapeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScrapeError::MissingQuery => StatusCode::BAD_REQUEST,
            ScrapeError::NoPrices => StatusCode::NOT_FOUND,
            ScrapeError::Upstream(_) | ScrapeError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ScrapeError::Upstream(e) => {
                json!({ "error": self.to_string(), "details": e.to_string() })
            }
            ScrapeError::Parse(details) => {
                json!({ "error": self.to_string(), "details": details })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
