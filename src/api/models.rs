use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    pub q: Option<String>,
}
