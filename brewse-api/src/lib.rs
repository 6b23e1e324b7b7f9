mod catalog;
mod error;
pub mod sample;

pub use crate::catalog::{BeerRecord, CatalogResponse};
pub use crate::error::ApiError;

use std::time::Duration;

pub struct Client {
    http_client: reqwest::Client,
    url: String,
}

impl Client {
    pub fn new(url: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            url: url.to_string(),
        }
    }

    /// Fetch the full catalog and unwrap the `record` envelope.
    pub async fn fetch_catalog(&self) -> Result<Vec<BeerRecord>, ApiError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<CatalogResponse>()
            .await?;

        Ok(response.record)
    }
}
