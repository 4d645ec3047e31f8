//! Dataset retrieval: the `DatasetSource` trait and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{Dataset, SourceError};

/// HTTP request timeout in seconds.
/// The reference files are small static JSON; 30s covers slow links while
/// still failing fast enough for a responsive first load.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A retriever for one named dataset.
///
/// The cache depends only on this trait, so tests and alternative hosts
/// (bundled files, a CDN) can swap the transport out.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch one dataset and return its parsed JSON payload.
    async fn fetch(&self, dataset: Dataset) -> Result<Value, SourceError>;
}

/// Dataset source backed by the planner's static file host.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn dataset_url(&self, dataset: Dataset) -> String {
        format!("{}/data/{}", self.base_url, dataset.file_name())
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Value, SourceError> {
        let url = self.dataset_url(dataset);
        debug!(dataset = %dataset, url = %url, "fetching dataset");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::from_status(status, &body));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_urls_join_cleanly() {
        let source = HttpSource::new("https://planner.example/").unwrap();
        assert_eq!(
            source.dataset_url(Dataset::Locations),
            "https://planner.example/data/locations.json"
        );
        assert_eq!(
            source.dataset_url(Dataset::Bicycles),
            "https://planner.example/data/bicycle.json"
        );
    }
}
