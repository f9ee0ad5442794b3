//! Page-fetch seam between the pipeline and the network.

use async_trait::async_trait;

use crate::scrape::ScrapeError;
use crate::utils::HttpClient;

/// Capability that fetches a URL and returns the page body.
///
/// The pipeline only ever talks to this trait, so tests can substitute
/// canned pages via [`crate::scrape::MockFetcher`].
#[async_trait]
pub trait Fetch: Send + Sync + std::fmt::Debug {
    /// Fetch the document at `url`, failing on transport errors and on
    /// non-success statuses.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Production fetcher backed by the shared HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .client()
            .get(url)
            .header("Accept", "text/html")
            .send()
            .await
            .map_err(|e| ScrapeError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::Network(format!("Failed to read body of {}: {}", url, e)))
    }
}
