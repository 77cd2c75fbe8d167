//! Page fetching.

use jobindex_common::PageResponse;
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::error::FetchError;

/// Anything that can turn a page URL into a decoded page.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<PageResponse, FetchError>;
}

/// Blocking HTTP fetcher: one GET per call, no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::transport)?;

        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let response = self.client.get(url).send().map_err(FetchError::transport)?;

        let status = response.status();
        let host = response.url().host_str().unwrap_or("server").to_string();
        let body = response.bytes().map_err(FetchError::transport)?;
        debug!(%status, bytes = body.len(), "received page body");

        serde_json::from_slice(&body)
            .map(PageResponse::new)
            .map_err(|e| FetchError::invalid_json(&host, e))
    }
}
