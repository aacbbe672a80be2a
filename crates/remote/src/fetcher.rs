use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use buildstamp_core::MetadataFetcher;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP metadata fetcher with a bounded request timeout. A timeout and an
/// unreachable host look identical to callers: both are fetch errors.
#[derive(Debug)]
pub struct HttpMetadataFetcher {
    client: reqwest::Client,
}

impl HttpMetadataFetcher {
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
