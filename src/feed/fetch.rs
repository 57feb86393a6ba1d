// src/feed/fetch.rs

//! Feed retrieval.
//!
//! The scan engine only depends on the [`FeedFetcher`] trait; [`HttpFetcher`]
//! is the production implementation. Tests substitute an in-memory fetcher.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::FetchConfig;
use crate::error::Result;

/// Retrieves the raw bytes of a feed document.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the document at the given URL. Any failure is fatal to the
    /// current scan; no retries happen at this layer.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP fetcher backed by a configured reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured user agent and timeout.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
