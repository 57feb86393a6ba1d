// src/feed/cache.rs

//! Per-run memoization of parsed feeds.
//!
//! Several watch entries may point at the same feed URL; the cache makes
//! sure each URL is fetched and parsed at most once per run. A failed fetch
//! or parse is not cached, so a later request for the same URL retries.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::feed::fetch::FeedFetcher;
use crate::feed::parse::parse_feed;
use crate::models::Feed;

/// Process-lifetime cache of parsed feeds keyed by feed URL.
#[derive(Debug, Default)]
pub struct FeedCache {
    feeds: HashMap<String, Arc<Feed>>,
}

impl FeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the parsed feed for `url`, fetching and parsing it on the
    /// first request.
    pub async fn get_or_fetch(
        &mut self,
        url: &str,
        fetcher: &dyn FeedFetcher,
    ) -> Result<Arc<Feed>> {
        if let Some(feed) = self.feeds.get(url) {
            log::debug!("Feed cache hit for {}", url);
            return Ok(Arc::clone(feed));
        }

        log::debug!("Fetching feed {}", url);
        let bytes = fetcher.fetch(url).await?;
        let feed = Arc::new(parse_feed(url, &bytes)?);
        self.feeds.insert(url.to_string(), Arc::clone(&feed));
        Ok(feed)
    }

    /// Number of cached feeds.
    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory fetcher that counts calls per URL.
    struct CountingFetcher {
        bodies: HashMap<String, Vec<u8>>,
        calls: Mutex<HashMap<String, usize>>,
    }

    impl CountingFetcher {
        fn new(bodies: &[(&str, &str)]) -> Self {
            Self {
                bodies: bodies
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.as_bytes().to_vec()))
                    .collect(),
                calls: Mutex::new(HashMap::new()),
            }
        }

        fn calls_for(&self, url: &str) -> usize {
            *self.calls.lock().unwrap().get(url).unwrap_or(&0)
        }
    }

    #[async_trait]
    impl FeedFetcher for CountingFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            *self
                .calls
                .lock()
                .unwrap()
                .entry(url.to_string())
                .or_insert(0) += 1;
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::config(format!("no fixture for {url}")))
        }
    }

    const RSS: &str = r#"<rss version="2.0"><channel>
        <item><title>t</title><link>https://x/1</link></item>
    </channel></rss>"#;

    #[tokio::test]
    async fn fetches_each_url_at_most_once() {
        let fetcher = CountingFetcher::new(&[("https://x/rss", RSS)]);
        let mut cache = FeedCache::new();

        let first = cache.get_or_fetch("https://x/rss", &fetcher).await.unwrap();
        let second = cache.get_or_fetch("https://x/rss", &fetcher).await.unwrap();

        assert_eq!(fetcher.calls_for("https://x/rss"), 1);
        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn failure_is_not_cached() {
        let fetcher = CountingFetcher::new(&[]);
        let mut cache = FeedCache::new();

        assert!(cache.get_or_fetch("https://x/rss", &fetcher).await.is_err());
        assert!(cache.get_or_fetch("https://x/rss", &fetcher).await.is_err());

        // the collaborator was invoked again on the retry
        assert_eq!(fetcher.calls_for("https://x/rss"), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn parse_failure_is_not_cached() {
        let fetcher = CountingFetcher::new(&[("https://x/rss", "not xml <")]);
        let mut cache = FeedCache::new();

        assert!(cache.get_or_fetch("https://x/rss", &fetcher).await.is_err());
        assert!(cache.is_empty());
        assert_eq!(fetcher.calls_for("https://x/rss"), 1);
    }
}
