// src/search/engine.rs

//! Scan engine: walks configured feeds and records pattern hits.

use crate::config::WatchConfig;
use crate::error::Result;
use crate::feed::{FeedCache, FeedFetcher};
use crate::models::FeedItem;
use crate::report;
use crate::search::matches::MatchAggregator;
use crate::search::pattern::PatternSet;
use crate::store::LinkStore;

/// Scans one watch entry's feeds for its pattern set.
///
/// Engines for different watch entries share one [`LinkStore`] and one
/// [`FeedCache`] per run and must run sequentially; each engine owns its
/// own match set.
pub struct SearchEngine {
    name: String,
    patterns: PatternSet,
    feed_urls: Vec<String>,
    matches: MatchAggregator,
}

impl SearchEngine {
    /// Build an engine for a watch entry, compiling its pattern set.
    pub fn new(watch: &WatchConfig) -> Result<Self> {
        Ok(Self {
            name: watch.name.clone(),
            patterns: PatternSet::compile(&watch.patterns)?,
            feed_urls: watch.feeds.clone(),
            matches: MatchAggregator::new(),
        })
    }

    /// Scan every configured feed in order, populating the match set.
    ///
    /// Items already marked seen are skipped without pattern evaluation.
    /// Every newly examined item is registered in the store with its own
    /// publish timestamp, whether or not anything matched, so noise is only
    /// ever scanned once.
    pub async fn scan(
        &mut self,
        store: &mut LinkStore,
        cache: &mut FeedCache,
        fetcher: &dyn FeedFetcher,
    ) -> Result<()> {
        for url in &self.feed_urls {
            let feed = cache.get_or_fetch(url, fetcher).await?;
            log::debug!(
                "Watch '{}': scanning {} ({} items)",
                self.name,
                url,
                feed.len()
            );

            for item in &feed.items {
                if store.seen(&item.link) {
                    continue;
                }
                Self::scan_item(&self.patterns, &mut self.matches, item);
                store.add(item.link.clone(), item.published);
            }
        }
        Ok(())
    }

    /// Test every pattern against one unseen item.
    ///
    /// Takes the pattern set and aggregator as explicit parameters so the
    /// feed-url loop in [`SearchEngine::scan`] only ever borrows disjoint
    /// fields.
    fn scan_item(patterns: &PatternSet, matches: &mut MatchAggregator, item: &FeedItem) {
        let title = html_escape::decode_html_entities(&item.title);
        for (label, pattern) in patterns.iter() {
            if pattern.is_match(&item.body) || pattern.is_match(&title) {
                matches.record_hit(item, label);
            }
        }
    }

    /// Render the matches accumulated so far.
    pub fn output(&self) -> String {
        report::render(self.matches.matches())
    }

    /// Whether the scan produced any matches.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Number of distinct matched items.
    pub fn match_count(&self) -> usize {
        self.matches.matches().len()
    }
}
