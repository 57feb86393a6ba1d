// src/pipeline.rs

//! Scan orchestration.
//!
//! One run: load the seen-link store, walk every watch entry sequentially
//! with a shared feed cache, and persist the store only after every watch
//! succeeded. Any fetch or parse failure aborts the run before persisting,
//! so no partial dedup state is ever written.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::feed::{FeedCache, FeedFetcher};
use crate::search::SearchEngine;
use crate::store::LinkStore;

/// Run a full scan and return the concatenated report.
pub async fn run_scan(
    config: &Config,
    store_path: &Path,
    fetcher: &dyn FeedFetcher,
) -> Result<String> {
    let mut store = LinkStore::load(store_path)?;
    log::info!(
        "Loaded {} seen link(s) from {}",
        store.len(),
        store_path.display()
    );

    let mut cache = FeedCache::new();
    let mut output = String::new();

    for watch in &config.watches {
        let mut engine = SearchEngine::new(watch)?;
        engine.scan(&mut store, &mut cache, fetcher).await?;

        if engine.has_matches() {
            log::info!("Watch '{}': {} match(es)", watch.name, engine.match_count());
        }
        output.push_str(&engine.output());
    }

    store.persist()?;
    log::info!("Persisted {} seen link(s)", store.len());

    Ok(output)
}
