// src/config.rs

//! Application configuration structures.
//!
//! Configuration is a TOML file listing watch entries, each pairing a set of
//! labeled patterns with the feed URLs to scan for them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::search::pattern::PatternRule;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP fetching behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Seen-link store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Watch entries: pattern sets and the feeds they apply to
    #[serde(default)]
    pub watches: Vec<WatchConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::config("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::config("fetch.timeout_secs must be > 0"));
        }
        if self.watches.is_empty() {
            return Err(AppError::config("No watches defined"));
        }
        for watch in &self.watches {
            if watch.feeds.is_empty() {
                return Err(AppError::config(format!(
                    "Watch '{}' has no feeds",
                    watch.name
                )));
            }
            if watch.patterns.is_empty() {
                return Err(AppError::config(format!(
                    "Watch '{}' has no patterns",
                    watch.name
                )));
            }
            for feed_url in &watch.feeds {
                url::Url::parse(feed_url)?;
            }
            for rule in &watch.patterns {
                rule.compile()?;
            }
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Seen-link store settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the backing file for seen links
    #[serde(default = "defaults::store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: defaults::store_path(),
        }
    }
}

/// One watch entry: labeled patterns applied to a list of feeds.
///
/// Pattern order in the TOML array is the order patterns are evaluated in,
/// which fixes the label order inside a report entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Display name for logging
    #[serde(default)]
    pub name: String,

    /// Feed URLs to scan, in order
    pub feeds: Vec<String>,

    /// Labeled patterns, in evaluation order
    pub patterns: Vec<PatternRule>,
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; feedwatch/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn store_path() -> PathBuf {
        PathBuf::from("feedwatch.dat")
    }
}
