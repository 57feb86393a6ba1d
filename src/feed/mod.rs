//! Feed retrieval, parsing, and per-run caching.

pub mod cache;
pub mod fetch;
pub mod parse;

pub use cache::FeedCache;
pub use fetch::{FeedFetcher, HttpFetcher};
pub use parse::parse_feed;
