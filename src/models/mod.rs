//! Data structures shared across modules.

pub mod item;

pub use item::{Feed, FeedItem};
