//! Pattern matching and scan engine.

pub mod engine;
pub mod matches;
pub mod pattern;

pub use engine::SearchEngine;
pub use matches::{Match, MatchAggregator};
pub use pattern::{Pattern, PatternRule, PatternSet};
