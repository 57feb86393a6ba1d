// src/search/matches.rs

//! Match records and their per-scan aggregation.

use std::collections::HashMap;

use crate::models::FeedItem;

/// A feed item together with the labels of every pattern that matched it.
#[derive(Debug, Clone)]
pub struct Match {
    /// The matching item
    pub item: FeedItem,

    /// Labels in the order their patterns hit; not deduplicated
    pub labels: Vec<String>,
}

/// Collects matches for one scan, unique by item link.
///
/// The first pattern hit on a link creates its `Match`; later hits on the
/// same link append to that match's labels instead of creating a duplicate.
/// Iteration order is first-hit insertion order.
#[derive(Debug, Default)]
pub struct MatchAggregator {
    matches: Vec<Match>,
    by_link: HashMap<String, usize>,
}

impl MatchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `label`'s pattern matched `item`.
    pub fn record_hit(&mut self, item: &FeedItem, label: &str) {
        match self.by_link.get(&item.link) {
            Some(&index) => self.matches[index].labels.push(label.to_string()),
            None => {
                self.by_link.insert(item.link.clone(), self.matches.len());
                self.matches.push(Match {
                    item: item.clone(),
                    labels: vec![label.to_string()],
                });
            }
        }
    }

    /// All matches in first-hit insertion order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(link: &str, title: &str) -> FeedItem {
        FeedItem {
            title: title.into(),
            link: link.into(),
            body: String::new(),
            published: 0,
        }
    }

    #[test]
    fn first_hit_creates_match() {
        let mut agg = MatchAggregator::new();
        agg.record_hit(&item("https://x/1", "one"), "a");
        assert_eq!(agg.matches().len(), 1);
        assert_eq!(agg.matches()[0].labels, vec!["a"]);
    }

    #[test]
    fn second_hit_on_same_link_appends_label() {
        let mut agg = MatchAggregator::new();
        let it = item("https://x/1", "one");
        agg.record_hit(&it, "a");
        agg.record_hit(&it, "b");
        assert_eq!(agg.matches().len(), 1);
        assert_eq!(agg.matches()[0].labels, vec!["a", "b"]);
    }

    #[test]
    fn duplicate_labels_are_kept() {
        let mut agg = MatchAggregator::new();
        let it = item("https://x/1", "one");
        agg.record_hit(&it, "a");
        agg.record_hit(&it, "a");
        assert_eq!(agg.matches()[0].labels, vec!["a", "a"]);
    }

    #[test]
    fn matches_keep_first_hit_order() {
        let mut agg = MatchAggregator::new();
        agg.record_hit(&item("https://x/2", "two"), "a");
        agg.record_hit(&item("https://x/1", "one"), "b");
        agg.record_hit(&item("https://x/2", "two"), "c");
        let links: Vec<&str> = agg.matches().iter().map(|m| m.item.link.as_str()).collect();
        assert_eq!(links, vec!["https://x/2", "https://x/1"]);
    }
}
