//! Feed and feed-item data structures.

/// A single entry from a syndication feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Item title, possibly still HTML-entity-escaped
    pub title: String,

    /// Canonical URL of the item, used as its unique identifier
    pub link: String,

    /// Body text (`content:encoded` where the feed supplies it,
    /// otherwise the item description)
    pub body: String,

    /// Publish timestamp in Unix seconds (0 when the feed gave none)
    pub published: i64,
}

/// A parsed feed: an ordered sequence of items.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    /// Items in the feed's native document order
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Number of items in the feed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
