// src/feed/parse.rs

//! RSS document parsing.
//!
//! Raw bytes are normalized to UTF-8 lossily (invalid sequences become
//! replacement characters) before quick-xml deserialization, so feeds with
//! broken encodings still parse. Items without a `<link>` are dropped, since
//! the link is the item's identity everywhere downstream.

use chrono::DateTime;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Feed, FeedItem};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    // quick-xml's serde layer exposes `<content:encoded>` under its
    // local name
    #[serde(rename = "encoded")]
    content_encoded: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Parse raw feed bytes into a [`Feed`].
///
/// `source_url` is only used for error context.
pub fn parse_feed(source_url: &str, bytes: &[u8]) -> Result<Feed> {
    let text = String::from_utf8_lossy(bytes);
    let xml = scrub_html_entities(&text);

    let rss: Rss = from_str(&xml).map_err(|e| AppError::feed(source_url, e))?;

    let mut items = Vec::with_capacity(rss.channel.item.len());
    for it in rss.channel.item {
        let Some(link) = it.link else {
            continue;
        };
        let link = link.trim().to_string();
        if link.is_empty() {
            continue;
        }

        let body = it
            .content_encoded
            .or(it.description)
            .unwrap_or_default();

        items.push(FeedItem {
            title: it.title.unwrap_or_default(),
            link,
            body,
            published: it.pub_date.as_deref().map(parse_pub_date).unwrap_or(0),
        });
    }

    Ok(Feed { items })
}

/// Parse a feed timestamp to Unix seconds; RFC 2822 first (RSS convention),
/// RFC 3339 as a fallback, 0 when neither fits.
fn parse_pub_date(ts: &str) -> i64 {
    DateTime::parse_from_rfc2822(ts)
        .or_else(|_| DateTime::parse_from_rfc3339(ts))
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

/// Replace HTML-only entities that are not valid in plain XML.
fn scrub_html_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
