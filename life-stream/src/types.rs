use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The service that produced an item in the aggregated feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceVariant {
    GoogleBuzz,
    GoogleReader,
    Twitter,
    Flickr,
    Git,
    Slashdot,
    Reddit,
}

impl SourceVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceVariant::GoogleBuzz => "google-buzz",
            SourceVariant::GoogleReader => "google-reader",
            SourceVariant::Twitter => "twitter",
            SourceVariant::Flickr => "flickr",
            SourceVariant::Git => "git",
            SourceVariant::Slashdot => "slashdot",
            SourceVariant::Reddit => "reddit",
        }
    }
}

impl fmt::Display for SourceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `media:content` attachment of a feed item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaAttachment {
    /// Page the attachment points at.
    pub url: String,
    /// Full-size image from the nested `media:player` element.
    pub player_url: Option<String>,
}

/// A single item of a fetched document, read-only once parsed.
#[derive(Debug, Clone, Default)]
pub struct RawFeedItem {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub updated: Option<DateTime<Utc>>,
    pub links: Vec<String>,
    pub media: Vec<MediaAttachment>,
}

impl RawFeedItem {
    /// First declared link of the item, if any.
    pub fn primary_link(&self) -> Option<&str> {
        self.links.first().map(|s| s.as_str())
    }
}

#[derive(Debug, Default)]
pub struct ParsedFeed {
    pub items: Vec<RawFeedItem>,
}

/// What a per-source normalizer produces for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub body: String,
    pub profile: String,
    pub link: String,
}

/// A display-ready record of the aggregated feed.
///
/// Every field is always populated; `link` is empty when the source has no
/// "read more" target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub profile: String,
    pub source: SourceVariant,
    pub body: String,
    pub link: String,
    pub time: String,
}

/// A display-ready record of the blog feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub link: String,
    pub title: String,
    pub body: String,
    pub time: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} when fetching {url}")]
    Status { url: String, status: u16 },

    #[error("Empty response from {url}")]
    EmptyResponse { url: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Item is missing {field}")]
    MissingField { field: &'static str },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
