use crate::cache::{CacheStore, FileCacheStore};
use crate::classifier::classify;
use crate::config::Settings;
use crate::duration::relative_time_at;
use crate::fetcher::{FetchedDocument, Fetcher};
use crate::parser::FeedParser;
use crate::sources;
use crate::types::{AggregatorError, BlogEntry, Entry, RawFeedItem, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the display-ready entry lists for the buzz and blog feeds.
///
/// Every call re-reads the cache (or re-fetches) and materializes a new list.
/// Nothing here fails outright: unreachable feeds give stale or empty lists,
/// and items that cannot be normalized are skipped.
pub struct LifeStream<'a> {
    settings: &'a Settings,
    fetcher: Fetcher,
    force_refresh: bool,
}

impl<'a> LifeStream<'a> {
    /// Aggregator backed by flat cache files under `settings.cache_path`.
    pub fn new(settings: &'a Settings) -> Result<Self> {
        let cache = Arc::new(FileCacheStore::new(&settings.cache_path));
        Self::with_cache(settings, cache)
    }

    pub fn with_cache(settings: &'a Settings, cache: Arc<dyn CacheStore>) -> Result<Self> {
        let fetcher = Fetcher::new(&settings.fetch, cache)?;
        Ok(Self {
            settings,
            fetcher,
            force_refresh: false,
        })
    }

    /// Ignore fresh cached copies for the rest of this run.
    pub fn force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }

    /// Entries of the aggregated buzz feed, newest first as delivered.
    pub async fn buzz_entries(&self) -> Vec<Entry> {
        let url = self.settings.buzz_feed_url();
        self.build_entries(&url).await
    }

    /// Entries of the configured blog feed.
    pub async fn blog_entries(&self) -> Vec<BlogEntry> {
        let document = self.document(&self.settings.blog_feed).await;
        let items = parse_items(&document);
        assemble_blog_entries(&items, Utc::now())
    }

    /// Fetch the aggregated feed at `url` and turn each item into an [`Entry`].
    pub async fn build_entries(&self, url: &str) -> Vec<Entry> {
        let document = self.document(url).await;
        let items = parse_items(&document);
        assemble_entries(&items, self.settings, Utc::now())
    }

    /// Raw document at `url` through the cache.
    pub async fn document(&self, url: &str) -> FetchedDocument {
        let document = self
            .fetcher
            .read_or_fetch(url, self.settings.cache_timeout_seconds, self.force_refresh)
            .await;
        info!("{}", document.annotation());
        document
    }
}

fn parse_items(document: &FetchedDocument) -> Vec<RawFeedItem> {
    match FeedParser::parse_feed(&document.body) {
        Ok(feed) => feed.items,
        Err(e) => {
            warn!("Unreadable document from {}: {}", document.url, e);
            Vec::new()
        }
    }
}

/// Classify and normalize `items` in order, skipping any that fail.
pub fn assemble_entries(
    items: &[RawFeedItem],
    settings: &Settings,
    now: DateTime<Utc>,
) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match assemble_entry(item, settings, now) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping item {:?}: {}", item.title, e),
        }
    }
    info!("Assembled {}/{} entries", entries.len(), items.len());
    entries
}

pub fn assemble_entry(item: &RawFeedItem, settings: &Settings, now: DateTime<Utc>) -> Result<Entry> {
    let updated = item
        .updated
        .ok_or(AggregatorError::MissingField { field: "updated" })?;
    let source = classify(item, settings);
    let normalized = sources::normalize(source, item, settings)?;

    Ok(Entry {
        profile: normalized.profile,
        source,
        body: normalized.body,
        link: normalized.link,
        time: relative_time_at(updated, now),
    })
}

pub fn assemble_blog_entries(items: &[RawFeedItem], now: DateTime<Utc>) -> Vec<BlogEntry> {
    items
        .iter()
        .filter_map(|item| match sources::blog::normalize(item, now) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping blog item {:?}: {}", item.title, e);
                None
            }
        })
        .collect()
}
