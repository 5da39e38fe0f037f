use crate::types::{AggregatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// HTTP client options used for live fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "life-stream/0.1".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Run configuration. Built once, then only ever borrowed.
///
/// The username and display-name strings serve two purposes: they build the
/// profile links of each source, and they are matched against feed text to
/// recognize which source produced an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of seconds a cached feed stays fresh.
    pub cache_timeout_seconds: u64,
    /// Directory holding one cache file per fetched URL.
    pub cache_path: PathBuf,
    pub blog_feed: String,
    /// Constant string in items shared via Google Reader from Reddit.
    pub reddit_title: String,
    /// Constant string in items shared via Google Reader from Slashdot.
    pub slashdot_title: String,
    /// First and last name found in buzz titles.
    pub buzz_fullname: String,
    pub buzz_username: String,
    pub twitter_username: String,
    pub git_username: String,
    pub reddit_username: String,
    pub flickr_username: String,
    pub fetch: FetchConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_timeout_seconds: 60 * 5,
            cache_path: PathBuf::from("db/feeds/"),
            blog_feed: "http://steve-mc.tumblr.com/rss".to_string(),
            reddit_title: "- reddit.com: what's new online! -".to_string(),
            slashdot_title: " - Slashdot - ".to_string(),
            buzz_fullname: "Stephen McDonald".to_string(),
            buzz_username: "stephen.mc".to_string(),
            twitter_username: "stephen_mcd".to_string(),
            git_username: "stephen-mcd".to_string(),
            reddit_username: "stevemcd".to_string(),
            flickr_username: "stephen_mcd".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&raw)?;
        Ok(settings)
    }

    /// Apply `LIFE_STREAM_*` environment variables on top of these settings.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(timeout) = lookup("LIFE_STREAM_CACHE_TIMEOUT") {
            self.cache_timeout_seconds = timeout.trim().parse().map_err(|_| {
                AggregatorError::Config(format!(
                    "LIFE_STREAM_CACHE_TIMEOUT must be a number of seconds, got {:?}",
                    timeout
                ))
            })?;
        }
        if let Some(path) = lookup("LIFE_STREAM_CACHE_PATH") {
            self.cache_path = PathBuf::from(path);
        }
        if let Some(feed) = lookup("LIFE_STREAM_BLOG_FEED") {
            self.blog_feed = feed;
        }
        if let Some(username) = lookup("LIFE_STREAM_BUZZ_USERNAME") {
            self.buzz_username = username;
        }
        Ok(self)
    }

    pub fn buzz_feed_url(&self) -> String {
        format!(
            "http://buzz.googleapis.com/feeds/{}/public/posted",
            self.buzz_username
        )
    }

    /// Fixed text in front of every buzz title, eg: "Buzz by Jane Doe from ".
    pub fn buzz_title_prefix(&self) -> String {
        format!("Buzz by {} from ", self.buzz_fullname)
    }

    pub fn twitter_profile(&self) -> String {
        format!("http://twitter.com/{}", self.twitter_username)
    }

    pub fn flickr_profile(&self) -> String {
        format!("http://flickr.com/photos/{}/", self.flickr_username)
    }

    pub fn git_profile(&self) -> String {
        format!("http://github.com/{}", self.git_username)
    }

    pub fn reddit_profile(&self) -> String {
        format!("http://www.reddit.com/user/{}", self.reddit_username)
    }

    pub fn google_profile(&self) -> String {
        format!("http://www.google.com/profiles/{}", self.buzz_username)
    }

    pub fn slashdot_profile(&self) -> String {
        "http://slashdot.org".to_string()
    }
}
