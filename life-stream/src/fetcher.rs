use crate::cache::CacheStore;
use crate::config::FetchConfig;
use crate::types::{AggregatorError, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};
use url::Url;

/// Namespace prefix that upstream feeds emit without a usable declaration.
const MEDIA_PREFIX: &str = "media:";
const MEDIA_TOKEN: &str = "media";

/// Where the body of a [`FetchedDocument`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// Fresh cached copy, no network access.
    Cached { age_seconds: u64 },
    /// Live fetch, now also cached.
    Retrieved,
    /// Live fetch failed; the last cached copy was used regardless of age.
    StaleFallback { age_seconds: u64 },
    /// Live fetch failed and nothing was cached.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub url: String,
    pub body: String,
    pub origin: DocumentOrigin,
}

impl FetchedDocument {
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Markup comment describing where the document came from.
    pub fn annotation(&self) -> String {
        match self.origin {
            DocumentOrigin::Cached { age_seconds } => {
                format!("<!-- {} cached from {} seconds ago -->", self.url, age_seconds)
            }
            DocumentOrigin::Retrieved => format!("<!-- {} retrieved -->", self.url),
            DocumentOrigin::StaleFallback { age_seconds } => format!(
                "<!-- {} unavailable, using copy from {} seconds ago -->",
                self.url, age_seconds
            ),
            DocumentOrigin::Unavailable => format!("<!-- {} unavailable -->", self.url),
        }
    }
}

/// Rewrite the `media:` prefix to a plain element-name token.
pub fn rewrite_media_prefix(xml: &str) -> String {
    xml.replace(MEDIA_PREFIX, MEDIA_TOKEN)
}

pub struct Fetcher {
    client: Client,
    cache: Arc<dyn CacheStore>,
}

impl Fetcher {
    pub fn new(config: &FetchConfig, cache: Arc<dyn CacheStore>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, cache })
    }

    /// Return the document at `url`, preferring a cached copy younger than
    /// `timeout_seconds`.
    ///
    /// `force_refresh` skips the cached copy but still falls back to it when
    /// the live fetch fails. Never fails: with neither a fetch nor a cached
    /// copy the returned body is empty.
    pub async fn read_or_fetch(
        &self,
        url: &str,
        timeout_seconds: u64,
        force_refresh: bool,
    ) -> FetchedDocument {
        let now = SystemTime::now();
        let cached = match self.cache.get(url).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!("Cache read failed for {}: {}", url, e);
                None
            }
        };

        if !force_refresh {
            if let Some(doc) = cached.as_ref() {
                let age_seconds = doc.age_seconds(now);
                if doc.is_fresh(timeout_seconds, now) && !doc.body.is_empty() {
                    debug!("{} cached from {} seconds ago", url, age_seconds);
                    return FetchedDocument {
                        url: url.to_string(),
                        body: doc.body.clone(),
                        origin: DocumentOrigin::Cached { age_seconds },
                    };
                }
            }
        }

        match self.fetch_live(url).await {
            Ok(body) => {
                let body = rewrite_media_prefix(&body);
                if let Err(e) = self.cache.put(url, &body).await {
                    warn!("Failed to cache {}: {}", url, e);
                }
                info!("{} retrieved ({} bytes)", url, body.len());
                FetchedDocument {
                    url: url.to_string(),
                    body,
                    origin: DocumentOrigin::Retrieved,
                }
            }
            Err(e) => match cached {
                Some(doc) => {
                    let age_seconds = doc.age_seconds(now);
                    warn!(
                        "Fetch failed for {}: {}; using copy from {} seconds ago",
                        url, e, age_seconds
                    );
                    FetchedDocument {
                        url: url.to_string(),
                        body: doc.body,
                        origin: DocumentOrigin::StaleFallback { age_seconds },
                    }
                }
                None => {
                    warn!("Fetch failed for {} and nothing is cached: {}", url, e);
                    FetchedDocument {
                        url: url.to_string(),
                        body: String::new(),
                        origin: DocumentOrigin::Unavailable,
                    }
                }
            },
        }
    }

    /// Fetch `url` over the network. Non-success statuses and empty bodies
    /// count as failures.
    pub async fn fetch_live(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url)?;
        debug!("Fetching {}", parsed);

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AggregatorError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(AggregatorError::EmptyResponse {
                url: url.to_string(),
            });
        }
        Ok(body)
    }
}
