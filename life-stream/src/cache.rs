use crate::types::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;
use tracing::debug;

/// A stored copy of a raw document and the time it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedDocument {
    pub body: String,
    pub modified: SystemTime,
}

impl CachedDocument {
    /// Whole seconds since the copy was written. Zero if the clock went backwards.
    pub fn age_seconds(&self, now: SystemTime) -> u64 {
        now.duration_since(self.modified)
            .unwrap_or(Duration::ZERO)
            .as_secs()
    }

    pub fn is_fresh(&self, timeout_seconds: u64, now: SystemTime) -> bool {
        self.age_seconds(now) < timeout_seconds
    }
}

/// Key-value storage for raw documents keyed by source URL.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Stored copy for `url`, if one exists.
    async fn get(&self, url: &str) -> Result<Option<CachedDocument>>;

    /// Replace the stored copy for `url`, stamping it with the current time.
    async fn put(&self, url: &str, body: &str) -> Result<()>;

    /// Age of the stored copy for `url`.
    async fn age(&self, url: &str) -> Result<Option<Duration>> {
        let now = SystemTime::now();
        Ok(self
            .get(url)
            .await?
            .map(|doc| Duration::from_secs(doc.age_seconds(now))))
    }
}

/// Filesystem-safe cache key: the URL with everything outside
/// `[A-Za-z0-9\s]` removed.
pub fn cache_key(url: &str) -> String {
    url.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect()
}

/// One flat file per URL under a cache directory. Files are never deleted.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    dir: PathBuf,
}

impl FileCacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(cache_key(url))
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn get(&self, url: &str) -> Result<Option<CachedDocument>> {
        let path = self.path_for(url);
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let modified = metadata.modified()?;
        let body = tokio::fs::read_to_string(&path).await?;
        Ok(Some(CachedDocument { body, modified }))
    }

    async fn put(&self, url: &str, body: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(url);
        tokio::fs::write(&path, body).await?;
        debug!("Wrote {} bytes to {}", body.len(), path.display());
        Ok(())
    }
}

/// In-process store. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    documents: RwLock<HashMap<String, CachedDocument>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy with an explicit modification time.
    pub async fn put_at(&self, url: &str, body: &str, modified: SystemTime) {
        let mut documents = self.documents.write().await;
        documents.insert(
            url.to_string(),
            CachedDocument {
                body: body.to_string(),
                modified,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, url: &str) -> Result<Option<CachedDocument>> {
        Ok(self.documents.read().await.get(url).cloned())
    }

    async fn put(&self, url: &str, body: &str) -> Result<()> {
        self.put_at(url, body, SystemTime::now()).await;
        Ok(())
    }
}
