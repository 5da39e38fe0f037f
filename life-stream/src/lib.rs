pub mod types;
pub mod config;
pub mod cache;
pub mod fetcher;
pub mod parser;
pub mod classifier;
pub mod sources;
pub mod duration;
pub mod aggregator;
pub mod utils;

pub use types::*;
pub use config::{FetchConfig, Settings};
pub use cache::{CacheStore, CachedDocument, FileCacheStore, MemoryCacheStore};
pub use fetcher::{DocumentOrigin, FetchedDocument, Fetcher};
pub use parser::FeedParser;
pub use classifier::classify;
pub use duration::{relative_time, relative_time_at};
pub use aggregator::LifeStream;
