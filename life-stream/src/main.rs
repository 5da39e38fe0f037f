use anyhow::Context;
use clap::{Parser, ValueEnum};
use life_stream::{LifeStream, Settings};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FeedChoice {
    Buzz,
    Blog,
    All,
}

/// Print the normalized life stream as JSON.
#[derive(Debug, Parser)]
#[command(name = "life-stream", version)]
struct Args {
    /// JSON settings file; defaults are used for missing keys
    #[arg(long, env = "LIFE_STREAM_CONFIG")]
    config: Option<PathBuf>,

    /// Ignore fresh cached copies and fetch again
    #[arg(long)]
    flush: bool,

    /// Override the cache directory
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FeedChoice::All)]
    feed: FeedChoice,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::from_json_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let mut settings = settings.with_env_overrides()?;
    if let Some(dir) = args.cache_dir {
        settings.cache_path = dir;
    }

    info!("Starting life stream (cache: {})", settings.cache_path.display());

    let stream = LifeStream::new(&settings)?.force_refresh(args.flush);

    let output = match args.feed {
        FeedChoice::Buzz => serde_json::json!({ "buzz": stream.buzz_entries().await }),
        FeedChoice::Blog => serde_json::json!({ "blog": stream.blog_entries().await }),
        FeedChoice::All => serde_json::json!({
            "buzz": stream.buzz_entries().await,
            "blog": stream.blog_entries().await,
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
