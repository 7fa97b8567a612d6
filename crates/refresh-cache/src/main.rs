use anyhow::{Context, Result};
use clap::Parser;
use shared::{refresh_cache, Config, HtmlHeadingExtractor, HttpFetcher};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "refresh-cache")]
#[command(about = "Scrape health-news headlines and rewrite the local cache")]
struct Args {
    /// Headline cache file to overwrite
    #[arg(short, long)]
    cache: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::new()?;
    if let Some(path) = args.cache {
        config = config.with_cache_path(path);
    }

    println!("🌐 Scraping {} sources...", config.sources.len());
    let fetcher = HttpFetcher::new(config.request_timeout)?;
    let extractor = HtmlHeadingExtractor::new(config.min_heading_chars)?;
    let written = refresh_cache(&config, &fetcher, &extractor)
        .await
        .context("Failed to refresh headline cache")?;

    println!(
        "\n✅ Cached {} headlines to: {}",
        written,
        config.cache_path.display()
    );

    Ok(())
}
