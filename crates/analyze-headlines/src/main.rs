use anyhow::{Context, Result};
use clap::Parser;
use shared::{
    acquire_headlines, analyze, chart_bars, render_bar_chart, Config, HeadlineOrigin,
    HtmlHeadingExtractor, HttpFetcher, IndonesianStemmer, ReportGenerator,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "analyze-headlines")]
#[command(about = "Find recurring themes in Indonesian health-news headlines")]
struct Args {
    /// Headline cache file (read if present, written after a live scrape)
    #[arg(short, long)]
    cache: Option<PathBuf>,

    /// Where to write the top-terms bar chart (SVG)
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Skip rendering the chart
    #[arg(long)]
    no_chart: bool,
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
    if let Some(path) = args.chart {
        config = config.with_chart_path(path);
    }

    println!("=== Health news theme analysis ===\n");

    let fetcher = HttpFetcher::new(config.request_timeout)?;
    let extractor = HtmlHeadingExtractor::new(config.min_heading_chars)?;
    let acquired = acquire_headlines(&config, &fetcher, &extractor)
        .await
        .context("Failed to acquire headlines")?;

    let origin = match acquired.origin {
        HeadlineOrigin::Cache => "cache",
        HeadlineOrigin::Live => "live scrape",
        HeadlineOrigin::Fallback => "built-in examples",
    };
    println!(
        "✓ Total headlines to analyze: {} (from {})\n",
        acquired.headlines.len(),
        origin
    );

    println!("🔍 Normalizing, weighting and clustering...");
    let stemmer = IndonesianStemmer::new();
    let analysis = analyze(acquired.headlines, &stemmer, &config)
        .context("Failed to analyze headlines")?;

    let table = &analysis.term_weights;
    println!("\n=== All {} terms ranked by mean TF-IDF ===", table.len());
    print!("{}", ReportGenerator::term_table(table, table.len()));

    println!("\n=== What the top terms suggest ===");
    print!("{}", ReportGenerator::interpretation(&analysis.insights));

    println!("\n=== Automatic theme clusters ===\n");
    print!(
        "{}",
        ReportGenerator::cluster_section(&analysis.clusters, &config)
    );

    if args.no_chart {
        return Ok(());
    }

    println!("📊 Rendering chart...");
    let bars = chart_bars(&analysis.term_weights, config.top_terms);
    render_bar_chart(&bars, &config.chart_path).context("Failed to render chart")?;
    println!("\n✅ Chart saved to: {}", config.chart_path.display());

    Ok(())
}
