use anyhow::Result;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::error::AnalysisError;
use crate::extractor::{HeadingExtractor, PageFetcher};
use crate::io::{load_headlines, save_headlines};

/// Headlines used when neither the cache nor the live sources produce anything.
pub const FALLBACK_HEADLINES: [&str; 7] = [
    "Pentingnya menjaga kesehatan mental di masa modern",
    "Vaksinasi anak sekolah dasar tingkatkan kekebalan tubuh",
    "Kemenkes kampanye hidup sehat di masyarakat",
    "Dokter anjurkan olahraga rutin untuk jaga kebugaran",
    "Kasus ISPA meningkat saat musim hujan",
    "Cara cek tunggakan BPJS Kesehatan lewat HP",
    "Kemenkes rilis panduan pencegahan demam berdarah",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlineOrigin {
    Cache,
    Live,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Acquisition {
    pub headlines: Vec<String>,
    pub origin: HeadlineOrigin,
}

/// Fetch every URL once, in order. Failing sources are logged and skipped.
pub async fn scrape_headlines<F, E>(urls: &[Url], fetcher: &F, extractor: &E) -> Vec<String>
where
    F: PageFetcher,
    E: HeadingExtractor,
{
    let mut headlines = Vec::new();

    for url in urls {
        info!("Fetching headlines from {}", url);
        match fetcher.fetch_page(url).await {
            Ok(html) => {
                let found = extractor.extract_headings(&html);
                info!("Found {} headings at {}", found.len(), url);
                headlines.extend(found);
            }
            Err(e) => {
                warn!("Failed to fetch {}: {:#}", url, e);
            }
        }
    }

    headlines
}

/// Cache first, then a live scrape, then the fallback corpus.
pub async fn acquire_headlines<F, E>(
    config: &Config,
    fetcher: &F,
    extractor: &E,
) -> Result<Acquisition>
where
    F: PageFetcher,
    E: HeadingExtractor,
{
    if config.cache_path.exists() {
        info!("Reading cached headlines from {}", config.cache_path.display());
        let headlines = load_headlines(&config.cache_path)?;
        if !headlines.is_empty() {
            return Ok(Acquisition {
                headlines,
                origin: HeadlineOrigin::Cache,
            });
        }
    } else {
        let headlines = scrape_headlines(&config.sources, fetcher, extractor).await;
        if headlines.is_empty() {
            warn!("No headlines collected from any source; nothing will be cached");
        } else {
            save_headlines(&config.cache_path, &headlines)?;
            info!(
                "Cached {} headlines to {}",
                headlines.len(),
                config.cache_path.display()
            );
            return Ok(Acquisition {
                headlines,
                origin: HeadlineOrigin::Live,
            });
        }
    }

    info!("Using the built-in fallback headlines");
    Ok(Acquisition {
        headlines: FALLBACK_HEADLINES.iter().map(|s| s.to_string()).collect(),
        origin: HeadlineOrigin::Fallback,
    })
}

/// Scrape live and overwrite the cache, ignoring any existing cache file.
pub async fn refresh_cache<F, E>(config: &Config, fetcher: &F, extractor: &E) -> Result<usize>
where
    F: PageFetcher,
    E: HeadingExtractor,
{
    let headlines = scrape_headlines(&config.sources, fetcher, extractor).await;
    if headlines.is_empty() {
        return Err(AnalysisError::NoHeadlines.into());
    }

    save_headlines(&config.cache_path, &headlines)?;
    Ok(headlines.len())
}
