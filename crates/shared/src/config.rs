use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Number of theme clusters. Fixed for every run.
pub const N_CLUSTERS: usize = 3;

const DEFAULT_SOURCES: [&str; 3] = [
    "https://www.kompas.com/tag/kesehatan",
    "https://health.detik.com/",
    "https://www.cnnindonesia.com/gaya-hidup/health",
];

/// Parameters for every pipeline stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub sources: Vec<Url>,
    pub cache_path: PathBuf,
    pub chart_path: PathBuf,
    pub request_timeout: Duration,
    /// Headings must be strictly longer than this many characters.
    pub min_heading_chars: usize,
    pub max_features: usize,
    pub n_clusters: usize,
    pub seed: u64,
    pub top_terms: usize,
    pub theme_terms: usize,
    pub examples_per_cluster: usize,
    pub example_chars: usize,
}

impl Config {
    pub fn new() -> Result<Self> {
        let sources = DEFAULT_SOURCES
            .iter()
            .map(|s| Url::parse(s).with_context(|| format!("Invalid source URL: {}", s)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            sources,
            cache_path: PathBuf::from("data").join("berita_kesehatan.txt"),
            chart_path: PathBuf::from("data").join("top_terms.svg"),
            request_timeout: Duration::from_secs(10),
            min_heading_chars: 15,
            max_features: 50,
            n_clusters: N_CLUSTERS,
            seed: 42,
            top_terms: 20,
            theme_terms: 5,
            examples_per_cluster: 3,
            example_chars: 120,
        })
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    pub fn with_chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chart_path = path.into();
        self
    }

    pub fn with_sources(mut self, sources: Vec<Url>) -> Self {
        self.sources = sources;
        self
    }
}
