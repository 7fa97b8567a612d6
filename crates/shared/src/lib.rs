// Public modules
pub mod chart;
pub mod clustering;
pub mod config;
pub mod error;
pub mod extractor;
pub mod io;
pub mod kmeans;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod stemmer;
pub mod themes;
pub mod tfidf;

// Re-export commonly used types
pub use chart::{chart_bars, render_bar_chart, ChartBar};
pub use clustering::{cluster_documents, ClusterOutcome, ClusterSummary, ClusteredDocument};
pub use config::{Config, N_CLUSTERS};
pub use error::AnalysisError;
pub use extractor::{HeadingExtractor, HtmlHeadingExtractor, HttpFetcher, PageFetcher};
pub use io::{load_headlines, save_headlines};
pub use kmeans::{KMeans, KMeansFit};
pub use normalizer::{normalize, normalize_all};
pub use pipeline::{analyze, Analysis};
pub use report::ReportGenerator;
pub use source::{acquire_headlines, refresh_cache, scrape_headlines, Acquisition, HeadlineOrigin};
pub use stemmer::{IndonesianStemmer, Stemmer};
pub use themes::{interpret, TermInsight};
pub use tfidf::{DocumentTermMatrix, TermWeight, TermWeightTable, TfidfModel, TfidfVectorizer};
