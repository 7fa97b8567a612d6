use thiserror::Error;

/// Failures of the analysis stages that callers may want to match on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("cannot weight an empty corpus: no documents were supplied")]
    EmptyCorpus,

    #[error("empty vocabulary: every document normalized to an empty string or to single-letter tokens")]
    EmptyVocabulary,

    #[error("cannot form {clusters} clusters from {documents} documents")]
    TooFewDocuments { documents: usize, clusters: usize },

    #[error("document count ({documents}) does not match matrix rows ({rows})")]
    LengthMismatch { documents: usize, rows: usize },

    #[error("no headlines could be collected from any source")]
    NoHeadlines,
}
