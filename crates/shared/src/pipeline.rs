use crate::clustering::{cluster_documents, ClusterOutcome};
use crate::config::Config;
use crate::error::AnalysisError;
use crate::normalizer::normalize_all;
use crate::stemmer::Stemmer;
use crate::themes::{interpret, TermInsight};
use crate::tfidf::{TermWeightTable, TfidfModel, TfidfVectorizer};

/// Everything the offline stages produce from one set of headlines.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub headlines: Vec<String>,
    pub clean_documents: Vec<String>,
    pub model: TfidfModel,
    pub term_weights: TermWeightTable,
    pub insights: Vec<TermInsight>,
    pub clusters: ClusterOutcome,
}

/// Normalize, weight, interpret and cluster. The fitted model is computed once
/// and shared by every later stage.
pub fn analyze<S: Stemmer + ?Sized>(
    headlines: Vec<String>,
    stemmer: &S,
    config: &Config,
) -> Result<Analysis, AnalysisError> {
    let clean_documents = normalize_all(&headlines, stemmer);

    let model = TfidfVectorizer::new(config.max_features).fit_transform(&clean_documents)?;
    let term_weights = model.term_weights();
    let insights = interpret(&term_weights, config.top_terms);
    let clusters = cluster_documents(&model, &headlines, config)?;

    Ok(Analysis {
        headlines,
        clean_documents,
        model,
        term_weights,
        insights,
        clusters,
    })
}
