use std::cmp::Ordering;

use crate::config::Config;
use crate::error::AnalysisError;
use crate::kmeans::KMeans;
use crate::tfidf::TfidfModel;

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub id: usize,
    /// Heaviest vocabulary terms by mean weight inside the cluster.
    pub theme: Vec<String>,
    /// Document indices, ascending.
    pub members: Vec<usize>,
}

impl ClusterSummary {
    pub fn theme_label(&self) -> String {
        self.theme.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusteredDocument {
    pub text: String,
    pub cluster: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOutcome {
    /// Cluster id per document index.
    pub assignments: Vec<usize>,
    /// Non-empty clusters in ascending id order.
    pub clusters: Vec<ClusterSummary>,
    pub documents: Vec<ClusteredDocument>,
}

/// Cluster the rows of the fitted matrix and label each cluster by its top terms.
///
/// `originals` are the un-normalized headlines, index-aligned with the matrix rows.
pub fn cluster_documents(
    model: &TfidfModel,
    originals: &[String],
    config: &Config,
) -> Result<ClusterOutcome, AnalysisError> {
    let matrix = model.matrix();
    if originals.len() != matrix.n_rows() {
        return Err(AnalysisError::LengthMismatch {
            documents: originals.len(),
            rows: matrix.n_rows(),
        });
    }

    let fit = KMeans::new(config.n_clusters, config.seed).fit(matrix.rows())?;

    let clusters = (0..config.n_clusters)
        .filter_map(|id| {
            let members: Vec<usize> = fit
                .labels
                .iter()
                .enumerate()
                .filter(|&(_, &label)| label == id)
                .map(|(i, _)| i)
                .collect();
            if members.is_empty() {
                return None;
            }

            let means = matrix.mean_of_rows(&members);
            let theme = top_terms(&means, model.vocabulary(), config.theme_terms);
            Some(ClusterSummary { id, theme, members })
        })
        .collect();

    let documents = originals
        .iter()
        .zip(&fit.labels)
        .map(|(text, &cluster)| ClusteredDocument {
            text: text.clone(),
            cluster,
        })
        .collect();

    Ok(ClusterOutcome {
        assignments: fit.labels,
        clusters,
        documents,
    })
}

/// The `n` terms with the highest score; equal scores keep vocabulary order.
fn top_terms(scores: &[f64], vocabulary: &[String], n: usize) -> Vec<String> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    order
        .into_iter()
        .take(n)
        .map(|i| vocabulary[i].clone())
        .collect()
}
