//! TF-IDF weighting over a frequency-capped vocabulary.
//!
//! Follows the conventional smoothed formulation: raw term counts, idf =
//! ln((1 + n) / (1 + df)) + 1, and L2-normalized document rows. Documents that
//! contain no vocabulary term keep an all-zero row so row `i` always belongs to
//! document `i`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::AnalysisError;

/// Dense document-term matrix. Rows are documents, columns are vocabulary terms.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTermMatrix {
    rows: Vec<Vec<f64>>,
    n_cols: usize,
}

impl DocumentTermMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Column means over the given rows. Zero vector for an empty selection.
    pub fn mean_of_rows(&self, indices: &[usize]) -> Vec<f64> {
        let mut sums = vec![0.0; self.n_cols];
        if indices.is_empty() {
            return sums;
        }

        for &i in indices {
            for (sum, value) in sums.iter_mut().zip(&self.rows[i]) {
                *sum += value;
            }
        }

        let count = indices.len() as f64;
        sums.iter_mut().for_each(|s| *s /= count);
        sums
    }

    pub fn column_means(&self) -> Vec<f64> {
        let all: Vec<usize> = (0..self.rows.len()).collect();
        self.mean_of_rows(&all)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

/// Mean TF-IDF per term, heaviest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeightTable {
    entries: Vec<TermWeight>,
}

impl TermWeightTable {
    /// Sorts by descending weight; equal weights are ordered by term.
    pub fn new(mut entries: Vec<TermWeight>) -> Self {
        entries.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[TermWeight] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[TermWeight] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weight_of(&self, term: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.term == term)
            .map(|e| e.weight)
    }
}

/// Fitted vocabulary, idf values and the matrix they produced.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    matrix: DocumentTermMatrix,
}

impl TfidfModel {
    /// Terms in column order (alphabetical).
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn matrix(&self) -> &DocumentTermMatrix {
        &self.matrix
    }

    pub fn term_weights(&self) -> TermWeightTable {
        let entries = self
            .vocabulary
            .iter()
            .zip(self.matrix.column_means())
            .map(|(term, weight)| TermWeight {
                term: term.clone(),
                weight,
            })
            .collect();

        TermWeightTable::new(entries)
    }
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    pub fn fit_transform(&self, documents: &[String]) -> Result<TfidfModel, AnalysisError> {
        if documents.is_empty() {
            return Err(AnalysisError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<&str>> = documents.iter().map(|d| tokenize(d)).collect();

        let mut corpus_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            for &token in tokens {
                *corpus_counts.entry(token).or_insert(0) += 1;
            }
            let unique: HashSet<&str> = tokens.iter().copied().collect();
            for token in unique {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        if corpus_counts.is_empty() {
            return Err(AnalysisError::EmptyVocabulary);
        }

        let vocabulary = self.select_vocabulary(&corpus_counts);
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq[term.as_str()] as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    if let Some(&col) = index.get(token) {
                        row[col] += 1.0;
                    }
                }
                for (value, weight) in row.iter_mut().zip(&idf) {
                    *value *= weight;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(TfidfModel {
            matrix: DocumentTermMatrix {
                rows,
                n_cols: vocabulary.len(),
            },
            vocabulary,
            idf,
        })
    }

    /// The `max_features` most frequent terms, returned alphabetically.
    fn select_vocabulary(&self, corpus_counts: &BTreeMap<&str, usize>) -> Vec<String> {
        let mut ranked: Vec<(&str, usize)> = corpus_counts.iter().map(|(t, c)| (*t, *c)).collect();
        // stable sort keeps alphabetical order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();
        vocabulary
    }
}

/// Whitespace tokens of at least two characters.
fn tokenize(document: &str) -> Vec<&str> {
    document
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .collect()
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|v| *v /= norm);
    }
}
