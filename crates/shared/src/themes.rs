use std::fmt;

use crate::tfidf::TermWeightTable;

/// Known health-domain stems and the topic each one signals.
const THEME_TOPICS: [(&str, &str); 10] = [
    ("sehat", "gaya hidup sehat"),
    ("tubuh", "kesehatan fisik"),
    ("dokter", "pelayanan kesehatan"),
    ("rumah", "fasilitas kesehatan"),
    ("jantung", "penyakit jantung"),
    ("mental", "kesehatan mental"),
    ("vaksin", "imunisasi dan pencegahan penyakit"),
    ("bpjs", "asuransi kesehatan"),
    ("covid", "penyakit menular"),
    ("anak", "kesehatan anak"),
];

pub fn topic_for(term: &str) -> Option<&'static str> {
    THEME_TOPICS
        .iter()
        .find(|(stem, _)| *stem == term)
        .map(|(_, topic)| *topic)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermInsight {
    Known { term: String, topic: &'static str },
    General { term: String },
}

impl TermInsight {
    pub fn term(&self) -> &str {
        match self {
            TermInsight::Known { term, .. } | TermInsight::General { term } => term,
        }
    }
}

impl fmt::Display for TermInsight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermInsight::Known { term, topic } => {
                write!(f, "- '{}' points to a topic about {}.", term, topic)
            }
            TermInsight::General { term } => {
                write!(f, "- '{}' commonly appears in health discussions.", term)
            }
        }
    }
}

/// Interpret the `limit` heaviest terms.
pub fn interpret(table: &TermWeightTable, limit: usize) -> Vec<TermInsight> {
    table
        .top(limit)
        .iter()
        .map(|entry| match topic_for(&entry.term) {
            Some(topic) => TermInsight::Known {
                term: entry.term.clone(),
                topic,
            },
            None => TermInsight::General {
                term: entry.term.clone(),
            },
        })
        .collect()
}
