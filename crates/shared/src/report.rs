use crate::clustering::ClusterOutcome;
use crate::config::Config;
use crate::themes::TermInsight;
use crate::tfidf::TermWeightTable;

pub struct ReportGenerator;

impl ReportGenerator {
    /// Ranked term table, one `rank. term weight` row per entry.
    pub fn term_table(table: &TermWeightTable, limit: usize) -> String {
        let rows = table.top(limit);
        let width = rows.iter().map(|e| e.term.len()).max().unwrap_or(4).max(4);

        let mut out = String::new();
        out.push_str(&format!("{:>3}  {:<width$}  {}\n", "#", "term", "mean tf-idf"));
        for (rank, entry) in rows.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}  {:<width$}  {:.6}\n",
                rank + 1,
                entry.term,
                entry.weight
            ));
        }
        out
    }

    pub fn interpretation(insights: &[TermInsight]) -> String {
        insights
            .iter()
            .map(|insight| format!("{}\n", insight))
            .collect()
    }

    /// Per-cluster header, rule and a few truncated example headlines.
    pub fn cluster_section(outcome: &ClusterOutcome, config: &Config) -> String {
        let mut out = String::new();

        for cluster in &outcome.clusters {
            out.push_str(&format!(
                "[Cluster {} - Theme: {}] ({} headlines)\n",
                cluster.id,
                cluster.theme_label(),
                cluster.members.len()
            ));
            out.push_str(&"-".repeat(80));
            out.push('\n');

            let examples = cluster
                .members
                .iter()
                .filter_map(|&index| outcome.documents.get(index))
                .take(config.examples_per_cluster);
            for document in examples {
                out.push_str(&format!(
                    "- {}...\n",
                    Self::truncate(&document.text, config.example_chars)
                ));
            }
            out.push('\n');
        }

        out
    }

    /// First `max_chars` characters, never splitting a character.
    pub fn truncate(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::{ClusterSummary, ClusteredDocument};
    use crate::tfidf::TermWeight;

    fn outcome(labels: &[usize], originals: &[String]) -> ClusterOutcome {
        let clusters = (0..3)
            .filter_map(|id| {
                let members: Vec<usize> = labels
                    .iter()
                    .enumerate()
                    .filter(|&(_, &l)| l == id)
                    .map(|(i, _)| i)
                    .collect();
                (!members.is_empty()).then(|| ClusterSummary {
                    id,
                    theme: vec!["sehat".into(), "anak".into()],
                    members,
                })
            })
            .collect();

        ClusterOutcome {
            assignments: labels.to_vec(),
            clusters,
            documents: originals
                .iter()
                .zip(labels)
                .map(|(t, &c)| ClusteredDocument {
                    text: t.clone(),
                    cluster: c,
                })
                .collect(),
        }
    }

    #[test]
    fn truncates_on_character_boundaries() {
        assert_eq!(ReportGenerator::truncate("kesehatan", 5), "keseh");
        assert_eq!(ReportGenerator::truncate("sehat", 120), "sehat");
        assert_eq!(ReportGenerator::truncate("ééé", 2), "éé");
    }

    #[test]
    fn term_table_lists_ranked_rows() {
        let table = TermWeightTable::new(vec![
            TermWeight {
                term: "anak".into(),
                weight: 0.25,
            },
            TermWeight {
                term: "sehat".into(),
                weight: 0.5,
            },
        ]);

        let text = ReportGenerator::term_table(&table, 20);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("sehat") && lines[1].contains("0.500000"));
        assert!(lines[2].trim_start().starts_with("2  anak"));
    }

    #[test]
    fn cluster_section_shows_three_examples_per_cluster() {
        let originals: Vec<String> = (0..6).map(|i| format!("Judul berita nomor {}", i)).collect();
        let outcome = outcome(&[0, 0, 0, 0, 2, 1], &originals);

        let text = ReportGenerator::cluster_section(&outcome, &Config::new().unwrap());

        assert!(text.starts_with("[Cluster 0 - Theme: sehat, anak] (4 headlines)\n"));
        assert!(text.contains(&"-".repeat(80)));
        assert!(text.contains("- Judul berita nomor 2...\n"));
        assert!(!text.contains("nomor 3"));
        let c1 = text.find("[Cluster 1").unwrap();
        let c2 = text.find("[Cluster 2").unwrap();
        assert!(c1 < c2);
    }

    #[test]
    fn examples_come_from_the_outcome_documents() {
        let originals = vec!["Kasus ISPA meningkat".to_string(), "y".into(), "z".into()];
        let mut outcome = outcome(&[0, 1, 2], &originals);
        outcome.clusters[0].members.push(9);

        let text = ReportGenerator::cluster_section(&outcome, &Config::new().unwrap());

        assert!(text.contains("- Kasus ISPA meningkat...\n"));
        assert!(text.contains("[Cluster 0 - Theme: sehat, anak] (2 headlines)\n"));
    }

    #[test]
    fn full_table_lists_every_term() {
        let entries = (0..50)
            .map(|i| TermWeight {
                term: format!("kata{:02}", i),
                weight: i as f64 / 100.0,
            })
            .collect();
        let table = TermWeightTable::new(entries);

        let text = ReportGenerator::term_table(&table, table.len());

        assert_eq!(text.lines().count(), 51);
        assert!(text.lines().last().unwrap().contains("kata00"));
    }

    #[test]
    fn long_examples_are_cut_to_the_configured_width() {
        let originals = vec!["x".repeat(200), "y".into(), "z".into()];
        let outcome = outcome(&[0, 1, 2], &originals);

        let text = ReportGenerator::cluster_section(&outcome, &Config::new().unwrap());

        assert!(text.contains(&format!("- {}...\n", "x".repeat(120))));
        assert!(!text.contains(&"x".repeat(121)));
    }
}
