use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::fs;
use std::path::Path;

use crate::tfidf::TermWeightTable;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub term: String,
    pub weight: f64,
}

/// The `limit` heaviest terms in table order.
pub fn chart_bars(table: &TermWeightTable, limit: usize) -> Vec<ChartBar> {
    table
        .top(limit)
        .iter()
        .map(|entry| ChartBar {
            term: entry.term.clone(),
            weight: entry.weight,
        })
        .collect()
}

/// Render a vertical bar chart of term weights to an SVG file.
pub fn render_bar_chart(bars: &[ChartBar], path: &Path) -> Result<()> {
    if bars.is_empty() {
        anyhow::bail!("No terms to plot");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create chart directory: {}", parent.display()))?;
        }
    }

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).context("Failed to draw chart background")?;

    let max_weight = bars.iter().map(|b| b.weight).fold(0.0, f64::max);
    let y_max = if max_weight > 0.0 { max_weight * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Top {} TF-IDF terms (health news)", bars.len()),
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(110)
        .y_label_area_size(60)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0.0..y_max)
        .context("Failed to build chart axes")?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Term")
        .y_desc("Mean TF-IDF")
        .x_labels(bars.len())
        .x_label_formatter(&|value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(i) => bars.get(*i).map(|b| b.term.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .draw()
        .context("Failed to draw chart mesh")?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(4)
                .data(bars.iter().enumerate().map(|(i, b)| (i, b.weight))),
        )
        .context("Failed to draw bars")?;

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pipeline::analyze;
    use crate::source::FALLBACK_HEADLINES;
    use crate::stemmer::IndonesianStemmer;
    use crate::tfidf::TermWeight;

    #[test]
    fn takes_the_heaviest_terms_in_order() {
        let entries = (0..30)
            .map(|i| TermWeight {
                term: format!("term{:02}", i),
                weight: i as f64 / 100.0,
            })
            .collect();
        let table = TermWeightTable::new(entries);

        let bars = chart_bars(&table, 20);

        assert_eq!(bars.len(), 20);
        assert_eq!(bars[0].term, "term29");
        assert_eq!(bars[19].term, "term10");
        assert!(bars.windows(2).all(|w| w[0].weight >= w[1].weight));
    }

    #[test]
    fn renders_fallback_corpus_to_svg() {
        let config = Config::new().unwrap();
        let headlines = FALLBACK_HEADLINES.iter().map(|s| s.to_string()).collect();
        let analysis = analyze(headlines, &IndonesianStemmer::new(), &config).unwrap();
        let bars = chart_bars(&analysis.term_weights, 20);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts").join("top_terms.svg");

        render_bar_chart(&bars, &path).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(bars[0].term.as_str()));
    }

    #[test]
    fn empty_chart_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_bar_chart(&[], &dir.path().join("chart.svg")).unwrap_err();
        assert!(err.to_string().contains("No terms"));
    }
}
