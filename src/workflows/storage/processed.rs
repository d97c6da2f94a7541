use super::{write_rows, write_text, DataLayout, StorageError};
use crate::workflows::analysis::{AnalysisReport, CategoryEvolution};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

const INSIGHTS_TITLE: &str = "Key findings - reported cyber-crime";

/// Files produced by [`write_analysis`], in write order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessedOutputs {
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TermRow<'a> {
    search_term: &'a str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct CategoryCountRow {
    category: &'static str,
    count: usize,
}

/// Writes every table the report contains plus `insights.txt` and
/// `analysis.json`. Sections that were skipped produce no file.
pub fn write_analysis(
    layout: &DataLayout,
    report: &AnalysisReport,
) -> Result<ProcessedOutputs, StorageError> {
    let dir = layout.processed_dir();
    let mut outputs = ProcessedOutputs::default();

    if let Some(trends) = &report.yearly_trends {
        let path = dir.join("yearly_trends.csv");
        write_rows(&path, trends)?;
        outputs.files.push(path);
    }

    if let Some(totals) = &report.category_totals {
        let path = dir.join("category_totals.csv");
        write_rows(&path, totals)?;
        outputs.files.push(path);
    }

    if let Some(evolution) = &report.category_evolution {
        let path = dir.join("category_evolution.csv");
        write_evolution(&path, evolution)?;
        outputs.files.push(path);
    }

    if let Some(news) = &report.news {
        let path = dir.join("news_terms.csv");
        let rows: Vec<TermRow<'_>> = news
            .term_distribution
            .iter()
            .map(|entry| TermRow {
                search_term: entry.search_term.label(),
                count: entry.count,
            })
            .collect();
        write_rows(&path, &rows)?;
        outputs.files.push(path);

        let path = dir.join("news_categories.csv");
        let rows: Vec<CategoryCountRow> = news
            .category_counts
            .iter()
            .map(|entry| CategoryCountRow {
                category: entry.category.key(),
                count: entry.count,
            })
            .collect();
        write_rows(&path, &rows)?;
        outputs.files.push(path);
    }

    let path = dir.join("insights.txt");
    write_text(&path, &render_insights(&report.insights))?;
    outputs.files.push(path);

    let path = dir.join("analysis.json");
    let json = serde_json::to_string_pretty(report)?;
    write_text(&path, &json)?;
    outputs.files.push(path);

    info!(
        dir = %dir.display(),
        files = outputs.files.len(),
        "saved processed outputs"
    );
    Ok(outputs)
}

fn write_evolution(path: &Path, evolution: &CategoryEvolution) -> Result<(), StorageError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| StorageError::csv(path, source))?;

    let mut header = vec!["year".to_string()];
    header.extend(evolution.categories.iter().map(|c| c.label().to_string()));
    writer
        .write_record(&header)
        .map_err(|source| StorageError::csv(path, source))?;

    for row in &evolution.rows {
        let mut record = vec![row.year.to_string()];
        record.extend(row.counts.iter().map(u64::to_string));
        writer
            .write_record(&record)
            .map_err(|source| StorageError::csv(path, source))?;
    }

    writer
        .flush()
        .map_err(|source| StorageError::io(path, source))
}

fn render_insights(insights: &[String]) -> String {
    let mut text = format!("{INSIGHTS_TITLE}\n{}\n\n", "=".repeat(50));
    for (index, insight) in insights.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", index + 1, insight));
    }
    text
}
