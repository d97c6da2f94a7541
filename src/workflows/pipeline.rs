use crate::workflows::analysis::{AnalysisReport, Analyzer};
use crate::workflows::incidents::{IncidentGenerator, IncidentRecord};
use crate::workflows::news::{NewsGenerator, NewsRecord};
use crate::workflows::report::CollectionReport;
use crate::workflows::storage::{self, DataLayout, ProcessedOutputs, StorageError};
use chrono::{NaiveDateTime, SubsecRound};
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct CollectionOutcome {
    pub incidents: Vec<IncidentRecord>,
    pub news: Vec<NewsRecord>,
    pub report_path: PathBuf,
}

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub outputs: ProcessedOutputs,
}

/// Synthesizes both raw tables, overwrites them on disk and writes the
/// collection report next to them. `now` is truncated to whole seconds, the
/// precision `collected_at` is stored with.
pub fn collect<R: Rng + ?Sized>(
    layout: &DataLayout,
    incidents: &IncidentGenerator,
    news: &NewsGenerator,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<CollectionOutcome, StorageError> {
    layout.ensure_dirs()?;
    let now = now.trunc_subsecs(0);

    let incident_records = incidents.generate(rng, now);
    storage::write_incidents(&layout.incidents_path(), &incident_records)?;

    let news_records = news.generate(rng, now);
    storage::write_news(&layout.news_path(), &news_records)?;

    let report = CollectionReport {
        generated_at: now,
        incidents: Some(incident_records.as_slice()),
        news: Some(news_records.as_slice()),
    };
    let report_path = layout.collection_report_path();
    storage::write_text(&report_path, &report.to_markdown())?;
    info!(
        incidents = incident_records.len(),
        news = news_records.len(),
        report = %report_path.display(),
        "collection finished"
    );

    Ok(CollectionOutcome {
        incidents: incident_records,
        news: news_records,
        report_path,
    })
}

/// Loads whatever raw tables exist, derives the aggregate views and writes
/// them under the processed directory.
pub fn analyze(layout: &DataLayout, analyzer: &Analyzer) -> Result<AnalysisOutcome, StorageError> {
    layout.ensure_dirs()?;

    let incidents = storage::load_incidents(&layout.incidents_path())?;
    let news = storage::load_news(&layout.news_path())?;

    let report = analyzer.analyze(incidents.as_deref(), news.as_deref());
    let outputs = storage::write_analysis(layout, &report)?;
    info!(insights = report.insights.len(), "analysis finished");

    Ok(AnalysisOutcome { report, outputs })
}
