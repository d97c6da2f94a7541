use super::{write_rows, StorageError};
use crate::workflows::incidents::{CrimeCategory, IncidentRecord};
use crate::workflows::news::{CategoryFlags, NewsRecord, SearchTerm};
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize, Deserialize)]
struct IncidentRow {
    year: i32,
    category: CrimeCategory,
    report_count: u64,
    removed_count: u64,
    collected_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct NewsRow {
    title: String,
    summary: String,
    published_date: NaiveDate,
    search_term: SearchTerm,
    url: String,
    monetary_value: f64,
    category_financial: bool,
    category_data_breach: bool,
    category_scam: bool,
    category_phishing: bool,
    category_malware: bool,
    category_social_media: bool,
}

impl From<&IncidentRecord> for IncidentRow {
    fn from(record: &IncidentRecord) -> Self {
        Self {
            year: record.year,
            category: record.category,
            report_count: record.report_count,
            removed_count: record.removed_count,
            collected_at: record.collected_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl From<&NewsRecord> for NewsRow {
    fn from(record: &NewsRecord) -> Self {
        let flags = record.category_flags;
        Self {
            title: record.title.clone(),
            summary: record.summary.clone(),
            published_date: record.published_date,
            search_term: record.search_term,
            url: record.url.clone(),
            monetary_value: record.monetary_value,
            category_financial: flags.financial,
            category_data_breach: flags.data_breach,
            category_scam: flags.scam,
            category_phishing: flags.phishing,
            category_malware: flags.malware,
            category_social_media: flags.social_media,
        }
    }
}

impl From<NewsRow> for NewsRecord {
    fn from(row: NewsRow) -> Self {
        Self {
            title: row.title,
            summary: row.summary,
            published_date: row.published_date,
            search_term: row.search_term,
            url: row.url,
            monetary_value: row.monetary_value,
            category_flags: CategoryFlags {
                financial: row.category_financial,
                data_breach: row.category_data_breach,
                scam: row.category_scam,
                phishing: row.category_phishing,
                malware: row.category_malware,
                social_media: row.category_social_media,
            },
        }
    }
}

pub fn write_incidents(path: &Path, records: &[IncidentRecord]) -> Result<(), StorageError> {
    let rows: Vec<IncidentRow> = records.iter().map(IncidentRow::from).collect();
    write_rows(path, &rows)?;
    info!(path = %path.display(), records = rows.len(), "saved incident records");
    Ok(())
}

pub fn write_news(path: &Path, records: &[NewsRecord]) -> Result<(), StorageError> {
    let rows: Vec<NewsRow> = records.iter().map(NewsRow::from).collect();
    write_rows(path, &rows)?;
    info!(path = %path.display(), records = rows.len(), "saved news records");
    Ok(())
}

/// Reads the incident table. A missing file is not an error: it yields
/// `Ok(None)` so analysis can skip the dependent steps.
pub fn load_incidents(path: &Path) -> Result<Option<Vec<IncidentRecord>>, StorageError> {
    let Some(rows) = read_rows::<IncidentRow>(path)? else {
        return Ok(None);
    };

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let collected_at = parse_timestamp(&row.collected_at).ok_or_else(|| {
            StorageError::InvalidValue {
                path: path.to_path_buf(),
                detail: format!("collected_at '{}' is not a timestamp", row.collected_at),
            }
        })?;
        if row.removed_count > row.report_count {
            return Err(StorageError::InvalidValue {
                path: path.to_path_buf(),
                detail: format!(
                    "{} {} removes {} of {} reports",
                    row.year,
                    row.category.label(),
                    row.removed_count,
                    row.report_count
                ),
            });
        }
        records.push(IncidentRecord {
            year: row.year,
            category: row.category,
            report_count: row.report_count,
            removed_count: row.removed_count,
            collected_at,
        });
    }

    info!(path = %path.display(), records = records.len(), "loaded incident records");
    Ok(Some(records))
}

pub fn load_news(path: &Path) -> Result<Option<Vec<NewsRecord>>, StorageError> {
    let Some(rows) = read_rows::<NewsRow>(path)? else {
        return Ok(None);
    };
    let records: Vec<NewsRecord> = rows.into_iter().map(NewsRecord::from).collect();
    info!(path = %path.display(), records = records.len(), "loaded news records");
    Ok(Some(records))
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, StorageError> {
    if !path.exists() {
        warn!(path = %path.display(), "input table not found");
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|source| StorageError::csv(path, source))?;
    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        rows.push(row.map_err(|source| StorageError::csv(path, source))?);
    }
    Ok(Some(rows))
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT) {
        return Some(timestamp);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_tables_load_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.csv");
        assert!(load_incidents(&path).expect("no error").is_none());
        assert!(load_news(&path).expect("no error").is_none());
    }

    #[test]
    fn parses_both_timestamp_shapes() {
        let full = parse_timestamp("2025-06-21 14:05:09").expect("full timestamp");
        assert_eq!(full.format(TIMESTAMP_FORMAT).to_string(), "2025-06-21 14:05:09");
        assert!(parse_timestamp("2025-06-21").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn rejects_removals_above_reports() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("incidents.csv");
        fs::write(
            &path,
            "year,category,report_count,removed_count,collected_at\n2006,Racismo,10,11,2025-06-21 10:00:00\n",
        )
        .expect("write fixture");

        match load_incidents(&path) {
            Err(StorageError::InvalidValue { detail, .. }) => assert!(detail.contains("Racismo")),
            other => panic!("expected invalid value error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_a_csv_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("incidents.csv");
        fs::write(
            &path,
            "year,category,report_count,removed_count,collected_at\n2006,Spam,10,1,2025-06-21 10:00:00\n",
        )
        .expect("write fixture");

        assert!(matches!(load_incidents(&path), Err(StorageError::Csv { .. })));
    }
}
