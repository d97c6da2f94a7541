mod processed;
mod raw;

pub use processed::{write_analysis, ProcessedOutputs};
pub use raw::{load_incidents, load_news, write_incidents, write_news};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const INCIDENTS_FILE: &str = "incidents.csv";
pub const NEWS_FILE: &str = "news.csv";
pub const COLLECTION_REPORT_FILE: &str = "collection_report.md";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to encode analysis as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value in {path}: {detail}")]
    InvalidValue { path: PathBuf, detail: String },
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Directory structure under the configured data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join("raw")
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.root.join("processed")
    }

    pub fn incidents_path(&self) -> PathBuf {
        self.raw_dir().join(INCIDENTS_FILE)
    }

    pub fn news_path(&self) -> PathBuf {
        self.raw_dir().join(NEWS_FILE)
    }

    pub fn collection_report_path(&self) -> PathBuf {
        self.raw_dir().join(COLLECTION_REPORT_FILE)
    }

    pub fn ensure_dirs(&self) -> Result<(), StorageError> {
        for dir in [self.raw_dir(), self.processed_dir()] {
            fs::create_dir_all(&dir).map_err(|source| StorageError::io(&dir, source))?;
        }
        Ok(())
    }
}

pub fn write_text(path: &Path, contents: &str) -> Result<(), StorageError> {
    fs::write(path, contents).map_err(|source| StorageError::io(path, source))
}

pub(crate) fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StorageError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| StorageError::csv(path, source))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|source| StorageError::csv(path, source))?;
    }
    writer
        .flush()
        .map_err(|source| StorageError::io(path, source))
}
