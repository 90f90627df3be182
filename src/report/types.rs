use std::path::{Path, PathBuf};

use crate::metrics::FileMetrics;

/// Result of measuring one file: either its metrics or why it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Measured(FileMetrics),
    Failed(String),
}

/// Measurement for a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    pub outcome: FileOutcome,
}

impl FileReport {
    #[must_use]
    pub fn measured(path: impl Into<String>, metrics: FileMetrics) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Measured(metrics),
        }
    }

    #[must_use]
    pub fn failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Failed(error.into()),
        }
    }

    #[must_use]
    pub const fn metrics(&self) -> Option<&FileMetrics> {
        match &self.outcome {
            FileOutcome::Measured(metrics) => Some(metrics),
            FileOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Measured(_) => None,
            FileOutcome::Failed(error) => Some(error.as_str()),
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed(_))
    }
}

/// Ordered collection of file reports for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    root: PathBuf,
    entries: Vec<FileReport>,
}

impl ScanReport {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, entries: Vec<FileReport>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn entries(&self) -> &[FileReport] {
        &self.entries
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failed()).count()
    }

    #[must_use]
    pub fn measured_count(&self) -> usize {
        self.total() - self.failed_count()
    }

    /// Sum of metrics over all successfully measured files.
    #[must_use]
    pub fn totals(&self) -> FileMetrics {
        self.entries
            .iter()
            .filter_map(FileReport::metrics)
            .fold(FileMetrics::default(), |acc, m| acc.combine(*m))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
