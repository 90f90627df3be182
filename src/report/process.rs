use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ReportError, Result};
use crate::metrics::MetricsCounter;
use crate::output::{ScanProgress, display_path};
use crate::scanner::FileScanner;

use super::{FileReport, ScanReport};

/// Source of raw file contents (for testability).
pub trait SourceReader {
    /// Read the whole file as bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Turns one scanned path into a [`FileReport`].
///
/// Read failures never escape: they become the entry's error text.
pub struct FileProcessor<R: SourceReader = FsSourceReader> {
    reader: R,
    counter: MetricsCounter,
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(FsSourceReader)
    }
}

impl<R: SourceReader> FileProcessor<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            counter: MetricsCounter::new(),
        }
    }

    #[must_use]
    pub fn process(&self, path: &Path, root: &Path) -> FileReport {
        let shown = display_path(path, Some(root));

        match self.read_source(path) {
            Ok(bytes) => {
                let metrics = self.counter.count_bytes(&bytes);
                debug!(
                    path = %shown,
                    lines = metrics.lines,
                    functions = metrics.functions,
                    imports = metrics.imports,
                    "measured"
                );
                FileReport::measured(shown, metrics)
            }
            Err(e) => {
                warn!(path = %shown, error = %e, "could not read file");
                FileReport::failed(shown, e.entry_message())
            }
        }
    }

    fn read_source(&self, path: &Path) -> Result<Vec<u8>> {
        self.reader
            .read(path)
            .map_err(|source| ReportError::FileAccess {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Scan `root` and measure every matching file, in walk order.
///
/// # Errors
/// Returns an error only if the scan itself fails (e.g. `root` is not a directory).
pub fn build_report<S, R>(
    scanner: &S,
    processor: &FileProcessor<R>,
    root: &Path,
    quiet: bool,
) -> Result<ScanReport>
where
    S: FileScanner,
    R: SourceReader,
{
    let files = scanner.scan(root)?;

    let progress = ScanProgress::new(files.len() as u64, quiet);
    let entries: Vec<FileReport> = files
        .iter()
        .map(|path| {
            let entry = processor.process(path, root);
            progress.inc();
            entry
        })
        .collect();
    progress.finish();

    let report = ScanReport::new(root, entries);
    info!(
        files = report.total(),
        errors = report.failed_count(),
        "scan finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
