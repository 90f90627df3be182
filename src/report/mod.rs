//! Per-file report entries and the sequential scan that produces them.

mod process;
mod types;

pub use process::{FileProcessor, FsSourceReader, SourceReader, build_report};
pub use types::{FileOutcome, FileReport, ScanReport};
