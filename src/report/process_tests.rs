use std::io;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::metrics::FileMetrics;
use crate::report::FileOutcome;
use crate::scanner::{DirectoryScanner, ExtensionFilter};

/// Fails for any path whose file name starts with `locked`.
struct FlakyReader;

impl SourceReader for FlakyReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if name.starts_with("locked") {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"))
        } else {
            std::fs::read(path)
        }
    }
}

fn write(dir: &TempDir, relative: &str, content: &[u8]) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn process_measures_readable_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/a.js", b"function a() {}\nimport b from 'b';");

    let processor = FileProcessor::default();
    let report = processor.process(&dir.path().join("src/a.js"), dir.path());

    assert_eq!(report.path, "src/a.js");
    assert_eq!(report.outcome, FileOutcome::Measured(FileMetrics::new(2, 1, 1)));
}

#[test]
fn process_records_read_failure_as_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "locked.js", b"function a() {}");

    let processor = FileProcessor::new(FlakyReader);
    let report = processor.process(&dir.path().join("locked.js"), dir.path());

    assert_eq!(report.path, "locked.js");
    assert_eq!(report.error(), Some("Permission denied"));
    assert!(report.metrics().is_none());
}

#[test]
fn process_missing_file_is_error_entry() {
    let dir = TempDir::new().unwrap();

    let processor = FileProcessor::default();
    let report = processor.process(&dir.path().join("gone.js"), dir.path());

    assert!(report.is_failed());
    assert!(!report.error().unwrap().is_empty());
}

#[test]
fn process_zero_byte_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "empty.css", b"");

    let processor = FileProcessor::default();
    let report = processor.process(&dir.path().join("empty.css"), dir.path());

    assert_eq!(report.metrics(), Some(&FileMetrics::default()));
}

#[test]
fn process_invalid_utf8_does_not_fail() {
    let dir = TempDir::new().unwrap();
    write(&dir, "bin.js", b"\xc3\x28 function\n\xa0\xa1");

    let processor = FileProcessor::default();
    let report = processor.process(&dir.path().join("bin.js"), dir.path());

    assert_eq!(report.metrics(), Some(&FileMetrics::new(2, 1, 0)));
}

#[test]
fn build_report_one_entry_per_target_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.js", b"function a() {}\nconsole.log(1);");
    write(&dir, "b.css", b"a{}\nb{}\nc{}\nd{}\ne{}");
    write(&dir, "c.txt", b"function import");

    let scanner = DirectoryScanner::new(ExtensionFilter::default());
    let report = build_report(&scanner, &FileProcessor::default(), dir.path(), true).unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.entries()[0], FileReport::measured("a.js", FileMetrics::new(2, 1, 0)));
    assert_eq!(report.entries()[1], FileReport::measured("b.css", FileMetrics::new(5, 0, 0)));
}

#[test]
fn build_report_continues_after_read_failure() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.js", b"import a from 'a';");
    write(&dir, "locked.jsx", b"function x() {}");
    write(&dir, "z/z.sass", b"@import 'b'");

    let scanner = DirectoryScanner::new(ExtensionFilter::default());
    let report =
        build_report(&scanner, &FileProcessor::new(FlakyReader), dir.path(), true).unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.failed_count(), 1);
    assert!(report.entries()[1].is_failed());
    assert_eq!(report.entries()[2].path, "z/z.sass");
    assert_eq!(report.totals().imports, 2);
}

#[test]
fn build_report_missing_root_is_empty() {
    let dir = TempDir::new().unwrap();

    let scanner = DirectoryScanner::new(ExtensionFilter::default());
    let report = build_report(
        &scanner,
        &FileProcessor::default(),
        &dir.path().join("nope"),
        true,
    )
    .unwrap();

    assert_eq!(report.total(), 0);
}

#[cfg(unix)]
#[test]
fn build_report_symlinks_measured_or_failed() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    write(&dir, "a.js", b"function a() {}");
    symlink(dir.path().join("a.js"), dir.path().join("link.js")).unwrap();
    symlink(dir.path().join("gone.js"), dir.path().join("dangling.js")).unwrap();

    let scanner = DirectoryScanner::new(ExtensionFilter::default());
    let report = build_report(&scanner, &FileProcessor::default(), dir.path(), true).unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.entries()[0], FileReport::measured("a.js", FileMetrics::new(1, 1, 0)));
    assert_eq!(report.entries()[1].path, "dangling.js");
    assert!(report.entries()[1].is_failed());
    assert_eq!(report.entries()[2], FileReport::measured("link.js", FileMetrics::new(1, 1, 0)));
}
