use serde::Serialize;

use crate::error::Result;
use crate::report::{FileOutcome, FileReport, ScanReport};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: Vec<FileEntry<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    measured: usize,
    errors: usize,
    lines: usize,
    functions: usize,
    imports: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
enum FileEntry<'a> {
    Measured {
        path: &'a str,
        lines: usize,
        functions: usize,
        imports: usize,
    },
    Failed {
        path: &'a str,
        error: &'a str,
    },
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let totals = report.totals();
        let output = JsonOutput {
            summary: Summary {
                total_files: report.total(),
                measured: report.measured_count(),
                errors: report.failed_count(),
                lines: totals.lines,
                functions: totals.functions,
                imports: totals.imports,
            },
            files: report.entries().iter().map(convert_entry).collect(),
        };

        let mut rendered = serde_json::to_string_pretty(&output)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

fn convert_entry(entry: &FileReport) -> FileEntry<'_> {
    match &entry.outcome {
        FileOutcome::Measured(m) => FileEntry::Measured {
            path: &entry.path,
            lines: m.lines,
            functions: m.functions,
            imports: m.imports,
        },
        FileOutcome::Failed(error) => FileEntry::Failed {
            path: &entry.path,
            error,
        },
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
