use std::fmt::Write;

use crate::error::Result;
use crate::report::{FileOutcome, FileReport, ScanReport};

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Line-per-file text report.
///
/// The report file uses `TextFormatter::plain()`; standard output adds the
/// header line and, when enabled, colors.
pub struct TextFormatter {
    use_colors: bool,
    header: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            use_colors: false,
            header: false,
        }
    }

    #[must_use]
    pub fn for_terminal(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            header: true,
        }
    }

    #[must_use]
    pub const fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Header stating how many entries were processed.
    #[must_use]
    pub fn header_line(total: usize) -> String {
        format!("Total files processed: {total}")
    }

    /// Render one entry without trailing newline or colors.
    #[must_use]
    pub fn entry_line(entry: &FileReport) -> String {
        match &entry.outcome {
            FileOutcome::Measured(m) => format!(
                "{} - Lines: {}, Functions: {}, Imports: {}",
                entry.path, m.lines, m.functions, m.imports
            ),
            FileOutcome::Failed(error) => format!("[ERROR] {}: {error}", entry.path),
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        if self.header {
            let header = Self::header_line(report.total());
            writeln!(output, "{}", self.colorize(&header, ansi::BOLD)).ok();
        }

        for entry in report.entries() {
            let line = Self::entry_line(entry);
            if entry.is_failed() {
                writeln!(output, "{}", self.colorize(&line, ansi::RED)).ok();
            } else {
                writeln!(output, "{line}").ok();
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
