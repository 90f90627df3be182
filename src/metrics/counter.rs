use std::borrow::Cow;

use regex::Regex;

const FUNCTION_KEYWORD: &str = "function";
const IMPORT_KEYWORD: &str = "import";

/// Textual metrics of a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileMetrics {
    pub lines: usize,
    pub functions: usize,
    pub imports: usize,
}

impl FileMetrics {
    #[must_use]
    pub const fn new(lines: usize, functions: usize, imports: usize) -> Self {
        Self {
            lines,
            functions,
            imports,
        }
    }

    /// Component-wise sum, used for report totals.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            functions: self.functions + other.functions,
            imports: self.imports + other.imports,
        }
    }
}

/// Counts whole-word, case-sensitive occurrences of a single literal token.
///
/// Matching is purely textual: occurrences inside comments and string
/// literals are counted too.
#[derive(Debug, Clone)]
pub struct KeywordCounter {
    pattern: Regex,
}

impl KeywordCounter {
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            pattern: Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
                .expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> usize {
        self.pattern.find_iter(source).count()
    }
}

/// Computes [`FileMetrics`] from file contents.
#[derive(Debug, Clone)]
pub struct MetricsCounter {
    functions: KeywordCounter,
    imports: KeywordCounter,
}

impl Default for MetricsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: KeywordCounter::new(FUNCTION_KEYWORD),
            imports: KeywordCounter::new(IMPORT_KEYWORD),
        }
    }

    /// Count lines and keyword occurrences in decoded text.
    ///
    /// A trailing newline does not start an extra line; empty input has zero lines.
    #[must_use]
    pub fn count(&self, source: &str) -> FileMetrics {
        FileMetrics {
            lines: source.lines().count(),
            functions: self.functions.count(source),
            imports: self.imports.count(source),
        }
    }

    /// Count raw file bytes, replacing invalid UTF-8 sequences with U+FFFD.
    #[must_use]
    pub fn count_bytes(&self, bytes: &[u8]) -> FileMetrics {
        let text: Cow<'_, str> = String::from_utf8_lossy(bytes);
        self.count(&text)
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
