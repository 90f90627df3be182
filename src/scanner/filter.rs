use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ReportError, Result};

/// Suffixes scanned when nothing else is configured.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".css", ".sass"];

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name ends with one of the configured suffixes and
/// whose path does not match any exclude pattern.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
    exclude_patterns: GlobSet,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl ExtensionFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// Extensions given without a leading dot are normalized (`js` -> `.js`).
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid or no extension is given.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let suffixes: Vec<String> = extensions
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(normalize_extension)
            .collect();
        if suffixes.is_empty() {
            return Err(ReportError::Config(
                "At least one file extension is required".to_string(),
            ));
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| ReportError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| ReportError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffixes,
            exclude_patterns,
        })
    }

    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn has_target_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| self.suffixes.iter().any(|s| name.ends_with(s.as_str())))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_target_suffix(path) && !self.is_excluded(path)
    }
}

fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
