mod filter;

pub use filter::{DEFAULT_EXTENSIONS, ExtensionFilter, FileFilter};

use std::fs::FileType;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, in walk order.
    ///
    /// A missing root or one that is not a directory yields no files.
    ///
    /// # Errors
    /// Returns an error if the scan cannot be performed.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive directory walker.
///
/// Entries within each directory are visited in file name order, so an
/// unchanged tree always yields the same sequence. Directory symlinks are not
/// followed; file symlinks (dangling ones included) are listed like files.
/// The filter sees paths relative to the scan root.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let included = self.filter.should_include(relative);
        if included {
            debug!(path = %path.display(), "matched");
        }
        included
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| is_file_entry(e.path(), e.file_type()))
            .filter(|e| self.accepts(root, e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_some_and(|ft| is_file_entry(e.path(), ft)))
            .filter(|e| self.accepts(root, e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

/// Regular files, plus symlinks that do not resolve to a directory.
fn is_file_entry(path: &Path, file_type: FileType) -> bool {
    file_type.is_file() || (file_type.is_symlink() && !path.is_dir())
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            warn!(root = %root.display(), "scan root is not a directory, nothing to scan");
            return Ok(Vec::new());
        }

        let files = if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        };
        debug!(root = %root.display(), count = files.len(), "scan complete");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
