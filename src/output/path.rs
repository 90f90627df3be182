//! Path display utilities for consistent output formatting.

use std::path::Path;

/// Format a path for display, making it relative to the scan root if possible.
///
/// - If `root` is provided and `path` is a child of it, returns the relative path.
/// - Uses forward slashes as separators for consistent cross-platform output.
/// - Returns `"."` for empty relative paths (e.g., when path equals `root`).
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = normalize_separators(&relative.to_string_lossy());

    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
