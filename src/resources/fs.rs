//! Filesystem helpers shared by the file-based resources.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

/// Create the parent directory of `path` if it does not exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Copy `path` to a timestamped sibling (`<path>.bak_YYYYmmdd_HHMMSS`).
///
/// Returns the backup path, or `None` when `path` does not exist (nothing to
/// back up).
///
/// # Errors
///
/// Returns an error if the copy fails.
pub fn backup_file(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup = PathBuf::from(format!("{}.bak_{timestamp}", path.display()));
    std::fs::copy(path, &backup)
        .with_context(|| format!("failed to back up {}", path.display()))?;
    Ok(Some(backup))
}
