use std::path::Path;

use crate::error::ConfigError;

/// Load package names from a newline-delimited list file.
///
/// Blank lines and lines starting with `#` are ignored. A missing file
/// yields an empty list.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
