//! Optional TOML manifest overriding the built-in sync tables.
//!
//! When `conf/sync.toml` exists it fully replaces the default vim/zsh/vscode
//! tables:
//!
//! ```toml
//! [markers]
//! start = "# WORK-SPECIFIC CONFIG START"
//! end = "# WORK-SPECIFIC CONFIG END"
//!
//! [packages]
//! file = "brew/homebrews.txt"
//!
//! [[tools]]
//! name = "zsh"
//! source = "zsh"
//!
//! [[tools.entries]]
//! source = ".zshrc"
//! dest = ".zshrc"
//! kind = "merge"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Entry, EntryKind, Tool};
use crate::error::ConfigError;
use crate::merge::Markers;

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    tools: Vec<ToolSection>,
    markers: Option<MarkerSection>,
    packages: Option<PackageSection>,
}

#[derive(Debug, Deserialize)]
struct ToolSection {
    name: String,
    source: PathBuf,
    #[serde(default)]
    entries: Vec<EntrySection>,
}

#[derive(Debug, Deserialize)]
struct EntrySection {
    source: String,
    dest: PathBuf,
    #[serde(default = "default_kind")]
    kind: String,
    extension: Option<String>,
}

fn default_kind() -> String {
    "file".to_string()
}

#[derive(Debug, Deserialize)]
struct MarkerSection {
    start: String,
    end: String,
}

#[derive(Debug, Deserialize)]
struct PackageSection {
    file: PathBuf,
}

/// Load the manifest at `path`, returning `None` when the file is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<Option<Manifest>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let manifest = toml::from_str(&content).map_err(|e| ConfigError::InvalidManifest {
        file: path.display().to_string(),
        message: e.message().to_string(),
    })?;
    Ok(Some(manifest))
}

impl Manifest {
    /// Convert the raw manifest into config tables, markers, and the
    /// package list path.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry names an unknown kind.
    pub fn into_parts(self) -> Result<(Vec<Tool>, Markers, PathBuf), ConfigError> {
        let mut tools = Vec::with_capacity(self.tools.len());
        for section in self.tools {
            let mut entries = Vec::with_capacity(section.entries.len());
            for entry in section.entries {
                let kind = match entry.kind.as_str() {
                    "file" => EntryKind::File,
                    "merge" => EntryKind::Merge,
                    "dir" => EntryKind::Dir {
                        extension: entry.extension,
                    },
                    other => {
                        return Err(ConfigError::UnknownEntryKind {
                            tool: section.name,
                            kind: other.to_string(),
                        });
                    }
                };
                entries.push(Entry {
                    source: entry.source,
                    dest: entry.dest,
                    kind,
                });
            }
            tools.push(Tool {
                name: section.name,
                source_dir: section.source,
                entries,
            });
        }

        let markers = self
            .markers
            .map_or_else(Markers::default, |m| Markers::new(m.start, m.end));
        let packages_file = self
            .packages
            .map_or_else(|| PathBuf::from("brew/homebrews.txt"), |p| p.file);

        Ok((tools, markers, packages_file))
    }
}
