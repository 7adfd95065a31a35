pub mod manifest;
pub mod packages;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::merge::Markers;

/// How a sync entry is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Copy a single file, backing up the destination first.
    File,
    /// Copy a single file, preserving the marker-delimited block from the
    /// destination.
    Merge,
    /// Copy every file in a directory, optionally filtered by extension.
    Dir {
        /// Extension filter without the leading dot (e.g. `"vim"`).
        extension: Option<String>,
    },
}

/// One source→destination mapping inside a tool.
#[derive(Debug, Clone)]
pub struct Entry {
    /// File or directory name relative to the tool's source directory.
    pub source: String,
    /// Destination path relative to the home directory.
    pub dest: PathBuf,
    pub kind: EntryKind,
}

/// A tool whose settings are synced (vim, zsh, vscode, …).
#[derive(Debug, Clone)]
pub struct Tool {
    pub name: String,
    /// Source directory relative to the repository root.
    pub source_dir: PathBuf,
    pub entries: Vec<Entry>,
}

/// All loaded configuration for a sync run.
///
/// The per-tool path tables are an explicit structure (not module-level
/// constants) so tests can inject temporary directories.
#[derive(Debug)]
pub struct Config {
    pub root: PathBuf,
    pub tools: Vec<Tool>,
    /// Homebrew package names from the package list file.
    pub packages: Vec<String>,
    /// Markers delimiting the preserved work-specific block.
    pub markers: Markers,
}

impl Config {
    /// Load configuration for the repository at `root`.
    ///
    /// Reads `conf/sync.toml` when present, otherwise falls back to the
    /// built-in vim/zsh/vscode tables. The package list file is read either
    /// way; a missing list yields no packages.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest or package list cannot be read or
    /// parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let manifest_path = root.join("conf").join("sync.toml");
        let manifest = manifest::load(&manifest_path).context("loading conf/sync.toml")?;

        let (tools, markers, packages_file) = match manifest {
            Some(m) => m.into_parts()?,
            None => (
                default_tools(),
                Markers::default(),
                PathBuf::from("brew/homebrews.txt"),
            ),
        };

        let packages =
            packages::load(&root.join(packages_file)).context("loading package list")?;

        Ok(Self {
            root: root.to_path_buf(),
            tools,
            packages,
            markers,
        })
    }

    /// Look up a tool table by name.
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }
}

/// VS Code user settings directory, relative to the home directory.
#[must_use]
pub fn vscode_user_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from("Library/Application Support/Code/User")
    } else if cfg!(windows) {
        PathBuf::from("AppData/Roaming/Code/User")
    } else {
        PathBuf::from(".config/Code/User")
    }
}

/// Built-in source→destination tables mirroring the repository layout:
/// `vim/`, `zsh/`, and `vscode/` subdirectories.
#[must_use]
pub fn default_tools() -> Vec<Tool> {
    let vscode_dir = vscode_user_dir();
    vec![
        Tool {
            name: "vim".to_string(),
            source_dir: PathBuf::from("vim"),
            entries: vec![
                Entry {
                    source: ".vimrc".to_string(),
                    dest: PathBuf::from(".vimrc"),
                    kind: EntryKind::File,
                },
                Entry {
                    source: "colors".to_string(),
                    dest: PathBuf::from(".vim/colors"),
                    kind: EntryKind::Dir {
                        extension: Some("vim".to_string()),
                    },
                },
                Entry {
                    source: "autoload".to_string(),
                    dest: PathBuf::from(".vim/autoload"),
                    kind: EntryKind::Dir { extension: None },
                },
                Entry {
                    source: "plugins.vim".to_string(),
                    dest: PathBuf::from(".vim/plugins.vim"),
                    kind: EntryKind::File,
                },
            ],
        },
        Tool {
            name: "zsh".to_string(),
            source_dir: PathBuf::from("zsh"),
            entries: vec![
                Entry {
                    source: ".zshrc".to_string(),
                    dest: PathBuf::from(".zshrc"),
                    kind: EntryKind::Merge,
                },
                Entry {
                    source: ".zsh_aliases".to_string(),
                    dest: PathBuf::from(".zsh_aliases"),
                    kind: EntryKind::File,
                },
                Entry {
                    source: ".zsh_functions".to_string(),
                    dest: PathBuf::from(".zsh_functions"),
                    kind: EntryKind::File,
                },
            ],
        },
        Tool {
            name: "vscode".to_string(),
            source_dir: PathBuf::from("vscode"),
            entries: vec![
                Entry {
                    source: "settings.json".to_string(),
                    dest: vscode_dir.join("settings.json"),
                    kind: EntryKind::File,
                },
                Entry {
                    source: "keybindings.json".to_string(),
                    dest: vscode_dir.join("keybindings.json"),
                    kind: EntryKind::File,
                },
                Entry {
                    source: "snippets".to_string(),
                    dest: vscode_dir.join("snippets"),
                    kind: EntryKind::Dir {
                        extension: Some("json".to_string()),
                    },
                },
            ],
        },
    ]
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn default_tools_cover_vim_zsh_vscode() {
        let tools = default_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["vim", "zsh", "vscode"]);
    }

    #[test]
    fn default_zshrc_entry_is_merge() {
        let tools = default_tools();
        let zsh = tools.iter().find(|t| t.name == "zsh").unwrap();
        let zshrc = zsh.entries.iter().find(|e| e.source == ".zshrc").unwrap();
        assert_eq!(zshrc.kind, EntryKind::Merge);
    }

    #[test]
    fn default_colors_entry_filters_vim_extension() {
        let tools = default_tools();
        let vim = tools.iter().find(|t| t.name == "vim").unwrap();
        let colors = vim.entries.iter().find(|e| e.source == "colors").unwrap();
        assert_eq!(
            colors.kind,
            EntryKind::Dir {
                extension: Some("vim".to_string())
            }
        );
    }

    #[test]
    fn load_without_manifest_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.tools.len(), 3);
        assert!(config.packages.is_empty());
        assert_eq!(config.markers, Markers::default());
        assert_eq!(config.root, dir.path());
    }

    #[test]
    fn load_reads_package_list() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("brew")).unwrap();
        std::fs::write(
            dir.path().join("brew/homebrews.txt"),
            "# comment\nripgrep\n\nfzf\n",
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.packages, vec!["ripgrep", "fzf"]);
    }

    #[test]
    fn tool_lookup_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.tool("vim").is_some());
        assert!(config.tool("emacs").is_none());
    }
}
