//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

pub const VIMRC: &str = "set number\nset expandtab\n";
pub const PLUGINS_VIM: &str = "call plug#begin('~/.vim/plugged')\ncall plug#end()\n";
pub const COLORSCHEME: &str = "hi Normal guibg=#272822\n";
pub const ZSHRC: &str = "export EDITOR=vim\nsource ~/.zsh_aliases\n";
pub const ZSH_ALIASES: &str = "alias g=git\nalias ll='ls -la'\n";
pub const ZSH_FUNCTIONS: &str = "mkcd() { mkdir -p \"$1\" && cd \"$1\"; }\n";
pub const VSCODE_SETTINGS: &str = "{\n  \"editor.tabSize\": 4\n}\n";
pub const VSCODE_KEYBINDINGS: &str = "[]\n";
pub const RUST_SNIPPET: &str = "{\n  \"derive\": { \"prefix\": \"dd\" }\n}\n";

/// A temporary settings repository plus an empty temporary home directory.
pub struct Fixture {
    _dir: tempfile::TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
}

impl Fixture {
    /// Build a repository with the standard vim/zsh/vscode layout and a
    /// Homebrew package list.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("settings");
        let home = dir.path().join("home");

        write(&root.join("vim/.vimrc"), VIMRC);
        write(&root.join("vim/plugins.vim"), PLUGINS_VIM);
        write(&root.join("vim/colors/molokai.vim"), COLORSCHEME);
        write(&root.join("vim/autoload/helpers.vim"), "\" helpers\n");
        write(&root.join("zsh/.zshrc"), ZSHRC);
        write(&root.join("zsh/.zsh_aliases"), ZSH_ALIASES);
        write(&root.join("zsh/.zsh_functions"), ZSH_FUNCTIONS);
        write(&root.join("vscode/settings.json"), VSCODE_SETTINGS);
        write(&root.join("vscode/keybindings.json"), VSCODE_KEYBINDINGS);
        write(&root.join("vscode/snippets/rust.json"), RUST_SNIPPET);
        write(&root.join("brew/homebrews.txt"), "# tools\nripgrep\nfzf\n");
        std::fs::create_dir_all(&home).expect("create home dir");

        Self {
            _dir: dir,
            root,
            home,
        }
    }

    /// Count backup files (`*.bak_*`) directly under `dir`.
    #[must_use]
    pub fn backup_count(&self, dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .filter(|e| e.file_name().to_string_lossy().contains(".bak_"))
                    .count()
            })
            .unwrap_or(0)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write fixture file");
}
