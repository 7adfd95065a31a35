//! The `sync` subcommand: copy settings, install vim-plug, install packages.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::cli::{GlobalOpts, SyncOpts};
use crate::config::Config;
use crate::exec::SystemExecutor;
use crate::logging::Logger;
use crate::tasks::packages::InstallPackages;
use crate::tasks::plugin_manager::InstallPlugManager;
use crate::tasks::sync::SyncTool;
use crate::tasks::{self, Context, Task};

/// Run a full sync.
///
/// Individual task failures are recorded in the summary but do not fail the
/// run; only a hard error before any task starts (unresolvable root,
/// unreadable configuration) propagates to the caller.
///
/// # Errors
///
/// Returns an error if the settings root cannot be resolved, configuration
/// cannot be loaded, or the home directory cannot be determined.
pub fn run(global: &GlobalOpts, opts: &SyncOpts, log: &Logger) -> Result<()> {
    let root = resolve_root(global)?;

    log.stage("Loading configuration");
    let config = Config::load(&root)?;
    log.info(&format!("root: {}", root.display()));
    log.debug(&format!(
        "{} tools, {} packages",
        config.tools.len(),
        config.packages.len()
    ));
    if global.dry_run {
        log.info("dry run: no changes will be made");
    }

    let executor = SystemExecutor;
    let ctx = Context::new(&config, log, &executor, global.dry_run, global.home.clone())?;

    let mut all_tasks: Vec<Box<dyn Task>> = Vec::new();
    for tool in &config.tools {
        all_tasks.push(Box::new(SyncTool::new(tool.clone())));
    }
    all_tasks.push(Box::new(InstallPlugManager));
    all_tasks.push(Box::new(InstallPackages));

    for task in &all_tasks {
        if !task_selected(task.name(), opts) {
            log.debug(&format!("skipping: {}", task.name()));
            continue;
        }
        tasks::execute(task.as_ref(), &ctx);
    }

    log.print_summary();
    Ok(())
}

/// Match a task name against `--skip`/`--only` filters.
///
/// Matching is a case-insensitive substring test, so `--only zsh` selects
/// "Sync zsh settings" and `--skip packages` drops the Homebrew task.
fn task_selected(name: &str, opts: &SyncOpts) -> bool {
    let name = name.to_lowercase();
    if opts
        .skip
        .iter()
        .any(|s| name.contains(&s.to_lowercase()))
    {
        return false;
    }
    if opts.only.is_empty() {
        return true;
    }
    opts.only.iter().any(|s| name.contains(&s.to_lowercase()))
}

/// Resolve the settings repository root: `--root` flag, then the
/// `SYNC_SETTINGS_ROOT` environment variable, then the current directory
/// when it looks like a settings repository.
fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(root) = &global.root {
        if !root.is_dir() {
            bail!("settings root does not exist: {}", root.display());
        }
        return Ok(root.clone());
    }
    if let Ok(root) = std::env::var("SYNC_SETTINGS_ROOT") {
        let root = PathBuf::from(root);
        if !root.is_dir() {
            bail!("SYNC_SETTINGS_ROOT does not exist: {}", root.display());
        }
        return Ok(root);
    }
    let cwd = std::env::current_dir()?;
    if looks_like_settings_repo(&cwd) {
        return Ok(cwd);
    }
    bail!(
        "could not find a settings repository; pass --root or set SYNC_SETTINGS_ROOT"
    )
}

fn looks_like_settings_repo(dir: &std::path::Path) -> bool {
    ["conf/sync.toml", "vim", "zsh", "vscode"]
        .iter()
        .any(|p| dir.join(p).exists())
}
