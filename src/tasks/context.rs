//! Shared context threaded through every task.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::config::Config;
use crate::exec::Executor;
use crate::logging::Logger;

/// Execution context for tasks: configuration, logging, shell-outs, and the
/// resolved home directory.
///
/// The home directory is injectable so integration tests can point a run at
/// a temporary directory instead of the real `$HOME`.
pub struct Context<'a> {
    pub config: &'a Config,
    pub log: &'a Logger,
    pub executor: &'a dyn Executor,
    pub home: PathBuf,
    pub dry_run: bool,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("home", &self.home)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl<'a> Context<'a> {
    /// Build a context, resolving the home directory from `home_override`
    /// or the platform default.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new(
        config: &'a Config,
        log: &'a Logger,
        executor: &'a dyn Executor,
        dry_run: bool,
        home_override: Option<PathBuf>,
    ) -> Result<Self> {
        let home = home_override
            .or_else(dirs::home_dir)
            .context("could not determine home directory")?;
        Ok(Self {
            config,
            log,
            executor,
            home,
            dry_run,
        })
    }

    /// Absolute destination path for a home-relative path.
    #[must_use]
    pub fn dest_path(&self, rel: &std::path::Path) -> PathBuf {
        self.home.join(rel)
    }
}
