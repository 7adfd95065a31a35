//! Homebrew package installation task.

use anyhow::Result;

use super::context::Context;
use super::processing::{ProcessOpts, TaskResult, process_resources};
use super::Task;
use crate::resources::package::BrewPackage;

/// Install every package from the package list that is not yet present.
///
/// Does nothing when the list is empty or `brew` is not on PATH. A package
/// that fails to install is counted as skipped; the rest of the list is
/// still attempted.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallPackages;

impl Task for InstallPackages {
    fn name(&self) -> &str {
        "Install Homebrew packages"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.packages.is_empty() && ctx.executor.which("brew")
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = ctx
            .config
            .packages
            .iter()
            .map(|name| BrewPackage::new(name.clone(), ctx.executor));
        process_resources(
            ctx,
            resources,
            &ProcessOpts::install_missing("install").no_bail(),
        )
    }
}
