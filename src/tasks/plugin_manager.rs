//! vim-plug installation task.

use anyhow::Result;

use super::context::Context;
use super::processing::{ProcessOpts, TaskResult, process_resources};
use super::Task;
use crate::resources::download::DownloadFile;

/// Upstream location of the vim-plug plugin manager.
pub const PLUG_URL: &str = "https://raw.githubusercontent.com/junegunn/vim-plug/master/plug.vim";

/// Home-relative path vim-plug is installed to.
pub const PLUG_DEST: &str = ".vim/autoload/plug.vim";

/// Download vim-plug into `~/.vim/autoload/` when vim settings are managed
/// and `curl` is available. An existing install is never re-fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallPlugManager;

impl Task for InstallPlugManager {
    fn name(&self) -> &str {
        "Install vim-plug"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.tool("vim").is_some() && ctx.executor.which("curl")
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let dest = ctx.dest_path(std::path::Path::new(PLUG_DEST));
        let resource = DownloadFile::new(PLUG_URL, dest, ctx.executor);
        process_resources(
            ctx,
            std::iter::once(resource),
            &ProcessOpts::install_missing("download"),
        )
    }
}
