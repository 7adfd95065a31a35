//! Per-tool settings sync task.

use anyhow::{Context as _, Result};

use super::context::Context;
use super::processing::{ProcessOpts, TaskResult, process_resources};
use super::Task;
use crate::config::{EntryKind, Tool};
use crate::resources::copy::{CopyFile, MergeFile};
use crate::resources::Resource;

/// Sync every entry of one tool table into the home directory.
///
/// Directory entries expand to one resource per contained file, optionally
/// filtered by extension. A missing source directory yields a single
/// resource in the invalid state so the skip shows up in the logs.
#[derive(Debug)]
pub struct SyncTool {
    tool: Tool,
    name: String,
}

impl SyncTool {
    #[must_use]
    pub fn new(tool: Tool) -> Self {
        let name = format!("Sync {} settings", tool.name);
        Self { tool, name }
    }

    fn resources<'a>(&self, ctx: &Context<'a>) -> Result<Vec<Box<dyn Resource + 'a>>> {
        let source_dir = ctx.config.root.join(&self.tool.source_dir);
        let mut resources: Vec<Box<dyn Resource + 'a>> = Vec::new();

        for entry in &self.tool.entries {
            let source = source_dir.join(&entry.source);
            let dest = ctx.dest_path(&entry.dest);
            match &entry.kind {
                EntryKind::File => {
                    resources.push(Box::new(CopyFile::new(source, dest, ctx.log)));
                }
                EntryKind::Merge => {
                    resources.push(Box::new(MergeFile::new(
                        source,
                        dest,
                        ctx.config.markers.clone(),
                        ctx.log,
                    )));
                }
                EntryKind::Dir { extension } => {
                    if !source.is_dir() {
                        // surfaces as an invalid resource (source missing)
                        resources.push(Box::new(CopyFile::new(source, dest, ctx.log)));
                        continue;
                    }
                    let mut names: Vec<_> = std::fs::read_dir(&source)
                        .with_context(|| format!("failed to list {}", source.display()))?
                        .collect::<Result<Vec<_>, _>>()
                        .with_context(|| format!("failed to list {}", source.display()))?
                        .into_iter()
                        .filter(|e| e.path().is_file())
                        .map(|e| e.file_name())
                        .filter(|name| match extension {
                            Some(ext) => std::path::Path::new(name)
                                .extension()
                                .and_then(std::ffi::OsStr::to_str)
                                .is_some_and(|e| e == ext),
                            None => true,
                        })
                        .collect();
                    names.sort();
                    for name in names {
                        resources.push(Box::new(CopyFile::new(
                            source.join(&name),
                            dest.join(&name),
                            ctx.log,
                        )));
                    }
                }
            }
        }

        Ok(resources)
    }
}

impl Task for SyncTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.root.join(&self.tool.source_dir).is_dir()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources = self.resources(ctx)?;
        process_resources(ctx, resources, &ProcessOpts::apply_all("sync").no_bail())
    }
}
