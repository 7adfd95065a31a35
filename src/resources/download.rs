//! One-shot file download via `curl`.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::fs::ensure_parent_dir;
use super::{Resource, ResourceChange, ResourceState};
use crate::exec::Executor;

/// Download a file to a destination if it does not already exist.
///
/// The download shells out to `curl` so proxy and TLS configuration from the
/// user's environment applies. An existing destination is never re-fetched.
pub struct DownloadFile<'a> {
    url: String,
    dest: PathBuf,
    executor: &'a dyn Executor,
}

impl<'a> DownloadFile<'a> {
    pub fn new(url: impl Into<String>, dest: PathBuf, executor: &'a dyn Executor) -> Self {
        Self {
            url: url.into(),
            dest,
            executor,
        }
    }
}

impl std::fmt::Debug for DownloadFile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadFile")
            .field("url", &self.url)
            .field("dest", &self.dest)
            .finish_non_exhaustive()
    }
}

impl Resource for DownloadFile<'_> {
    fn description(&self) -> String {
        self.dest.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.dest.exists() {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        ensure_parent_dir(&self.dest)?;
        let dest = self
            .dest
            .to_str()
            .context("destination path is not valid UTF-8")?;
        let result = self
            .executor
            .run_unchecked("curl", &["-fLo", dest, "--create-dirs", &self.url])?;
        if result.success {
            Ok(ResourceChange::Applied)
        } else {
            Ok(ResourceChange::Skipped {
                reason: format!("curl failed: {}", result.stderr.trim()),
            })
        }
    }
}
