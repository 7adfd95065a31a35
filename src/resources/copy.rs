//! File copy resources: plain copies and marker-preserving merges.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::fs::{backup_file, ensure_parent_dir};
use super::{Resource, ResourceChange, ResourceState};
use crate::logging::Logger;
use crate::merge::Markers;

/// Copy a single file to a destination, backing up the destination first.
#[derive(Debug)]
pub struct CopyFile<'a> {
    source: PathBuf,
    dest: PathBuf,
    log: &'a Logger,
}

impl<'a> CopyFile<'a> {
    pub fn new(source: PathBuf, dest: PathBuf, log: &'a Logger) -> Self {
        Self { source, dest, log }
    }

    /// Back up the destination before overwriting. A failed backup is
    /// logged as a warning and the copy proceeds.
    fn backup_dest(&self) {
        match backup_file(&self.dest) {
            Ok(Some(backup)) => self.log.debug(&format!("backup: {}", backup.display())),
            Ok(None) => {}
            Err(e) => self.log.warn(&format!(
                "could not back up {}: {e:#}",
                self.dest.display()
            )),
        }
    }
}

impl Resource for CopyFile<'_> {
    fn description(&self) -> String {
        self.dest.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.source.exists() {
            return Ok(ResourceState::Invalid {
                reason: format!("source missing: {}", self.source.display()),
            });
        }
        if !self.dest.exists() {
            return Ok(ResourceState::Missing);
        }
        let source = std::fs::read(&self.source)
            .with_context(|| format!("failed to read {}", self.source.display()))?;
        let dest = std::fs::read(&self.dest)
            .with_context(|| format!("failed to read {}", self.dest.display()))?;
        if source == dest {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect {
                current: "content differs".to_string(),
            })
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        ensure_parent_dir(&self.dest)?;
        self.backup_dest();
        std::fs::copy(&self.source, &self.dest).with_context(|| {
            format!(
                "failed to copy {} to {}",
                self.source.display(),
                self.dest.display()
            )
        })?;
        Ok(ResourceChange::Applied)
    }
}

/// Copy a file while preserving the marker-delimited block already present
/// in the destination.
///
/// The destination ends up as the merge of the incoming source content with
/// the first marker-delimited block extracted from the current destination.
#[derive(Debug)]
pub struct MergeFile<'a> {
    source: PathBuf,
    dest: PathBuf,
    markers: Markers,
    log: &'a Logger,
}

impl<'a> MergeFile<'a> {
    pub fn new(source: PathBuf, dest: PathBuf, markers: Markers, log: &'a Logger) -> Self {
        Self {
            source,
            dest,
            markers,
            log,
        }
    }

    /// Compute the desired destination content. An unreadable destination is
    /// treated as having no preserved block.
    fn merged_content(&self) -> Result<String> {
        let incoming = std::fs::read_to_string(&self.source)
            .with_context(|| format!("failed to read {}", self.source.display()))?;
        let current = std::fs::read_to_string(&self.dest).ok();
        let block = current.as_deref().and_then(|doc| self.markers.extract(doc));
        Ok(self.markers.merge(&incoming, block))
    }
}

impl Resource for MergeFile<'_> {
    fn description(&self) -> String {
        format!("{} (merge)", self.dest.display())
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.source.exists() {
            return Ok(ResourceState::Invalid {
                reason: format!("source missing: {}", self.source.display()),
            });
        }
        if !self.dest.exists() {
            return Ok(ResourceState::Missing);
        }
        let desired = self.merged_content()?;
        let current = std::fs::read_to_string(&self.dest)
            .with_context(|| format!("failed to read {}", self.dest.display()))?;
        if current == desired {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect {
                current: "content differs".to_string(),
            })
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        let merged = self.merged_content()?;
        ensure_parent_dir(&self.dest)?;
        match backup_file(&self.dest) {
            Ok(Some(backup)) => self.log.debug(&format!("backup: {}", backup.display())),
            Ok(None) => {}
            Err(e) => self.log.warn(&format!(
                "could not back up {}: {e:#}",
                self.dest.display()
            )),
        }
        std::fs::write(&self.dest, merged)
            .with_context(|| format!("failed to write {}", self.dest.display()))?;
        Ok(ResourceChange::Applied)
    }
}
