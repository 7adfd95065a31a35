//! Homebrew package resource.

use anyhow::Result;

use super::{Resource, ResourceChange, ResourceState};
use crate::exec::Executor;

/// A single Homebrew package.
///
/// Presence is queried with `brew list <name>`. When `brew install` fails the
/// list query is retried once: some formulae report errors on reinstall
/// attempts even though the package is present.
pub struct BrewPackage<'a> {
    name: String,
    executor: &'a dyn Executor,
}

impl<'a> BrewPackage<'a> {
    pub fn new(name: impl Into<String>, executor: &'a dyn Executor) -> Self {
        Self {
            name: name.into(),
            executor,
        }
    }

    fn is_installed(&self) -> Result<bool> {
        let result = self.executor.run_unchecked("brew", &["list", &self.name])?;
        Ok(result.success)
    }
}

impl std::fmt::Debug for BrewPackage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrewPackage")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Resource for BrewPackage<'_> {
    fn description(&self) -> String {
        format!("{} (brew)", self.name)
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.is_installed()? {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        let result = self
            .executor
            .run_unchecked("brew", &["install", &self.name])?;
        if result.success {
            return Ok(ResourceChange::Applied);
        }
        if self.is_installed()? {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        Ok(ResourceChange::Skipped {
            reason: format!("brew install failed: {}", result.stderr.trim()),
        })
    }
}
