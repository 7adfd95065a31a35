//! Sequential resource processing shared by all tasks.

use anyhow::Result;

use super::context::Context;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Outcome of one task run, recorded in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// All resources were applied or already correct.
    Ok,
    /// Some resources could not be applied (with a short reason).
    Skipped(String),
    /// Dry run: changes were reported but not made.
    DryRun,
}

/// Per-resource counters accumulated over one task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub changed: usize,
    pub already_ok: usize,
    pub skipped: usize,
    pub would_change: usize,
}

impl TaskStats {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Changed => self.changed += 1,
            Outcome::AlreadyOk => self.already_ok += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::WouldChange => self.would_change += 1,
        }
    }

    fn summary(self) -> String {
        format!(
            "{} changed, {} ok, {} skipped",
            self.changed, self.already_ok, self.skipped
        )
    }
}

/// How a processing pass treats each resource state.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOpts {
    /// Verb used in per-resource log lines ("sync", "install", …).
    pub verb: &'static str,
    /// Apply resources whose state is [`ResourceState::Missing`].
    pub fix_missing: bool,
    /// Apply resources whose state is [`ResourceState::Incorrect`].
    pub fix_incorrect: bool,
    /// Abort the task on the first hard error instead of continuing.
    pub bail_on_error: bool,
}

impl ProcessOpts {
    /// Fix both missing and incorrect resources.
    #[must_use]
    pub const fn apply_all(verb: &'static str) -> Self {
        Self {
            verb,
            fix_missing: true,
            fix_incorrect: true,
            bail_on_error: true,
        }
    }

    /// Only create missing resources, leave existing ones alone.
    #[must_use]
    pub const fn install_missing(verb: &'static str) -> Self {
        Self {
            verb,
            fix_missing: true,
            fix_incorrect: false,
            bail_on_error: true,
        }
    }

    /// Continue past per-resource errors, counting them as skipped.
    #[must_use]
    pub const fn no_bail(mut self) -> Self {
        self.bail_on_error = false;
        self
    }
}

enum Outcome {
    Changed,
    AlreadyOk,
    Skipped,
    WouldChange,
}

/// Process resources one at a time, in order.
///
/// Each resource is checked and, when its state calls for it, applied.
/// Ordering is deterministic: resources are handled in the order given.
///
/// # Errors
///
/// Returns an error when a resource fails and `opts.bail_on_error` is set.
pub fn process_resources<R: Resource>(
    ctx: &Context,
    resources: impl IntoIterator<Item = R>,
    opts: &ProcessOpts,
) -> Result<TaskResult> {
    let mut stats = TaskStats::default();

    for resource in resources {
        match process_single(ctx, &resource, opts) {
            Ok(outcome) => stats.record(outcome),
            Err(e) => {
                if opts.bail_on_error {
                    return Err(e);
                }
                ctx.log
                    .warn(&format!("{}: {e:#}", resource.description()));
                stats.record(Outcome::Skipped);
            }
        }
    }

    if stats.would_change > 0 {
        return Ok(TaskResult::DryRun);
    }
    if stats.skipped > 0 {
        return Ok(TaskResult::Skipped(stats.summary()));
    }
    Ok(TaskResult::Ok)
}

fn process_single(ctx: &Context, resource: &impl Resource, opts: &ProcessOpts) -> Result<Outcome> {
    let state = resource.current_state()?;
    let wants_fix = match &state {
        ResourceState::Missing => opts.fix_missing,
        ResourceState::Incorrect { .. } => opts.fix_incorrect,
        ResourceState::Correct => false,
        ResourceState::Invalid { reason } => {
            ctx.log
                .warn(&format!("{}: {reason}", resource.description()));
            return Ok(Outcome::Skipped);
        }
    };

    if !wants_fix {
        ctx.log.debug(&format!("ok: {}", resource.description()));
        return Ok(Outcome::AlreadyOk);
    }

    if ctx.dry_run {
        ctx.log
            .dry_run(&format!("{} {}", opts.verb, resource.description()));
        return Ok(Outcome::WouldChange);
    }

    match resource.apply()? {
        ResourceChange::Applied => {
            ctx.log
                .info(&format!("{} {}", opts.verb, resource.description()));
            Ok(Outcome::Changed)
        }
        ResourceChange::AlreadyCorrect => Ok(Outcome::AlreadyOk),
        ResourceChange::Skipped { reason } => {
            ctx.log
                .warn(&format!("skipped {}: {reason}", resource.description()));
            Ok(Outcome::Skipped)
        }
    }
}
