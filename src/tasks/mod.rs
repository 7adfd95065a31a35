//! Task orchestration: applicability checks, execution, and summary
//! recording.

pub mod context;
pub mod packages;
pub mod plugin_manager;
pub mod processing;
pub mod sync;

use anyhow::Result;

pub use context::Context;
pub use processing::{ProcessOpts, TaskResult, process_resources};

use crate::logging::TaskStatus;

/// A unit of work in a sync run.
///
/// Tasks decide for themselves whether they apply to the current
/// environment (`should_run`); inapplicable tasks are recorded in the
/// summary but otherwise ignored.
pub trait Task {
    /// Display name, also used for `--skip`/`--only` matching.
    fn name(&self) -> &str;

    /// Whether this task applies to the current environment.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Run the task.
    ///
    /// # Errors
    ///
    /// Returns an error when the task cannot complete. Errors are recorded
    /// in the summary by [`execute`]; they do not abort the run.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Run a task and record its outcome in the logger's summary.
///
/// A failing task is logged and recorded as failed; it never propagates an
/// error, so one broken task does not stop the tasks after it.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log.debug(&format!("not applicable: {}", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(task.name());
    match task.run(ctx) {
        Ok(TaskResult::Ok) => ctx.log.record_task(task.name(), TaskStatus::Ok, None),
        Ok(TaskResult::DryRun) => ctx.log.record_task(task.name(), TaskStatus::DryRun, None),
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::exec::SystemExecutor;
    use crate::logging::Logger;

    struct StubTask {
        applicable: bool,
        result: Result<TaskResult, String>,
    }

    impl Task for StubTask {
        fn name(&self) -> &str {
            "stub task"
        }

        fn should_run(&self, _: &Context) -> bool {
            self.applicable
        }

        fn run(&self, _: &Context) -> Result<TaskResult> {
            match &self.result {
                Ok(r) => Ok(r.clone()),
                Err(msg) => anyhow::bail!("{msg}"),
            }
        }
    }

    fn with_ctx(f: impl FnOnce(&Context, &Logger)) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        let log = Logger::new(false);
        let executor = SystemExecutor;
        let ctx = Context::new(&config, &log, &executor, false, Some(dir.path().into())).unwrap();
        f(&ctx, &log);
    }

    #[test]
    fn inapplicable_task_is_recorded_not_run() {
        with_ctx(|ctx, log| {
            let task = StubTask {
                applicable: false,
                result: Err("should never run".to_string()),
            };
            execute(&task, ctx);
            assert!(!log.has_failures());
        });
    }

    #[test]
    fn failing_task_is_recorded_not_propagated() {
        with_ctx(|ctx, log| {
            let task = StubTask {
                applicable: true,
                result: Err("boom".to_string()),
            };
            execute(&task, ctx);
            assert_eq!(log.failure_count(), 1);
        });
    }

    #[test]
    fn successful_task_has_no_failures() {
        with_ctx(|ctx, log| {
            let task = StubTask {
                applicable: true,
                result: Ok(TaskResult::Ok),
            };
            execute(&task, ctx);
            assert!(!log.has_failures());
        });
    }
}
