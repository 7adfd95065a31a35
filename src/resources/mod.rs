//! Idempotent resource primitives (check + apply pattern).
pub mod copy;
pub mod download;
pub mod fs;
pub mod package;

use anyhow::Result;

/// State of a resource (file, package, …).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist or is not present.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect {
        /// Short description of the current value.
        current: String,
    },
    /// Resource cannot be applied (e.g., the source file is missing).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
    /// Resource was skipped (e.g., an external tool reported failure).
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}

/// Unified interface for resources that can be checked and applied.
///
/// All sync primitives follow the same check-then-apply pattern:
///
/// ```ignore
/// let state = resource.current_state()?;
/// if resource.needs_change()? {
///     resource.apply()?;
/// }
/// ```
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined due to I/O
    /// failures or other system errors.
    fn current_state(&self) -> Result<ResourceState>;

    /// Apply the resource change.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be applied due to I/O
    /// failures, permission issues, or other system errors.
    fn apply(&self) -> Result<ResourceChange>;

    /// Determine if the resource needs to be changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Resource::current_state`].
    fn needs_change(&self) -> Result<bool> {
        Ok(matches!(
            self.current_state()?,
            ResourceState::Missing | ResourceState::Incorrect { .. }
        ))
    }
}

// Delegation so tasks can process heterogeneous resource lists.
impl Resource for Box<dyn Resource + '_> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn current_state(&self) -> Result<ResourceState> {
        (**self).current_state()
    }

    fn apply(&self) -> Result<ResourceChange> {
        (**self).apply()
    }
}

/// Shared test helpers for resource unit tests.
///
/// Provides a configurable [`MockExecutor`] so individual resource test
/// modules do not have to duplicate the boilerplate.
#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::exec::{ExecResult, Executor};

    /// A configurable mock executor for resource unit tests.
    ///
    /// Maintains a queue of `(success, stdout)` responses consumed in FIFO
    /// order. When the queue is empty any call returns a failed response.
    /// Every `run()`/`run_unchecked()` invocation is recorded as
    /// `(program, args)` so tests can assert exact command lines.
    #[derive(Debug)]
    pub struct MockExecutor {
        responses: Mutex<VecDeque<(bool, String)>>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
        which_result: bool,
    }

    impl MockExecutor {
        /// Create a mock with a single successful response.
        #[must_use]
        pub fn ok(stdout: &str) -> Self {
            Self::with_responses(vec![(true, stdout.to_string())])
        }

        /// Create a mock with a single failed response (empty stdout).
        #[must_use]
        pub fn fail() -> Self {
            Self::with_responses(vec![(false, String::new())])
        }

        /// Create a mock from an ordered list of `(success, stdout)` pairs.
        #[must_use]
        pub fn with_responses(responses: Vec<(bool, String)>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
                which_result: false,
            }
        }

        /// Set the value returned by every [`Executor::which`] call.
        #[must_use]
        pub fn with_which(mut self, result: bool) -> Self {
            self.which_result = result;
            self
        }

        /// Return the recorded `(program, args)` pairs.
        #[must_use]
        pub fn recorded_calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls
                .lock()
                .map(|guard| guard.clone())
                .unwrap_or_default()
        }

        fn next(&self, program: &str, args: &[&str]) -> (bool, String) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((
                    program.to_string(),
                    args.iter().map(|s| (*s).to_string()).collect(),
                ));
            }
            self.responses.lock().map_or_else(
                |_| (false, "mutex poisoned".to_string()),
                |mut guard| {
                    guard
                        .pop_front()
                        .unwrap_or_else(|| (false, "unexpected call".to_string()))
                },
            )
        }
    }

    impl Executor for MockExecutor {
        fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            let (success, stdout) = self.next(program, args);
            if success {
                Ok(ExecResult {
                    stdout,
                    stderr: String::new(),
                    success: true,
                    code: Some(0),
                })
            } else {
                anyhow::bail!("mock command failed")
            }
        }

        fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            let (success, stdout) = self.next(program, args);
            Ok(ExecResult {
                stdout,
                stderr: String::new(),
                success,
                code: Some(i32::from(!success)),
            })
        }

        fn which(&self, _: &str) -> bool {
            self.which_result
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    struct TestResource {
        state: ResourceState,
    }

    impl Resource for TestResource {
        fn description(&self) -> String {
            "test resource".to_string()
        }

        fn current_state(&self) -> Result<ResourceState> {
            Ok(self.state.clone())
        }

        fn apply(&self) -> Result<ResourceChange> {
            Ok(ResourceChange::Applied)
        }
    }

    #[test]
    fn needs_change_for_missing_resource() {
        let resource = TestResource {
            state: ResourceState::Missing,
        };
        assert!(resource.needs_change().unwrap());
    }

    #[test]
    fn needs_change_for_incorrect_resource() {
        let resource = TestResource {
            state: ResourceState::Incorrect {
                current: "wrong".to_string(),
            },
        };
        assert!(resource.needs_change().unwrap());
    }

    #[test]
    fn no_change_for_correct_resource() {
        let resource = TestResource {
            state: ResourceState::Correct,
        };
        assert!(!resource.needs_change().unwrap());
    }

    #[test]
    fn no_change_for_invalid_resource() {
        let resource = TestResource {
            state: ResourceState::Invalid {
                reason: "source missing".to_string(),
            },
        };
        assert!(!resource.needs_change().unwrap());
    }

    #[test]
    fn boxed_resource_delegates() {
        let boxed: Box<dyn Resource> = Box::new(TestResource {
            state: ResourceState::Missing,
        });
        assert_eq!(boxed.description(), "test resource");
        assert_eq!(boxed.current_state().unwrap(), ResourceState::Missing);
        assert_eq!(boxed.apply().unwrap(), ResourceChange::Applied);
    }
}
