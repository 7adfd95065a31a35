//! Settings synchronization engine.
//!
//! Syncs personal configuration files for vim, zsh, and VS Code from a
//! source repository to their well-known locations under the home
//! directory, preserving the work-specific block in `.zshrc` across
//! updates, and installs Homebrew packages from a list file.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — per-tool source→destination tables and the package list
//! - **[`resources`]** — idempotent `check + apply` primitives (copies, merges, …)
//! - **[`tasks`]** — named units of work wired to resources
//! - **[`commands`]** — top-level subcommand orchestration (`sync`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod merge;
pub mod resources;
pub mod tasks;
