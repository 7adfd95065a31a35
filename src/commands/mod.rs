//! Subcommand handlers.

pub mod sync;
