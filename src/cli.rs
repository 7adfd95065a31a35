use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the settings sync engine.
#[derive(Parser, Debug)]
#[command(
    name = "sync-settings",
    about = "Sync personal vim, zsh, and VS Code settings from a repository",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Override the settings repository root directory
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Override the home directory (mainly for testing)
    #[arg(long, global = true, hide = true)]
    pub home: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sync settings to the home directory and install packages
    Sync(SyncOpts),
    /// Print version information
    Version,
}

/// Options for the `sync` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct SyncOpts {
    /// Skip specific tasks
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific tasks
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}
