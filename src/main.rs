use anyhow::Result;
use clap::Parser;

use sync_settings::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let log = logging::Logger::new(args.verbose);

    match args.command {
        cli::Command::Sync(opts) => commands::sync::run(&args.global, &opts, &log),
        cli::Command::Version => {
            let version =
                option_env!("SYNC_SETTINGS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("sync-settings {version}");
            Ok(())
        }
    }
}
