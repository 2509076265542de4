//! `apollo-updater` entry point.

// The dry-run changelog goes to stdout
#![allow(clippy::print_stdout)]

use apollo_release::UpdaterConfig;
use apollo_updater::cli::{self, Cli};
use apollo_updater::logging::{LogFormat, LoggingConfig, init_logging};
use apollo_updater::{UpdateOptions, run_update};

fn main() -> miette::Result<()> {
    let cli = cli::parse();

    init_logging(LoggingConfig {
        format: if cli.json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
        level: cli.level.into(),
    })?;

    let config = match &cli.config {
        Some(path) => UpdaterConfig::load(path)?,
        None => UpdaterConfig::default(),
    };

    let outcome = run_update(&options(cli), &config)?;
    if outcome.changelog_path.is_none() {
        print!("{}", outcome.report);
    }

    Ok(())
}

fn options(cli: Cli) -> UpdateOptions {
    UpdateOptions {
        before: cli.before,
        after: cli.after,
        changelog: cli.changelog,
        modpack_version: cli.modpack_version,
        dry_run: cli.dry_run,
        no_bump: cli.no_bump,
    }
}
