//! Command-line interface for the modpack updater.

use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable forcing the released modpack version.
pub const MODPACK_VERSION_ENV: &str = "MODPACK_VERSION";

/// Compare two states of a packwiz modpack, bump its version and write the changelog.
#[derive(Parser, Debug)]
#[command(name = "apollo-updater")]
#[command(about = "Bump a packwiz modpack's version and write its changelog")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pack directory holding the previous release.
    #[arg(long, value_name = "DIR")]
    pub before: PathBuf,

    /// Pack directory holding the updated pack. Its pack.toml is rewritten on a bump.
    #[arg(long, value_name = "DIR")]
    pub after: PathBuf,

    /// Changelog output path. Relative paths resolve against the updated pack.
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Updater configuration file (TOML).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force the released version. Ignored unless it is a valid `major.minor.patch`.
    #[arg(long = "modpack-version", env = MODPACK_VERSION_ENV, value_name = "VERSION")]
    pub modpack_version: Option<String>,

    /// Print the changelog instead of writing files.
    #[arg(long)]
    pub dry_run: bool,

    /// Write the changelog but leave the pack version untouched.
    #[arg(long)]
    pub no_bump: bool,

    /// Logging verbosity level.
    #[arg(
        short = 'L',
        long,
        global = true,
        help = "Set logging level",
        default_value = "info",
        value_enum
    )]
    pub level: LogLevel,

    /// Emit logs as JSON.
    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json: bool,
}

/// Parse command line arguments into a CLI structure.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
