//! The `apollo-updater` run: diff two pack states, bump the version and
//! write the changelog.

use apollo_release::{
    ChangelogRenderer, Classification, Diff, PackwizPack, Result, UpdaterConfig, Version,
    log_summary, write_changelog,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Inputs for a single updater run.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Pack directory holding the previous release.
    pub before: PathBuf,
    /// Pack directory holding the updated pack.
    pub after: PathBuf,
    /// Changelog path overriding the configured one.
    pub changelog: Option<PathBuf>,
    /// Raw override version, if any.
    pub modpack_version: Option<String>,
    /// Render only, write nothing.
    pub dry_run: bool,
    /// Write the changelog but keep the pack version.
    pub no_bump: bool,
}

/// Result of an updater run.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// Bump decision and resulting version.
    pub classification: Classification,
    /// Differences between the two pack states.
    pub diff: Diff,
    /// Rendered changelog text.
    pub report: String,
    /// Where the changelog was written, `None` on a dry run.
    pub changelog_path: Option<PathBuf>,
    /// Whether `pack.toml` was rewritten.
    pub version_written: bool,
}

/// Run the updater against two pack directories.
///
/// # Errors
///
/// Returns an error if either pack cannot be read, if the pack version is
/// too large to bump, or if the changelog or pack file cannot be written.
pub fn run_update(options: &UpdateOptions, config: &UpdaterConfig) -> Result<UpdateOutcome> {
    let before = PackwizPack::with_config(&options.before, config);
    let after = PackwizPack::with_config(&options.after, config);

    let previous = before.read_snapshot()?;
    let current = after.read_snapshot()?;
    let current_version = after.read_version()?;

    let diff = Diff::compute(&previous, &current);
    let classification =
        Classification::classify(&diff, current_version, options.modpack_version.as_deref())?;
    debug!(
        decision = %classification.decision,
        previous = %classification.previous,
        version = %classification.version,
        "Classified pack changes"
    );
    log_summary(&diff);

    let report = ChangelogRenderer::new(config.changelog.clone()).render(&classification, &diff);

    if options.dry_run {
        return Ok(UpdateOutcome {
            classification,
            diff,
            report,
            changelog_path: None,
            version_written: false,
        });
    }

    let changelog_path = resolve_changelog_path(
        after.root(),
        options
            .changelog
            .as_deref()
            .unwrap_or_else(|| Path::new(&config.changelog.path)),
    );
    write_changelog(&changelog_path, &report)?;
    info!(path = %changelog_path.display(), "Wrote changelog");

    let version_written = classification.version_changed() && !options.no_bump;
    if version_written {
        after.update_version(&classification.version)?;
        log_version_change(classification.previous, classification.version);
    } else {
        info!("No changes were made to the modpack version.");
    }

    Ok(UpdateOutcome {
        classification,
        diff,
        report,
        changelog_path: Some(changelog_path),
        version_written,
    })
}

fn resolve_changelog_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn log_version_change(from: Version, to: Version) {
    info!(%from, %to, "Modpack updated from {from} to {to}");
}
