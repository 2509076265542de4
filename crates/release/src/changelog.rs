//! Changelog rendering and persistence.
//!
//! The rendered report is Markdown with a fixed section order (new, removed,
//! updated). Sections only appear when they have entries, and entries keep
//! the order of the snapshots they came from, so identical input always
//! produces identical bytes.

use crate::classify::Classification;
use crate::config::ChangelogConfig;
use crate::diff::{ChangedEntry, Diff, PackageEntry};
use crate::error::{Error, Result};
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tracing::info;

/// Body used when the diff is empty.
pub const NO_CHANGES: &str = "No changes were made to the modpack.";

/// Renders classified diffs into changelog text.
#[derive(Debug, Clone, Default)]
pub struct ChangelogRenderer {
    config: ChangelogConfig,
}

impl ChangelogRenderer {
    /// Create a new renderer with the given configuration.
    #[must_use]
    pub const fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }

    /// Render the changelog for a release.
    #[must_use]
    pub fn render(&self, classification: &Classification, diff: &Diff) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "# {}", self.config.title);
        let _ = writeln!(output, "## Version {}", classification.version);

        if diff.is_empty() {
            let _ = writeln!(output, "{NO_CHANGES}");
            return output;
        }

        write_section(&mut output, "New Mod", &diff.added, format_entry);
        write_section(&mut output, "Removed Mod", &diff.removed, format_entry);
        write_section(&mut output, "Updated Mod", &diff.changed, format_change);
        output
    }
}

fn write_section<T>(output: &mut String, heading: &str, items: &[T], format: fn(&T) -> String) {
    if items.is_empty() {
        return;
    }

    let plural = if items.len() == 1 { "" } else { "s" };
    let _ = writeln!(output, "## {heading}{plural}\n");
    for item in items {
        let _ = writeln!(output, "- {}", format(item));
    }
}

fn format_entry(entry: &PackageEntry) -> String {
    format!("`{}`", entry.name)
}

fn format_change(change: &ChangedEntry) -> String {
    format!(
        "`{}` was updated from `{}` to `{}`",
        change.name(),
        change.old_display,
        change.new_display
    )
}

/// Log a one-line summary per diff category.
pub fn log_summary(diff: &Diff) {
    let names = |entries: &[PackageEntry]| {
        entries
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    match diff.added.as_slice() {
        [] => info!("No new mods were added."),
        [single] => info!(mod_name = %single.name, "New mod"),
        added => info!(count = added.len(), mods = %names(added), "New mods"),
    }

    match diff.removed.as_slice() {
        [] => info!("No mods were removed."),
        [single] => info!(mod_name = %single.name, "Removed mod"),
        removed => info!(count = removed.len(), mods = %names(removed), "Removed mods"),
    }

    if diff.changed.is_empty() {
        info!("No mods were updated.");
        return;
    }
    if diff.changed.len() > 1 {
        info!(count = diff.changed.len(), "Updated mods");
    }
    for change in &diff.changed {
        info!(
            mod_name = change.name(),
            from = %change.old_display,
            to = %change.new_display,
            impact = ?change.impact,
            "Updated mod"
        );
    }
}

/// Write a rendered changelog, replacing any previous file.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_changelog(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            Error::changelog_io_with_source(
                format!("Failed to create directory: {}", parent.display()),
                Some(parent.to_path_buf()),
                e,
            )
        })?;
    }

    fs::write(path, report).map_err(|e| {
        Error::changelog_io_with_source(
            format!("Failed to write changelog: {}", path.display()),
            Some(path.to_path_buf()),
            e,
        )
    })
}
