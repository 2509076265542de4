//! Updater configuration types.
//!
//! Every field has a default matching the standard packwiz layout, so a
//! configuration file is only needed when a pack deviates from it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete updater configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UpdaterConfig {
    /// Pack metadata file, relative to the pack root.
    pub pack_file: String,
    /// Index directory holding mod metadata. Only index entries under it are mods.
    pub mods_dir: String,
    /// Changelog generation configuration.
    pub changelog: ChangelogConfig,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            pack_file: "pack.toml".to_string(),
            mods_dir: "mods/".to_string(),
            changelog: ChangelogConfig::default(),
        }
    }
}

impl UpdaterConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(
                format!("Failed to read {}: {e}", path.display()),
                "Pass an existing file to --config or omit it to use defaults",
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::config(
                format!("Failed to parse {}: {e}", path.display()),
                "Check the file against the documented keys: pack-file, mods-dir, [changelog]",
            )
        })
    }
}

/// Changelog generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Path to the changelog file, relative to the pack root.
    pub path: String,
    /// Top-level heading of the generated changelog.
    pub title: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: "CHANGELOG.md".to_string(),
            title: "Apollo Changelog".to_string(),
        }
    }
}
