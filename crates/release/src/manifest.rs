//! packwiz manifest reading and writing.
//!
//! A packwiz pack directory holds `pack.toml` (pack name, version, and the
//! location of the index), an index file listing every tracked file with its
//! hash, and one `*.pw.toml` metadata file per mod. Snapshots are built from
//! the index in order, keeping only the metadata files under the mods
//! directory.

use crate::config::UpdaterConfig;
use crate::diff::{PackageEntry, Snapshot};
use crate::error::{Error, Result};
use crate::version::Version;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::DocumentMut;
use tracing::debug;

const DEFAULT_INDEX_FILE: &str = "index.toml";

/// The parts of `pack.toml` the updater reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PackFile {
    version: Option<String>,
    #[serde(default)]
    index: PackIndexRef,
}

#[derive(Debug, Clone, Deserialize)]
struct PackIndexRef {
    #[serde(default = "default_index_file")]
    file: String,
}

impl Default for PackIndexRef {
    fn default() -> Self {
        Self {
            file: default_index_file(),
        }
    }
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

/// The packwiz index: every file tracked by the pack.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackwizIndex {
    /// Hash algorithm used for file hashes.
    pub hash_format: String,
    /// Tracked files in index order.
    #[serde(default)]
    pub files: Vec<PackwizIndexFile>,
}

/// A single file tracked by the packwiz index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackwizIndexFile {
    /// Path relative to the pack root.
    pub file: String,
    /// Hash of the file contents.
    pub hash: String,
    /// Whether the file is packwiz metadata rather than a pack file.
    #[serde(default)]
    pub metafile: bool,
}

/// The parts of a `*.pw.toml` mod metadata file the updater reads.
#[derive(Debug, Clone, Deserialize)]
struct ModFile {
    name: String,
    filename: String,
}

/// Handles reading and writing a packwiz pack directory.
#[derive(Debug, Clone)]
pub struct PackwizPack {
    root: PathBuf,
    pack_file: String,
    mods_dir: String,
}

impl PackwizPack {
    /// Create a pack handler for `root` using the standard packwiz layout.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self::with_config(root, &UpdaterConfig::default())
    }

    /// Create a pack handler for `root` using the file layout from `config`.
    #[must_use]
    pub fn with_config(root: &Path, config: &UpdaterConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            pack_file: config.pack_file.clone(),
            mods_dir: config.mods_dir.clone(),
        }
    }

    /// The pack root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn pack_path(&self) -> PathBuf {
        self.root.join(&self.pack_file)
    }

    fn read_pack_file(&self) -> Result<PackFile> {
        read_toml(&self.pack_path())
    }

    /// Read the pack version from `pack.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or has no valid version.
    pub fn read_version(&self) -> Result<Version> {
        let path = self.pack_path();
        let version = self
            .read_pack_file()?
            .version
            .ok_or_else(|| Error::manifest("No version found in pack file", Some(path)))?;
        version.parse()
    }

    /// Read the pack index referenced from `pack.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or parsed.
    pub fn read_index(&self) -> Result<PackwizIndex> {
        let pack = self.read_pack_file()?;
        read_toml(&self.root.join(pack.index.file))
    }

    /// Read the mods currently in the pack, in index order.
    ///
    /// # Errors
    ///
    /// Returns an error if the index or any mod metadata file cannot be read or parsed.
    pub fn read_snapshot(&self) -> Result<Snapshot> {
        let index = self.read_index()?;
        let mut entries = Vec::new();

        for file in &index.files {
            if !self.is_mod_file(&file.file) {
                debug!(file = %file.file, "Skipping index entry outside the mods directory");
                continue;
            }

            let metadata: ModFile = read_toml(&self.root.join(&file.file))?;
            entries.push(PackageEntry::new(metadata.name, metadata.filename));
        }

        debug!(
            root = %self.root.display(),
            mods = entries.len(),
            indexed = index.files.len(),
            "Read pack snapshot"
        );
        Ok(entries)
    }

    fn is_mod_file(&self, file: &str) -> bool {
        file.get(..self.mods_dir.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(&self.mods_dir))
    }

    /// Rewrite the `version` key of `pack.toml`, preserving the rest of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or written, or
    /// has no top-level `version` key.
    pub fn update_version(&self, new_version: &Version) -> Result<()> {
        let path = self.pack_path();
        let content = fs::read_to_string(&path).map_err(|e| {
            Error::manifest(
                format!("Failed to read {}: {e}", path.display()),
                Some(path.clone()),
            )
        })?;

        let mut doc = content.parse::<DocumentMut>().map_err(|e| {
            Error::manifest(
                format!("Failed to parse {}: {e}", path.display()),
                Some(path.clone()),
            )
        })?;

        let Some(version) = doc.get_mut("version").filter(|item| item.is_value()) else {
            return Err(Error::manifest(
                "Pack file is missing a top-level version key",
                Some(path),
            ));
        };
        *version = toml_edit::value(new_version.to_string());

        fs::write(&path, doc.to_string()).map_err(|e| {
            Error::manifest(
                format!("Failed to write {}: {e}", path.display()),
                Some(path),
            )
        })
    }
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::manifest(
            format!("Failed to read {}: {e}", path.display()),
            Some(path.to_path_buf()),
        )
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::manifest(
            format!("Failed to parse {}: {e}", path.display()),
            Some(path.to_path_buf()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PACK_TOML: &str = r#"name = "Apollo"
author = "OoLunar"
# bumped by the updater
version = "1.4.2"
pack-format = "packwiz:1.1.0"

[index]
file = "index.toml"
hash-format = "sha256"
hash = "abc"

[versions]
fabric = "0.14.21"
minecraft = "1.19.2"
"#;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn mod_toml(name: &str, filename: &str) -> String {
        format!(
            r#"name = "{name}"
filename = "{filename}"
side = "both"

[download]
url = "https://cdn.modrinth.com/data/x/{filename}"
hash-format = "sha512"
hash = "def"

[update.modrinth]
mod-id = "x"
version = "y"
"#
        )
    }

    fn create_test_pack(temp: &TempDir) -> PathBuf {
        let root = temp.path().to_path_buf();
        write(&root, "pack.toml", PACK_TOML);
        write(
            &root,
            "index.toml",
            r#"hash-format = "sha256"

[[files]]
file = "mods/sodium.pw.toml"
hash = "1"
metafile = true

[[files]]
file = "config/sodium-options.json"
hash = "2"

[[files]]
file = "Mods/Lithium.pw.toml"
hash = "3"
metafile = true
"#,
        );
        write(
            &root,
            "mods/sodium.pw.toml",
            &mod_toml("Sodium", "sodium-fabric-0.4.10.jar"),
        );
        write(
            &root,
            "Mods/Lithium.pw.toml",
            &mod_toml("Lithium", "lithium-fabric-mc1.19.2-0.10.4.jar"),
        );
        root
    }

    #[test]
    fn test_read_version() {
        let temp = TempDir::new().unwrap();
        let root = create_test_pack(&temp);
        let pack = PackwizPack::new(&root);
        assert_eq!(pack.read_version().unwrap(), Version::new(1, 4, 2));
    }

    #[test]
    fn test_read_version_missing() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pack.toml", "name = \"Apollo\"\n");
        let err = PackwizPack::new(temp.path()).read_version().unwrap_err();
        assert!(err.to_string().contains("No version found"));
    }

    #[test]
    fn test_read_version_invalid() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pack.toml", "version = \"1.4\"\n");
        let err = PackwizPack::new(temp.path()).read_version().unwrap_err();
        assert!(matches!(err, Error::InvalidVersion { .. }));
    }

    #[test]
    fn test_read_snapshot_keeps_index_order_and_mods_only() {
        let temp = TempDir::new().unwrap();
        let root = create_test_pack(&temp);

        let snapshot = PackwizPack::new(&root).read_snapshot().unwrap();
        assert_eq!(
            snapshot,
            vec![
                PackageEntry::new("Sodium", "sodium-fabric-0.4.10.jar"),
                PackageEntry::new("Lithium", "lithium-fabric-mc1.19.2-0.10.4.jar"),
            ]
        );
    }

    #[test]
    fn test_read_snapshot_default_index_location() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pack.toml", "version = \"0.1.0\"\n");
        write(
            temp.path(),
            "index.toml",
            "hash-format = \"sha256\"\n\n[[files]]\nfile = \"mods/a.pw.toml\"\nhash = \"1\"\n",
        );
        write(temp.path(), "mods/a.pw.toml", &mod_toml("A", "a-1.0.0.jar"));

        let snapshot = PackwizPack::new(temp.path()).read_snapshot().unwrap();
        assert_eq!(snapshot, vec![PackageEntry::new("A", "a-1.0.0.jar")]);
    }

    #[test]
    fn test_read_snapshot_custom_mods_dir() {
        let temp = TempDir::new().unwrap();
        let root = create_test_pack(&temp);
        let config = UpdaterConfig {
            mods_dir: "config/".to_string(),
            ..Default::default()
        };
        // The only entry under config/ has no mod metadata to read
        let err = PackwizPack::with_config(&root, &config)
            .read_snapshot()
            .unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
    }

    #[test]
    fn test_read_snapshot_missing_mod_file() {
        let temp = TempDir::new().unwrap();
        let root = create_test_pack(&temp);
        fs::remove_file(root.join("mods/sodium.pw.toml")).unwrap();

        let err = PackwizPack::new(&root).read_snapshot().unwrap_err();
        match err {
            Error::Manifest { path, .. } => {
                assert_eq!(path, Some(root.join("mods/sodium.pw.toml")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_index_malformed() {
        let temp = TempDir::new().unwrap();
        let root = create_test_pack(&temp);
        write(&root, "index.toml", "[[files]\n");
        assert!(PackwizPack::new(&root).read_index().is_err());
    }

    #[test]
    fn test_update_version_preserves_document() {
        let temp = TempDir::new().unwrap();
        let root = create_test_pack(&temp);
        let pack = PackwizPack::new(&root);

        pack.update_version(&Version::new(1, 5, 0)).unwrap();

        assert_eq!(pack.read_version().unwrap(), Version::new(1, 5, 0));
        let content = fs::read_to_string(root.join("pack.toml")).unwrap();
        assert!(content.contains("# bumped by the updater"));
        assert!(content.contains("minecraft = \"1.19.2\""));
        assert!(content.contains("version = \"1.5.0\""));
    }

    #[test]
    fn test_update_version_missing_key() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pack.toml", "name = \"Apollo\"\n");
        let err = PackwizPack::new(temp.path())
            .update_version(&Version::new(1, 0, 0))
            .unwrap_err();
        assert!(err.to_string().contains("missing a top-level version"));
    }
}
