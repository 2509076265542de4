//! Release bookkeeping for the Apollo modpack.
//!
//! This crate compares a packwiz modpack before and after an update, decides
//! how far the pack version should move, and renders the changelog for the
//! release.
//!
//! # Architecture
//!
//! Data flows one way through the modules:
//!
//! - [`manifest`] - Reads snapshots and the pack version from a packwiz pack
//! - [`filename`] - Recovers mod versions from artifact filenames
//! - [`diff`] - Computes added, removed and changed mods between snapshots
//! - [`classify`] - Decides the version bump, honoring an explicit override
//! - [`changelog`] - Renders and writes the Markdown changelog
//!
//! Everything between reading the manifests and writing the changelog is
//! pure: the same snapshots, version and override always produce the same
//! decision and byte-identical changelog text.
//!
//! # Example
//!
//! ```rust
//! use apollo_release::{ChangelogRenderer, Classification, Diff, PackageEntry, Version};
//!
//! let before = vec![PackageEntry::new("Foo", "foo-1.0.0.jar")];
//! let after = vec![PackageEntry::new("Foo", "foo-1.0.1.jar")];
//!
//! let diff = Diff::compute(&before, &after);
//! let release = Classification::classify(&diff, Version::new(1, 4, 2), None)?;
//! assert_eq!(release.version, Version::new(1, 4, 3));
//!
//! let text = ChangelogRenderer::default().render(&release, &diff);
//! assert!(text.contains("`Foo` was updated from `1.0.0` to `1.0.1`"));
//! # Ok::<(), apollo_release::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod changelog;
pub mod classify;
pub mod config;
pub mod diff;
pub mod error;
pub mod filename;
pub mod manifest;
pub mod version;

// Re-export main types
pub use changelog::{ChangelogRenderer, log_summary, write_changelog};
pub use classify::{BumpDecision, Classification};
pub use config::{ChangelogConfig, UpdaterConfig};
pub use diff::{ChangedEntry, Diff, Impact, PackageEntry, Snapshot};
pub use error::{Error, Result};
pub use filename::ParsedVersion;
pub use manifest::PackwizPack;
pub use version::{BumpType, Version};
