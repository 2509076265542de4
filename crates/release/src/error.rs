//! Error types for modpack release operations.
//!
//! The diff engine recovers unparseable filenames and malformed override
//! versions locally; its only failure is a pack version too large to bump.
//! The remaining errors come from the surrounding file-system work: reading
//! packwiz manifests, writing the changelog and loading configuration.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing a modpack release.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Failed to parse or validate a version string.
    #[error("Invalid version: {version}")]
    #[diagnostic(
        code(apollo::release::invalid_version),
        help("Versions must have exactly three numeric parts (e.g., 1.4.0)")
    )]
    InvalidVersion {
        /// The invalid version string
        version: String,
    },

    /// A packwiz manifest file is missing, malformed, or incomplete.
    #[error("Manifest error: {message}")]
    #[diagnostic(
        code(apollo::release::manifest),
        help("Check that the pack directory contains a valid pack.toml and index.toml")
    )]
    Manifest {
        /// The error message
        message: String,
        /// The manifest file path
        path: Option<PathBuf>,
    },

    /// Failed to write the changelog file.
    #[error("Changelog I/O error: {message}")]
    #[diagnostic(
        code(apollo::release::changelog_io),
        help("Check that the changelog path is writable")
    )]
    ChangelogIo {
        /// The error message
        message: String,
        /// The path that caused the error
        path: Option<PathBuf>,
        /// The underlying source error
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration error.
    #[error("Updater configuration error: {message}")]
    #[diagnostic(code(apollo::release::config), help("{help}"))]
    Config {
        /// The error message
        message: String,
        /// Help text for the user
        help: String,
    },
}

impl Error {
    /// Create a new invalid version error.
    #[must_use]
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
        }
    }

    /// Create a new manifest error.
    #[must_use]
    pub fn manifest(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Manifest {
            message: message.into(),
            path,
        }
    }

    /// Create a new changelog I/O error with source.
    #[must_use]
    pub fn changelog_io_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::ChangelogIo {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: help.into(),
        }
    }
}
