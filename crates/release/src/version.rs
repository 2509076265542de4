//! Modpack version numbers and bump arithmetic.
//!
//! Modpack versions are plain `major.minor.patch` triples. Unlike package
//! versions they carry no pre-release or build metadata: anything other than
//! three numeric parts, optionally prefixed with `v`, is rejected.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Type of version bump for a modpack release.
///
/// There is no major bump: a new major version is only reached through an
/// explicit override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BumpType {
    /// No version change.
    None,
    /// Patch version bump (0.0.X).
    Patch,
    /// Minor version bump (0.X.0).
    Minor,
}

impl BumpType {
    /// Get the higher of two bump types.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Patch => write!(f, "patch"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// A three-part modpack version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version number.
    pub major: u64,
    /// Minor version number.
    pub minor: u64,
    /// Patch version number.
    pub patch: u64,
}

impl Version {
    /// Create a new version.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Apply a bump type to this version.
    ///
    /// # Errors
    ///
    /// Returns an error if the bumped component would exceed `u64::MAX`.
    pub fn bump(self, bump_type: BumpType) -> Result<Self> {
        let overflow = || Error::invalid_version(format!("{self} cannot be bumped ({bump_type})"));
        match bump_type {
            BumpType::Minor => {
                let minor = self.minor.checked_add(1).ok_or_else(overflow)?;
                Ok(Self::new(self.major, minor, 0))
            }
            BumpType::Patch => {
                let patch = self.patch.checked_add(1).ok_or_else(overflow)?;
                Ok(Self::new(self.major, self.minor, patch))
            }
            BumpType::None => Ok(self),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

        let parts: Vec<&str> = body.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::invalid_version(s));
        }

        let component = |part: &str, label: &str| -> Result<u64> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_version(format!(
                    "Invalid {label} version: {part}"
                )));
            }
            part.parse()
                .map_err(|_| Error::invalid_version(format!("Invalid {label} version: {part}")))
        };

        Ok(Self {
            major: component(parts[0], "major")?,
            minor: component(parts[1], "minor")?,
            patch: component(parts[2], "patch")?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
