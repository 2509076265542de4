//! Version-bump classification for a computed diff.

use crate::diff::Diff;
use crate::error::Result;
use crate::version::{BumpType, Version};
use std::fmt;
use tracing::debug;

/// The kind of release a diff calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpDecision {
    /// Nothing changed; keep the current version.
    NoChange,
    /// Only same-minor artifact drift.
    PatchBump,
    /// Mods were added or removed, or a mod moved to a new minor version.
    MinorBump,
    /// An operator forced this exact version.
    ExplicitOverride(Version),
}

impl fmt::Display for BumpDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChange => write!(f, "no change"),
            Self::PatchBump => write!(f, "patch bump"),
            Self::MinorBump => write!(f, "minor bump"),
            Self::ExplicitOverride(version) => write!(f, "explicit override to {version}"),
        }
    }
}

/// A bump decision together with the version it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Which rule decided the new version.
    pub decision: BumpDecision,
    /// The pack version before this release.
    pub previous: Version,
    /// The pack version after this release.
    pub version: Version,
}

impl Classification {
    /// Decide the new pack version for `diff`.
    ///
    /// A valid `override_version` wins unconditionally. Otherwise additions,
    /// removals and minor-impact changes bump the minor version, patch-impact
    /// changes bump the patch version, and an empty diff keeps `current`.
    /// The major version is only ever changed through an override.
    ///
    /// # Errors
    ///
    /// Returns an error if the computed bump would overflow a component of
    /// `current`. An override is never bumped, so it cannot fail.
    pub fn classify(diff: &Diff, current: Version, override_version: Option<&str>) -> Result<Self> {
        if let Some(version) = override_version.and_then(parse_override) {
            return Ok(Self {
                decision: BumpDecision::ExplicitOverride(version),
                previous: current,
                version,
            });
        }

        let bump = diff.required_bump();
        let decision = match bump {
            BumpType::None => BumpDecision::NoChange,
            BumpType::Patch => BumpDecision::PatchBump,
            BumpType::Minor => BumpDecision::MinorBump,
        };

        Ok(Self {
            decision,
            previous: current,
            version: current.bump(bump)?,
        })
    }

    /// Whether the release moves the pack to a different version.
    #[must_use]
    pub fn version_changed(&self) -> bool {
        self.previous != self.version
    }
}

/// A blank or malformed override is treated as absent.
fn parse_override(raw: &str) -> Option<Version> {
    if raw.trim().is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(version) => Some(version),
        Err(err) => {
            debug!(override_version = raw, error = %err, "Ignoring invalid override version");
            None
        }
    }
}
