//! Package-set comparison between two modpack snapshots.
//!
//! Entries are matched by exact, case-sensitive name. Names present on both
//! sides are compared through their filenames: when both filenames carry a
//! recognizable version the change is classified by which component moved,
//! otherwise any filename difference counts as a minor-impact change.

use crate::filename::{ParsedVersion, eq_ignore_case};
use crate::version::BumpType;

/// One mod known to the pack at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageEntry {
    /// Human-readable mod name, unique within a snapshot.
    pub name: String,
    /// Artifact filename, which encodes the mod version.
    pub filename: String,
}

impl PackageEntry {
    /// Create a new package entry.
    #[must_use]
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
        }
    }
}

/// The full package list of a pack at one moment, in manifest order.
pub type Snapshot = Vec<PackageEntry>;

/// How strongly a single changed entry affects the pack version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Impact {
    /// Same `major.minor`, different patch or suffix.
    Patch,
    /// Different `major.minor`, or an unparseable filename change.
    Minor,
}

impl Impact {
    /// The pack bump this impact calls for.
    #[must_use]
    pub const fn bump_type(self) -> BumpType {
        match self {
            Self::Patch => BumpType::Patch,
            Self::Minor => BumpType::Minor,
        }
    }
}

/// A mod present in both snapshots whose artifact changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedEntry {
    /// The entry from the "before" snapshot.
    pub old: PackageEntry,
    /// The entry from the "after" snapshot.
    pub new: PackageEntry,
    /// Display form of the old version.
    pub old_display: String,
    /// Display form of the new version.
    pub new_display: String,
    /// Impact level of the change.
    pub impact: Impact,
}

impl ChangedEntry {
    /// Name of the changed mod.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.old.name
    }
}

/// The outcome of comparing two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Entries only in the "after" snapshot, in "after" order.
    pub added: Vec<PackageEntry>,
    /// Entries only in the "before" snapshot, in "before" order.
    pub removed: Vec<PackageEntry>,
    /// Entries in both snapshots whose filename changed.
    pub changed: Vec<ChangedEntry>,
}

impl Diff {
    /// Compare two snapshots.
    ///
    /// Every pair of entries sharing a name is compared, so duplicate names
    /// within a snapshot produce one record per matching pair.
    #[must_use]
    pub fn compute(before: &[PackageEntry], after: &[PackageEntry]) -> Self {
        let removed = only_in(before, after);
        let added = only_in(after, before);

        let changed = before
            .iter()
            .flat_map(|old| {
                after
                    .iter()
                    .filter(move |new| new.name == old.name)
                    .filter_map(move |new| compare(old, new))
            })
            .collect();

        Self {
            added,
            removed,
            changed,
        }
    }

    /// Whether the two snapshots were equivalent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// The strongest bump any part of this diff calls for.
    ///
    /// Additions and removals change the pack's contents and count as minor.
    #[must_use]
    pub fn required_bump(&self) -> BumpType {
        let membership = if self.added.is_empty() && self.removed.is_empty() {
            BumpType::None
        } else {
            BumpType::Minor
        };

        self.changed
            .iter()
            .map(|change| change.impact.bump_type())
            .fold(membership, BumpType::max)
    }
}

/// Entries of `side` whose name does not appear in `other`.
fn only_in(side: &[PackageEntry], other: &[PackageEntry]) -> Vec<PackageEntry> {
    side.iter()
        .filter(|entry| !other.iter().any(|candidate| candidate.name == entry.name))
        .cloned()
        .collect()
}

fn compare(old: &PackageEntry, new: &PackageEntry) -> Option<ChangedEntry> {
    let record = |old_display: String, new_display: String, impact: Impact| ChangedEntry {
        old: old.clone(),
        new: new.clone(),
        old_display,
        new_display,
        impact,
    };

    match (
        ParsedVersion::parse(&old.filename),
        ParsedVersion::parse(&new.filename),
    ) {
        (Some(old_version), Some(new_version)) => {
            let impact = if old_version.differs_in_minor(&new_version) {
                Impact::Minor
            } else if old_version.differs_in_patch(&new_version) {
                Impact::Patch
            } else {
                return None;
            };
            Some(record(
                old_version.to_string(),
                new_version.to_string(),
                impact,
            ))
        }
        _ if eq_ignore_case(&old.filename, &new.filename) => None,
        _ => Some(record(
            old.filename.clone(),
            new.filename.clone(),
            Impact::Minor,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, filename: &str) -> PackageEntry {
        PackageEntry::new(name, filename)
    }

    fn names(entries: &[PackageEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_identical_snapshots() {
        let snapshot = vec![entry("Foo", "foo-1.0.0.jar"), entry("Bar", "bar.jar")];
        let diff = Diff::compute(&snapshot, &snapshot);
        assert!(diff.is_empty());
        assert_eq!(diff.required_bump(), BumpType::None);
    }

    #[test]
    fn test_add_remove_and_minor_update() {
        let before = vec![entry("Foo", "foo-1.0.0.jar"), entry("Bar", "bar-2.0.0.jar")];
        let after = vec![entry("Foo", "foo-1.1.0.jar"), entry("Baz", "baz-1.0.0.jar")];

        let diff = Diff::compute(&before, &after);
        assert_eq!(names(&diff.removed), vec!["Bar"]);
        assert_eq!(names(&diff.added), vec!["Baz"]);
        assert_eq!(diff.changed.len(), 1);

        let change = &diff.changed[0];
        assert_eq!(change.name(), "Foo");
        assert_eq!(change.old_display, "1.0.0");
        assert_eq!(change.new_display, "1.1.0");
        assert_eq!(change.impact, Impact::Minor);
        assert_eq!(diff.required_bump(), BumpType::Minor);
    }

    #[test]
    fn test_patch_update() {
        let before = vec![entry("Foo", "foo-1.0.0.jar")];
        let after = vec![entry("Foo", "foo-1.0.1.jar")];

        let diff = Diff::compute(&before, &after);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.changed.len(), 1);
        assert_eq!(diff.changed[0].impact, Impact::Patch);
        assert_eq!(diff.required_bump(), BumpType::Patch);
    }

    #[test]
    fn test_suffix_change_is_patch() {
        let before = vec![entry("Foo", "foo-1.0.0-beta.jar")];
        let after = vec![entry("Foo", "foo-1.0.0-rc.jar")];

        let diff = Diff::compute(&before, &after);
        assert_eq!(diff.changed[0].impact, Impact::Patch);
        assert_eq!(diff.changed[0].old_display, "1.0.0-beta");
        assert_eq!(diff.changed[0].new_display, "1.0.0-rc");
    }

    #[test]
    fn test_suffix_case_change_is_ignored() {
        let before = vec![entry("Foo", "foo-1.0.0-BETA.jar")];
        let after = vec![entry("Foo", "Foo-1.0.0-beta.jar")];
        assert!(Diff::compute(&before, &after).is_empty());
    }

    #[test]
    fn test_unparseable_change_falls_back_to_filename() {
        let before = vec![entry("Foo", "foo-build12.jar")];
        let after = vec![entry("Foo", "foo-build13.jar")];

        let diff = Diff::compute(&before, &after);
        let change = &diff.changed[0];
        assert_eq!(change.impact, Impact::Minor);
        assert_eq!(change.old_display, "foo-build12.jar");
        assert_eq!(change.new_display, "foo-build13.jar");
    }

    #[test]
    fn test_one_side_unparseable_falls_back() {
        let before = vec![entry("Foo", "foo-1.0.0.jar")];
        let after = vec![entry("Foo", "foo-latest.jar")];

        let diff = Diff::compute(&before, &after);
        assert_eq!(diff.changed[0].impact, Impact::Minor);
        assert_eq!(diff.changed[0].new_display, "foo-latest.jar");
    }

    #[test]
    fn test_unparseable_case_only_change_is_ignored() {
        let before = vec![entry("Foo", "Foo-Latest.jar")];
        let after = vec![entry("Foo", "foo-latest.JAR")];
        assert!(Diff::compute(&before, &after).is_empty());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let before = vec![entry("Foo", "foo-1.0.0.jar")];
        let after = vec![entry("foo", "foo-1.0.0.jar")];

        let diff = Diff::compute(&before, &after);
        assert_eq!(names(&diff.removed), vec!["Foo"]);
        assert_eq!(names(&diff.added), vec!["foo"]);
        assert!(diff.changed.is_empty());
    }

    #[test]
    fn test_duplicate_names_compared_pairwise() {
        let before = vec![entry("Foo", "foo-1.0.0.jar"), entry("Foo", "foo-2.0.0.jar")];
        let after = vec![entry("Foo", "foo-2.0.0.jar")];

        let diff = Diff::compute(&before, &after);
        assert_eq!(diff.changed.len(), 1);
        assert_eq!(diff.changed[0].old.filename, "foo-1.0.0.jar");
    }

    #[test]
    fn test_order_follows_snapshots() {
        let before = vec![
            entry("C", "c-1.0.0.jar"),
            entry("A", "a-1.0.0.jar"),
            entry("B", "b-1.0.0.jar"),
        ];
        let after = vec![
            entry("B", "b-1.0.1.jar"),
            entry("Z", "z-1.0.0.jar"),
            entry("C", "c-1.0.1.jar"),
            entry("Y", "y-1.0.0.jar"),
        ];

        let diff = Diff::compute(&before, &after);
        assert_eq!(names(&diff.added), vec!["Z", "Y"]);
        assert_eq!(names(&diff.removed), vec!["A"]);
        let changed: Vec<&str> = diff.changed.iter().map(ChangedEntry::name).collect();
        assert_eq!(changed, vec!["C", "B"]);
    }

    #[test]
    fn test_empty_snapshots() {
        let after = vec![entry("Foo", "foo-1.0.0.jar")];
        let diff = Diff::compute(&[], &after);
        assert_eq!(names(&diff.added), vec!["Foo"]);
        assert!(Diff::compute(&[], &[]).is_empty());
    }
}
