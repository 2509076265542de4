//! Version extraction from mod artifact filenames.
//!
//! Mod jars rarely agree on a naming scheme, so the version is recovered
//! heuristically: the filename stem is split on `-` and `_`, and the first
//! segment that looks like `major.minor.patch` wins. Segments naming the
//! game version (`1.19.x`) are skipped so `sodium-1.19.2-0.4.4.jar` resolves
//! to `0.4.4` rather than the Minecraft release it targets.

use std::fmt;

/// Minecraft release embedded in many mod filenames, as `(major, minor)`.
const GAME_VERSION: (u64, u64) = (1, 19);

/// A version recovered from a mod filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedVersion {
    /// Major version number.
    pub major: u64,
    /// Minor version number.
    pub minor: u64,
    /// Patch version number.
    pub patch: u64,
    /// Everything in the filename stem after the version.
    pub suffix: String,
}

impl ParsedVersion {
    /// Parse a version out of an artifact filename.
    ///
    /// Returns `None` when no segment of the filename holds an acceptable
    /// three-part version.
    #[must_use]
    pub fn parse(filename: &str) -> Option<Self> {
        let stem = file_stem(filename);
        segments(stem).find_map(|(offset, segment)| {
            let version = parse_segment(segment)?;
            let consumed = offset + version.end;
            Some(Self {
                major: version.major,
                minor: version.minor,
                patch: version.patch,
                suffix: stem[consumed..].to_string(),
            })
        })
    }

    /// Whether the patch number or suffix differ. Suffixes compare case-insensitively.
    #[must_use]
    pub fn differs_in_patch(&self, other: &Self) -> bool {
        self.patch != other.patch || !eq_ignore_case(&self.suffix, &other.suffix)
    }

    /// Whether the `(major, minor)` pair differs.
    #[must_use]
    pub const fn differs_in_minor(&self, other: &Self) -> bool {
        self.major != other.major || self.minor != other.minor
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}{}",
            self.major, self.minor, self.patch, self.suffix
        )
    }
}

/// Case-insensitive string equality.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// A version found inside a single segment, with `end` relative to the segment start.
struct SegmentVersion {
    major: u64,
    minor: u64,
    patch: u64,
    end: usize,
}

/// Drop any directory prefix and the file extension.
///
/// A purely numeric tail (`mod-1.2.3`) is part of the version, not an extension.
fn file_stem(filename: &str) -> &str {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match name.rfind('.') {
        Some(dot) if dot > 0 => {
            let extension = &name[dot + 1..];
            if !extension.is_empty() && extension.bytes().all(|b| b.is_ascii_digit()) {
                name
            } else {
                &name[..dot]
            }
        }
        _ => name,
    }
}

/// Split a stem on `-` and `_`, yielding each segment with its byte offset.
fn segments(stem: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut start = 0;
    stem.split(['-', '_']).map(move |segment| {
        let offset = start;
        start += segment.len() + 1;
        (offset, segment)
    })
}

fn parse_segment(segment: &str) -> Option<SegmentVersion> {
    let body = segment.trim_start_matches(['v', 'V']);
    let lead = segment.len() - body.len();

    let end = version_end(body)?;
    let mut parts = body[..end].split('.');
    let major = parse_number(parts.next()?)?;
    let minor = parse_number(parts.next()?)?;
    let patch = parse_number(parts.next()?)?;
    if (major, minor) == GAME_VERSION {
        return None;
    }

    Some(SegmentVersion {
        major,
        minor,
        patch,
        end: lead + end,
    })
}

/// Byte index where the candidate version ends: the third `.`, or the end of
/// the segment when there is none. Requires at least two dots.
fn version_end(body: &str) -> Option<usize> {
    let first = body.find('.')?;
    let second = first + 1 + body[first + 1..].find('.')?;
    Some(
        body[second + 1..]
            .find('.')
            .map_or(body.len(), |third| second + 1 + third),
    )
}

fn parse_number(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
