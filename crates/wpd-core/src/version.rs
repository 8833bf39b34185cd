//! Two-component WordPress version handling.
//!
//! WordPress core versions are compared on `major.minor` only; the patch
//! component never matters for the compatibility heuristic. The
//! [`PlatformVersion::bump`] step carries `minor` into `major` once it would
//! pass 9 (`1.9` → `2.0`), mirroring how the directory's release numbering
//! actually rolls over. This is a coarse "releases ahead" counter, not
//! semver; do not replace it with semver arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failed to interpret a string as a platform version.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The string is empty or has no leading numeric component.
    #[error("empty version string")]
    Empty,
    /// A component is not an unsigned integer.
    #[error("invalid version component in '{0}'")]
    InvalidComponent(String),
}

/// A WordPress core version truncated to its first two components.
///
/// Ordering is the standard dotted-version order on `(major, minor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
}

impl PlatformVersion {
    /// Create a version from its two components.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Advance the version by `steps` coarse releases.
    ///
    /// Each step increments `minor`, carrying into `major` when `minor`
    /// would exceed 9: `4.8` → `4.9` → `5.0`. The carry is 10-ary regardless
    /// of how many minor releases a real major line has.
    #[must_use]
    pub const fn bump(self, steps: u32) -> Self {
        let mut version = self;
        let mut remaining = steps;
        while remaining > 0 {
            if version.minor < 9 {
                version.minor += 1;
            } else {
                version.minor = 0;
                version.major += 1;
            }
            remaining -= 1;
        }
        version
    }
}

impl FromStr for PlatformVersion {
    type Err = VersionError;

    /// Parse `major.minor` from a dotted version string, ignoring any
    /// components past the second (`"6.4.3"` → `6.4`). A bare major
    /// (`"6"`) gets `minor = 0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let major = match parts.next() {
            None | Some("") => return Err(VersionError::Empty),
            Some(part) => part
                .parse()
                .map_err(|_| VersionError::InvalidComponent(s.to_string()))?,
        };
        let minor = match parts.next() {
            None | Some("") => 0,
            Some(part) => part
                .parse()
                .map_err(|_| VersionError::InvalidComponent(s.to_string()))?,
        };
        Ok(Self { major, minor })
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
