use crate::error::FormatError;
use clap::ValueEnum;
use log::debug;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("tag regex is a valid literal")
});

/// Which component of the version to increment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// A release version read from, or written to, a `v<major>.<minor>.<patch>` tag.
///
/// Always carries empty pre-release and build metadata; the only ways to get
/// one are [`Version::new`] and [`Version::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parses a tag such as `v1.2.3`.
    ///
    /// The whole string must match: no surrounding whitespace, no suffix and no
    /// leading zeros in any component.
    pub fn parse(tag: &str) -> Result<Self, FormatError> {
        let captures = TAG_REGEX.captures(tag).ok_or_else(|| FormatError::Pattern {
            tag: tag.to_string(),
        })?;

        let mut parts = [0u64; 3];
        for (i, part) in parts.iter_mut().enumerate() {
            let digits = &captures[i + 1];
            *part = digits.parse().map_err(|_| FormatError::NotInteger {
                part: digits.to_string(),
                tag: tag.to_string(),
            })?;
        }

        debug!("Parsed tag {} as {:?}", tag, parts);
        Ok(Version::new(parts[0], parts[1], parts[2]))
    }

    /// Returns the next version for `level`, zeroing every lower component.
    ///
    /// Fails when the incremented component is already `u64::MAX`.
    pub fn bump(&self, level: BumpLevel) -> Result<Self, FormatError> {
        let (major, minor, patch) = (self.major(), self.minor(), self.patch());
        let component = match level {
            BumpLevel::Major => major,
            BumpLevel::Minor => minor,
            BumpLevel::Patch => patch,
        };
        let next = component.checked_add(1).ok_or_else(|| FormatError::Overflow {
            tag: self.to_string(),
            level,
        })?;

        Ok(match level {
            BumpLevel::Major => Version::new(next, 0, 0),
            BumpLevel::Minor => Version::new(major, next, 0),
            BumpLevel::Patch => Version::new(major, minor, next),
        })
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
