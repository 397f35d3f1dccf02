//! Semantic version parsing and comparison.

use std::fmt;
use std::str::FromStr;

use crate::error::CanopyError;

/// A `major.minor.patch` version triple with a total order.
///
/// Missing components default to 0, so `"3.1"` parses as `3.1.0`.
/// Components past the patch are ignored; release servers sometimes
/// append build counters. An empty string or a non-numeric component
/// fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = CanopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CanopyError::VersionParse {
                input: s.to_string(),
            });
        }

        let mut components = [0u32; 3];
        for (slot, part) in components.iter_mut().zip(trimmed.split('.')) {
            *slot = part.parse().map_err(|_| CanopyError::VersionParse {
                input: s.to_string(),
            })?;
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
