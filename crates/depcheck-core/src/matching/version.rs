//! Dotted numeric versions (`major[.minor[.patch]]`).

use crate::errors::DepCheckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-component version, totally ordered by (major, minor, patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Implicit version of anything provisioned without version data
    pub const FLOOR: Version = Version::new(0, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `major[.minor[.patch]]`; omitted components are 0
    ///
    /// # Errors
    ///
    /// `InvalidVersion` when the text is empty, has more than three components,
    /// or any component is not a non-negative integer.
    pub fn parse(text: &str) -> Result<Version, DepCheckError> {
        let trimmed = text.trim();
        let invalid = |reason: String| DepCheckError::InvalidVersion {
            value: text.to_string(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(invalid("empty version".to_string()));
        }

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() > 3 {
            return Err(invalid(format!(
                "expected at most 3 components, found {}",
                parts.len()
            )));
        }

        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(format!("component '{}' is not a number", part)));
            }
            *slot = part
                .parse()
                .map_err(|_| invalid(format!("component '{}' is out of range", part)))?;
        }

        Ok(Version::new(components[0], components[1], components[2]))
    }
}

impl FromStr for Version {
    type Err = DepCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
