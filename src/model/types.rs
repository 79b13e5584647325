//! Closed enumeration tables
//!
//! Direction and Compatibility are fixed sets with exact-match string
//! forms. The declaration order of the variants is the ordinal order used
//! as a sort key, so it must not be rearranged.

use std::fmt;

use serde::Serialize;

use super::errors::{ModelError, ModelResult};

/// Domain category of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Direction {
    Backend,
    Frontend,
    Mobile,
    DevOps,
    DataScience,
}

impl Direction {
    /// All directions in ordinal order
    pub const ALL: [Direction; 5] = [
        Direction::Backend,
        Direction::Frontend,
        Direction::Mobile,
        Direction::DevOps,
        Direction::DataScience,
    ];

    /// Returns the exact string form used in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Backend => "Backend",
            Direction::Frontend => "Frontend",
            Direction::Mobile => "Mobile",
            Direction::DevOps => "DevOps",
            Direction::DataScience => "DataScience",
        }
    }

    /// Parses the exact string form. Unknown names are a recoverable error.
    pub fn parse(s: &str) -> ModelResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ModelError::UnknownDirection(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target platform class of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Compatibility {
    Windows,
    Linux,
    #[serde(rename = "macOS")]
    MacOs,
    CrossPlatform,
}

impl Compatibility {
    /// All compatibility classes in ordinal order
    pub const ALL: [Compatibility; 4] = [
        Compatibility::Windows,
        Compatibility::Linux,
        Compatibility::MacOs,
        Compatibility::CrossPlatform,
    ];

    /// Returns the exact string form used in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Windows => "Windows",
            Compatibility::Linux => "Linux",
            Compatibility::MacOs => "macOS",
            Compatibility::CrossPlatform => "CrossPlatform",
        }
    }

    /// Parses the exact string form. Unknown names are a recoverable error.
    pub fn parse(s: &str) -> ModelResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::UnknownCompatibility(s.to_string()))
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
