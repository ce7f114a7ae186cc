//! Column path addressing
//!
//! A [`ColumnPath`] is the dot-segmented address of a leaf field across a
//! nested record. Array levels elide the index, so one path may resolve to
//! several leaves within a single record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered sequence of string segments identifying a leaf position
///
/// Within a discovered schema, paths are unique and ordered by first
/// encounter across the full record set.
///
/// # Examples
///
/// ```
/// use tabula::domain::ColumnPath;
/// use std::str::FromStr;
///
/// let path = ColumnPath::from_str("buyer.nodes.name").unwrap();
/// assert_eq!(path.segments().len(), 3);
/// assert_eq!(path.to_string(), "buyer.nodes.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnPath(Vec<String>);

impl ColumnPath {
    /// The empty path (root of a record)
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from owned segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// A new path with one more segment appended
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }

    /// The path segments in order
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this path is a strict prefix of `other`
    ///
    /// Used to detect ambiguous schemas where one record holds a scalar at a
    /// position another record nests under.
    pub fn is_strict_prefix_of(&self, other: &ColumnPath) -> bool {
        self.0.len() < other.0.len() && other.0[..self.0.len()] == self.0[..]
    }
}

impl fmt::Display for ColumnPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for ColumnPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self(s.split('.').map(str::to_string).collect()))
    }
}
