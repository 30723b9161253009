//! Canonical field path representation and parsing.
//!
//! A field path names a location inside a nested JSON value, one mapping
//! key per segment. Callers historically spell paths two ways — a
//! `.`-joined string or an already-split segment list — and both are
//! resolved here, once, at the boundary; traversal only ever sees the
//! canonical segment sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiter separating segments in the joined string form of a path.
pub const PATH_DELIMITER: &str = ".";

/// An ordered sequence of mapping keys describing where to look inside a
/// record.
///
/// A `FieldPath` is built once and can be reused across any number of
/// records with [`extract_path`](crate::extract_path); the extractor
/// tracks its position by index and never mutates the path.
///
/// Parsing applies no validation. In particular, the empty string splits
/// into a single empty-string segment rather than zero segments, so
/// extraction performs a real lookup of the `""` key: for ordinary
/// records that finds nothing, while a record carrying a literal
/// empty-string key will match it. A pre-split empty vector, by contrast,
/// passes through as zero segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PathRepr", into = "String")]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The canonical segment sequence, in lookup order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// The two accepted input shapes for a path, as they appear in
/// configuration: a joined string or a segment array.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathRepr {
    Joined(String),
    Segments(Vec<String>),
}

impl From<PathRepr> for FieldPath {
    fn from(repr: PathRepr) -> Self {
        match repr {
            PathRepr::Joined(joined) => Self::from(joined.as_str()),
            PathRepr::Segments(segments) => Self { segments },
        }
    }
}

impl From<&str> for FieldPath {
    fn from(joined: &str) -> Self {
        Self {
            segments: joined.split(PATH_DELIMITER).map(String::from).collect(),
        }
    }
}

impl From<String> for FieldPath {
    fn from(joined: String) -> Self {
        Self::from(joined.as_str())
    }
}

impl From<&String> for FieldPath {
    fn from(joined: &String) -> Self {
        Self::from(joined.as_str())
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<Vec<&str>> for FieldPath {
    fn from(segments: Vec<&str>) -> Self {
        Self {
            segments: segments.into_iter().map(String::from).collect(),
        }
    }
}

impl From<&[&str]> for FieldPath {
    fn from(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|segment| (*segment).to_string()).collect(),
        }
    }
}

impl From<&[String]> for FieldPath {
    fn from(segments: &[String]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(PATH_DELIMITER))
    }
}
