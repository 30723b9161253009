//! Recursive descent extraction of field values from nested JSON.
//!
//! Given a record and a [`FieldPath`], the extractor collects every value
//! reachable by following the path, flattening any sequence it meets
//! along the way without consuming a path segment. The result shape is
//! data-dependent: [`Extracted::Single`] when no sequence was traversed,
//! [`Extracted::Flattened`] when one was, anywhere, at any depth.
//!
//! Extraction is total: absent keys, mid-path type mismatches, and
//! lookups into non-mappings all end the affected branch silently. A
//! well-formed call cannot fail.

use serde::Serialize;
use serde_json::Value;

use crate::field_path::FieldPath;
use crate::value_kind::scalar_text;

/// The result of one extraction call.
///
/// Serializes untagged, so the JSON form is the plain scalar-or-list
/// shape downstream consumers index: a single value (with `null` as the
/// "no value" sentinel) or an ordered list. Consumers must handle both
/// arities; any sequence on the path yields `Flattened`, even when the
/// list holds exactly one element, or none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extracted {
    /// No sequence was traversed: at most one terminal value, with
    /// `Value::Null` standing for "no value".
    Single(Value),
    /// At least one sequence was traversed: every terminal value, in
    /// depth-first, sequence-index-ascending order.
    Flattened(Vec<Value>),
}

impl Extracted {
    /// True when the extraction produced the "no value" sentinel.
    ///
    /// An empty `Flattened` list is not absent: it records that a
    /// sequence was on the path but contributed no terminals.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Single(Value::Null))
    }

    /// Uniform slice view over the terminal values, empty for the
    /// absent sentinel.
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Single(Value::Null) => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Flattened(values) => values,
        }
    }

    /// Collapse into a plain JSON value, turning `Flattened` into an
    /// array.
    pub fn into_value(self) -> Value {
        match self {
            Self::Single(value) => value,
            Self::Flattened(values) => Value::Array(values),
        }
    }
}

impl Default for Extracted {
    fn default() -> Self {
        Self::Single(Value::Null)
    }
}

impl From<Extracted> for Value {
    fn from(extracted: Extracted) -> Self {
        extracted.into_value()
    }
}

/// Per-call traversal state: the path being followed, the terminals
/// collected so far, and whether any sequence has been flattened.
struct Walker<'path> {
    segments: &'path [String],
    terminals: Vec<Value>,
    saw_sequence: bool,
}

impl Walker<'_> {
    /// Visit a value in record position at `index`.
    ///
    /// A null record contributes nothing. Once the segments are
    /// exhausted the value itself is the terminal and is kept raw —
    /// this is the only way mappings (and values uncovered by
    /// flattening) enter the result. Otherwise the current segment is
    /// looked up; only mappings have keys, so lookups into anything
    /// else miss silently.
    fn walk(&mut self, value: &Value, index: usize) {
        if value.is_null() {
            return;
        }
        let Some(segment) = self.segments.get(index) else {
            self.terminals.push(value.clone());
            return;
        };
        if let Some(found) = value.get(segment.as_str()) {
            self.descend(found, index);
        }
    }

    /// Handle the outcome of looking up segment `index`, or a sequence
    /// element standing in for it.
    ///
    /// Scalars found by the final segment stringify; a sequence is
    /// transparent, replaying each element here at the same index; and
    /// everything else descends one mapping level, consuming one
    /// segment.
    fn descend(&mut self, found: &Value, index: usize) {
        let last = index + 1 == self.segments.len();
        match found {
            Value::Null => {}
            Value::String(_) | Value::Number(_) | Value::Bool(_) if last => {
                self.terminals.extend(scalar_text(found).map(Value::String));
            }
            Value::Array(elements) => {
                self.saw_sequence = true;
                for element in elements {
                    self.descend(element, index);
                }
            }
            _ => self.walk(found, index + 1),
        }
    }

    fn finish(self) -> Extracted {
        if self.saw_sequence {
            Extracted::Flattened(self.terminals)
        } else {
            Extracted::Single(self.terminals.into_iter().next().unwrap_or(Value::Null))
        }
    }
}

/// Extract every value reachable from `record` by following `path`.
///
/// Accepts either path spelling (`"a.b"` or `["a", "b"]`); see
/// [`FieldPath`] for the conversions. For repeated extraction with the
/// same path, build the [`FieldPath`] once and use [`extract_path`].
pub fn extract(record: &Value, path: impl Into<FieldPath>) -> Extracted {
    extract_path(record, &path.into())
}

/// Extract with an already-built [`FieldPath`].
///
/// This is the reuse-friendly entry point for callers that configure
/// their field paths once and extract from many records, one call per
/// (record, path) pair. Recursion depth is bounded by the record's
/// nesting depth.
pub fn extract_path(record: &Value, path: &FieldPath) -> Extracted {
    let mut walker = Walker {
        segments:     path.segments(),
        terminals:    Vec::new(),
        saw_sequence: false,
    };
    walker.walk(record, 0);
    tracing::trace!(
        "extracted {} terminal(s) for '{}' (flattened: {})",
        walker.terminals.len(),
        path,
        walker.saw_sequence
    );
    walker.finish()
}

/// Extension trait exposing extraction directly on `serde_json::Value`.
pub trait ExtractFields {
    /// Extract every value reachable by following `path`.
    fn extract<P: Into<FieldPath>>(&self, path: P) -> Extracted;

    /// Extract with an already-built [`FieldPath`].
    fn extract_path(&self, path: &FieldPath) -> Extracted;
}

impl ExtractFields for Value {
    fn extract<P: Into<FieldPath>>(&self, path: P) -> Extracted {
        extract(self, path)
    }

    fn extract_path(&self, path: &FieldPath) -> Extracted {
        extract_path(self, path)
    }
}
