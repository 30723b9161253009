//! Runtime classification of JSON values.
//!
//! This module provides the classification primitives the extractor
//! builds on: which variant a value is, whether that variant is a
//! scalar, and the canonical string form of scalars. All functions are
//! total and side-effect free.

use serde::Serialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

/// The variant of a JSON value, as a standalone tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `null`, the absent value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// A string scalar.
    String,
    /// An ordered sequence (JSON array).
    Sequence,
    /// A keyed mapping (JSON object).
    Mapping,
}

impl ValueKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// True for the variants that stringify when they end a path.
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Boolean | Self::Number | Self::String)
    }
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        Self::of(value)
    }
}

/// Canonical string form of a scalar value.
///
/// Strings pass through unchanged, numbers use their default decimal
/// formatting, and booleans render as `true`/`false`. Returns `None` for
/// `null`, sequences, and mappings, which have no scalar text.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
