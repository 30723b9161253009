//! Path-based field extraction for nested JSON values
//!
//! This crate provides the reusable primitive a search or indexing system
//! calls once per (record, field path) pair: follow a dotted path through
//! an arbitrarily nested `serde_json::Value` and collect every value it
//! reaches, flattening any array met along the way without consuming a
//! path segment.
//!
//! # Usage
//!
//! ```
//! use fieldpath::{Extracted, extract};
//! use serde_json::json;
//!
//! let record = json!({
//!     "title": "Most popular functions",
//!     "sections": [
//!         {"examples": [{"note": "first"}, {"note": "second"}]},
//!         {"examples": {"note": "third"}}
//!     ]
//! });
//!
//! // No array on the path: a single value.
//! assert_eq!(extract(&record, "title"), Extracted::Single(json!("Most popular functions")));
//!
//! // Arrays on the path flatten transparently, in depth-first order.
//! assert_eq!(
//!     extract(&record, "sections.examples.note"),
//!     Extracted::Flattened(vec![json!("first"), json!("second"), json!("third")])
//! );
//!
//! // Misses are silent, never errors.
//! assert!(extract(&record, "title.missing").is_absent());
//! ```
//!
//! # Result shape
//!
//! The return shape is data-dependent by contract: [`Extracted::Single`]
//! when no array was traversed (usable directly as a scalar, with
//! `null` as the "no value" sentinel), [`Extracted::Flattened`] when an
//! array was met anywhere on the walk — even if the resulting list has
//! one element, or none. Scalars reached by the final path segment are
//! converted to their canonical string form; mappings, and values
//! uncovered because flattening exhausted the path, are returned raw.
//!
//! # Limits
//!
//! Extraction is a pure synchronous function with no shared state; calls
//! may run concurrently without coordination. Traversal recurses, so
//! depth is bounded by the nesting of the input record; callers feeding
//! adversarially deep records should budget stack accordingly.

pub mod extraction;
pub mod field_path;
pub mod value_kind;

pub use extraction::{ExtractFields, Extracted, extract, extract_path};
pub use field_path::{FieldPath, PATH_DELIMITER};
pub use value_kind::{ValueKind, scalar_text};
