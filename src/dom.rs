//! Facade over the JSON DOM library.
//!
//! The engine never inspects JSON text itself; it operates on the document
//! tree produced by [`serde_json`]. These aliases name the two node shapes
//! the codecs care about, and [`DomKind`] classifies a node for mismatch
//! reporting.

use core::fmt;

// -----------------------------------------------------------------------------
// DOM node aliases

/// One JSON node: null, bool, number, string, array or object.
pub type DomValue = serde_json::Value;

/// An object node's member table, keyed by member name.
///
/// Built with `preserve_order`, so members iterate in insertion order.
pub type DomObject = serde_json::Map<String, serde_json::Value>;

// -----------------------------------------------------------------------------
// DomKind

/// An enumeration of the "kinds" of a JSON node.
///
/// Used in [`ConvertError::MismatchedKinds`](crate::ConvertError::MismatchedKinds)
/// to report which shape a codec expected and which it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl DomKind {
    /// Classifies a DOM node.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_describe::dom::{DomKind, DomValue};
    ///
    /// assert_eq!(DomKind::of(&DomValue::from(1)), DomKind::Number);
    /// assert_eq!(DomKind::of(&DomValue::Null), DomKind::Null);
    /// ```
    pub fn of(value: &DomValue) -> Self {
        match value {
            DomValue::Null => Self::Null,
            DomValue::Bool(_) => Self::Bool,
            DomValue::Number(_) => Self::Number,
            DomValue::String(_) => Self::String,
            DomValue::Array(_) => Self::Array,
            DomValue::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for DomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("Null"),
            Self::Bool => f.pad("Bool"),
            Self::Number => f.pad("Number"),
            Self::String => f.pad("String"),
            Self::Array => f.pad("Array"),
            Self::Object => f.pad("Object"),
        }
    }
}
