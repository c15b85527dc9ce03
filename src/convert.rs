//! The capability traits that drive conversion dispatch.
//!
//! Every supported field type implements both traits: the crate provides
//! impls for scalars, sequences and string-keyed mappings, and
//! [`json_fields!`](crate::json_fields) generates them for describable
//! types. A field type implementing neither is rejected at compile time.

use crate::dom::DomValue;
use crate::error::ConvertError;

// -----------------------------------------------------------------------------
// FromDom

/// A type that can be decoded in place from a DOM node.
///
/// Decoding merges into the existing value rather than replacing it: a
/// describable type only overwrites the fields present in the document, and
/// a failure part-way through leaves the fields decoded so far mutated.
/// Callers wanting all-or-nothing semantics decode into a scratch value and
/// swap it in on success.
///
/// # Examples
///
/// ```
/// use json_describe::FromDom;
/// use json_describe::dom::DomValue;
///
/// let mut count = 0_i32;
/// count.apply_dom(&DomValue::from(41)).unwrap();
/// assert_eq!(count, 41);
///
/// // A wrong kind fails and leaves the target as it was.
/// assert!(count.apply_dom(&DomValue::from("nope")).is_err());
/// assert_eq!(count, 41);
/// ```
pub trait FromDom {
    /// Decodes `value` into `self`.
    fn apply_dom(&mut self, value: &DomValue) -> Result<(), ConvertError>;
}

// -----------------------------------------------------------------------------
// ToDom

/// A type that can be encoded as a DOM node.
///
/// # Examples
///
/// ```
/// use json_describe::ToDom;
/// use json_describe::dom::DomValue;
///
/// assert_eq!(vec![1, 2, 3].to_dom().unwrap(), DomValue::from(vec![1, 2, 3]));
/// ```
pub trait ToDom {
    /// Encodes `self` as a fresh DOM node.
    fn to_dom(&self) -> Result<DomValue, ConvertError>;
}
