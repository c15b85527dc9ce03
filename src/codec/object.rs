//! Object codec: describable types, one member per declared field.
//!
//! The per-member helpers here are the targets of the code generated by
//! [`json_fields!`](crate::json_fields); the whole-object helpers gate on
//! the node being an object before handing off to the type's
//! [`Describe`](crate::Describe) impl.

use crate::convert::{FromDom, ToDom};
use crate::describe::Describe;
use crate::dom::{DomKind, DomObject, DomValue};
use crate::error::ConvertError;

/// Decodes an object node into a describable value, in place.
///
/// Fields whose members are missing keep their prior values. The first
/// failing member aborts; fields decoded before it stay mutated.
pub fn apply_describe<T: Describe>(target: &mut T, value: &DomValue) -> Result<(), ConvertError> {
    let object = value
        .as_object()
        .ok_or_else(|| ConvertError::mismatched(DomKind::Object, value))?;
    target.load_members(object)
}

/// Encodes a describable value as a fresh object node.
///
/// The first failing field aborts; the partial node is discarded.
pub fn describe_to_dom<T: Describe>(value: &T) -> Result<DomValue, ConvertError> {
    let mut object = DomObject::new();
    value.dump_members(&mut object)?;
    Ok(DomValue::Object(object))
}

/// Decodes the member named `name` into `field`, if present.
///
/// A missing member is not an error: the field keeps its prior value.
pub fn load_member<T: FromDom>(
    object: &DomObject,
    name: &str,
    field: &mut T,
) -> Result<(), ConvertError> {
    match object.get(name) {
        Some(value) => field.apply_dom(value),
        None => Ok(()),
    }
}

/// Encodes `field` and inserts it as the member named `name`.
pub fn dump_member<T: ToDom>(
    object: &mut DomObject,
    name: &str,
    field: &T,
) -> Result<(), ConvertError> {
    let value = field.to_dom()?;
    object.insert(name.to_owned(), value);
    Ok(())
}
