//! The self-describe contract and its registration macro.

use crate::dom::DomObject;
use crate::error::ConvertError;

// -----------------------------------------------------------------------------
// Describe

/// The self-describe contract: an ordered field-name list plus in-order
/// member load/dump.
///
/// Implemented by [`json_fields!`](crate::json_fields), not by hand. The
/// name list and the per-field calls are generated from the same declaration,
/// so they always pair up positionally.
pub trait Describe {
    /// The declared member names, in declaration order.
    fn member_names() -> Vec<&'static str>;

    /// Decodes each declared member of `object` into the matching field, in
    /// declaration order.
    ///
    /// A missing member leaves its field unchanged. The first failing member
    /// aborts; fields before it stay mutated.
    fn load_members(&mut self, object: &DomObject) -> Result<(), ConvertError>;

    /// Encodes every field into `object` under its declared name, in
    /// declaration order.
    ///
    /// The first failing field aborts, leaving `object` partially built.
    fn dump_members(&self, object: &mut DomObject) -> Result<(), ConvertError>;
}

// -----------------------------------------------------------------------------
// Member-name extraction

/// Splits a comma-separated declaration list into trimmed member names.
///
/// Empty tokens are dropped, so a trailing comma is tolerated.
///
/// # Examples
///
/// ```
/// use json_describe::split_member_names;
///
/// assert_eq!(split_member_names(" id , tags ,"), ["id", "tags"]);
/// assert_eq!(split_member_names("name"), ["name"]);
/// ```
pub fn split_member_names(declaration: &'static str) -> Vec<&'static str> {
    declaration
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

// -----------------------------------------------------------------------------
// json_fields!

/// Registers a type's serializable fields, making it describable.
///
/// Expands to the type's [`Describe`], [`FromDom`](crate::FromDom) and
/// [`ToDom`](crate::ToDom) impls. Member names come from the declared field
/// identifiers; each name is paired with its field by position.
///
/// Every declared field's type must itself be a supported kind: a scalar, a
/// sequence, a string-keyed mapping, or another registered type. An
/// unsupported field type fails to compile.
///
/// # Examples
///
/// ```
/// use json_describe::{from_json_str, json_fields};
///
/// #[derive(Default)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// json_fields!(Point { x, y });
///
/// let mut point = Point::default();
/// from_json_str(&mut point, r#"{"x": 1.0, "y": -2.0}"#).unwrap();
/// assert_eq!((point.x, point.y), (1.0, -2.0));
/// ```
#[macro_export]
macro_rules! json_fields {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Describe for $ty {
            fn member_names() -> ::std::vec::Vec<&'static str> {
                $crate::split_member_names(stringify!($($field),+))
            }

            fn load_members(
                &mut self,
                object: &$crate::dom::DomObject,
            ) -> ::std::result::Result<(), $crate::ConvertError> {
                let names = <Self as $crate::Describe>::member_names();
                let mut index = 0;
                $(
                    $crate::__macro_exports::load_member(object, names[index], &mut self.$field)?;
                    index += 1;
                )+
                ::std::debug_assert_eq!(index, names.len());
                Ok(())
            }

            fn dump_members(
                &self,
                object: &mut $crate::dom::DomObject,
            ) -> ::std::result::Result<(), $crate::ConvertError> {
                let names = <Self as $crate::Describe>::member_names();
                let mut index = 0;
                $(
                    $crate::__macro_exports::dump_member(object, names[index], &self.$field)?;
                    index += 1;
                )+
                ::std::debug_assert_eq!(index, names.len());
                Ok(())
            }
        }

        impl $crate::FromDom for $ty {
            fn apply_dom(
                &mut self,
                value: &$crate::dom::DomValue,
            ) -> ::std::result::Result<(), $crate::ConvertError> {
                $crate::__macro_exports::apply_describe(self, value)
            }
        }

        impl $crate::ToDom for $ty {
            fn to_dom(
                &self,
            ) -> ::std::result::Result<$crate::dom::DomValue, $crate::ConvertError> {
                $crate::__macro_exports::describe_to_dom(self)
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::dom::{DomKind, DomValue};
    use crate::{ConvertError, Describe, FromDom, ToDom};

    fn dom(text: &str) -> DomValue {
        serde_json::from_str(text).unwrap()
    }

    #[derive(Default, Debug, PartialEq)]
    struct Inner {
        id: i32,
        tags: Vec<String>,
    }

    json_fields!(Inner { id, tags });

    #[derive(Default, Debug, PartialEq)]
    struct Outer {
        label: String,
        inner: Inner,
        lookup: BTreeMap<String, u32>,
    }

    json_fields!(Outer { label, inner, lookup });

    #[test]
    fn member_names_in_declaration_order() {
        assert_eq!(Inner::member_names(), ["id", "tags"]);
        assert_eq!(Outer::member_names(), ["label", "inner", "lookup"]);
    }

    #[test]
    fn nested_round_trip() {
        let mut outer = Outer::default();
        outer
            .apply_dom(&dom(
                r#"{"label": "root", "inner": {"id": 7, "tags": ["x", "y"]}, "lookup": {"k": 1}}"#,
            ))
            .unwrap();

        assert_eq!(outer.label, "root");
        assert_eq!(outer.inner.id, 7);
        assert_eq!(outer.inner.tags, ["x", "y"]);
        assert_eq!(outer.lookup["k"], 1);

        let encoded = outer.to_dom().unwrap();
        let mut decoded = Outer::default();
        decoded.apply_dom(&encoded).unwrap();
        assert_eq!(decoded, outer);
    }

    #[test]
    fn missing_member_keeps_prior_value() {
        let mut inner = Inner {
            id: 42,
            tags: vec!["kept".to_owned()],
        };
        inner.apply_dom(&dom(r#"{"tags": ["new"]}"#)).unwrap();
        assert_eq!(inner.id, 42);
        assert_eq!(inner.tags, ["new"]);

        // An empty object touches nothing at all.
        inner.apply_dom(&dom("{}")).unwrap();
        assert_eq!(inner.id, 42);
    }

    #[test]
    fn member_failure_aborts_and_keeps_earlier_mutations() {
        let mut inner = Inner::default();
        let result = inner.apply_dom(&dom(r#"{"id": 9, "tags": "not-an-array"}"#));
        assert!(matches!(
            result,
            Err(ConvertError::MismatchedKinds {
                expected: DomKind::Array,
                found: DomKind::String,
            })
        ));
        // Best-effort decode: `id` was already applied before `tags` failed.
        assert_eq!(inner.id, 9);
    }

    #[test]
    fn rejects_non_object_node() {
        let mut inner = Inner::default();
        assert!(matches!(
            inner.apply_dom(&dom("[1, 2]")),
            Err(ConvertError::MismatchedKinds {
                expected: DomKind::Object,
                found: DomKind::Array,
            })
        ));
        assert!(inner.apply_dom(&dom("null")).is_err());
    }

    #[test]
    fn encode_members_in_declaration_order() {
        let inner = Inner {
            id: 1,
            tags: Vec::new(),
        };
        let encoded = inner.to_dom().unwrap();
        let names: Vec<&String> = encoded.as_object().unwrap().keys().collect();
        assert_eq!(names, ["id", "tags"]);
    }

    #[test]
    fn split_edge_cases() {
        assert_eq!(crate::split_member_names("a,b,c"), ["a", "b", "c"]);
        assert_eq!(crate::split_member_names("  spaced  "), ["spaced"]);
        assert!(crate::split_member_names("").is_empty());
        assert!(crate::split_member_names(" , ").is_empty());
    }
}
