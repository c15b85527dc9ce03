//! The recursive conversion engine, by value complexity.
//!
//! - [`scalar`]: primitive kinds (integers, bool, floats, strings).
//! - [`sequence`]: ordered sequences of any supported element type.
//! - [`mapping`]: string-keyed mappings of any supported value type.
//! - [`object`]: describable types, one member per declared field.
//!
//! Each tier recurses through the [`FromDom`](crate::FromDom) /
//! [`ToDom`](crate::ToDom) capability traits, so nesting composes freely:
//! an object holding a sequence of mappings of objects converts with no
//! extra machinery. Failures short-circuit up the recursion.

mod mapping;
mod scalar;
mod sequence;

pub(crate) mod object;
