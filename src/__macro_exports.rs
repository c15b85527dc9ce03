//! Items used by the expansion of [`json_fields!`](crate::json_fields).
//!
//! Not public API; paths here may change without notice.

pub use crate::codec::object::{apply_describe, describe_to_dom, dump_member, load_member};
