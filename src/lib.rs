#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod convert;
mod describe;
mod driver;
mod error;

pub mod dom;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use convert::{FromDom, ToDom};
pub use describe::{Describe, split_member_names};
pub use driver::{from_json_str, to_json_string};
pub use error::ConvertError;
