//! Sequence codec: ordered containers of any supported element type.
//!
//! Both sequence flavors behave identically; they differ only in the
//! container the elements land in. Decoding clears the target first, so a
//! failed decode leaves it partially filled — contents are undefined on
//! failure.

use std::collections::VecDeque;

use crate::convert::{FromDom, ToDom};
use crate::dom::{DomKind, DomValue};
use crate::error::ConvertError;

macro_rules! impl_sequence_dom {
    ($ty:ident, $append:ident) => {
        impl<T: FromDom + Default> FromDom for $ty<T> {
            fn apply_dom(&mut self, value: &DomValue) -> Result<(), ConvertError> {
                self.clear();
                let items = value
                    .as_array()
                    .ok_or_else(|| ConvertError::mismatched(DomKind::Array, value))?;
                for item in items {
                    let mut element = T::default();
                    element.apply_dom(item)?;
                    self.$append(element);
                }
                Ok(())
            }
        }

        impl<T: ToDom> ToDom for $ty<T> {
            fn to_dom(&self) -> Result<DomValue, ConvertError> {
                let mut items = Vec::with_capacity(self.len());
                for element in self {
                    items.push(element.to_dom()?);
                }
                Ok(DomValue::Array(items))
            }
        }
    };
}

impl_sequence_dom!(Vec, push);
impl_sequence_dom!(VecDeque, push_back);

// -----------------------------------------------------------------------------
// Tests
