//! Mapping codec: string-keyed mappings of any supported value type.
//!
//! `BTreeMap` is the one supported mapping: it iterates in key order, so
//! encode output is deterministic. Decoding clears the target first.

use std::collections::BTreeMap;

use crate::convert::{FromDom, ToDom};
use crate::dom::{DomKind, DomObject, DomValue};
use crate::error::ConvertError;

impl<T: FromDom + Default> FromDom for BTreeMap<String, T> {
    fn apply_dom(&mut self, value: &DomValue) -> Result<(), ConvertError> {
        self.clear();
        let object = value
            .as_object()
            .ok_or_else(|| ConvertError::mismatched(DomKind::Object, value))?;
        for (key, member) in object {
            let mut entry = T::default();
            entry.apply_dom(member)?;
            self.insert(key.clone(), entry);
        }
        Ok(())
    }
}

impl<T: ToDom> ToDom for BTreeMap<String, T> {
    fn to_dom(&self) -> Result<DomValue, ConvertError> {
        let mut object = DomObject::new();
        for (key, entry) in self {
            object.insert(key.clone(), entry.to_dom()?);
        }
        Ok(DomValue::Object(object))
    }
}

// -----------------------------------------------------------------------------
// Tests
