//! Scalar codec: the leaf tier of the engine.
//!
//! Decoding rejects null and mismatched kinds. Integer targets also reject
//! numbers with a fractional part and numbers outside the target's range;
//! float targets accept any JSON number. Encoding a valid scalar cannot
//! fail.

use crate::convert::{FromDom, ToDom};
use crate::dom::{DomKind, DomValue};
use crate::error::ConvertError;

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer_dom {
    ($ty:ty, $as_widest:ident) => {
        impl FromDom for $ty {
            fn apply_dom(&mut self, value: &DomValue) -> Result<(), ConvertError> {
                if !value.is_number() {
                    return Err(ConvertError::mismatched(DomKind::Number, value));
                }
                *self = value
                    .$as_widest()
                    .and_then(|number| <$ty>::try_from(number).ok())
                    .ok_or(ConvertError::OutOfRangeNumber {
                        target_type: stringify!($ty),
                    })?;
                Ok(())
            }
        }

        impl ToDom for $ty {
            #[inline]
            fn to_dom(&self) -> Result<DomValue, ConvertError> {
                Ok(DomValue::from(*self))
            }
        }
    };
}

impl_integer_dom!(i32, as_i64);
impl_integer_dom!(u32, as_u64);
impl_integer_dom!(i64, as_i64);
impl_integer_dom!(u64, as_u64);

// -----------------------------------------------------------------------------
// Floats

macro_rules! impl_float_dom {
    ($ty:ty) => {
        impl FromDom for $ty {
            fn apply_dom(&mut self, value: &DomValue) -> Result<(), ConvertError> {
                // Any numeric value coerces, integer or float.
                match value.as_f64() {
                    Some(number) => {
                        *self = number as $ty;
                        Ok(())
                    }
                    None => Err(ConvertError::mismatched(DomKind::Number, value)),
                }
            }
        }

        impl ToDom for $ty {
            #[inline]
            fn to_dom(&self) -> Result<DomValue, ConvertError> {
                Ok(DomValue::from(*self))
            }
        }
    };
}

impl_float_dom!(f32);
impl_float_dom!(f64);

// -----------------------------------------------------------------------------
// Bool and string

impl FromDom for bool {
    fn apply_dom(&mut self, value: &DomValue) -> Result<(), ConvertError> {
        match value.as_bool() {
            Some(flag) => {
                *self = flag;
                Ok(())
            }
            None => Err(ConvertError::mismatched(DomKind::Bool, value)),
        }
    }
}

impl ToDom for bool {
    #[inline]
    fn to_dom(&self) -> Result<DomValue, ConvertError> {
        Ok(DomValue::Bool(*self))
    }
}

impl FromDom for String {
    fn apply_dom(&mut self, value: &DomValue) -> Result<(), ConvertError> {
        match value.as_str() {
            Some(text) => {
                text.clone_into(self);
                Ok(())
            }
            None => Err(ConvertError::mismatched(DomKind::String, value)),
        }
    }
}

impl ToDom for String {
    #[inline]
    fn to_dom(&self) -> Result<DomValue, ConvertError> {
        Ok(DomValue::String(self.clone()))
    }
}

// -----------------------------------------------------------------------------
// Tests
