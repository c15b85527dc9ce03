use core::{error, fmt};

use crate::dom::{DomKind, DomValue};

// -----------------------------------------------------------------------------
// ConvertError

/// An enumeration of all error outcomes of a conversion.
///
/// Variants carry the error category only, never per-field detail; a caller
/// that wants to know *which* field failed wraps the conversion per field.
#[derive(Debug)]
pub enum ConvertError {
    /// The JSON text could not be parsed into a document, or a document
    /// could not be printed.
    Json(serde_json::Error),
    /// The document root parsed to `null`.
    NullDocument,
    /// The DOM node's kind does not match the kind the target expects.
    MismatchedKinds { expected: DomKind, found: DomKind },
    /// A JSON number that has a fractional part or does not fit the target
    /// integer type.
    OutOfRangeNumber { target_type: &'static str },
}

impl ConvertError {
    pub(crate) fn mismatched(expected: DomKind, found: &DomValue) -> Self {
        Self::MismatchedKinds {
            expected,
            found: DomKind::of(found),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(error) => {
                write!(f, "JSON document error: {error}")
            }
            Self::NullDocument => {
                write!(f, "document root is null")
            }
            Self::MismatchedKinds { expected, found } => {
                write!(f, "expected a `{expected}` value, found `{found}`")
            }
            Self::OutOfRangeNumber { target_type } => {
                write!(f, "number does not fit in `{target_type}`")
            }
        }
    }
}

impl error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    #[inline]
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
