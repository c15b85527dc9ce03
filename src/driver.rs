//! Top-level drivers: one full conversion per call.
//!
//! Each call owns an independent DOM document; nothing is shared across
//! calls. Traversal is a synchronous depth-first walk of the value, so
//! recursion depth equals the nesting depth of the data — callers should
//! bound the nesting of untrusted input.

use crate::convert::{FromDom, ToDom};
use crate::dom::DomValue;
use crate::error::ConvertError;

/// Parses `text` and decodes the document root into `target`, in place.
///
/// Fails without touching `target` if the text is malformed or the root is
/// `null`. The root may be any supported type, though it is typically a
/// registered describable type.
///
/// On failure during decoding, `target` may be partially updated; see
/// [`FromDom`].
///
/// # Examples
///
/// ```
/// use json_describe::from_json_str;
///
/// let mut counts: Vec<u32> = Vec::new();
/// from_json_str(&mut counts, "[3, 1, 4]").unwrap();
/// assert_eq!(counts, [3, 1, 4]);
///
/// assert!(from_json_str(&mut counts, "{not json").is_err());
/// ```
pub fn from_json_str<T: FromDom>(target: &mut T, text: &str) -> Result<(), ConvertError> {
    let root: DomValue = serde_json::from_str(text)?;
    if root.is_null() {
        return Err(ConvertError::NullDocument);
    }
    target.apply_dom(&root)
}

/// Encodes `value` and prints it as compact JSON text.
///
/// On failure no output is produced; a partially built document is
/// discarded.
///
/// # Examples
///
/// ```
/// use json_describe::to_json_string;
///
/// assert_eq!(to_json_string(&vec![1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
pub fn to_json_string<T: ToDom>(value: &T) -> Result<String, ConvertError> {
    let root = value.to_dom()?;
    Ok(serde_json::to_string(&root)?)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{from_json_str, to_json_string};
    use crate::{ConvertError, json_fields};

    #[derive(Default, Debug, PartialEq)]
    struct Config {
        retries: u32,
        verbose: bool,
    }

    json_fields!(Config { retries, verbose });

    #[test]
    fn round_trip() {
        let config = Config {
            retries: 3,
            verbose: true,
        };
        let text = to_json_string(&config).unwrap();
        assert_eq!(text, r#"{"retries":3,"verbose":true}"#);

        let mut decoded = Config::default();
        from_json_str(&mut decoded, &text).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn parse_failure_leaves_target_untouched() {
        let mut config = Config {
            retries: 9,
            verbose: true,
        };
        let result = from_json_str(&mut config, r#"{"retries":"#);
        assert!(matches!(result, Err(ConvertError::Json(_))));
        assert_eq!(config.retries, 9);
        assert!(config.verbose);
    }

    #[test]
    fn null_document_rejected() {
        let mut config = Config::default();
        assert!(matches!(
            from_json_str(&mut config, "null"),
            Err(ConvertError::NullDocument)
        ));
    }

    #[test]
    fn non_describable_root() {
        let mut flags: Vec<bool> = Vec::new();
        from_json_str(&mut flags, "[true, false]").unwrap();
        assert_eq!(flags, [true, false]);
        assert_eq!(to_json_string(&flags).unwrap(), "[true,false]");
    }

    #[test]
    fn unknown_members_are_ignored() {
        let mut config = Config::default();
        from_json_str(&mut config, r#"{"retries": 2, "extra": "ignored"}"#).unwrap();
        assert_eq!(config.retries, 2);
    }
}
