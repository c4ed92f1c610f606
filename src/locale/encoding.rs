//! Output-encoding validation and encoding-object resolution.

use encoding_rs::Encoding;
use log::debug;

use crate::{RenderError, Result};

/// Fallback when the configured character set is not on the allow-list.
pub const DEFAULT_ENCODING: &str = "iso-8859-1";

/// Character sets considered safe for entity-escaping output.
const VALID_CHARSETS: &[&str] = &[
    "iso-8859-1",
    "iso-8859-15",
    "utf-8",
    "cp866",
    "cp1251",
    "cp1252",
    "koi8-r",
    "big5",
    "gb2312",
    "big5-hkscs",
    "shift_jis",
    "sjis",
    "euc-jp",
];

/// Returns the given character set if it is known-safe, lower-cased.
///
/// Anything not on the allow-list falls back to [`DEFAULT_ENCODING`].
///
/// # Examples
///
/// ```
/// use renderkit::valid_encoding;
///
/// assert_eq!(valid_encoding("UTF-8"), "utf-8");
/// assert_eq!(valid_encoding("x-unknown"), "iso-8859-1");
/// ```
pub fn valid_encoding(charset: &str) -> &'static str {
    let charset = charset.to_lowercase();
    match VALID_CHARSETS.iter().find(|&&valid| valid == charset).copied() {
        Some(valid) => valid,
        None => {
            debug!("Unsupported charset {:?}, using {}", charset, DEFAULT_ENCODING);
            DEFAULT_ENCODING
        }
    }
}

/// Resolves an encoding label to its `encoding_rs` encoding object.
///
/// # Errors
///
/// Returns an `InvalidParameter` error if the label is not recognized.
pub fn encoding_object(label: &str) -> Result<&'static Encoding> {
    let label = label.to_lowercase();
    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => Ok(encoding),
        None => Err(RenderError::invalid_parameter(format!(
            "Invalid encoding: {}",
            label
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_encoding() {
        let test_cases = [
            ("utf-8", "utf-8"),
            ("UTF-8", "utf-8"),
            ("Shift_JIS", "shift_jis"),
            ("iso-8859-15", "iso-8859-15"),
            ("koi8-r", "koi8-r"),
            // off the allow-list
            ("utf-16", "iso-8859-1"),
            ("x-unknown", "iso-8859-1"),
            ("", "iso-8859-1"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(valid_encoding(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_encoding_object_for_allowed_charsets() -> Result<()> {
        // every allow-listed charset must resolve to a real encoding
        for charset in VALID_CHARSETS {
            let encoding = encoding_object(charset)?;
            assert!(!encoding.name().is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_encoding_object_unknown() {
        assert!(encoding_object("not-a-charset").is_err());
    }
}
