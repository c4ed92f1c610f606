//! Newline-to-break conversion.

/// Replaces every newline sequence in a string with a single break tag.
///
/// The recognized sequences are `\r\n`, `\n\r`, `\r` and `\n`, each
/// replaced by exactly one tag: `<br />` when `xhtml` is set, `<br>`
/// otherwise. An empty input is returned unchanged.
///
/// # Examples
///
/// ```
/// use renderkit::nl2br;
///
/// assert_eq!(nl2br("a\r\nb", false), "a<br>b");
/// assert_eq!(nl2br("a\nb", true), "a<br />b");
/// ```
pub fn nl2br(string: &str, xhtml: bool) -> String {
    if string.is_empty() {
        return string.to_string();
    }
    let br = if xhtml { "<br />" } else { "<br>" };

    // Two-character sequences first so that "\r\n" yields one tag, not two
    string
        .replace("\r\n", br)
        .replace("\n\r", br)
        .replace('\r', br)
        .replace('\n', br)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nl2br_empty() {
        assert_eq!(nl2br("", false), "");
        assert_eq!(nl2br("", true), "");
    }

    #[test]
    fn test_nl2br_sequences() {
        let test_cases = [
            ("a\r\nb", "a<br>b"),
            ("a\n\rb", "a<br>b"),
            ("a\rb", "a<br>b"),
            ("a\nb", "a<br>b"),
            ("a\r\n\r\nb", "a<br><br>b"),
            ("no newline", "no newline"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(nl2br(input, false), expected, "Failed for input: {:?}", input);
        }
    }

    #[test]
    fn test_nl2br_xhtml() {
        assert_eq!(nl2br("a\r\nb", true), "a<br />b");
    }
}
