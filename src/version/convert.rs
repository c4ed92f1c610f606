//! Version-string normalization.

/// Converts a release version string into a strictly numeric dotted form.
///
/// Qualifier tokens map to a fixed precedence segment so that, for the
/// same numeric base, beta (`b`) < release candidate (`rc`) < stable <
/// service release (`sr`):
///
/// - `b`  becomes `.1.`
/// - `rc` becomes `.2.`
/// - stable (no qualifier) appends `.3.0`
/// - `sr` becomes `.4.`
///
/// A hyphen introduces a bugfix number. Some historical releases placed
/// the bugfix digits after the qualifier instead of before it; when a
/// qualifier token is found in front of the hyphen the segments are
/// rearranged so the bugfix number precedes the qualifier. Without a
/// hyphen an implicit `.0` bugfix placeholder is used. A legacy `hg`
/// build tag is deleted from stable versions.
///
/// # Examples
///
/// ```
/// use renderkit::version::convert;
///
/// assert_eq!(convert("1.8.0"), "1.8.0.0.3.0");
/// assert_eq!(convert("1.8.0b1"), "1.8.0.0.1.1");
/// assert_eq!(convert("1.8.0sr1-2"), "1.8.0.2.4.1");
/// ```
pub fn convert(version: &str) -> String {
    let mut version = version.to_lowercase();

    // Check if it's a bugfix release first
    let bugfix;
    if let Some(dash) = version.find('-') {
        // A qualifier in front of the hyphen means the bugfix digits were
        // appended after it; move them in front of the qualifier segment.
        // A qualifier at position zero is ignored, matching the original
        // implementation.
        let pos = version
            .find('b')
            .filter(|&p| p > 0 && p < dash)
            .or_else(|| version.find("rc").filter(|&p| p > 0 && p < dash))
            .or_else(|| version.find("sr").filter(|&p| p > 0 && p < dash));

        if let Some(pos) = pos {
            let numeric = &version[..pos];
            let qualifier = &version[pos..dash];
            let bug = &version[dash + 1..];
            version = format!("{}.{}{}", numeric, bug, qualifier);
        } else {
            // This bugfix release version carries its extra number after
            // the hyphen already
            version = version.replace('-', ".");
        }
        bugfix = "";
    } else {
        // Not a bugfix release, so add a zero to compensate for the
        // extra number
        bugfix = ".0";
    }

    if version.contains('b') {
        version = version.replace('b', &format!("{}.1.", bugfix));
    } else if version.contains("rc") {
        version = version.replace("rc", &format!("{}.2.", bugfix));
    } else if version.contains("sr") {
        version = version.replace("sr", &format!("{}.4.", bugfix));
    } else {
        // must be a stable version then; the legacy 'hg' tag is ignored
        version = version.replace("hg", "");
        version.push_str(bugfix);
        version.push_str(".3.0");
    }

    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        let test_cases = [
            // stable versions get the implicit bugfix and precedence 3
            ("1.8.0", "1.8.0.0.3.0"),
            ("2.2.1", "2.2.1.0.3.0"),
            // qualifiers map to their precedence segments
            ("1.8.0b1", "1.8.0.0.1.1"),
            ("1.8.0rc2", "1.8.0.0.2.2"),
            ("1.8.0sr1", "1.8.0.0.4.1"),
            // bugfix releases, hyphen formatted
            ("1.8.0-1", "1.8.0.1.3.0"),
            // historically misformatted: bugfix digits after the qualifier
            ("1.8.0sr1-2", "1.8.0.2.4.1"),
            ("1.8.0b1-2", "1.8.0.2.1.1"),
            ("1.8.0rc1-3", "1.8.0.3.2.1"),
            // legacy 'hg' build tag is deleted
            ("1.8.0hg", "1.8.0.0.3.0"),
            // case-insensitive
            ("1.8.0B1", "1.8.0.0.1.1"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(convert(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_convert_digits_and_dots_only() {
        let versions = [
            "1.8.0", "1.8.0b1", "1.8.0rc2", "1.8.0sr1", "1.8.0-1", "1.8.0sr1-2", "2.0.0hg",
        ];
        for version in versions {
            let converted = convert(version);
            assert!(
                converted.chars().all(|c| c.is_ascii_digit() || c == '.'),
                "Non-numeric output {:?} for input {}",
                converted,
                version
            );
        }
    }
}
