//! Dotted-version comparison with optional operator strings.

use std::cmp::Ordering;
use std::str::FromStr;

use super::convert::convert;
use crate::{RenderError, Result};

/// Comparison operators accepted by [`compare_with_operator`].
///
/// Each operator has the common synonym spellings of its symbol form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `<` / `lt`
    Less,
    /// `<=` / `le`
    LessOrEqual,
    /// `>` / `gt`
    Greater,
    /// `>=` / `ge`
    GreaterOrEqual,
    /// `==` / `=` / `eq`
    Equal,
    /// `!=` / `<>` / `ne`
    NotEqual,
}

impl FromStr for ComparisonOperator {
    type Err = RenderError;

    fn from_str(op: &str) -> Result<Self> {
        match op {
            "<" | "lt" => Ok(Self::Less),
            "<=" | "le" => Ok(Self::LessOrEqual),
            ">" | "gt" => Ok(Self::Greater),
            ">=" | "ge" => Ok(Self::GreaterOrEqual),
            "==" | "=" | "eq" => Ok(Self::Equal),
            "!=" | "<>" | "ne" => Ok(Self::NotEqual),
            _ => Err(RenderError::invalid_parameter(format!(
                "Unknown comparison operator: {}",
                op
            ))),
        }
    }
}

impl ComparisonOperator {
    /// Whether the given ordering satisfies this operator.
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            Self::Less => ordering == Ordering::Less,
            Self::LessOrEqual => ordering != Ordering::Greater,
            Self::Greater => ordering == Ordering::Greater,
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
        }
    }
}

/// Numeric per-segment comparison of two normalized dotted strings.
///
/// Missing and empty segments are treated as zero.
fn compare_converted(first: &str, second: &str) -> Ordering {
    let first: Vec<u64> = first.split('.').map(|s| s.parse().unwrap_or(0)).collect();
    let second: Vec<u64> = second.split('.').map(|s| s.parse().unwrap_or(0)).collect();

    for i in 0..first.len().max(second.len()) {
        let a = first.get(i).copied().unwrap_or(0);
        let b = second.get(i).copied().unwrap_or(0);
        match a.cmp(&b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Compares two release version strings.
///
/// Both versions are normalized with [`convert`] before the dotted
/// comparison, so qualifiers order as beta < release candidate < stable <
/// service release for the same numeric base.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use renderkit::version::compare;
///
/// assert_eq!(compare("1.8.0", "1.8.1"), Ordering::Less);
/// assert_eq!(compare("1.8.0b1", "1.8.0"), Ordering::Less);
/// ```
pub fn compare(version1: &str, version2: &str) -> Ordering {
    compare_converted(&convert(version1), &convert(version2))
}

/// Compares two release version strings under the given operator.
///
/// # Errors
///
/// Returns an `InvalidParameter` error for an unrecognized operator
/// spelling.
///
/// # Examples
///
/// ```
/// use renderkit::version::compare_with_operator;
///
/// assert!(compare_with_operator("1.8.0b1", "1.8.0", "<").unwrap());
/// assert!(compare_with_operator("1.8.0sr1", "1.8.0", "gt").unwrap());
/// ```
pub fn compare_with_operator(version1: &str, version2: &str, operator: &str) -> Result<bool> {
    let operator: ComparisonOperator = operator.parse()?;
    Ok(operator.matches(compare(version1, version2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ordering() {
        let test_cases = [
            ("1.8.0", "1.8.1", Ordering::Less),
            ("1.8.1", "1.8.0", Ordering::Greater),
            ("1.8.0", "1.8.0", Ordering::Equal),
            // qualifier precedence for the same numeric base
            ("1.8.0b1", "1.8.0", Ordering::Less),
            ("1.8.0rc1", "1.8.0", Ordering::Less),
            ("1.8.0b1", "1.8.0rc1", Ordering::Less),
            ("1.8.0sr1", "1.8.0", Ordering::Greater),
            // bugfix releases sort above their base
            ("1.8.0-1", "1.8.0", Ordering::Greater),
            ("1.8.0sr1-2", "1.8.0sr1", Ordering::Greater),
            // numeric, not lexical
            ("1.10.0", "1.9.0", Ordering::Greater),
        ];
        for (v1, v2, expected) in test_cases {
            assert_eq!(compare(v1, v2), expected, "Failed for {} vs {}", v1, v2);
        }
    }

    #[test]
    fn test_compare_self_equal() {
        let versions = [
            "1.8.0", "1.8.1", "1.8.0b1", "1.8.0rc2", "1.8.0sr1", "1.8.0-1", "1.8.0sr1-2",
            "2.0.0hg",
        ];
        for version in versions {
            assert_eq!(
                compare(version, version),
                Ordering::Equal,
                "Version {} must compare equal to itself",
                version
            );
        }
    }

    #[test]
    fn test_compare_with_operator() -> Result<()> {
        let test_cases = [
            ("1.8.0b1", "1.8.0", "<", true),
            ("1.8.0b1", "1.8.0", "lt", true),
            ("1.8.0", "1.8.0", "==", true),
            ("1.8.0", "1.8.0", "eq", true),
            ("1.8.0", "1.8.0", "=", true),
            ("1.8.1", "1.8.0", ">", true),
            ("1.8.1", "1.8.0", "gt", true),
            ("1.8.0", "1.8.0", ">=", true),
            ("1.8.0", "1.8.0", "ge", true),
            ("1.8.0", "1.8.1", "<=", true),
            ("1.8.0", "1.8.1", "le", true),
            ("1.8.0", "1.8.1", "!=", true),
            ("1.8.0", "1.8.1", "<>", true),
            ("1.8.0", "1.8.1", "ne", true),
            ("1.8.0", "1.8.1", ">", false),
            ("1.8.0", "1.8.0", "!=", false),
        ];
        for (v1, v2, op, expected) in test_cases {
            assert_eq!(
                compare_with_operator(v1, v2, op)?,
                expected,
                "Failed for {} {} {}",
                v1,
                op,
                v2
            );
        }
        Ok(())
    }

    #[test]
    fn test_unknown_operator() {
        let result = compare_with_operator("1.0.0", "1.0.0", "~=");
        assert!(result.is_err());
        assert!(result.unwrap_err().is_invalid_parameter());
    }
}
