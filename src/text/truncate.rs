//! HTML truncation with tag balancing.
//!
//! Truncates a string containing HTML markup to a maximum visible length
//! and closes any tags the cut left open, so the result never renders with
//! unbalanced nesting.
//!
//! This is a best-effort heuristic built on tag scanning, not an HTML
//! parser: attributes containing a `>` inside quoted values are not
//! handled, and markup that was already unbalanced before the cut is not
//! repaired beyond what the cut itself introduced.

use once_cell::sync::Lazy;
use regex::Regex;

// Opening tags with optional attributes; self-closing forms are filtered
// out after matching since the regex engine has no lookahead.
static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<([a-z]+)((?:\s[^>]*)?)>").unwrap());
static CLOSE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</([a-z]+)>").unwrap());

// Void elements have no closing counterpart
const VOID_ELEMENTS: &[&str] = &["img", "hr", "br"];

/// Truncates a string that contains HTML tags, closing tags as needed.
///
/// Lengths are measured in characters, not bytes, so multi-byte text
/// truncates at character boundaries. When the input is within `max_len`
/// it is returned unchanged. Otherwise the string is cut at
/// `max_len - len(filler) - end_chars`, the `filler` is appended, followed
/// by the last `end_chars` characters of the original string (useful to
/// keep a file extension or trailing word readable).
///
/// # Arguments
///
/// * `html_text` - The text string which contains HTML tags to truncate
/// * `max_len` - Maximum number of characters in the truncated string
/// * `filler` - Optional filler string, e.g. `"..."`
/// * `end_chars` - Number of characters to show after the filler
///
/// # Examples
///
/// ```
/// use renderkit::truncate_html;
///
/// let teaser = truncate_html("<p>Hello <b>World</b></p>", 8, "...", 0);
/// assert_eq!(teaser, "<p>He...</p>");
/// ```
pub fn truncate_html(html_text: &str, max_len: usize, filler: &str, end_chars: usize) -> String {
    let len = html_text.chars().count();
    if len <= max_len {
        return html_text.to_string();
    }

    let new_len = max_len.saturating_sub(filler.chars().count());
    let cut = new_len.saturating_sub(end_chars);
    let mut truncated: String = html_text.chars().take(cut).collect();

    // Strip any mangled tag off the end: a '<' after the last '>' means
    // the cut fell inside a tag
    if let Some(open_pos) = truncated.rfind('<') {
        if truncated.rfind('>').is_none_or(|close_pos| open_pos > close_pos) {
            truncated.truncate(open_pos);
        }
    }

    truncated.push_str(filler);
    if end_chars > 0 {
        truncated.extend(html_text.chars().skip(len.saturating_sub(end_chars)));
    }

    // Collect all opened tags, in document order
    let mut opened_tags: Vec<String> = Vec::new();
    for caps in OPEN_TAG.captures_iter(&truncated) {
        let attributes = caps.get(2).map_or("", |m| m.as_str());
        if attributes.trim_end().ends_with('/') {
            continue;
        }
        let name = caps[1].to_lowercase();
        if VOID_ELEMENTS.contains(&name.as_str()) {
            continue;
        }
        opened_tags.push(name);
    }

    // ... and all closed tags
    let mut closed_tags: Vec<String> = CLOSE_TAG
        .captures_iter(&truncated)
        .map(|caps| caps[1].to_lowercase())
        .collect();

    // All tags are closed
    if closed_tags.len() == opened_tags.len() {
        return truncated;
    }

    // Close the most recently opened tags first, consuming one matched
    // closing occurrence per opened tag
    for name in opened_tags.iter().rev() {
        if let Some(pos) = closed_tags.iter().position(|closed| closed == name) {
            closed_tags.remove(pos);
        } else {
            truncated.push_str("</");
            truncated.push_str(name);
            truncated.push('>');
        }
    }

    truncated
}
