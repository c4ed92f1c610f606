//! Plain-text extraction from HTML documents.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static BR_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br(\s*)?/?>").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s\s+").unwrap());

const BODY_OPEN: &str = "<body";
const BODY_CLOSE: &str = "</body>";
const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script>";

/// Case-insensitive substring search, byte offsets into the original.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}

/// Removes markup by skipping everything between `<` and `>`.
///
/// An unterminated trailing tag is dropped entirely.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Turns a piece of HTML into continuous plain text.
///
/// Isolates the document body (the whole string when `<body>` markers are
/// absent), strips script blocks, converts line-break tags to spaces,
/// separates adjacent tags so words do not run together, removes the
/// remaining tags, normalizes whitespace-control characters and common
/// space entities, collapses whitespace runs, and trims.
///
/// A script block missing one of its boundaries is handled by truncating
/// at whichever boundary is present rather than failing.
///
/// # Examples
///
/// ```
/// use renderkit::text_content;
///
/// let text = text_content("<body><script>x</script><p>Hi</p></body>");
/// assert_eq!(text, "Hi");
/// ```
pub fn text_content(text: &str) -> String {
    // remove everything before the <body> tag
    let mut text = match find_ci(text, BODY_OPEN) {
        Some(pos) => &text[pos..],
        None => text,
    };

    // remove everything after the </body> tag
    if let Some(pos) = find_ci(text, BODY_CLOSE) {
        text = &text[..pos + BODY_CLOSE.len()];
    }

    let mut text = text.to_string();

    // remove <script> blocks
    if find_ci(&text, SCRIPT_OPEN).is_some() {
        text = SCRIPT_BLOCK.replace_all(&text, " ").into_owned();

        if let Some(pos) = find_ci(&text, SCRIPT_OPEN) {
            // </script> tag is missing
            text.truncate(pos);
        }

        if let Some(pos) = find_ci(&text, SCRIPT_CLOSE) {
            // <script> tag is missing
            text.drain(..pos + SCRIPT_CLOSE.len());
        }
    }

    // replace <br> with spaces so that Text<br>Text becomes two words
    let text = BR_TAG.replace_all(&text, " ");

    // add extra space between tags, e.g. <p>Text</p><p>Text</p>
    let text = text.replace("><", "> <");

    // only now remove all HTML tags
    let text = strip_tags(&text);

    // replace all tabs, newlines, and carriage returns with spaces
    let text = text.replace(['\t', '\n', '\r'], " ");

    // replace entities with plain spaces
    let text = text
        .replace("&#20;", " ")
        .replace("&#160;", " ")
        .replace("&nbsp;", " ");

    // collapse whitespace
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    text.trim().to_string()
}
