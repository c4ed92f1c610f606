//! HTML document assembly.
//!
//! The full page is the site header, the main content, and the site
//! footer. Header and footer generation belong to the theme layer, so
//! they are injected through the [`PageChrome`] trait rather than being
//! produced here.

/// Variables used when assembling the output document.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    /// Which block layout to use; `"none"` suppresses the side blocks
    pub what: String,
    /// Content for the page's `<title>`
    pub page_title: String,
    /// Extra code to go into the page's `<head>`
    pub header_code: String,
    /// Whether to show blocks on the right-hand side
    pub right_block: bool,
    /// HTTP response status code the caller should send; 200 is assumed
    pub http_status: u16,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        DocumentInfo {
            what: String::new(),
            page_title: String::new(),
            header_code: String::new(),
            right_block: false,
            http_status: 200,
        }
    }
}

/// Site header and footer generation, supplied by the theme layer.
pub trait PageChrome {
    /// Renders everything that precedes the main content.
    fn site_header(&self, what: &str, page_title: &str, header_code: &str) -> String;

    /// Renders everything that follows the main content.
    fn site_footer(&self, right_block: bool) -> String;
}

/// Creates and returns the HTML document.
///
/// # Examples
///
/// ```
/// use renderkit::output::{create_html_document, DocumentInfo, PageChrome};
///
/// struct Bare;
///
/// impl PageChrome for Bare {
///     fn site_header(&self, _what: &str, title: &str, _code: &str) -> String {
///         format!("<html><head><title>{}</title></head><body>", title)
///     }
///     fn site_footer(&self, _right_block: bool) -> String {
///         "</body></html>".to_string()
///     }
/// }
///
/// let info = DocumentInfo { page_title: "Home".to_string(), ..DocumentInfo::default() };
/// let document = create_html_document("<p>Hi</p>", &info, &Bare);
/// assert!(document.contains("<title>Home</title>"));
/// assert!(document.contains("<p>Hi</p>"));
/// ```
pub fn create_html_document(content: &str, info: &DocumentInfo, chrome: &dyn PageChrome) -> String {
    let mut document = chrome.site_header(&info.what, &info.page_title, &info.header_code);
    document.push_str(content);
    document.push_str(&chrome.site_footer(info.right_block));
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingChrome;

    impl PageChrome for RecordingChrome {
        fn site_header(&self, what: &str, page_title: &str, header_code: &str) -> String {
            format!("[header what={} title={} code={}]", what, page_title, header_code)
        }

        fn site_footer(&self, right_block: bool) -> String {
            format!("[footer right={}]", right_block)
        }
    }

    #[test]
    fn test_assembly_order() {
        let info = DocumentInfo {
            what: "menu".to_string(),
            page_title: "Home".to_string(),
            header_code: "<meta>".to_string(),
            right_block: true,
            ..DocumentInfo::default()
        };
        let document = create_html_document("CONTENT", &info, &RecordingChrome);
        assert_eq!(
            document,
            "[header what=menu title=Home code=<meta>]CONTENT[footer right=true]"
        );
    }

    #[test]
    fn test_defaults() {
        let info = DocumentInfo::default();
        assert_eq!(info.http_status, 200);
        assert!(!info.right_block);
        let document = create_html_document("", &info, &RecordingChrome);
        assert!(document.starts_with("[header"));
        assert!(document.ends_with("[footer right=false]"));
    }
}
