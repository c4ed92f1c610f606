//! # renderkit - Page Rendering Helpers for Content Management Systems
//!
//! This crate collects the text and protocol utilities a CMS page pipeline
//! needs around its templating engine: truncating HTML teasers without
//! breaking tag nesting, extracting plain text from rendered documents,
//! comparing release version strings, mapping site languages to ISO codes,
//! and preparing the final page output for the browser.
//!
//! ## Features
//!
//! - **HTML truncation**: cut a marked-up string to a visible length and
//!   close the tags the cut left open
//! - **Plain-text extraction**: turn an HTML document into continuous text
//! - **Version comparison**: normalize beta / release-candidate / service-
//!   release version strings and compare them
//! - **Localization helpers**: language-name to ISO-639-1 mapping and
//!   output-encoding validation
//! - **Output handling**: gzip negotiation, document assembly, and the
//!   installation check with its fixed 503 setup page
//! - **Template factory**: pluggable engine construction with a
//!   registered override
//!
//! ## Quick Start
//!
//! ```
//! use renderkit::{truncate_html, text_content, nl2br};
//! use renderkit::version::compare_with_operator;
//!
//! # fn main() -> renderkit::Result<()> {
//! // Teaser for an article list, tags kept balanced
//! let teaser = truncate_html("<p>Hello <b>World</b></p>", 8, "...", 0);
//! assert_eq!(teaser, "<p>He...</p>");
//!
//! // Search-index text for a rendered page
//! let text = text_content("<body><script>x</script><p>Hi</p></body>");
//! assert_eq!(text, "Hi");
//!
//! // Comment text with line breaks preserved
//! assert_eq!(nl2br("a\r\nb", false), "a<br>b");
//!
//! // Plugin compatibility checks
//! assert!(compare_with_operator("1.8.0b1", "1.8.0", "<")?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Ambient site state is explicit here: [`SiteConfig`] carries the values
//! the helpers need (compression flag, installation path, character set,
//! site language), and [`RenderContext`] adds the once-computed output
//! encoding. Both are passed as parameters; nothing reads globals.
//!
//! ```
//! use renderkit::{RenderContext, SiteConfig};
//!
//! let config = SiteConfig::from_json(r#"{"charset": "UTF-8"}"#).unwrap();
//! let ctx = RenderContext::new(config);
//! assert_eq!(ctx.encoding(), "utf-8");
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **Text helpers**: [`text`] for truncation, plain-text extraction and
//!   newline conversion
//! - **Version handling**: [`version`] for normalization and comparison
//! - **Localization**: [`locale`] for language codes and encodings
//! - **Output**: [`output`] for compression, document assembly and the
//!   installation check
//! - **Templating**: [`template`] for the engine factory
//!
//! ## Error Handling
//!
//! Helpers that have a safe default degrade instead of failing: an unknown
//! language yields `en`, an unsupported character set yields `iso-8859-1`,
//! and text extraction works on the best-available substring. Fallible
//! operations return a [`Result<T>`] with errors represented by
//! [`RenderError`], built on the `snafu` library with backtrace capture.

pub mod config;
pub mod error;
pub mod locale;
pub mod output;
pub mod template;
pub mod text;
pub mod version;

// Re-export commonly used types for convenience
pub use config::{RenderContext, SiteConfig};
pub use locale::{lang_iso639_code, valid_encoding};
pub use text::{nl2br, text_content, truncate_html};

// Re-export error types for convenience
pub use error::{RenderError, Result, snafu};
