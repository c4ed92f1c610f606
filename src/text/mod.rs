// Text transformation helpers
//
// This module provides the string-level utilities used when preparing page
// content: HTML truncation with tag balancing, plain-text extraction, and
// newline-to-break conversion.

pub mod truncate;
pub mod plain;
pub mod breaks;

pub use truncate::truncate_html;
pub use plain::text_content;
pub use breaks::nl2br;
