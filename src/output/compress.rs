//! Compressed page output.
//!
//! Applies gzip content encoding to the rendered page when the site has
//! compression enabled and the client advertises gzip support. The result
//! is transport-agnostic: the HTTP layer writes the encoding marker header
//! and the body.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;

use crate::config::RenderContext;
use crate::{RenderError, Result};

/// A rendered page body, possibly content-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Value for the `Content-Encoding` marker, when one must be emitted
    pub content_encoding: Option<&'static str>,
    /// The (possibly compressed) body bytes
    pub body: Vec<u8>,
}

/// Whether an `Accept-Encoding` header value advertises gzip support.
///
/// Spaces are stripped and the comma-separated list is matched
/// case-insensitively against the exact `gzip` token.
pub fn accepts_gzip(accept_encoding: Option<&str>) -> bool {
    match accept_encoding {
        Some(header) => {
            let header = header.replace(' ', "").to_lowercase();
            header.split(',').any(|encoding| encoding == "gzip")
        }
        None => false,
    }
}

/// Prepares page content for sending to the browser.
///
/// Empty content yields an empty identity output. Compression is applied
/// only when the site configuration enables it AND the client accepts
/// gzip; otherwise the body passes through unchanged.
///
/// # Examples
///
/// ```
/// use renderkit::{RenderContext, SiteConfig};
/// use renderkit::output::render_output;
///
/// let ctx = RenderContext::new(SiteConfig::default());
/// let output = render_output("<p>Hi</p>", Some("gzip"), &ctx).unwrap();
/// // compression disabled in the default config
/// assert!(output.content_encoding.is_none());
/// assert_eq!(output.body, b"<p>Hi</p>");
/// ```
pub fn render_output(
    display: &str,
    accept_encoding: Option<&str>,
    ctx: &RenderContext,
) -> Result<Output> {
    if display.is_empty() {
        return Ok(Output {
            content_encoding: None,
            body: Vec::new(),
        });
    }

    if ctx.config.compressed_output && accepts_gzip(accept_encoding) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(display.as_bytes())
            .map_err(|e| RenderError::compression_error(format!("Gzip error: {}", e)))?;
        let body = encoder.finish()?;
        debug!("compressed output: {} -> {} bytes", display.len(), body.len());

        return Ok(Output {
            content_encoding: Some("gzip"),
            body,
        });
    }

    Ok(Output {
        content_encoding: None,
        body: display.as_bytes().to_vec(),
    })
}
