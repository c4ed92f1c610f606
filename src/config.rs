//! Site configuration and the per-request render context.
//!
//! The historical implementation read a global configuration array and a
//! process-wide static cache from inside each helper. Here that ambient
//! state is explicit: [`SiteConfig`] holds the site-level values and
//! [`RenderContext`] wraps a config together with the once-computed output
//! encoding, and is passed into the functions that need it.
//!
//! # Examples
//!
//! ```
//! use renderkit::{SiteConfig, RenderContext};
//!
//! let config = SiteConfig {
//!     charset: "UTF-8".to_string(),
//!     ..SiteConfig::default()
//! };
//! let ctx = RenderContext::new(config);
//! assert_eq!(ctx.encoding(), "utf-8");
//! ```

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::locale::{lang_iso639_code, valid_encoding};
use crate::Result;

/// Site-level configuration values read by the rendering helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Whether compressed output may be sent to clients that accept it
    pub compressed_output: bool,
    /// Installation path of the site
    pub path: PathBuf,
    /// Configured character set, e.g. "utf-8"
    pub charset: String,
    /// Site language name, e.g. "english" or "french_france"
    pub language: String,
    /// Emit XHTML-style self-closing break tags
    pub xhtml: bool,
    /// Site software version, shown on the setup page
    pub version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            compressed_output: false,
            path: PathBuf::new(),
            charset: "utf-8".to_string(),
            language: "english".to_string(),
            xhtml: false,
            version: String::new(),
        }
    }
}

impl SiteConfig {
    /// Parses a configuration from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns a `ParserError` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A [`SiteConfig`] plus per-process derived state.
///
/// The validated output encoding is computed on first use and cached for
/// the lifetime of the context. The computation is idempotent and
/// side-effect-free, so concurrent first calls are safe.
pub struct RenderContext {
    pub config: SiteConfig,
    encoding: OnceCell<&'static str>,
}

impl RenderContext {
    /// Wraps a configuration in a fresh context.
    pub fn new(config: SiteConfig) -> Self {
        RenderContext {
            config,
            encoding: OnceCell::new(),
        }
    }

    /// The validated output encoding for the configured character set.
    ///
    /// Falls back to `iso-8859-1` when the configured charset is not on
    /// the known-safe list. See [`valid_encoding`].
    pub fn encoding(&self) -> &'static str {
        self.encoding
            .get_or_init(|| valid_encoding(&self.config.charset))
    }

    /// The ISO-639-1 code for the configured site language.
    pub fn lang_iso639_code(&self) -> &'static str {
        lang_iso639_code(&self.config.language)
    }
}
