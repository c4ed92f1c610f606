//! Error types and result type for the renderkit crate.
//!
//! Most helpers in this crate degrade to safe defaults instead of failing
//! (an unknown language falls back to `en`, an unsupported character set
//! falls back to `iso-8859-1`), so only genuinely fallible operations
//! return a [`Result`]: output compression, template loading, JSON
//! configuration parsing, and version comparison with an operator string.
//! Errors use the `snafu` library with automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use renderkit::{Result, RenderError};
//!
//! fn load_config(json: &str) -> Result<()> {
//!     if json.is_empty() {
//!         return Err(RenderError::invalid_parameter("Empty configuration"));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the renderkit crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `RenderError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RenderError {
    /// I/O error occurred while loading templates or checking paths.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Error parsing JSON configuration data.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// Error during output compression.
    #[snafu(display("Compression error: {message}"))]
    CompressionError {
        message: String,
        backtrace: Backtrace,
    },

    /// Template file could not be located or rendered.
    #[snafu(display("Template error: {message}"))]
    TemplateError {
        message: String,
        backtrace: Backtrace,
    },
}

// For automatic conversions from standard error types
impl From<io::Error> for RenderError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl RenderError {
    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use renderkit::RenderError;
    ///
    /// let error = RenderError::invalid_parameter("Unknown operator");
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `CompressionError` with the given message.
    pub fn compression_error<S: Into<String>>(message: S) -> Self {
        Self::CompressionError {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `TemplateError` with the given message.
    pub fn template_error<S: Into<String>>(message: S) -> Self {
        Self::TemplateError {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is an `InvalidParameter` variant.
    pub fn is_invalid_parameter(&self) -> bool {
        if let RenderError::InvalidParameter { .. } = self {
            return true;
        }
        false
    }
}

/// A specialized `Result` type for renderkit operations.
///
/// This is a convenience type alias that uses [`RenderError`] as the error type.
pub type Result<T> = std::result::Result<T, RenderError>;
