//! Error types for Glean operations.
//!
//! This module defines the main error type [`GleanError`] which represents
//! every way a fetch, extraction or report can fail. Each extractor returns
//! [`Result`] so that failures never masquerade as extracted text.
//!
//! # Example
//!
//! ```rust
//! use glean_core::{GleanError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.is_empty() {
//!         return Err(GleanError::PdfParseError("empty document".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching, extraction and reporting.
///
/// # Example
///
/// ```rust
/// use glean_core::{GleanError, extract_pdf_text};
///
/// match extract_pdf_text(b"not a pdf") {
///     Ok(text) => println!("{}", text),
///     Err(GleanError::PdfParseError(msg)) => println!("Unreadable PDF: {}", msg),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum GleanError {
    /// HTTP transport errors from reqwest.
    ///
    /// This variant wraps DNS failures, refused connections and other
    /// network problems that happen before a status code is received.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} returned for {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid CSS selector.
    ///
    /// Malformed HTML never produces this error; the parser is permissive
    /// and yields partial or empty results instead.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The PDF parser rejected the byte stream.
    #[error("Failed to parse PDF: {0}")]
    PdfParseError(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read and write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for GleanError.
///
/// This is a convenience alias for `std::result::Result<T, GleanError>`.
pub type Result<T> = std::result::Result<T, GleanError>;

impl GleanError {
    /// The failure message as reported by the component that raised it.
    ///
    /// Parser and transport errors yield the underlying library's message
    /// without the prefix added by [`Display`](std::fmt::Display); every other
    /// variant yields its display text.
    pub fn message(&self) -> String {
        match self {
            GleanError::PdfParseError(msg) => msg.clone(),
            #[cfg(feature = "fetch")]
            GleanError::HttpError(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}
