//! Extraction pipeline: fetch, extract, analyze.
//!
//! The main entry point is [`Glean`], which turns an [`ExtractionRequest`]
//! into an [`Extraction`] holding the text and its metrics.
//!
//! # Example
//!
//! ```rust
//! use glean_core::Glean;
//!
//! let glean = Glean::new();
//! let extraction = glean.extract_html(b"<p>Hello world</p><p>Goodbye</p>", "inline");
//! assert_eq!(extraction.text, "Hello world\nGoodbye");
//! assert_eq!(extraction.analysis.word_count, 3);
//! ```

use serde::Serialize;

use crate::analysis::{AnalysisResult, analyze};
use crate::fetch::FetchConfig;
#[cfg(feature = "fetch")]
use crate::fetch::fetch_url;
use crate::html::{HeadingMap, headings_of, paragraphs_of};
use crate::parse::Document;
use crate::pdf::{extract_pdf_text, is_pdf};
use crate::{GleanError, Result};

/// What to do when fetching or extraction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Use the error message as the extracted text, analyze it, and record
    /// the message in [`Extraction::error`].
    Inline,
}

/// Where PDF bytes come from.
#[derive(Debug, Clone)]
pub enum PdfSource {
    /// Bytes supplied directly, e.g. an uploaded or local file.
    Upload { name: String, bytes: Vec<u8> },
    /// A URL to download the document from.
    Remote(String),
}

/// A single user action.
#[derive(Debug, Clone)]
pub enum ExtractionRequest {
    /// Extract paragraph text from a web page.
    Url(String),
    /// Extract the text of a PDF document.
    Pdf(PdfSource),
}

impl ExtractionRequest {
    /// Human-readable name of the input, used as [`Extraction::source`].
    pub fn source(&self) -> &str {
        match self {
            ExtractionRequest::Url(url) => url,
            ExtractionRequest::Pdf(PdfSource::Upload { name, .. }) => name,
            ExtractionRequest::Pdf(PdfSource::Remote(url)) => url,
        }
    }
}

/// Extracted text together with its metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// The URL or file name the text came from.
    pub source: String,
    /// Page title, for HTML sources that declare one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The extracted text, or the error message under [`FailurePolicy::Inline`].
    pub text: String,
    /// Headings by level, when requested for an HTML source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<HeadingMap>,
    pub analysis: AnalysisResult,
    /// Set only when a failure was inlined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Extraction {
    fn new(source: &str, title: Option<String>, text: String, headings: Option<HeadingMap>) -> Self {
        let analysis = analyze(&text);
        Self { source: source.to_string(), title, text, headings, analysis, error: None }
    }

    fn failed(source: &str, err: &GleanError) -> Self {
        let message = err.message();
        Self { error: Some(message.clone()), ..Self::new(source, None, message, None) }
    }

    /// Returns `true` when the text is an inlined error message.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Configuration for the extraction pipeline.
///
/// # Example
///
/// ```rust
/// use glean_core::{FailurePolicy, GleanConfig};
///
/// let config = GleanConfig::builder()
///     .timeout(10)
///     .include_headings(true)
///     .failure_policy(FailurePolicy::Inline)
///     .build();
/// assert_eq!(config.fetch.timeout, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GleanConfig {
    /// HTTP settings for URL and remote PDF requests.
    pub fetch: FetchConfig,
    /// Collect headings alongside paragraphs for HTML sources (default: false).
    pub include_headings: bool,
    /// Failure handling (default: propagate).
    pub failure_policy: FailurePolicy,
}

impl GleanConfig {
    /// Creates a new builder for GleanConfig.
    pub fn builder() -> GleanConfigBuilder {
        GleanConfigBuilder::new()
    }
}

/// Builder for GleanConfig.
pub struct GleanConfigBuilder {
    config: GleanConfig,
}

impl GleanConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: GleanConfig::default() }
    }

    /// Sets the HTTP timeout in seconds.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = secs;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets whether headings are collected for HTML sources.
    pub fn include_headings(mut self, value: bool) -> Self {
        self.config.include_headings = value;
        self
    }

    /// Sets the failure policy.
    pub fn failure_policy(mut self, value: FailurePolicy) -> Self {
        self.config.failure_policy = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> GleanConfig {
        self.config
    }
}

impl Default for GleanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs extraction requests.
#[derive(Debug, Clone, Default)]
pub struct Glean {
    config: GleanConfig,
}

impl Glean {
    /// Creates a pipeline with default settings.
    pub fn new() -> Self {
        Self { config: GleanConfig::default() }
    }

    /// Creates a pipeline with a custom configuration.
    pub fn with_config(config: GleanConfig) -> Self {
        Self { config }
    }

    /// Fetches (when needed), extracts and analyzes one request.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Propagate`], returns the first fetch or PDF
    /// parse error. Under [`FailurePolicy::Inline`] this never fails.
    #[cfg(feature = "fetch")]
    pub async fn run(&self, request: &ExtractionRequest) -> Result<Extraction> {
        let source = request.source();
        tracing::debug!(source, "running extraction");

        match request {
            ExtractionRequest::Url(url) => match fetch_url(url, &self.config.fetch).await {
                Ok(body) => Ok(self.extract_html(&body, source)),
                Err(e) => self.settle(source, e),
            },
            ExtractionRequest::Pdf(PdfSource::Upload { bytes, .. }) => self.extract_pdf(bytes, source),
            ExtractionRequest::Pdf(PdfSource::Remote(url)) => match fetch_url(url, &self.config.fetch).await {
                Ok(body) => self.extract_pdf(&body, source),
                Err(e) => self.settle(source, e),
            },
        }
    }

    /// Extracts paragraph text (and headings, if configured) from HTML bytes.
    ///
    /// HTML parsing is permissive, so this cannot fail.
    pub fn extract_html(&self, html: &[u8], source: &str) -> Extraction {
        let doc = Document::from_bytes(html);
        let text = paragraphs_of(&doc);
        let headings = self.config.include_headings.then(|| headings_of(&doc));

        tracing::debug!(source, chars = text.len(), "html extracted");
        Extraction::new(source, doc.title(), text, headings)
    }

    /// Extracts the text of a PDF held in memory.
    pub fn extract_pdf(&self, bytes: &[u8], source: &str) -> Result<Extraction> {
        if !is_pdf(bytes) {
            tracing::warn!(source, "payload does not start with a PDF header");
        }

        match extract_pdf_text(bytes) {
            Ok(text) => Ok(Extraction::new(source, None, text, None)),
            Err(e) => self.settle(source, e),
        }
    }

    fn settle(&self, source: &str, err: GleanError) -> Result<Extraction> {
        match self.config.failure_policy {
            FailurePolicy::Propagate => Err(err),
            FailurePolicy::Inline => {
                tracing::warn!(source, error = %err, "extraction failed, analyzing error text");
                Ok(Extraction::failed(source, &err))
            }
        }
    }
}
