//! Content metrics over extracted text.
//!
//! [`analyze`] computes word count, Flesch reading ease and lexicon-based
//! sentiment. It is a pure function of its input and never fails, so it can
//! run on any string including an empty one.
//!
//! # Example
//!
//! ```rust
//! use glean_core::{SentimentLabel, analyze};
//!
//! let result = analyze("Hello world\nGoodbye");
//! assert_eq!(result.word_count, 3);
//! assert_eq!(result.sentiment.label, SentimentLabel::Neutral);
//! ```

mod readability;
mod sentiment;
mod words;

pub use readability::{Readability, ReadabilityBand, flesch_reading_ease, sentence_count, syllable_count};
pub use sentiment::{Sentiment, SentimentLabel, polarity};
pub use words::word_count;

use serde::Serialize;

/// Colour used to render a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Green,
    Orange,
    Red,
    Blue,
}

/// The three metrics computed for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub readability: Readability,
    pub sentiment: Sentiment,
}

/// Computes all metrics for `text`.
///
/// Empty input yields a word count of 0, a readability score of 0.0 and
/// neutral sentiment.
pub fn analyze(text: &str) -> AnalysisResult {
    AnalysisResult { word_count: word_count(text), readability: Readability::of(text), sentiment: Sentiment::of(text) }
}
