pub mod analysis;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod html;
pub mod parse;
pub mod pdf;
pub mod pipeline;

pub use analysis::{
    AnalysisResult, DisplayColor, Readability, ReadabilityBand, Sentiment, SentimentLabel, analyze,
    flesch_reading_ease, polarity, word_count,
};
pub use error::{GleanError, Result};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{BROWSER_USER_AGENT, FetchConfig, fetch_file, fetch_stdin};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, convert_to_json, convert_to_text};
pub use html::{HeadingLevel, HeadingMap, extract_headings, extract_paragraphs};
pub use parse::Document;
pub use pdf::{extract_pdf_text, is_pdf};
pub use pipeline::{
    Extraction, ExtractionRequest, FailurePolicy, Glean, GleanConfig, GleanConfigBuilder, PdfSource,
};
