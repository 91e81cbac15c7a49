use crate::analysis::AnalysisResult;
use crate::html::HeadingMap;
use crate::pipeline::Extraction;

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Print the extracted content before the analysis
    pub include_content: bool,

    /// Print the analysis section
    pub include_analysis: bool,

    /// Print the heading outline, when the extraction carries one
    pub include_headings: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_content: true, include_analysis: true, include_headings: true }
    }
}

/// Plain text formatter for extraction reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, extraction: &Extraction) -> String {
        convert_to_text(extraction, &self.config)
    }
}

/// Render an extraction as a plain text report
pub fn convert_to_text(extraction: &Extraction, config: &TextConfig) -> String {
    let mut sections = Vec::new();

    if config.include_content {
        sections.push(extraction.text.trim_end().to_string());
    }

    if config.include_headings {
        if let Some(headings) = &extraction.headings {
            sections.push(headings_outline(headings));
        }
    }

    if config.include_analysis {
        sections.push(analysis_summary(&extraction.analysis));
    }

    let mut output = sections.join("\n\n");
    output.push('\n');
    output
}

/// One line per level, empty levels marked with a dash
pub fn headings_outline(headings: &HeadingMap) -> String {
    let mut lines = vec!["Headings".to_string()];

    for (level, texts) in headings.iter() {
        if texts.is_empty() {
            lines.push(format!("  {}: -", level));
        } else {
            let joined = texts.iter().map(|t| t.trim()).collect::<Vec<_>>().join(" | ");
            lines.push(format!("  {}: {}", level, joined));
        }
    }

    lines.join("\n")
}

/// The sentiment, word count and readability lines
pub fn analysis_summary(analysis: &AnalysisResult) -> String {
    [
        "Content Analysis".to_string(),
        sentiment_line(analysis),
        format!("Word Count: {}", analysis.word_count),
        format!("Readability Score: {:.2}", analysis.readability.score),
        format!("Interpretation: {}", analysis.readability.band),
    ]
    .join("\n")
}

pub fn sentiment_line(analysis: &AnalysisResult) -> String {
    format!("Sentiment: {} (Polarity: {:.2})", analysis.sentiment.label, analysis.sentiment.polarity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Glean, GleanConfig};

    fn sample(headings: bool) -> Extraction {
        let glean = Glean::with_config(GleanConfig::builder().include_headings(headings).build());
        glean.extract_html(b"<h1>Welcome</h1><p>Hello world</p><p>Goodbye</p>", "sample")
    }

    #[test]
    fn test_report_layout() {
        let report = convert_to_text(&sample(false), &TextConfig::default());

        assert!(report.starts_with("Hello world\nGoodbye\n\nContent Analysis\n"));
        assert!(report.contains("Sentiment: Neutral (Polarity: 0.00)"));
        assert!(report.contains("Word Count: 3"));
        assert!(report.contains("Interpretation: "));
        assert!(!report.contains("Headings"));
    }

    #[test]
    fn test_report_with_headings() {
        let report = convert_to_text(&sample(true), &TextConfig::default());

        assert!(report.contains("Headings\n  H1: Welcome\n  H2: -"));
        assert!(report.contains("  H6: -"));
    }

    #[test]
    fn test_content_only() {
        let config = TextConfig { include_analysis: false, include_headings: false, ..Default::default() };
        let report = TextFormatter::new(config).convert(&sample(true));
        assert_eq!(report, "Hello world\nGoodbye\n");
    }

    #[test]
    fn test_readability_two_decimals() {
        let summary = analysis_summary(&crate::analyze("The cat sat on the mat."));
        assert!(summary.contains("Readability Score: 116.1"));
        assert!(summary.contains("Interpretation: Very Easy"));
    }
}
