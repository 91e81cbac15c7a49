use crate::Result;
use crate::pipeline::Extraction;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, extraction: &Extraction) -> Result<String> {
        convert_to_json(extraction, &self.config)
    }
}

/// Serialize an extraction, including its analysis, to JSON
pub fn convert_to_json(extraction: &Extraction, config: &JsonConfig) -> Result<String> {
    if config.pretty {
        Ok(serde_json::to_string_pretty(extraction)?)
    } else {
        Ok(serde_json::to_string(extraction)?)
    }
}
