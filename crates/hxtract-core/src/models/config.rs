//! Configuration structures for the extraction pipeline.
//!
//! The field extractor itself never reads configuration; these types only
//! drive the OCR provider client and the report-writing side.

use serde::{Deserialize, Serialize};

use crate::datasheet::DrawingStyle;

/// Main configuration for the hxtract pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HxtractConfig {
    /// OCR provider configuration.
    pub provider: ProviderConfig,

    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report output configuration.
    pub report: ReportConfig,
}

/// Remote vision-OCR provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the OpenAI-compatible chat-completions endpoint.
    pub base_url: String,

    /// Model identifier sent with each request.
    pub model: String,

    /// Name of the environment variable holding the API key.
    ///
    /// The key itself never lives in the config file.
    pub api_key_env: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Recognition prompt sent alongside the image.
    pub prompt: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1".to_string(),
            model: "qwen-vl-ocr".to_string(),
            api_key_env: "DASHSCOPE_API_KEY".to_string(),
            timeout_secs: 60,
            prompt: crate::ocr::DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Drawing layout convention the rule catalog is tuned for.
    pub style: DrawingStyle,
}

/// Tabular report configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report orientation.
    pub orientation: Orientation,
}

/// How records are laid out in the tabular report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// One row per record, field labels as the header row.
    #[default]
    Rows,
    /// One column per record, field labels as the first column.
    Columns,
}

impl HxtractConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
