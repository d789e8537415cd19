//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Extraction-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Language of the processed documents
    pub language: String,

    /// Longest candidate window in tokens
    pub max_window: usize,

    /// Collapse case duplicates in English output
    pub remove_case_duplicates: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_window: termex_core::api::defaults::MAX_WINDOW,
            remove_case_duplicates: termex_core::api::defaults::REMOVE_CASE_DUPLICATES,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.extraction.language, "en");
        assert_eq!(config.extraction.max_window, 5);
        assert!(config.extraction.remove_case_duplicates);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml(
            r#"
[extraction]
language = "cn"
"#,
        )
        .unwrap();
        assert_eq!(config.extraction.language, "cn");
        assert_eq!(config.extraction.max_window, 5);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = CliConfig::from_toml(
            r#"
[extraction]
language = "en"
max_window = 3
remove_case_duplicates = false

[output]
format = "json"
pretty_json = false
"#,
        )
        .unwrap();
        assert_eq!(config.extraction.max_window, 3);
        assert!(!config.extraction.remove_case_duplicates);
        assert_eq!(config.output.format, "json");
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_malformed_file() {
        let err = CliConfig::from_toml("[extraction\nlanguage = ").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }
}
