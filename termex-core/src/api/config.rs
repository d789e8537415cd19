//! Configuration API for term extraction

use crate::api::{Error, Language};
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Longest candidate window in tokens
    pub const MAX_WINDOW: usize = 5;

    /// Collapse `Python`/`python` pairs in English output
    pub const REMOVE_CASE_DUPLICATES: bool = true;
}

/// Extraction configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) max_window: usize,
    pub(crate) remove_case_duplicates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_window: defaults::MAX_WINDOW,
            remove_case_duplicates: defaults::REMOVE_CASE_DUPLICATES,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language of the processed text
    pub fn language(&self) -> Language {
        self.language
    }

    /// Longest candidate window in tokens
    pub fn max_window(&self) -> usize {
        self.max_window
    }

    /// Whether case duplicates are removed; only ever applied to English
    pub fn remove_case_duplicates(&self) -> bool {
        self.remove_case_duplicates
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_window == 0 {
            return Err(Error::Configuration(
                "max_window must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    max_window: Option<usize>,
    remove_case_duplicates: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the longest candidate window in tokens
    pub fn max_window(mut self, tokens: usize) -> Self {
        self.max_window = Some(tokens);
        self
    }

    /// Enable or disable case-duplicate removal
    pub fn remove_case_duplicates(mut self, enabled: bool) -> Self {
        self.remove_case_duplicates = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(lang_code) = self.language {
            config.language = Language::from_str(&lang_code)?;
        }

        if let Some(max_window) = self.max_window {
            config.max_window = max_window;
        }

        if let Some(enabled) = self.remove_case_duplicates {
            config.remove_case_duplicates = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
