//! Output types for the processing API

use std::time::Duration;

use crate::domain::{AssemblyFailure, OutputLine};

/// Result of processing one document
#[derive(Debug)]
pub struct Output {
    /// One line per retained term, in extraction order
    pub lines: Vec<OutputLine>,
    /// Terms whose line could not be assembled
    pub failures: Vec<AssemblyFailure>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

impl Output {
    /// Retained terms in order, including those that failed assembly
    pub fn terms(&self) -> &[String] {
        &self.metadata.terms
    }

    /// Render the lines as newline-terminated `term<TAB>meaning` text
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.to_string());
            text.push('\n');
        }
        text
    }
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Retained terms in order
    pub terms: Vec<String>,
    /// Number of tokens in the document
    pub token_count: usize,
    /// Distinct terms found by the engine
    pub terms_found: usize,
    /// Terms dropped as case duplicates
    pub terms_removed: usize,
    /// Total processing duration
    pub duration: Duration,
}
