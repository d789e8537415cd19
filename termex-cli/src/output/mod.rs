//! Output formatting module

use anyhow::Result;
use termex_core::OutputLine;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single term line
    fn format_line(&mut self, line: &OutputLine) -> Result<()>;

    /// Record a term whose meaning could not be assembled
    fn format_failure(&mut self, term: &str, reason: &str) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
