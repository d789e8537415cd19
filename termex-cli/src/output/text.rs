//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use termex_core::OutputLine;

/// Plain text formatter - outputs one `term<TAB>meaning` line per term
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &OutputLine) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn format_failure(&mut self, _term: &str, _reason: &str) -> Result<()> {
        // failures go to stderr, never into the glossary
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
