//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use termex_core::OutputLine;

/// JSON formatter - outputs a single document with terms and failures
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    report: JsonReport,
}

/// Data structure for JSON output
#[derive(Debug, Default, Serialize)]
pub struct JsonReport {
    /// Extracted terms with meanings
    pub terms: Vec<OutputLine>,
    /// Terms without an assembled meaning
    pub failures: Vec<FailureData>,
}

/// One failed term
#[derive(Debug, Serialize)]
pub struct FailureData {
    /// The term
    pub term: String,
    /// Why no meaning could be assembled
    pub reason: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            report: JsonReport::default(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &OutputLine) -> Result<()> {
        self.report.terms.push(line.clone());
        Ok(())
    }

    fn format_failure(&mut self, term: &str, reason: &str) -> Result<()> {
        self.report.failures.push(FailureData {
            term: term.to_string(),
            reason: reason.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_report_shape() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_line(&OutputLine {
                term: "python".into(),
                meaning: "m2".into(),
            })
            .unwrap();
        formatter.format_failure("second planet", "no meaning").unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(formatter.writer).unwrap();
        let report: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["terms"].as_array().unwrap().len(), 1);
        assert_eq!(report["terms"][0]["term"], "python");
        assert_eq!(report["terms"][0]["meaning"], "m2");
        assert_eq!(report["failures"][0]["reason"], "no meaning");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_compact_line_object() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_line(&OutputLine {
                term: "first hello".into(),
                meaning: "第一你好".into(),
            })
            .unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            text,
            "{\"terms\":[{\"term\":\"first hello\",\"meaning\":\"第一你好\"}],\"failures\":[]}\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.finish().unwrap();
        let text = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(text, "{\"terms\":[],\"failures\":[]}\n");
    }
}
