//! Extract command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use termex_core::{Config, TermExtractor};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Document to extract terms from
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Tab-separated term library (term<TAB>meaning per line)
    #[arg(short = 't', long = "terms", value_name = "FILE", required = true)]
    pub terms: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Document language: en or cn [default: en]
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Longest term to look for, in tokens [default: 5]
    #[arg(short = 'n', long, value_name = "TOKENS")]
    pub max_window: Option<usize>,

    /// Keep terms that differ only in letter case
    #[arg(long)]
    pub keep_case_duplicates: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One term<TAB>meaning line per term
    Text,
    /// JSON document with terms and failures
    Json,
}

/// Settings after merging flags, config file and defaults
#[derive(Debug)]
struct Settings {
    config: Config,
    format: OutputFormat,
    pretty_json: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting term extraction");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&file_config)?;

        let library = FileReader::read_library(&self.terms)?;
        let text = FileReader::read_text(&self.input)?;

        let extractor = TermExtractor::new(library, settings.config);
        let output = extractor
            .process_text(&text)
            .with_context(|| format!("Failed to process {}", self.input.display()))?;

        let mut formatter = self.formatter(settings.format, settings.pretty_json)?;
        for line in &output.lines {
            formatter.format_line(line)?;
        }
        for failure in &output.failures {
            log::warn!("skipping '{}': {}", failure.term, failure.error);
            formatter.format_failure(&failure.term, &failure.error.to_string())?;
        }
        formatter.finish()?;

        log::info!(
            "{} terms written ({} tokens, {} case duplicates removed) in {:?}",
            output.lines.len(),
            output.metadata.token_count,
            output.metadata.terms_removed,
            output.metadata.duration
        );

        Ok(())
    }

    /// Merge command-line flags over the config file
    fn settings(&self, file: &CliConfig) -> Result<Settings> {
        let language = self
            .language
            .as_deref()
            .unwrap_or(&file.extraction.language);
        let max_window = self.max_window.unwrap_or(file.extraction.max_window);
        let remove_case_duplicates =
            !self.keep_case_duplicates && file.extraction.remove_case_duplicates;

        let config = Config::builder()
            .language(language)
            .max_window(max_window)
            .remove_case_duplicates(remove_case_duplicates)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&file.output.format, true)
                .map_err(|e| CliError::ConfigError(format!("output format: {e}")))?,
        };

        Ok(Settings {
            config,
            format,
            pretty_json: file.output.pretty_json,
        })
    }

    fn formatter(&self, format: OutputFormat, pretty: bool) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
