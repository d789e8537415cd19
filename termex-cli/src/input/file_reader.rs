//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use termex_core::TermLibrary;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Load a tab-separated term library
    pub fn read_library(path: &Path) -> Result<TermLibrary> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let library = TermLibrary::from_file(path)
            .with_context(|| format!("Failed to read term library: {}", path.display()))?;

        if library.skipped_lines() > 0 {
            log::info!(
                "{}: skipped {} line(s) without a tab delimiter",
                path.display(),
                library.skipped_lines()
            );
        }
        log::debug!("{}: {} terms loaded", path.display(), library.len());

        Ok(library)
    }
}
