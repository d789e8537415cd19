//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::FileReader;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Tab-separated term library to check
    #[arg(short = 't', long = "terms", value_name = "FILE", required = true)]
    pub terms: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating term library: {}", self.terms.display());

        let library = FileReader::read_library(&self.terms)?;
        if library.is_empty() {
            println!("✗ No usable entries found");
            return Err(CliError::EmptyLibrary(self.terms.display().to_string()).into());
        }

        println!("✓ Term library is valid!");
        println!("  Entries: {}", library.len());
        println!("  Skipped lines: {}", library.skipped_lines());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            terms: PathBuf::from("terms.tsv"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("terms.tsv"));
    }

    #[test]
    fn test_validate_valid_library() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "hello world\tm1\npython\tm2\n").unwrap();

        let args = ValidateArgs {
            terms: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_library_without_tabs() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "hello world m1\npython m2\n").unwrap();

        let args = ValidateArgs {
            terms: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EmptyLibrary(_))
        ));
    }
}
