//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use termex_core::Language;

pub mod extract;
pub mod validate;

pub use extract::{ExtractArgs, OutputFormat};
pub use validate::ValidateArgs;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract library terms from a document
    Extract(ExtractArgs),

    /// Check a term library file
    Validate(ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported document languages
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Languages => Language::ALL
                .iter()
                .map(|language| format!("{}\t{}", language.code(), language.name()))
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| {
                    format!(
                        "{}\t{}",
                        value.get_name(),
                        value.get_help().map(|h| h.to_string()).unwrap_or_default()
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_languages() {
        let lines = ListCommands::Languages.lines();
        assert_eq!(lines, vec!["en\tEnglish", "cn\tChinese"]);
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("text\t"));
        assert!(lines[1].starts_with("json\t"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }
}
