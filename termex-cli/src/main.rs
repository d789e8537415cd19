//! termex: extract glossary terms from a document

use clap::Parser;
use termex_cli::commands::Commands;

/// Extract known terms from a document and annotate them with meanings
#[derive(Debug, Parser)]
#[command(name = "termex", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
