//! lotocsv CLI - Lotofácil draw-history exporter.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "lotocsv")]
#[command(about = "Exports Lotofácil draw history from the Caixa API", long_about = None)]
#[command(version)]
struct Cli {
    /// First game number to fetch (inclusive, 1 or higher)
    #[arg(long)]
    min: u32,

    /// Last game number to fetch (inclusive, at most the latest drawing)
    #[arg(long)]
    max: u32,

    /// Output file path; the format extension is appended when missing
    #[arg(short, long)]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Usage errors exit 1; --help and --version keep clap's zero exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    commands::export::export(cli.min, cli.max, cli.output, cli.format, cli.quiet).await
}
