//! Display utilities and output writing for the lotocsv CLI.

use anyhow::Result;
use clap::ValueEnum;
use lotocsv_lib::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Output format for exported draw history.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write flattened records to a file in the specified format.
pub(crate) fn write_records(records: &[FlatRecord], output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => {
            let formatter = CsvFormatter::new();
            formatter.write_records(records, writer)?;
        }
        Format::Json => {
            let formatter = JsonFormatter::new();
            formatter.write_records(records, writer)?;
        }
        Format::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_records(records, writer)?;
        }
    }

    Ok(())
}
