//! Export command implementation.
//!
//! This module fetches the requested range of drawings from the Caixa API
//! and writes the flattened table to disk.

use crate::display::{Format, write_records};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use lotocsv_lib::prelude::*;
use std::path::PathBuf;

/// Fetch a range of drawings and write them to the output file.
pub(crate) async fn export(
    min: u32,
    max: u32,
    output: PathBuf,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let client = DownloadClient::with_defaults().context("Failed to build HTTP client")?;

    // The latest published game number bounds the requested range.
    let latest = fetch_latest_game_number(&client)
        .await
        .context("Failed to determine the latest published game number")?;

    let range = GameRange::new(min, max)?;
    range.ensure_within(latest)?;

    let output = ensure_extension(output, format.extension());

    // Setup progress bar
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(range.total_games() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({percent}%) {msg}")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb.set_message(format!("games {range}"));
        pb
    };

    // Fetch one drawing at a time, ascending; a game that exhausts its
    // attempt budget is reported and skipped, never fatal.
    let report = fetch_range_with(&client, range, |game, skipped| {
        if let Some(err) = skipped {
            progress.println(format!("WARN: game {game} skipped: {err}"));
        }
        progress.inc(1);
    })
    .await
    .inspect_err(|_| progress.abandon())
    .with_context(|| format!("Fetching games {range} failed"))?;

    let mut records = report.records;
    records.sort_by_key(|r| r.game_number().unwrap_or(u64::MAX));

    let finish_msg = if report.skipped.is_empty() {
        format!("Fetched {} draws", records.len())
    } else {
        format!(
            "Fetched {} draws ({} skipped after retries)",
            records.len(),
            report.skipped.len()
        )
    };
    progress.finish_with_message(finish_msg);

    write_records(&records, &output, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if !quiet {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}

/// Appends the format extension unless the path already ends in it.
fn ensure_extension(path: PathBuf, ext: &str) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(existing) if existing.eq_ignore_ascii_case(ext) => path,
        _ => PathBuf::from(format!("{}.{}", path.display(), ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_extension_appends() {
        assert_eq!(
            ensure_extension(PathBuf::from("resultados"), "csv"),
            PathBuf::from("resultados.csv")
        );
    }

    #[test]
    fn test_ensure_extension_keeps_existing() {
        assert_eq!(
            ensure_extension(PathBuf::from("resultados.csv"), "csv"),
            PathBuf::from("resultados.csv")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("resultados.CSV"), "csv"),
            PathBuf::from("resultados.CSV")
        );
    }

    #[test]
    fn test_ensure_extension_other_extension_gets_suffix() {
        assert_eq!(
            ensure_extension(PathBuf::from("resultados.txt"), "csv"),
            PathBuf::from("resultados.txt.csv")
        );
    }
}
