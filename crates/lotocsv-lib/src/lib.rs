//! Library for exporting Lotofácil draw history from the Caixa API.
//!
//! This is a facade crate that re-exports functionality from the
//! lotocsv workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use lotocsv_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DownloadClient::with_defaults()?;
//!     let latest = fetch_latest_game_number(&client).await?;
//!
//!     let range = GameRange::new(latest.saturating_sub(9), latest)?;
//!     let report = fetch_range(&client, range).await?;
//!     println!("fetched {} draws, skipped {}",
//!         report.records.len(), report.skipped.len());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lotocsv/lotocsv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use lotocsv_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use lotocsv_fetch::{
    ClientConfig, DownloadClient, DownloadError, FlattenError, RangeReport, fetch_game,
    fetch_latest, fetch_latest_game_number, fetch_range, fetch_range_with, flatten, url,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use lotocsv_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use lotocsv_lib::prelude::*;
/// ```
pub mod prelude {
    pub use lotocsv_types::{
        FlatRecord, GAME_NUMBER_FIELD, GameRange, GameRangeError, LotocsvError, Result,
    };

    #[cfg(feature = "fetch")]
    pub use lotocsv_fetch::{
        ClientConfig, DownloadClient, RangeReport, fetch_game, fetch_latest,
        fetch_latest_game_number, fetch_range, fetch_range_with, flatten,
    };

    #[cfg(feature = "format")]
    pub use lotocsv_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
