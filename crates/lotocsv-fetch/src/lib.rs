//! HTTP client and result fetching for the lotocsv draw-history exporter.
//!
//! This crate provides the fetch pipeline:
//!
//! - [`url::result_url`] - Constructs Caixa lottery API URLs
//! - [`DownloadClient`] - HTTP client with bounded retries and backoff
//! - [`flatten`] - Flattens nested JSON results to dotted-path records
//! - [`fetch_range`] - Sequential range fetch with skip-on-exhaustion

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lotocsv/lotocsv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod flatten;
mod range;
pub mod url;

pub use client::{ClientConfig, DownloadClient, DownloadError};
pub use flatten::{FlattenError, flatten};
pub use range::{
    RangeReport, fetch_game, fetch_latest, fetch_latest_game_number, fetch_range,
    fetch_range_with,
};
