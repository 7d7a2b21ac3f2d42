//! Output formatters for the lotocsv draw-history exporter.
//!
//! This crate renders the table of flattened draw records to various
//! output formats:
//!
//! - [`CsvFormatter`] - Delimited text with legacy CSV conventions
//! - [`JsonFormatter`] - JSON array or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lotocsv/lotocsv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
