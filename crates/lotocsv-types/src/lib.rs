//! Core types for the lotocsv draw-history exporter.
//!
//! This crate provides the fundamental data structures used throughout
//! lotocsv:
//!
//! - [`GameRange`] - A validated, inclusive range of game numbers
//! - [`FlatRecord`] - A draw result flattened to dotted-path keys
//! - [`LotocsvError`] - The workspace-wide error type

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lotocsv/lotocsv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game_range;
mod record;

pub use error::{GameRangeError, LotocsvError, Result};
pub use game_range::{GameIter, GameRange};
pub use record::{FlatRecord, GAME_NUMBER_FIELD};
