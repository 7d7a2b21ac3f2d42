//! Error types for lotocsv.

use thiserror::Error;

/// Result type alias for lotocsv operations.
pub type Result<T> = std::result::Result<T, LotocsvError>;

/// Errors that can occur while fetching and exporting draw results.
#[derive(Error, Debug)]
pub enum LotocsvError {
    /// HTTP request failed after its retry budget was used up.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Result body could not be flattened.
    #[error("Flatten error: {0}")]
    Flatten(String),

    /// Invalid game range.
    #[error(transparent)]
    GameRange(#[from] GameRangeError),

    /// A numbered result carried no `numero` field.
    #[error("result for game {game} has no `numero` field")]
    MissingGameNumber {
        /// The game number that was requested.
        game: u32,
    },

    /// A numbered result reported a different game number than requested.
    #[error("requested game {requested} but result reports numero {found}")]
    GameNumberMismatch {
        /// The game number that was requested.
        requested: u32,
        /// The game number found in the result body.
        found: u64,
    },

    /// The latest-drawing result carried no usable game number.
    #[error("latest result has no usable `numero` field")]
    NoLatestNumber,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid game ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameRangeError {
    /// Lower bound is above the upper bound.
    #[error("Invalid game range: {min} > {max}")]
    InvalidRange {
        /// The lower bound.
        min: u32,
        /// The upper bound.
        max: u32,
    },

    /// Game numbers start at 1.
    #[error("Invalid game range: game numbers start at 1, got {min}")]
    MinTooSmall {
        /// The lower bound.
        min: u32,
    },

    /// Upper bound lies beyond the latest published drawing.
    #[error("Game {max} is beyond the latest published drawing ({latest})")]
    BeyondLatest {
        /// The requested upper bound.
        max: u32,
        /// The latest published game number.
        latest: u32,
    },
}
